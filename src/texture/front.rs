use kurbo::Line;

use crate::foundation::core::{Point, Rect};
use crate::foundation::error::TarotResult;
use crate::foundation::math::Rng64;
use crate::scene::deck::CardId;
use crate::texture::FaceSpec;
use crate::texture::color::{Color, IVORY};
use crate::texture::illustration;
use crate::texture::motifs;
use crate::texture::painter::{Gradient, Painter};
use crate::texture::text::TextStyle;

const CAP_DEEP: Color = Color::rgb8(0x8b, 0x4a, 0x6b);
const CAP_ROSE: Color = Color::rgb8(0xa0, 0x58, 0x78);
const TITLE_PANEL: Color = Color::rgba(4.0 / 255.0, 2.0 / 255.0, 8.0 / 255.0, 0.82);

/// Top, middle and bottom stops of the background ramp.
fn palette(card: Option<CardId>) -> [Color; 3] {
    match card {
        Some(CardId::About) => [
            Color::rgb8(0x1c, 0x12, 0x30),
            Color::rgb8(0x10, 0x0d, 0x1e),
            Color::rgb8(0x0a, 0x08, 0x10),
        ],
        Some(CardId::Formations) => [
            Color::rgb8(0x1e, 0x15, 0x10),
            Color::rgb8(0x12, 0x0f, 0x08),
            Color::rgb8(0x0a, 0x08, 0x08),
        ],
        Some(CardId::Contact) | None => [
            Color::rgb8(0x10, 0x1e, 0x14),
            Color::rgb8(0x0a, 0x14, 0x10),
            Color::rgb8(0x08, 0x0a, 0x08),
        ],
    }
}

pub(crate) fn paint(p: &mut Painter, spec: &FaceSpec, rng: &mut Rng64) -> TarotResult<()> {
    let (w, h) = (p.width(), p.height());
    let accent = spec.accent;
    let full = Rect::new(0.0, 0.0, w, h);

    let [top, mid, bottom] = palette(spec.card());
    let bg = Gradient::linear(Point::ZERO, Point::new(0.0, h))
        .stop(0.0, top)
        .stop(0.55, mid)
        .stop(1.0, bottom);
    p.fill_gradient(&full, &bg)?;

    let side = Gradient::linear(Point::ZERO, Point::new(w, 0.0))
        .stop(0.0, accent.alpha8(0x22))
        .stop(0.5, Color::TRANSPARENT)
        .stop(1.0, accent.alpha8(0x22));
    p.fill_gradient(&full, &side)?;

    motifs::scattered_stars(p, rng, accent, 90, 55.0)?;

    p.stroke(&Rect::new(10.0, 10.0, w - 10.0, h - 10.0), accent, 5.0);
    p.stroke(&Rect::new(22.0, 22.0, w - 22.0, h - 22.0), Color::rgba(1.0, 1.0, 1.0, 0.1), 1.0);
    p.stroke(&Rect::new(42.0, 42.0, w - 42.0, h - 42.0), accent, 2.0);
    p.stroke(&Rect::new(52.0, 52.0, w - 52.0, h - 52.0), accent.alpha8(0x33), 1.0);

    motifs::vine_border(p, 32.0, accent);

    for (x, y, sx, sy) in [
        (52.0, 52.0, 1.0, 1.0),
        (w - 52.0, 52.0, -1.0, 1.0),
        (w - 52.0, h - 52.0, -1.0, -1.0),
        (52.0, h - 52.0, 1.0, -1.0),
    ] {
        motifs::ornamental_corner(p, x, y, sx, sy, accent)?;
    }

    if spec.card() == Some(CardId::About) {
        let clusters = [
            (72.0, h - 170.0, 20.0, CAP_DEEP),
            (58.0, h - 154.0, 15.0, CAP_ROSE),
        ];
        for (inset, y, size, cap) in clusters {
            motifs::mushroom(p, inset, y, size, cap);
            motifs::mushroom(p, w - inset, y, size, cap);
        }
    }

    p.text(
        spec.numeral(),
        Point::new(w / 2.0, 56.0),
        &TextStyle::mono(17.0, accent).bold(),
    )?;

    motifs::moon_phases(p, w / 2.0, 78.0, accent, 6.0)?;

    p.scoped(|p| -> TarotResult<()> {
        p.set_alpha(0.85);
        motifs::rule(p, 60.0, w / 2.0 - 22.0, 102.0, accent, 1.2);
        motifs::rule(p, w / 2.0 + 22.0, w - 60.0, 102.0, accent, 1.2);
        p.set_alpha(1.0);
        p.text("◆", Point::new(w / 2.0, 102.0), &TextStyle::serif(14.0, accent))
    })?;

    let focus = Point::new(w / 2.0, h * 0.375);
    p.scoped(|p| -> TarotResult<()> {
        p.set_alpha(0.08);
        p.glow_disc(focus, 90.0, 65.0, accent)?;
        p.text(&spec.symbol, focus, &TextStyle::serif(240.0, accent).bold())
    })?;

    illustration::draw(p, spec)?;

    title_block(p, spec)?;

    p.scoped(|p| {
        p.set_alpha(0.65);
        motifs::sprig(p, 54.0, h * 0.71, -0.12, accent, 0.85);
        motifs::sprig(p, w - 54.0, h * 0.71, std::f64::consts::PI + 0.12, accent, 0.85);
    });

    p.scoped(|p| {
        p.set_alpha(0.75);
        motifs::rule(p, 60.0, w - 60.0, h * 0.825, accent, 1.2);
    });

    p.text("· · ·", Point::new(w / 2.0, h - 54.0), &TextStyle::serif(22.0, accent))?;
    let sparkle = TextStyle::serif(14.0, accent);
    for (x, y) in [(60.0, 58.0), (w - 60.0, 58.0), (60.0, h - 54.0), (w - 60.0, h - 54.0)] {
        p.text("✧", Point::new(x, y), &sparkle)?;
    }
    Ok(())
}

fn title_block(p: &mut Painter, spec: &FaceSpec) -> TarotResult<()> {
    let (w, h) = (p.width(), p.height());
    let accent = spec.accent;

    p.scoped(|p| -> TarotResult<()> {
        p.set_alpha(0.88);
        p.stroke(&Line::new((60.0, h * 0.635), (w - 60.0, h * 0.635)), accent, 1.2);
        p.set_alpha(1.0);
        p.text("· ✦ ·", Point::new(w / 2.0, h * 0.635), &TextStyle::serif(15.0, accent))
    })?;

    p.fill(&Rect::new(62.0, h * 0.64, w - 62.0, h * 0.64 + h * 0.185), TITLE_PANEL);

    p.text(
        &spec.label.to_uppercase(),
        Point::new(w / 2.0, h * 0.693),
        &TextStyle::serif(50.0, IVORY).bold(),
    )?;

    p.scoped(|p| {
        p.set_alpha(0.9);
        p.text(
            spec.subtitle(),
            Point::new(w / 2.0, h * 0.745),
            &TextStyle::serif(18.0, accent).italic(),
        )
    })
}
