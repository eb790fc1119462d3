//! Back face: a gilded night sky around a crescent medallion.

use std::f64::consts::PI;

use kurbo::Circle;

use crate::foundation::core::{Point, Rect};
use crate::foundation::error::TarotResult;
use crate::foundation::math::Rng64;
use crate::texture::color::{Color, GOLD, NIGHT, PLUM, SAGE};
use crate::texture::motifs;
use crate::texture::painter::{Gradient, Painter};
use crate::texture::text::TextStyle;

const CAP_DEEP: Color = Color::rgb8(0x8b, 0x4a, 0x6b);
const CAP_ROSE: Color = Color::rgb8(0xa0, 0x58, 0x78);
const AMETHYST: Color = Color::rgb8(0x9b, 0x7a, 0xb8);
const INK: Color = Color::rgb8(0x13, 0x0f, 0x20);

pub(crate) fn paint(p: &mut Painter, rng: &mut Rng64) -> TarotResult<()> {
    let (w, h) = (p.width(), p.height());
    let full = Rect::new(0.0, 0.0, w, h);

    let bg = Gradient::radial(
        Point::new(w / 2.0, h * 0.42),
        55.0,
        Point::new(w / 2.0, h / 2.0),
        460.0,
    )
    .stop(0.0, Color::rgb8(0x1e, 0x14, 0x30))
    .stop(0.4, INK)
    .stop(0.8, Color::rgb8(0x0a, 0x08, 0x10))
    .stop(1.0, NIGHT);
    p.fill_gradient(&full, &bg)?;

    crosshatch(p);
    motifs::scattered_stars(p, rng, GOLD, 120, 45.0)?;

    p.stroke(&Rect::new(10.0, 10.0, w - 10.0, h - 10.0), PLUM, 5.0);
    p.stroke(&Rect::new(42.0, 42.0, w - 42.0, h - 42.0), GOLD, 2.0);
    p.stroke(&Rect::new(52.0, 52.0, w - 52.0, h - 52.0), PLUM.fade(0.4), 1.0);

    motifs::vine_border(p, 26.0, SAGE);

    for (x, y, sx, sy) in [
        (52.0, 52.0, 1.0, 1.0),
        (w - 52.0, 52.0, -1.0, 1.0),
        (w - 52.0, h - 52.0, -1.0, -1.0),
        (52.0, h - 52.0, 1.0, -1.0),
    ] {
        motifs::ornamental_corner(p, x, y, sx, sy, GOLD)?;
    }

    for (inset, dy, size, cap) in [(78.0, -40.0, 22.0, CAP_DEEP), (65.0, 10.0, 18.0, CAP_ROSE)] {
        motifs::mushroom(p, inset, h / 2.0 + dy, size, cap);
        motifs::mushroom(p, w - inset, h / 2.0 + dy, size, cap);
    }

    motifs::crystal_cluster(p, 78.0, 105.0, AMETHYST, 0.85);
    motifs::crystal_cluster(p, w - 78.0, 105.0, AMETHYST, 0.85);

    motifs::moon_phases(p, w / 2.0, 72.0, GOLD, 9.0)?;
    motifs::moon_phases(p, w / 2.0, h - 72.0, GOLD, 9.0)?;

    motifs::rule(p, 58.0, w - 58.0, 108.0, GOLD.fade(0.2), 1.0);
    motifs::rule(p, 58.0, w - 58.0, h - 108.0, GOLD.fade(0.2), 1.0);

    medallion(p, Point::new(w / 2.0, h / 2.0))?;

    let mut y = 125.0;
    while y < h - 125.0 {
        p.fill(&Circle::new((58.0, y), 1.8), PLUM.fade(0.3));
        p.fill(&Circle::new((w - 58.0, y), 1.8), PLUM.fade(0.3));
        y += 52.0;
    }

    // Owl keeps watch from the lower divider.
    let owl_size = 40.0;
    motifs::owl(p, w / 2.0, h - 108.0 - owl_size * 0.58, owl_size, GOLD.fade(0.8))?;

    p.scoped(|p| {
        p.set_alpha(0.68);
        p.text("✦  ✧  ✦", Point::new(w / 2.0, h - 60.0), &TextStyle::serif(18.0, SAGE))
    })
}

fn crosshatch(p: &mut Painter) {
    let (w, h) = (p.width(), p.height());
    let ink = PLUM.fade(0.07);
    let mut i = -h;
    while i < w + h {
        p.stroke(&kurbo::Line::new((i, 0.0), (i + h, h)), ink, 0.8);
        p.stroke(&kurbo::Line::new((i + h, 0.0), (i, h)), ink, 0.8);
        i += 30.0;
    }
}

fn medallion(p: &mut Painter, c: Point) -> TarotResult<()> {
    for k in 0..26 {
        let a = f64::from(k) * PI / 13.0;
        p.fill(
            &Circle::new((c.x + a.cos() * 130.0, c.y + a.sin() * 130.0), 2.5),
            GOLD.fade(0.3),
        );
    }

    p.glow_ring(c, 118.0, 24.0, GOLD)?;
    p.stroke(&Circle::new(c, 118.0), GOLD.fade(0.5), 2.0);
    p.stroke(&Circle::new(c, 105.0), PLUM.fade(0.4), 1.0);

    p.scoped(|p| -> TarotResult<()> {
        p.set_alpha(0.9);
        p.glow_disc(c, 76.0, 45.0, GOLD)?;
        p.fill(&Circle::new(c, 76.0), GOLD);
        Ok(())
    })?;
    p.fill(&Circle::new((c.x + 30.0, c.y - 13.0), 68.0), INK);

    p.save();
    p.set_alpha(0.44);
    for (dx, dy, s) in [
        (58.0, -78.0, 10.0),
        (-44.0, -88.0, 8.0),
        (82.0, 24.0, 9.0),
        (-60.0, 40.0, 7.0),
        (38.0, 82.0, 8.0),
    ] {
        p.text("✦", Point::new(c.x + dx, c.y + dy), &TextStyle::serif(s, GOLD))?;
    }
    p.restore();
    Ok(())
}
