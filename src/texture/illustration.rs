//! Central artwork of each front face, dispatched by card key.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use kurbo::{Circle, Line};

use crate::foundation::core::{BezPath, Point, Rect};
use crate::foundation::error::TarotResult;
use crate::texture::FaceSpec;
use crate::texture::color::{Color, STARLIGHT};
use crate::texture::motifs;
use crate::texture::painter::{Painter, arc, polyline};
use crate::texture::text::TextStyle;

/// Draws one card's artwork.
pub type Illustrator = fn(&mut Painter, &FaceSpec) -> TarotResult<()>;

const ILLUSTRATIONS: [(&str, Illustrator); 3] = [
    ("about", about),
    ("formations", formations),
    ("contact", contact),
];

/// Artwork registered for `key`.
pub fn illustrator_for(key: &str) -> Option<Illustrator> {
    ILLUSTRATIONS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, f)| *f)
}

/// Draw the artwork for `spec`. Keys without artwork draw nothing.
pub(crate) fn draw(p: &mut Painter, spec: &FaceSpec) -> TarotResult<()> {
    match illustrator_for(&spec.key) {
        Some(f) => f(p, spec),
        None => {
            tracing::debug!(key = %spec.key, "no illustration registered");
            Ok(())
        }
    }
}

fn focus(p: &Painter) -> Point {
    Point::new(p.width() / 2.0, p.height() * 0.375)
}

fn at(c: Point, dx: f64, dy: f64) -> Point {
    Point::new(c.x + dx, c.y + dy)
}

fn dot_ring(
    p: &mut Painter,
    c: Point,
    radius: f64,
    step: f64,
    r: f64,
    color: Color,
    alpha: impl Fn(f64) -> f64,
) {
    p.save();
    let mut a = 0.0;
    while a < TAU {
        p.set_alpha(alpha(a));
        p.fill(&Circle::new(at(c, a.cos() * radius, a.sin() * radius), r), color);
        a += step;
    }
    p.restore();
}

fn constellation(
    p: &mut Painter,
    stars: &[Point],
    radius: f64,
    blur: f64,
    alpha: f64,
) -> TarotResult<()> {
    p.save();
    p.set_alpha(alpha);
    for s in stars {
        p.glow_disc(*s, radius, blur, STARLIGHT)?;
        p.fill(&Circle::new(*s, radius), STARLIGHT);
    }
    p.restore();
    Ok(())
}

fn about(p: &mut Painter, spec: &FaceSpec) -> TarotResult<()> {
    let c = focus(p);
    let accent = spec.accent;

    p.glow_ring(c, 132.0, 20.0, accent)?;
    p.stroke(&Circle::new(c, 132.0), accent.alpha8(0x55), 1.5);
    p.stroke(&Circle::new(c, 118.0), accent.alpha8(0x28), 1.0);
    dot_ring(p, c, 142.0, PI / 10.0, 2.5, accent, |a| 0.2 + (a * 4.0).sin() * 0.1);

    p.scoped(|p| -> TarotResult<()> {
        p.set_alpha(0.88);
        p.glow_disc(c, 82.0, 50.0, accent)?;
        p.fill(&Circle::new(c, 82.0), accent);
        Ok(())
    })?;
    p.fill(&Circle::new(at(c, 36.0, -16.0), 74.0), Color::rgb8(0x0f, 0x0c, 0x18));

    p.scoped(|p| {
        p.set_alpha(0.5);
        let ink = accent.alpha8(0x60);
        let mut lid = BezPath::new();
        lid.move_to(at(c, -30.0, -8.0));
        lid.curve_to(at(c, -24.0, -12.0), at(c, -18.0, -12.0), at(c, -12.0, -8.0));
        p.stroke(&lid, ink, 0.8);
        p.stroke(&arc(at(c, -22.0, 8.0), 10.0, 0.1, PI - 0.1), ink, 0.8);
    });

    let stars = [
        at(c, 60.0, -82.0),
        at(c, -50.0, -96.0),
        at(c, 90.0, -28.0),
        at(c, -80.0, 42.0),
        at(c, 45.0, 96.0),
        at(c, -35.0, 108.0),
    ];
    p.stroke(&polyline(stars, false), accent.alpha8(0x25), 0.7);
    constellation(p, &stars, 3.0, 10.0, 0.65)?;

    for (dx, dy, size, cap) in [
        (0.0, 148.0, 40.0, Color::rgb8(0x9b, 0x4a, 0x72)),
        (-52.0, 160.0, 28.0, Color::rgb8(0x8b, 0x4a, 0x6b)),
        (50.0, 162.0, 26.0, Color::rgb8(0xa0, 0x58, 0x78)),
        (-26.0, 170.0, 18.0, Color::rgb8(0xc0, 0x78, 0x98)),
        (28.0, 156.0, 20.0, Color::rgb8(0x7a, 0x3a, 0x5a)),
    ] {
        let base = at(c, dx, dy);
        motifs::mushroom(p, base.x, base.y, size, cap);
    }

    p.scoped(|p| {
        p.set_alpha(0.62);
        motifs::sprig(p, c.x - 152.0, c.y + 20.0, 0.3, accent, 1.2);
        motifs::sprig(p, c.x + 152.0, c.y + 20.0, PI - 0.3, accent, 1.2);
    });

    motifs::crystal_cluster(p, c.x - 138.0, c.y - 88.0, accent, 0.72);
    motifs::crystal_cluster(p, c.x + 138.0, c.y - 88.0, accent, 0.72);

    motifs::moth(p, c.x, c.y - 110.0, 20.0, STARLIGHT.fade(0.85));
    Ok(())
}

fn hourglass_path(c: Point, half_h: f64, half_w: f64, waist: f64) -> BezPath {
    let (top, bot) = (c.y - half_h, c.y + half_h);
    let mut path = BezPath::new();
    path.move_to((c.x - half_w, top));
    path.line_to((c.x + half_w, top));
    path.curve_to((c.x + half_w, top + 28.0), (c.x + waist, c.y - 12.0), (c.x + waist, c.y));
    path.curve_to((c.x + waist, c.y + 12.0), (c.x + half_w, bot - 28.0), (c.x + half_w, bot));
    path.line_to((c.x - half_w, bot));
    path.curve_to((c.x - half_w, bot - 28.0), (c.x - waist, c.y + 12.0), (c.x - waist, c.y));
    path.curve_to((c.x - waist, c.y - 12.0), (c.x - half_w, top + 28.0), (c.x - half_w, top));
    path.close_path();
    path
}

fn formations(p: &mut Painter, spec: &FaceSpec) -> TarotResult<()> {
    let c = focus(p);
    let accent = spec.accent;

    p.glow_ring(c, 135.0, 18.0, accent)?;
    p.stroke(&Circle::new(c, 135.0), accent.alpha8(0x50), 1.5);
    p.stroke(&Circle::new(c, 120.0), accent.alpha8(0x25), 1.0);
    dot_ring(p, c, 128.0, PI / 14.0, 2.0, accent, |a| 0.14 + (a * 3.0).sin() * 0.07);

    let (half_h, half_w) = (86.0, 56.0);
    let (top, bot) = (c.y - half_h, c.y + half_h);
    let glass = hourglass_path(c, half_h, half_w, 9.0);

    p.fill(&glass, Color::rgba(16.0 / 255.0, 10.0 / 255.0, 4.0 / 255.0, 0.9));
    p.scoped(|p| {
        p.set_alpha(0.92);
        p.glow_stroke(&glass, 2.2, 14.0, accent);
        p.stroke(&glass, accent, 2.2);
        p.set_alpha(0.88);
        p.fill(&Rect::new(c.x - half_w - 3.0, top - 10.0, c.x + half_w + 3.0, top), accent);
        p.fill(&Rect::new(c.x - half_w - 3.0, bot, c.x + half_w + 3.0, bot + 10.0), accent);
    });

    p.save();
    for i in 0..32 {
        let f = f64::from(i);
        let x = c.x + (f * 2.39).sin() * (half_w * 0.72 * (1.0 - f / 32.0 * 0.45));
        let y = top + 18.0 + (f / 32.0) * (half_h - 26.0);
        p.set_alpha(0.35 + (f * 3.1).sin() * 0.25);
        p.fill(&Circle::new((x, y), 0.9 + (f * 1.7).cos() * 0.5), accent);
    }
    for i in 0..4 {
        let f = f64::from(i);
        let dx = if i % 2 == 0 { 1.5 } else { -1.5 };
        p.set_alpha(0.7 - f * 0.15);
        p.fill(&Circle::new((c.x + dx, c.y - 8.0 + f * 5.0), 1.4), Color::rgb8(0xff, 0xf8, 0xe0));
    }
    for i in 0..16 {
        let f = f64::from(i);
        let spread = half_w * (0.38 + (f / 16.0) * 0.32);
        let x = c.x + (f * 1.87).sin() * spread;
        let y = bot - 16.0 - (f / 16.0) * (half_h * 0.55);
        p.set_alpha(0.55 + (f * 2.8).sin() * 0.2);
        p.fill(&Circle::new((x, y), 0.9 + (f * 2.1).cos() * 0.4), accent);
    }
    p.set_alpha(0.18);
    p.glow_disc(c, 12.0, 22.0, accent)?;
    p.fill(&Circle::new(c, 12.0), accent);
    p.restore();

    let stars = [
        at(c, 78.0, -96.0),
        at(c, -82.0, -82.0),
        at(c, 112.0, 12.0),
        at(c, -108.0, 26.0),
        at(c, 62.0, 106.0),
        at(c, -56.0, 114.0),
    ];
    p.stroke(&polyline(stars[..3].iter().copied(), false), accent.alpha8(0x28), 0.7);
    p.stroke(&polyline(stars[3..].iter().copied(), false), accent.alpha8(0x28), 0.7);
    constellation(p, &stars, 2.5, 8.0, 0.72)?;

    let glyphs = [
        (52.0, -118.0),
        (-48.0, -110.0),
        (90.0, -58.0),
        (-86.0, -46.0),
        (94.0, 56.0),
        (-90.0, 68.0),
    ];
    for (i, (dx, dy)) in glyphs.into_iter().enumerate() {
        let tier = (i % 3) as f64;
        p.scoped(|p| {
            p.set_alpha(0.65 + tier * 0.1);
            let glyph = if i % 2 == 1 { "✧" } else { "✦" };
            p.text(glyph, at(c, dx, dy), &TextStyle::serif(8.0 + tier * 3.0, accent))
        })?;
    }

    motifs::crystal_cluster(p, c.x - 126.0, c.y - 44.0, accent, 0.68);
    motifs::crystal_cluster(p, c.x + 126.0, c.y - 44.0, accent, 0.68);

    p.scoped(|p| {
        p.set_alpha(0.55);
        motifs::sprig(p, c.x + 140.0, c.y + 18.0, PI - 0.25, accent, 1.05);
        motifs::sprig(p, c.x - 140.0, c.y + 18.0, 0.25, accent, 1.05);
    });
    Ok(())
}

fn wreath_leaf(length: f64, width: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.curve_to((-width, -length * 0.3), (-width * 0.85, -length * 0.8), (0.0, -length));
    path.curve_to((width * 0.85, -length * 0.8), (width, -length * 0.3), (0.0, 0.0));
    path
}

fn contact(p: &mut Painter, spec: &FaceSpec) -> TarotResult<()> {
    let c = focus(p);
    let accent = spec.accent;

    p.glow_ring(c, 132.0, 22.0, accent)?;
    p.stroke(&Circle::new(c, 132.0), accent.alpha8(0x52), 1.5);

    motifs::spider_web(p, c.x + 108.0, c.y - 98.0, 72.0, accent);

    let rows = [(0.0, 112.0, 15.0, 6.0), (PI / 20.0, 118.0, 11.0, 4.0)];
    for (row, (start, radius, length, width)) in rows.into_iter().enumerate() {
        let mut a: f64 = start;
        while a < TAU {
            let base = at(c, a.cos() * radius, a.sin() * radius);
            p.scoped(|p| {
                p.translate(base.x, base.y);
                p.rotate(a + FRAC_PI_2);
                let alpha = if row == 0 { 0.55 + (a * 2.0).sin() * 0.15 } else { 0.38 };
                p.set_alpha(alpha);
                p.fill(&wreath_leaf(length, width), accent);
            });
            a += PI / 10.0;
        }
    }

    p.scoped(|p| -> TarotResult<()> {
        p.set_alpha(0.95);
        p.glow_disc(c, 80.0, 40.0, accent)?;
        p.fill(&Circle::new(c, 80.0), Color::rgb8(0x11, 0x1e, 0x14));
        p.stroke(&Circle::new(c, 80.0), accent, 3.5);
        p.stroke(&Circle::new(c, 68.0), accent.alpha8(0x55), 1.0);
        Ok(())
    })?;

    motifs::pentagram(p, c.x, c.y, 55.0, accent);

    p.scoped(|p| {
        p.set_alpha(0.28);
        for k in 0..18 {
            let a = f64::from(k) * PI / 9.0;
            let ray = Line::new(
                at(c, a.cos() * 42.0, a.sin() * 42.0),
                at(c, a.cos() * 64.0, a.sin() * 64.0),
            );
            p.stroke(&ray, accent, 0.7);
        }
    });

    quill(p, at(c, -110.0, -90.0), accent);

    p.scoped(|p| {
        p.set_alpha(0.65);
        motifs::sprig(p, c.x - 150.0, c.y + 18.0, 0.42, accent, 1.2);
        motifs::sprig(p, c.x + 150.0, c.y + 18.0, PI - 0.42, accent, 1.2);
        motifs::sprig(p, c.x - 125.0, c.y - 75.0, 0.2, accent, 0.85);
        motifs::sprig(p, c.x + 125.0, c.y - 75.0, PI - 0.2, accent, 0.85);
    });

    for (dx, dy, size, cap) in [
        (-105.0, 148.0, 22.0, Color::rgb8(0x4a, 0x80, 0x60)),
        (-88.0, 142.0, 16.0, Color::rgb8(0x5a, 0x90, 0x70)),
        (105.0, 148.0, 22.0, Color::rgb8(0x4a, 0x80, 0x60)),
        (88.0, 142.0, 16.0, Color::rgb8(0x5a, 0x90, 0x70)),
    ] {
        let base = at(c, dx, dy);
        motifs::mushroom(p, base.x, base.y, size, cap);
    }
    Ok(())
}

fn quill(p: &mut Painter, origin: Point, accent: Color) {
    p.scoped(|p| {
        p.translate(origin.x, origin.y);
        p.rotate(0.6);

        let mut vane = BezPath::new();
        vane.move_to((0.0, -38.0));
        vane.curve_to((12.0, -28.0), (14.0, -10.0), (8.0, 0.0));
        vane.curve_to((4.0, 8.0), (-4.0, 8.0), (-8.0, 0.0));
        vane.curve_to((-14.0, -10.0), (-12.0, -28.0), (0.0, -38.0));
        p.set_alpha(0.55);
        p.fill(&vane, accent);

        let mut shade = BezPath::new();
        shade.move_to((0.0, -38.0));
        shade.line_to((0.0, 8.0));
        shade.curve_to((-6.0, 2.0), (-10.0, -6.0), (-8.0, 0.0));
        p.set_alpha(0.6);
        p.fill(&shade, Color::rgb8(0x1a, 0x2f, 0x1e));

        p.set_alpha(0.8);
        let nib = polyline(
            [
                Point::new(0.0, 8.0),
                Point::new(-3.0, 22.0),
                Point::new(0.0, 20.0),
                Point::new(3.0, 22.0),
            ],
            true,
        );
        p.fill(&nib, Color::rgb8(0x2a, 0x20, 0x10));
    });
}

#[cfg(test)]
#[path = "../../tests/unit/texture/illustration.rs"]
mod tests;
