//! Reusable botanical and occult motifs drawn onto a [`Painter`].
//!
//! Coordinates are canvas pixels. Every motif saves and restores the painter state, so the
//! caller's transform and alpha survive the call.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use kurbo::{Circle, Ellipse};

use crate::foundation::core::{BezPath, Point};
use crate::foundation::error::TarotResult;
use crate::foundation::math::Rng64;
use crate::texture::color::Color;
use crate::texture::painter::{Painter, arc, polyline};
use crate::texture::text::TextStyle;

const STEM: Color = Color::rgb8(0xc8, 0xb0, 0x90);
const SHEEN: Color = Color::rgba(1.0, 1.0, 1.0, 0.45);
const MOON_SHADOW: Color = Color::rgb8(0x0c, 0x0a, 0x14);
const OWL_EYE: Color = Color::rgb8(0x0a, 0x08, 0x10);
const OWL_GLINT: Color = Color::rgb8(0xff, 0xfa, 0xb0);
const OWL_BEAK: Color = Color::rgb8(0xc8, 0xa0, 0x60);

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn disc(x: f64, y: f64, r: f64) -> Circle {
    Circle::new((x, y), r)
}

fn segment(x0: f64, y0: f64, x1: f64, y1: f64) -> kurbo::Line {
    kurbo::Line::new((x0, y0), (x1, y1))
}

/// Teardrop leaf with its stem at the local origin, pointing up.
pub fn leaf(p: &mut Painter, size: f64, color: Color) {
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.curve_to(
        (-size * 0.38, -size * 0.28),
        (-size * 0.32, -size * 0.78),
        (0.0, -size),
    );
    path.curve_to(
        (size * 0.32, -size * 0.78),
        (size * 0.38, -size * 0.28),
        (0.0, 0.0),
    );
    p.fill(&path, color);
}

/// Wavy horizontal vine with alternating leaves and berries.
///
/// `inward` (±1) flips which side the first leaf leans to.
pub fn hvine(p: &mut Painter, x1: f64, x2: f64, y: f64, color: Color, inward: f64) {
    vine(p, Axis::Horizontal, x1, x2, y, color, inward);
}

/// Wavy vertical vine, the transpose of [`hvine`].
pub fn vvine(p: &mut Painter, x: f64, y1: f64, y2: f64, color: Color, inward: f64) {
    vine(p, Axis::Vertical, y1, y2, x, color, inward);
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

fn vine(p: &mut Painter, axis: Axis, a1: f64, a2: f64, cross: f64, color: Color, inward: f64) {
    let at = |along: f64, offset: f64| match axis {
        Axis::Horizontal => pt(along, cross + offset),
        Axis::Vertical => pt(cross + offset, along),
    };
    let leaf_turn = match axis {
        Axis::Horizontal => 0.0,
        Axis::Vertical => FRAC_PI_2,
    };
    p.scoped(|p| {
        p.set_alpha(0.82);
        let steps = ((a2 - a1) / 10.0).ceil().max(1.0) as usize;
        let stem = polyline(
            (0..=steps).map(|i| {
                let along = a1 + (a2 - a1) * i as f64 / steps as f64;
                at(along, (i as f64 * 0.85).sin() * 2.8)
            }),
            false,
        );
        p.stroke(&stem, color, 1.5);

        let mut along = a1 + 7.0;
        while along < a2 - 7.0 {
            let wave = ((along - a1) * 0.047).sin() * 2.8;
            let k = ((along - a1) / 20.0).floor() as i64;
            let side = if k % 2 == 0 { inward } else { -inward };
            let base = at(along, wave);
            p.scoped(|p| {
                p.translate(base.x, base.y);
                p.rotate(side * 0.7 + leaf_turn);
                leaf(p, 11.0, color);
            });
            if k % 3 == 0 {
                let berry = match axis {
                    Axis::Horizontal => pt(base.x + side * 7.0, base.y - 3.0),
                    Axis::Vertical => pt(base.x - 3.0, base.y + side * 7.0),
                };
                p.fill(&Circle::new(berry, 2.8), color);
            }
            along += 20.0;
        }
    });
}

/// Four vines framing the canvas `margin` pixels in from each edge.
pub fn vine_border(p: &mut Painter, margin: f64, color: Color) {
    let (w, h) = (p.width(), p.height());
    hvine(p, margin, w - margin, margin, color, 1.0);
    hvine(p, margin, w - margin, h - margin, color, -1.0);
    vvine(p, margin, margin, h - margin, color, 1.0);
    vvine(p, w - margin, margin, h - margin, color, -1.0);
}

/// Mushroom standing on `(x, y)` with a dome cap and pale spots.
pub fn mushroom(p: &mut Painter, x: f64, y: f64, sz: f64, cap: Color) {
    p.scoped(|p| {
        p.set_alpha(0.85);
        let stem = polyline(
            [
                pt(x - sz * 0.22, y),
                pt(x - sz * 0.18, y - sz * 0.42),
                pt(x + sz * 0.18, y - sz * 0.42),
                pt(x + sz * 0.22, y),
            ],
            true,
        );
        p.fill(&stem, STEM);

        p.set_alpha(0.95);
        p.fill(&arc(pt(x, y - sz * 0.42), sz * 0.48, PI, 0.0), cap);

        p.set_alpha(0.5);
        p.fill(&disc(x - sz * 0.14, y - sz * 0.54, sz * 0.07), SHEEN);
        p.fill(&disc(x + sz * 0.13, y - sz * 0.49, sz * 0.05), SHEEN);
        p.fill(&disc(x, y - sz * 0.66, sz * 0.06), SHEEN);
    });
}

/// Fan of six crystal shards rooted at `(x, y)`.
pub fn crystal_cluster(p: &mut Painter, x: f64, y: f64, color: Color, sz: f64) {
    const SHARDS: [(f64, f64, f64, f64); 6] = [
        (0.0, 34.0, 8.0, 0.0),
        (-11.0, 25.0, 6.0, -0.22),
        (11.0, 28.0, 6.0, 0.18),
        (-19.0, 18.0, 5.0, -0.38),
        (20.0, 20.0, 5.0, 0.32),
        (-6.0, 15.0, 4.0, -0.1),
    ];
    p.scoped(|p| {
        p.set_alpha(0.88);
        for (dx, h, w, a) in SHARDS {
            let (h, w) = (h * sz, w * sz);
            p.scoped(|p| {
                p.translate(x + dx * sz, y);
                p.rotate(a);
                let shard = polyline(
                    [pt(0.0, -h), pt(-w, 0.0), pt(0.0, h * 0.18), pt(w, 0.0)],
                    true,
                );
                p.fill(&shard, color);
                p.stroke(&shard, color, 0.9);
            });
        }
        p.set_alpha(0.4);
        p.fill(
            &disc(x - 3.0 * sz, y - 28.0 * sz, 3.0 * sz),
            Color::rgba(1.0, 1.0, 1.0, 0.3),
        );
    });
}

fn mirrored_wing(cx: f64, cy: f64, sz: f64, side: f64, c: [(f64, f64); 6]) -> BezPath {
    let q = |(dx, dy): (f64, f64)| pt(cx + side * sz * dx, cy + sz * dy);
    let mut path = BezPath::new();
    path.move_to((cx, cy));
    path.curve_to(q(c[0]), q(c[1]), q(c[2]));
    path.curve_to(q(c[3]), q(c[4]), q(c[5]));
    path
}

/// Moth with spread wings, eye spots and antennae, centred on the thorax.
pub fn moth(p: &mut Painter, cx: f64, cy: f64, sz: f64, color: Color) {
    const UPPER: [(f64, f64); 6] = [
        (0.28, -0.62),
        (1.05, -0.52),
        (1.0, 0.18),
        (0.78, 0.38),
        (0.28, 0.1),
        (0.0, 0.0),
    ];
    const LOWER: [(f64, f64); 6] = [
        (0.18, 0.22),
        (0.75, 0.12),
        (0.65, 0.62),
        (0.45, 0.82),
        (0.1, 0.48),
        (0.0, 0.0),
    ];
    p.scoped(|p| {
        for (wing, alpha) in [(UPPER, 0.68), (LOWER, 0.52)] {
            p.set_alpha(alpha);
            for side in [-1.0, 1.0] {
                p.fill(&mirrored_wing(cx, cy, sz, side, wing), color);
            }
        }

        p.set_alpha(0.45);
        for side in [-1.0, 1.0] {
            p.stroke(
                &segment(cx, cy, cx + side * sz * 0.85, cy + sz * 0.1),
                color,
                0.9,
            );
        }

        for side in [-1.0, 1.0] {
            let eye = (cx + side * sz * 0.5, cy - sz * 0.08);
            p.set_alpha(0.75);
            p.stroke(&Circle::new(eye, sz * 0.13), color, 1.0);
            p.set_alpha(0.35);
            p.fill(&Circle::new(eye, sz * 0.06), color);
        }

        p.set_alpha(0.72);
        p.fill(
            &Ellipse::new((cx, cy + sz * 0.18), (sz * 0.075, sz * 0.42), 0.0),
            color,
        );

        for side in [-1.0, 1.0] {
            let mut antenna = BezPath::new();
            antenna.move_to((cx + side * sz * 0.05, cy - sz * 0.1));
            antenna.curve_to(
                (cx + side * sz * 0.22, cy - sz * 0.52),
                (cx + side * sz * 0.42, cy - sz * 0.6),
                (cx + side * sz * 0.32, cy - sz * 0.82),
            );
            p.set_alpha(0.6);
            p.stroke(&antenna, color, 0.9);
            p.set_alpha(0.7);
            p.fill(&disc(cx + side * sz * 0.32, cy - sz * 0.82, sz * 0.05), color);
        }
    });
}

/// Owl perched on a short branch, with glowing eyes.
pub fn owl(p: &mut Painter, cx: f64, cy: f64, sz: f64, color: Color) -> TarotResult<()> {
    p.save();
    p.set_alpha(0.92);
    p.fill(
        &Ellipse::new((cx, cy + sz * 0.12), (sz * 0.32, sz * 0.48), 0.0),
        color,
    );
    p.fill(&disc(cx, cy - sz * 0.32, sz * 0.27), color);
    for side in [-1.0, 1.0] {
        let tuft = polyline(
            [
                pt(cx + side * sz * 0.18, cy - sz * 0.52),
                pt(cx + side * sz * 0.1, cy - sz * 0.66),
                pt(cx + side * sz * 0.03, cy - sz * 0.53),
            ],
            true,
        );
        p.fill(&tuft, color);
    }
    p.stroke(&disc(cx, cy - sz * 0.32, sz * 0.2), color.fade(0.5), 0.8);

    p.set_alpha(0.9);
    for side in [-1.0, 1.0] {
        p.fill(&disc(cx + side * sz * 0.1, cy - sz * 0.35, sz * 0.08), OWL_EYE);
    }
    for side in [-1.0, 1.0] {
        let eye = pt(cx + side * sz * 0.1, cy - sz * 0.35);
        p.glow_disc(eye, sz * 0.05, 8.0, OWL_GLINT)?;
        p.fill(&Circle::new(eye, sz * 0.05), OWL_GLINT);
    }

    p.set_alpha(0.8);
    let beak = polyline(
        [
            pt(cx - sz * 0.05, cy - sz * 0.25),
            pt(cx, cy - sz * 0.18),
            pt(cx + sz * 0.05, cy - sz * 0.25),
        ],
        true,
    );
    p.fill(&beak, OWL_BEAK);

    p.set_alpha(0.42);
    for side in [-1.0, 1.0] {
        let mut wing = BezPath::new();
        wing.move_to((cx + side * sz * 0.32, cy - sz * 0.02));
        wing.curve_to(
            (cx + side * sz * 0.56, cy - sz * 0.18),
            (cx + side * sz * 0.52, cy + sz * 0.32),
            (cx + side * sz * 0.28, cy + sz * 0.4),
        );
        p.stroke(&wing, color, 0.9);
    }

    p.set_alpha(0.55);
    p.stroke(
        &segment(cx - sz * 0.35, cy + sz * 0.58, cx + sz * 0.35, cy + sz * 0.58),
        color,
        1.0,
    );
    p.restore();
    Ok(())
}

/// Eight-spoke web of six octagonal rings with a small spider.
pub fn spider_web(p: &mut Painter, cx: f64, cy: f64, r: f64, color: Color) {
    const SPOKES: usize = 8;
    let spoke = |i: usize, rr: f64| {
        let a = i as f64 / SPOKES as f64 * TAU;
        pt(cx + a.cos() * rr, cy + a.sin() * rr)
    };
    p.scoped(|p| {
        p.set_alpha(0.68);
        for i in 0..SPOKES {
            let tip = spoke(i, r);
            p.stroke(&segment(cx, cy, tip.x, tip.y), color, 0.8);
        }
        for ring in 1..=6 {
            let rr = r * ring as f64 / 6.0;
            p.stroke(&polyline((0..=SPOKES).map(|i| spoke(i, rr)), false), color, 0.8);
        }
        p.set_alpha(0.82);
        p.fill(&disc(cx + r * 0.42, cy + r * 0.28, r * 0.065), color);
    });
}

/// Five-pointed star inscribed in a circle.
pub fn pentagram(p: &mut Painter, cx: f64, cy: f64, r: f64, color: Color) {
    p.scoped(|p| {
        p.set_alpha(0.78);
        p.stroke(&disc(cx, cy, r), color, 1.5);
        p.set_alpha(0.68);
        let star = polyline(
            (0..5).map(|i| {
                let a = i as f64 * 4.0 * PI / 5.0 - FRAC_PI_2;
                pt(cx + a.cos() * r * 0.82, cy + a.sin() * r * 0.82)
            }),
            true,
        );
        p.stroke(&star, color, 1.5);
    });
}

/// `count` faint dots spread over the canvas inside `margin`, every seventh one carrying a
/// four-point star glyph.
pub fn scattered_stars(
    p: &mut Painter,
    rng: &mut Rng64,
    color: Color,
    count: usize,
    margin: f64,
) -> TarotResult<()> {
    let (w, h) = (p.width(), p.height());
    p.save();
    for i in 0..count {
        let x = margin + rng.next_f64_01() * (w - margin * 2.0);
        let y = margin + rng.next_f64_01() * (h - margin * 2.0);
        let alpha = 0.22 + rng.next_f64_01() * 0.42;
        let size = 0.8 + rng.next_f64_01() * 1.8;
        p.set_alpha(alpha);
        p.fill(&disc(x, y, size * 0.35), color);
        if i % 7 == 0 {
            p.text("✦", pt(x, y), &TextStyle::serif(size * 5.0, color))?;
        }
    }
    p.restore();
    Ok(())
}

/// Five moon phases (new, waxing, full, waning, new) centred on `cx`.
pub fn moon_phases(p: &mut Painter, cx: f64, y: f64, color: Color, r: f64) -> TarotResult<()> {
    let sp = r * 3.5;
    let start = cx - 2.0 * sp;
    for i in 0..5 {
        let x = start + i as f64 * sp;
        p.save();
        match i {
            0 | 4 => {
                p.set_alpha(0.72);
                p.stroke(&disc(x, y, r), color, 1.2);
            }
            1 => {
                p.set_alpha(0.82);
                p.fill(&arc(pt(x, y), r, FRAC_PI_2, PI * 1.5), color);
                p.fill(&disc(x + r * 0.4, y, r * 0.88), MOON_SHADOW);
            }
            3 => {
                p.set_alpha(0.82);
                p.fill(&arc(pt(x, y), r, -FRAC_PI_2, FRAC_PI_2), color);
                p.fill(&disc(x - r * 0.4, y, r * 0.88), MOON_SHADOW);
            }
            _ => {
                p.set_alpha(0.9);
                p.glow_disc(pt(x, y), r, 14.0, color)?;
                p.fill(&disc(x, y, r), color);
            }
        }
        p.restore();
    }
    Ok(())
}

/// Herb sprig: a straight stem with five pairs of leaves, rotated by `angle` about its root.
pub fn sprig(p: &mut Painter, x: f64, y: f64, angle: f64, color: Color, scale: f64) {
    const LEAVES: [(f64, f64, f64); 5] = [
        (-10.0, -0.55, 9.0),
        (-19.0, 0.55, 10.0),
        (-28.0, -0.5, 9.0),
        (-37.0, 0.5, 8.0),
        (-42.0, -0.2, 6.0),
    ];
    p.scoped(|p| {
        p.translate(x, y);
        p.rotate(angle);
        p.stroke(&segment(0.0, 0.0, 0.0, -44.0 * scale), color, scale);
        for (ly, la, ls) in LEAVES {
            for side in [-1.0, 1.0] {
                p.scoped(|p| {
                    p.translate(0.0, ly * scale);
                    p.rotate(la * side);
                    leaf(p, ls * scale, color);
                });
            }
        }
    });
}

/// Two nested quarter curves with a star, mirrored into a corner by `(sx, sy)`.
pub fn ornamental_corner(
    p: &mut Painter,
    x: f64,
    y: f64,
    sx: f64,
    sy: f64,
    color: Color,
) -> TarotResult<()> {
    p.save();
    p.translate(x, y);
    p.scale(sx, sy);
    p.set_alpha(0.88);
    for reach in [22.0, 38.0] {
        let mut curve = BezPath::new();
        curve.move_to((0.0, reach));
        curve.quad_to((0.0, 0.0), (reach, 0.0));
        p.stroke(&curve, color, 1.8);
    }
    p.set_alpha(1.0);
    let out = p.text("✦", pt(8.0, 8.0), &TextStyle::serif(15.0, color));
    p.restore();
    out
}

/// Horizontal rule.
pub fn rule(p: &mut Painter, x0: f64, x1: f64, y: f64, color: Color, width: f64) {
    p.stroke(&segment(x0, y, x1, y), color, width);
}

#[cfg(test)]
#[path = "../../tests/unit/texture/motifs.rs"]
mod tests;
