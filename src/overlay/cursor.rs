//! Sparkle trail following the pointer.
//!
//! The simulation is frame-based: [`CursorTrail::step`] is called once per rendered frame and
//! each pointer move spawns one or two particles that drift upward, fall back under gravity and
//! fade out.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use serde::{Deserialize, Serialize};

use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::TarotResult;
use crate::foundation::math::Rng64;
use crate::texture::color::{AMBER, ASH, Color, GOLD, PLUM, SAGE};
use crate::texture::painter::{Painter, polyline};

const PALETTE: [Color; 5] = [GOLD, PLUM, ASH, SAGE, AMBER];
const GRAVITY: f64 = 0.025;
const JITTER: f64 = 8.0;
const PEAK_ALPHA: f64 = 0.65;
const SHRINK: f64 = 0.7;
const GLOW_BLUR: f64 = 8.0;
const STAR_SCALE: f64 = 1.4;

/// One sparkle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrailParticle {
    /// Position in CSS pixels.
    pub position: Point,
    /// Velocity in pixels per frame.
    pub velocity: Vec2,
    /// Radius at birth.
    pub size: f64,
    /// Fill color.
    pub color: Color,
    /// Frames lived so far.
    pub life: u32,
    /// Frames before removal.
    pub max_life: u32,
    /// Drawn as a four-point star instead of a disc.
    pub star: bool,
}

impl TrailParticle {
    fn spawn(rng: &mut Rng64, at: Point) -> Self {
        Self {
            position: at + Vec2::new(rng.range(-0.5, 0.5) * JITTER, rng.range(-0.5, 0.5) * JITTER),
            velocity: Vec2::new(rng.range(-0.3, 0.3), -(rng.next_f64_01() * 1.2 + 0.2)),
            size: rng.next_f64_01() * 2.5 + 0.8,
            color: PALETTE[rng.below(PALETTE.len())],
            life: 0,
            max_life: (rng.next_f64_01() * 35.0 + 20.0) as u32,
            star: rng.chance(0.3),
        }
    }

    /// Fraction of the lifetime used.
    pub fn progress(&self) -> f64 {
        f64::from(self.life) / f64::from(self.max_life.max(1))
    }

    /// Opacity this frame.
    pub fn alpha(&self) -> f64 {
        (1.0 - self.progress()) * PEAK_ALPHA
    }

    /// Radius this frame.
    pub fn current_size(&self) -> f64 {
        self.size * (1.0 - self.progress() * SHRINK)
    }
}

/// All live sparkles.
#[derive(Clone, Debug)]
pub struct CursorTrail {
    rng: Rng64,
    particles: Vec<TrailParticle>,
}

impl CursorTrail {
    /// Empty trail drawing from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Rng64::new(seed),
            particles: Vec::new(),
        }
    }

    /// Live particles.
    pub fn particles(&self) -> &[TrailParticle] {
        &self.particles
    }

    /// Pointer moved to `at`.
    pub fn pointer_move(&mut self, at: Point) {
        let count = if self.rng.chance(0.4) { 2 } else { 1 };
        for _ in 0..count {
            let p = TrailParticle::spawn(&mut self.rng, at);
            self.particles.push(p);
        }
    }

    /// Advance one frame: drop spent particles, then move the rest.
    pub fn step(&mut self) {
        self.particles.retain(|p| p.life < p.max_life);
        for p in &mut self.particles {
            p.life += 1;
            p.position += p.velocity;
            p.velocity.y += GRAVITY;
        }
    }

    /// Draw the live particles.
    pub fn draw(&self, painter: &mut Painter) -> TarotResult<()> {
        for particle in &self.particles {
            painter.scoped(|p| draw_particle(p, particle))?;
        }
        Ok(())
    }
}

fn draw_particle(p: &mut Painter, particle: &TrailParticle) -> TarotResult<()> {
    let alpha = particle.alpha();
    if alpha <= 0.0 {
        return Ok(());
    }
    p.set_alpha(alpha);
    let r = particle.current_size();
    let c = particle.position;
    p.glow_disc(c, r, GLOW_BLUR, particle.color)?;
    if particle.star {
        p.fill(&four_point_star(c, r * STAR_SCALE), particle.color);
    } else {
        p.fill(&kurbo::Circle::new(c, r), particle.color);
    }
    Ok(())
}

fn four_point_star(c: Point, r: f64) -> kurbo::BezPath {
    let inner = r * 0.4;
    polyline(
        (0..8).map(|i| {
            let a = f64::from(i) * FRAC_PI_4 - FRAC_PI_2;
            let radius = if i % 2 == 0 { r } else { inner };
            c + Vec2::from_angle(a) * radius
        }),
        true,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/cursor.rs"]
mod tests;
