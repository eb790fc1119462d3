//! Language toggle widget and the burst it emits on every switch.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::content::translations::Language;
use crate::foundation::core::Vec2;
use crate::foundation::math::Rng64;

/// Particles per burst.
pub const BURST_PARTICLES: usize = 8;
/// Host milliseconds a burst stays on screen.
pub const BURST_LIFETIME_MS: f64 = 1000.0;

/// Labels and state of the FR/EN toggle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchView {
    /// Language currently shown.
    pub language: Language,
    /// Accessible label announcing the language a click switches to.
    pub aria_label: String,
}

impl SwitchView {
    /// Toggle state for `language`.
    pub fn for_language(language: Language) -> Self {
        let target = match language.toggled() {
            Language::Fr => "Français",
            Language::En => "English",
        };
        Self {
            language,
            aria_label: format!("Switch to {target}"),
        }
    }
}

/// One decorative particle, flying from the toggle centre to `offset`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BurstParticle {
    /// Final offset in CSS pixels.
    pub offset: Vec2,
}

/// Ring of particles spawned by a language switch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleBurst {
    /// Host time of the switch.
    pub spawned_at_ms: f64,
    /// Evenly spaced particles.
    pub particles: Vec<BurstParticle>,
}

impl ParticleBurst {
    /// Spawn a burst at `now_ms`. Angles are fixed, distances jittered by `rng`.
    pub fn spawn(rng: &mut Rng64, now_ms: f64) -> Self {
        let particles = (0..BURST_PARTICLES)
            .map(|i| {
                let angle = i as f64 / BURST_PARTICLES as f64 * TAU;
                let distance = 40.0 + rng.next_f64_01() * 20.0;
                BurstParticle {
                    offset: Vec2::from_angle(angle) * distance,
                }
            })
            .collect();
        Self {
            spawned_at_ms: now_ms,
            particles,
        }
    }

    /// Fraction of the lifetime elapsed at `now_ms`, clamped to `[0, 1]`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        ((now_ms - self.spawned_at_ms) / BURST_LIFETIME_MS).clamp(0.0, 1.0)
    }

    /// `true` once the burst should be removed.
    pub fn is_expired(&self, now_ms: f64) -> bool {
        now_ms - self.spawned_at_ms >= BURST_LIFETIME_MS
    }
}
