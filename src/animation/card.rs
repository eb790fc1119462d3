//! Per-card animation state machine.
//!
//! Every channel is advanced once per rendered frame by exponential smoothing towards a target
//! derived from the card's boolean inputs. The deal channel is the exception: it advances
//! linearly once the card's entrance delay has elapsed, and is eased only when mapped to a
//! position.

use crate::animation::ease::Ease;
use crate::foundation::core::Vec3;
use crate::foundation::error::{TarotError, TarotResult};
use crate::foundation::math::{damp, lerp};

/// Where every card starts before it is dealt.
pub const DEAL_ORIGIN: Vec3 = Vec3::new(0.0, -4.0, 0.0);

const HOVER_LIFT: f64 = 0.2;
const ACTIVE_LIFT: f64 = 0.4;
const HOVER_GLOW: f64 = 0.7;
const DIM_OPACITY: f64 = 0.5;
const DIM_SHRINK: f64 = 0.08;
const LIGHT_BASE: f64 = 0.3;
const LIGHT_GLOW: f64 = 2.5;
const FRONT_EMISSIVE_BASE: f64 = 0.75;
const FRONT_EMISSIVE_GLOW: f64 = 0.5;
const BACK_EMISSIVE_BASE: f64 = 0.65;
const BACK_EMISSIVE_GLOW: f64 = 0.4;

/// Timing and smoothing constants for the card driver.
///
/// Decay values are the fraction of the remaining distance left after one second, so smaller
/// values converge faster.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationTuning {
    /// Seconds the linear deal progress takes to go from 0 to 1.
    pub deal_duration_s: f64,
    /// Entrance delay added per card index.
    pub deal_stride_s: f64,
    /// Curve applied to deal progress when interpolating the card's position.
    pub deal_ease: Ease,
    /// Hover lift decay.
    pub hover_decay: f64,
    /// Active lift decay.
    pub active_decay: f64,
    /// Glow decay.
    pub glow_decay: f64,
    /// Dim decay.
    pub dim_decay: f64,
    /// Flip decay.
    pub flip_decay: f64,
}

impl Default for AnimationTuning {
    fn default() -> Self {
        Self {
            deal_duration_s: 0.65,
            deal_stride_s: 0.18,
            deal_ease: Ease::OutCubic,
            hover_decay: 0.02,
            active_decay: 0.015,
            glow_decay: 0.02,
            dim_decay: 0.02,
            flip_decay: 0.008,
        }
    }
}

impl AnimationTuning {
    /// Reject values that would make the driver diverge or stall.
    pub fn validate(&self) -> TarotResult<()> {
        if !self.deal_duration_s.is_finite() || self.deal_duration_s <= 0.0 {
            return Err(TarotError::validation("deal_duration_s must be finite and > 0"));
        }
        if !self.deal_stride_s.is_finite() || self.deal_stride_s < 0.0 {
            return Err(TarotError::validation("deal_stride_s must be finite and >= 0"));
        }
        for (name, d) in [
            ("hover_decay", self.hover_decay),
            ("active_decay", self.active_decay),
            ("glow_decay", self.glow_decay),
            ("dim_decay", self.dim_decay),
            ("flip_decay", self.flip_decay),
        ] {
            if !(d > 0.0 && d < 1.0) {
                return Err(TarotError::validation(format!(
                    "{name} must be in (0, 1), got {d}"
                )));
            }
        }
        Ok(())
    }

    /// Entrance delay of the card dealt at `index`.
    pub fn deal_delay(&self, index: usize) -> f64 {
        index as f64 * self.deal_stride_s
    }

    fn decay(&self, channel: Channel) -> f64 {
        match channel {
            Channel::HoverLift => self.hover_decay,
            Channel::ActiveLift => self.active_decay,
            Channel::Glow => self.glow_decay,
            Channel::Dim => self.dim_decay,
            Channel::Flip => self.flip_decay,
        }
    }
}

/// The exponentially smoothed channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Lift while the pointer is over the card.
    HoverLift,
    /// Lift while the card is the active section.
    ActiveLift,
    /// Glow intensity.
    Glow,
    /// Dimming while another card is active.
    Dim,
    /// Front-to-back reveal.
    Flip,
}

impl Channel {
    /// All smoothed channels.
    pub const ALL: [Channel; 5] = [
        Channel::HoverLift,
        Channel::ActiveLift,
        Channel::Glow,
        Channel::Dim,
        Channel::Flip,
    ];
}

/// Per-frame inputs of one card.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardInputs {
    /// The pointer is over this card.
    pub hovered: bool,
    /// This card is the active section.
    pub active: bool,
    /// Some card (possibly this one) is the active section.
    pub any_active: bool,
    /// Seconds after mount before this card starts being dealt.
    pub deal_delay_s: f64,
}

impl CardInputs {
    /// Target value of a smoothed channel under these inputs.
    pub fn target(&self, channel: Channel) -> f64 {
        match channel {
            Channel::HoverLift => f64::from(u8::from(self.hovered)),
            Channel::ActiveLift | Channel::Flip => f64::from(u8::from(self.active)),
            Channel::Glow => {
                if self.active {
                    1.0
                } else if self.hovered {
                    HOVER_GLOW
                } else {
                    0.0
                }
            }
            Channel::Dim => f64::from(u8::from(self.any_active && !self.active)),
        }
    }
}

/// Transient animation state of one card.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardAnimState {
    /// Seconds since the card was mounted.
    pub deal_clock: f64,
    /// Linear deal progress in `[0, 1]`.
    pub deal: f64,
    /// Hover lift in `[0, 1]`.
    pub hover_lift: f64,
    /// Active lift in `[0, 1]`.
    pub active_lift: f64,
    /// Glow in `[0, 1]`.
    pub glow: f64,
    /// Dim level in `[0, 1]`.
    pub dim: f64,
    /// Flip progress in `[0, 1]`.
    pub flip: f64,
}

impl CardAnimState {
    /// Current value of a smoothed channel.
    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::HoverLift => self.hover_lift,
            Channel::ActiveLift => self.active_lift,
            Channel::Glow => self.glow,
            Channel::Dim => self.dim,
            Channel::Flip => self.flip,
        }
    }

    fn slot_mut(&mut self, channel: Channel) -> &mut f64 {
        match channel {
            Channel::HoverLift => &mut self.hover_lift,
            Channel::ActiveLift => &mut self.active_lift,
            Channel::Glow => &mut self.glow,
            Channel::Dim => &mut self.dim,
            Channel::Flip => &mut self.flip,
        }
    }

    /// `true` once the card's entrance has started.
    pub fn is_dealing(&self) -> bool {
        self.deal > 0.0
    }

    /// Advance every channel by `dt` seconds.
    ///
    /// Pure: returns the next state and leaves `self` untouched. Negative or non-finite `dt` is
    /// treated as zero.
    pub fn advance(&self, inputs: &CardInputs, dt: f64, tuning: &AnimationTuning) -> Self {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let mut next = *self;

        next.deal_clock += dt;
        if next.deal_clock > inputs.deal_delay_s && next.deal < 1.0 {
            next.deal = (next.deal + dt / tuning.deal_duration_s).min(1.0);
        }

        for channel in Channel::ALL {
            let slot = next.slot_mut(channel);
            *slot = damp(*slot, inputs.target(channel), tuning.decay(channel), dt);
        }
        next
    }

    /// Derive the visual outputs for a card assigned to `slot`.
    pub fn visuals(
        &self,
        slot: Vec3,
        slot_rotation_y: f64,
        tuning: &AnimationTuning,
    ) -> CardVisuals {
        let e = tuning.deal_ease.apply(self.deal);
        let position = Vec3::new(
            lerp(DEAL_ORIGIN.x, slot.x, e),
            lerp(DEAL_ORIGIN.y, slot.y, e)
                + self.hover_lift * HOVER_LIFT
                + self.active_lift * ACTIVE_LIFT,
            lerp(DEAL_ORIGIN.z, slot.z, e),
        );
        let opacity = 1.0 - self.dim * DIM_OPACITY;
        CardVisuals {
            position,
            group_rotation_y: slot_rotation_y,
            mesh_rotation_y: self.flip * std::f64::consts::PI,
            mesh_scale: 1.0 - self.dim * DIM_SHRINK,
            front_opacity: opacity,
            back_opacity: opacity,
            light_intensity: LIGHT_BASE + self.glow * LIGHT_GLOW,
            front_emissive: FRONT_EMISSIVE_BASE + self.glow * FRONT_EMISSIVE_GLOW,
            back_emissive: BACK_EMISSIVE_BASE + self.glow * BACK_EMISSIVE_GLOW,
        }
    }
}

/// Values a host renderer writes to the card's group, mesh, materials and glow light.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardVisuals {
    /// Group position in scene units.
    pub position: Vec3,
    /// Group y-rotation, fixed by the card's slot.
    pub group_rotation_y: f64,
    /// Mesh y-rotation in radians; `π` shows the back face.
    pub mesh_rotation_y: f64,
    /// Uniform mesh scale.
    pub mesh_scale: f64,
    /// Front material opacity.
    pub front_opacity: f64,
    /// Back material opacity.
    pub back_opacity: f64,
    /// Glow point-light intensity.
    pub light_intensity: f64,
    /// Front material emissive intensity.
    pub front_emissive: f64,
    /// Back material emissive intensity.
    pub back_emissive: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/animation/card.rs"]
mod tests;
