//! Static dressing of the 3D scene: starfield, lighting rig, fog, camera and card geometry.
//!
//! Everything here is plain data for a host renderer.

use crate::foundation::core::Vec3;
use crate::foundation::math::Rng64;
use crate::texture::color::{ASH, Color, GOLD, NIGHT, PLUM, SAGE};

/// Number of background stars.
pub const STAR_COUNT: usize = 90;

/// Gold appears twice, so it is drawn twice as often.
const STAR_PALETTE: [Color; 5] = [GOLD, GOLD, PLUM, ASH, SAGE];

/// One background star sphere.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Star {
    /// Centre in scene units.
    pub position: Vec3,
    /// Sphere radius.
    pub size: f64,
    /// Unlit color.
    pub color: Color,
    /// Material opacity.
    pub opacity: f64,
}

/// Stars scattered in a slab behind the cards.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Starfield {
    /// The stars.
    pub stars: Vec<Star>,
}

impl Starfield {
    /// Scatter [`STAR_COUNT`] stars.
    pub fn generate(rng: &mut Rng64) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                position: Vec3::new(
                    (rng.next_f64_01() - 0.5) * 20.0,
                    (rng.next_f64_01() - 0.5) * 12.0,
                    -(rng.next_f64_01() * 14.0 + 2.0),
                ),
                size: rng.next_f64_01() * 0.025 + 0.006,
                color: STAR_PALETTE[rng.below(STAR_PALETTE.len())],
                opacity: rng.next_f64_01() * 0.5 + 0.15,
            })
            .collect();
        Self { stars }
    }
}

/// Light source variants.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LightKind {
    /// Uniform ambient term.
    Ambient,
    /// Point light with physical falloff.
    Point {
        /// Position in scene units.
        position: Vec3,
        /// Cut-off distance.
        distance: f64,
        /// Falloff exponent.
        decay: f64,
    },
}

/// One light of the rig.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Light {
    /// Shape of the light.
    #[serde(flatten)]
    pub kind: LightKind,
    /// Intensity.
    pub intensity: f64,
    /// Color.
    pub color: Color,
}

impl Light {
    const fn point(position: Vec3, intensity: f64, color: Color, distance: f64) -> Self {
        Self {
            kind: LightKind::Point {
                position,
                distance,
                decay: 2.0,
            },
            intensity,
            color,
        }
    }
}

/// Candle-warm ambient, a key light in front, two ember side lights, and a dim violet back light.
pub const LIGHT_RIG: [Light; 5] = [
    Light {
        kind: LightKind::Ambient,
        intensity: 2.2,
        color: Color::rgb8(0xc8, 0xa0, 0x60),
    },
    Light::point(Vec3::new(0.0, 0.0, 7.0), 3.0, Color::rgb8(0xe8, 0xd5, 0xb0), 14.0),
    Light::point(Vec3::new(-3.0, 1.0, 3.0), 3.0, Color::rgb8(0xff, 0x80, 0x40), 8.0),
    Light::point(Vec3::new(3.0, 1.0, 3.0), 3.0, Color::rgb8(0xe0, 0x60, 0x30), 8.0),
    Light::point(Vec3::new(0.0, 3.0, -1.0), 0.6, PLUM, 10.0),
];

/// Linear distance fog.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Fog {
    /// Fog color.
    pub color: Color,
    /// Start distance.
    pub near: f64,
    /// Full-fog distance.
    pub far: f64,
}

/// Perspective camera defaults; the z distance is then driven by the viewport width.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraRig {
    /// Vertical field of view in degrees.
    pub fov_deg: f64,
    /// Position before the first responsive update.
    pub initial_position: Vec3,
}

/// Card mesh dimensions and its per-card glow light.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardGeometry {
    /// Box width.
    pub width: f64,
    /// Box height.
    pub height: f64,
    /// Box depth.
    pub depth: f64,
    /// Color of the four edge faces.
    pub edge_color: Color,
    /// Glow light offset inside the card group.
    pub glow_offset: Vec3,
    /// Glow light cut-off distance; its color is the card's accent.
    pub glow_distance: f64,
}

/// Everything in the scene that is not a card.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stage {
    /// Background stars.
    pub starfield: Starfield,
    /// Light rig.
    pub lights: Vec<Light>,
    /// Distance fog.
    pub fog: Fog,
    /// Camera defaults.
    pub camera: CameraRig,
    /// Card mesh.
    pub card: CardGeometry,
    /// Top, middle and bottom stops of the page backdrop behind the canvas.
    pub backdrop: [Color; 3],
}

impl Stage {
    /// Build the stage, scattering stars from `rng`.
    pub fn new(rng: &mut Rng64) -> Self {
        Self {
            starfield: Starfield::generate(rng),
            lights: LIGHT_RIG.to_vec(),
            fog: Fog {
                color: NIGHT,
                near: 10.0,
                far: 22.0,
            },
            camera: CameraRig {
                fov_deg: 58.0,
                initial_position: Vec3::new(0.0, 0.0, 5.5),
            },
            card: CardGeometry {
                width: 2.0,
                height: 3.3,
                depth: 0.02,
                edge_color: Color::rgb8(0x12, 0x09, 0x1c),
                glow_offset: Vec3::new(0.0, 0.5, 0.0),
                glow_distance: 2.5,
            },
            backdrop: [
                NIGHT,
                Color::rgb8(0x0a, 0x08, 0x0f),
                Color::rgb8(0x0d, 0x0a, 0x07),
            ],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/stage.rs"]
mod tests;
