//! Viewport-width driven scaling of the card group and camera distance.

/// Upper bounds (exclusive) of the scale tiers and the scale applied below each.
const SCALE_TIERS: [(u32, f64); 4] = [(380, 0.42), (480, 0.52), (680, 0.68), (900, 0.82)];
const CAMERA_TIERS: [(u32, f64); 3] = [(380, 11.0), (480, 9.5), (768, 8.5)];

/// Uniform scale of the card group for a viewport `width` in pixels.
pub fn scale_for_width(width: u32) -> f64 {
    tier(&SCALE_TIERS, width, 1.0)
}

/// Camera distance from the card plane for a viewport `width` in pixels.
pub fn camera_distance_for_width(width: u32) -> f64 {
    tier(&CAMERA_TIERS, width, 7.5)
}

fn tier(tiers: &[(u32, f64)], width: u32, fallback: f64) -> f64 {
    tiers
        .iter()
        .find(|(upper, _)| width < *upper)
        .map_or(fallback, |(_, v)| *v)
}

/// Values derived from the viewport width.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResponsiveLayout {
    /// Width the layout was computed for.
    pub width: u32,
    /// Card group scale.
    pub scale: f64,
    /// Camera z distance.
    pub camera_distance: f64,
}

impl ResponsiveLayout {
    /// Layout for `width`.
    pub fn for_width(width: u32) -> Self {
        Self {
            width,
            scale: scale_for_width(width),
            camera_distance: camera_distance_for_width(width),
        }
    }
}

/// Re-evaluates the layout every frame and reports changes only.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResponsiveTracker {
    current: Option<ResponsiveLayout>,
}

impl ResponsiveTracker {
    /// Tracker that has not seen any width yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this frame's width. Returns the new layout when the width changed since the last
    /// call (always on the first call).
    pub fn update(&mut self, width: u32) -> Option<ResponsiveLayout> {
        if self.current.is_some_and(|c| c.width == width) {
            return None;
        }
        let next = ResponsiveLayout::for_width(width);
        if self.current.is_none_or(|c| c.scale != next.scale) {
            tracing::debug!(
                width,
                scale = next.scale,
                camera = next.camera_distance,
                "responsive tier"
            );
        }
        self.current = Some(next);
        Some(next)
    }

    /// Last layout reported, if any.
    pub fn current(&self) -> Option<ResponsiveLayout> {
        self.current
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layout.rs"]
mod tests;
