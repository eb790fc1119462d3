//! Interaction state shared by the scene and the overlay.

use crate::animation::card::CardInputs;
use crate::scene::deck::CardId;

/// Active section and hover ownership.
///
/// At most one card is active and at most one is hovered at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AppState {
    active: Option<CardId>,
    hovered: Option<CardId>,
}

impl AppState {
    /// Nothing selected, nothing hovered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open section, if any.
    pub fn active(&self) -> Option<CardId> {
        self.active
    }

    /// Card under the pointer, if any.
    pub fn hovered(&self) -> Option<CardId> {
        self.hovered
    }

    /// Click on `id`: selects it, or closes it when it was already the active section.
    pub fn select(&mut self, id: CardId) -> Option<CardId> {
        self.active = if self.active == Some(id) { None } else { Some(id) };
        tracing::debug!(clicked = %id, active = ?self.active, "selection");
        self.active
    }

    /// Close the panel.
    pub fn close(&mut self) {
        if self.active.take().is_some() {
            tracing::debug!("selection closed");
        }
    }

    /// The pointer entered `id`; it takes hover from any other card.
    pub fn pointer_over(&mut self, id: CardId) {
        self.hovered = Some(id);
    }

    /// The pointer left `id`. Ignored when another card already owns the hover.
    pub fn pointer_out(&mut self, id: CardId) {
        if self.hovered == Some(id) {
            self.hovered = None;
        }
    }

    /// Per-frame animation inputs of `id`.
    pub fn inputs_for(&self, id: CardId, deal_delay_s: f64) -> CardInputs {
        CardInputs {
            hovered: self.hovered == Some(id),
            active: self.active == Some(id),
            any_active: self.active.is_some(),
            deal_delay_s,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/state.rs"]
mod tests;
