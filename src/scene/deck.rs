//! The three cards, their fixed attributes and their slot assignment.

use crate::content::translations::Translations;
use crate::foundation::core::Vec3;
use crate::foundation::error::{TarotError, TarotResult};
use crate::foundation::math::{Rng64, shuffle};

/// Identity of a card, which is also the overlay section it opens.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CardId {
    /// Biography.
    About,
    /// Education.
    Formations,
    /// Contact details.
    Contact,
}

impl CardId {
    /// Canonical deck order.
    pub const ALL: [CardId; 3] = [CardId::About, CardId::Formations, CardId::Contact];

    /// Stable string key.
    pub fn key(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Formations => "formations",
            Self::Contact => "contact",
        }
    }

    /// Inverse of [`CardId::key`].
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }

    /// Glyph printed on the card and in the panel.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::About => "☽",
            Self::Formations => "✦",
            Self::Contact => "✉",
        }
    }

    /// Accent color as `#RRGGBB`.
    pub fn accent(self) -> &'static str {
        match self {
            Self::About => "#6b4d7a",
            Self::Formations => "#d4a574",
            Self::Contact => "#7a9578",
        }
    }

    /// Position in [`CardId::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::About => 0,
            Self::Formations => 1,
            Self::Contact => 2,
        }
    }

    /// Localized label, which is the title of the section the card opens.
    pub fn label(self, t: &Translations) -> &str {
        match self {
            Self::About => &t.about.title,
            Self::Formations => &t.formations.title,
            Self::Contact => &t.contact.title,
        }
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for CardId {
    type Err = TarotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| {
            TarotError::validation(format!(
                "unknown section \"{s}\" (expected about, formations or contact)"
            ))
        })
    }
}

/// A place on the table a card is dealt to.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Slot {
    /// Resting position.
    pub position: Vec3,
    /// Resting y-rotation in radians.
    pub rotation_y: f64,
}

/// Left, centre, right.
pub const SLOT_POOL: [Slot; 3] = [
    Slot {
        position: Vec3::new(-3.1, 0.0, -0.06),
        rotation_y: -0.06,
    },
    Slot {
        position: Vec3::new(0.0, 0.0, 0.15),
        rotation_y: 0.0,
    },
    Slot {
        position: Vec3::new(3.1, 0.0, -0.06),
        rotation_y: 0.06,
    },
];

/// Everything fixed about a card for the lifetime of a scene mount.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardDefinition {
    /// Identity.
    pub id: CardId,
    /// Glyph.
    pub symbol: String,
    /// Label in the current language.
    pub label: String,
    /// Accent color.
    pub accent: String,
    /// Assigned slot.
    pub slot: Slot,
}

/// The dealt cards, in canonical order, with a random slot permutation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Deck {
    cards: Vec<CardDefinition>,
}

impl Deck {
    /// Deal the cards onto a permutation of [`SLOT_POOL`] chosen by `rng`.
    pub fn deal(rng: &mut Rng64, t: &Translations) -> Self {
        let mut slots = SLOT_POOL;
        shuffle(&mut slots, rng);
        let cards = CardId::ALL
            .into_iter()
            .zip(slots)
            .map(|(id, slot)| CardDefinition {
                id,
                symbol: id.symbol().to_owned(),
                label: id.label(t).to_owned(),
                accent: id.accent().to_owned(),
                slot,
            })
            .collect();
        Self { cards }
    }

    /// Cards in canonical order.
    pub fn cards(&self) -> &[CardDefinition] {
        &self.cards
    }

    /// Definition of `id`.
    pub fn get(&self, id: CardId) -> TarotResult<&CardDefinition> {
        self.cards
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| TarotError::validation(format!("card '{id}' is not in the deck")))
    }

    /// Re-derive labels for a new language; slots stay where they are.
    pub fn relabel(&mut self, t: &Translations) {
        for card in &mut self.cards {
            card.label = card.id.label(t).to_owned();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/deck.rs"]
mod tests;
