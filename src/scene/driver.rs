use crate::animation::card::{AnimationTuning, CardAnimState, CardVisuals};
use crate::content::translations::Translations;
use crate::foundation::core::Viewport;
use crate::foundation::error::{TarotError, TarotResult};
use crate::foundation::math::Rng64;
use crate::scene::deck::{CardDefinition, CardId, Deck};
use crate::scene::layout::{ResponsiveLayout, ResponsiveTracker};
use crate::scene::stage::Stage;
use crate::scene::state::AppState;
use crate::texture::{CardTextures, FaceSpec};

const DECK_STREAM: u64 = 1;
const STAGE_STREAM: u64 = 2;
const TEXTURE_STREAM: u64 = 3;

/// Options controlling what a mounted [`Scene`] prepares up front.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneOpts {
    /// Paint both faces of every card at mount. Headless simulations turn this off.
    pub textures: bool,
    /// Animation timing.
    pub tuning: AnimationTuning,
}

impl Default for SceneOpts {
    fn default() -> Self {
        Self {
            textures: true,
            tuning: AnimationTuning::default(),
        }
    }
}

/// One mounted card.
#[derive(Clone, Debug)]
pub struct CardInstance {
    /// Static definition.
    pub def: CardDefinition,
    /// Animation state, advanced every tick.
    pub anim: CardAnimState,
    /// Entrance delay derived from the card's deck position.
    pub deal_delay_s: f64,
    /// Painted faces, when the scene was mounted with textures.
    pub textures: Option<CardTextures>,
    texture_seed: u64,
}

/// Per-card output of one tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardFrame {
    /// Card.
    pub id: CardId,
    /// Localized label printed on the front.
    pub label: String,
    /// The pointer is over this card.
    pub hovered: bool,
    /// This card is the open section.
    pub active: bool,
    /// Linear deal progress.
    pub deal: f64,
    /// Values for the host renderer.
    pub visuals: CardVisuals,
}

/// Output of one tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneFrame {
    /// Zero-based tick index.
    pub frame: u64,
    /// Seconds since mount.
    pub time_s: f64,
    /// Current responsive layout.
    pub layout: ResponsiveLayout,
    /// `true` when the layout changed on this tick.
    pub layout_changed: bool,
    /// Cards in canonical order.
    pub cards: Vec<CardFrame>,
}

/// The mounted card scene.
///
/// Mounting deals the deck, dresses the stage and optionally paints the textures, all from one
/// seed. Ticking advances every card towards the targets implied by the [`AppState`].
#[derive(Clone, Debug)]
pub struct Scene {
    seed: u64,
    deck: Deck,
    cards: Vec<CardInstance>,
    stage: Stage,
    tracker: ResponsiveTracker,
    opts: SceneOpts,
    frame: u64,
    time_s: f64,
}

impl Scene {
    /// Mount the scene.
    #[tracing::instrument(skip(t, opts), fields(textures = opts.textures))]
    pub fn mount(seed: u64, t: &Translations, opts: SceneOpts) -> TarotResult<Self> {
        opts.tuning.validate()?;
        let root = Rng64::new(seed);
        let deck = Deck::deal(&mut root.fork(DECK_STREAM), t);
        let stage = Stage::new(&mut root.fork(STAGE_STREAM));
        let mut texture_rng = root.fork(TEXTURE_STREAM);

        let cards = deck
            .cards()
            .iter()
            .enumerate()
            .map(|(i, def)| -> TarotResult<CardInstance> {
                let texture_seed = texture_rng.next_u64();
                let textures = if opts.textures {
                    Some(CardTextures::generate(&FaceSpec::for_card(def)?, texture_seed)?)
                } else {
                    None
                };
                Ok(CardInstance {
                    def: def.clone(),
                    anim: CardAnimState::default(),
                    deal_delay_s: opts.tuning.deal_delay(i),
                    textures,
                    texture_seed,
                })
            })
            .collect::<TarotResult<Vec<_>>>()?;

        tracing::debug!(cards = cards.len(), "scene mounted");
        Ok(Self {
            seed,
            deck,
            cards,
            stage,
            tracker: ResponsiveTracker::new(),
            opts,
            frame: 0,
            time_s: 0.0,
        })
    }

    /// Seed the scene was mounted with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Dealt deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Mounted cards in canonical order.
    pub fn cards(&self) -> &[CardInstance] {
        &self.cards
    }

    /// Mounted card `id`.
    pub fn card(&self, id: CardId) -> TarotResult<&CardInstance> {
        self.cards
            .iter()
            .find(|c| c.def.id == id)
            .ok_or_else(|| TarotError::validation(format!("card '{id}' is not mounted")))
    }

    /// Starfield, lights and camera.
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Animation timing in use.
    pub fn tuning(&self) -> &AnimationTuning {
        &self.opts.tuning
    }

    /// Re-derive labels after a language change and repaint the fronts that carry them.
    pub fn relabel(&mut self, t: &Translations) -> TarotResult<()> {
        self.deck.relabel(t);
        for (card, def) in self.cards.iter_mut().zip(self.deck.cards()) {
            card.def.label.clone_from(&def.label);
            if let Some(textures) = card.textures.as_mut() {
                textures.regenerate_front(&FaceSpec::for_card(def)?, card.texture_seed)?;
            }
        }
        Ok(())
    }

    /// Advance every card by `dt` seconds and report the resulting frame.
    pub fn tick(&mut self, dt: f64, viewport: Viewport, state: &AppState) -> SceneFrame {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let changed = self.tracker.update(viewport.width);
        let layout = changed.unwrap_or_else(|| ResponsiveLayout::for_width(viewport.width));
        let tuning = self.opts.tuning;

        let cards = self
            .cards
            .iter_mut()
            .map(|card| {
                let id = card.def.id;
                let inputs = state.inputs_for(id, card.deal_delay_s);
                card.anim = card.anim.advance(&inputs, dt, &tuning);
                CardFrame {
                    id,
                    label: card.def.label.clone(),
                    hovered: inputs.hovered,
                    active: inputs.active,
                    deal: card.anim.deal,
                    visuals: card
                        .anim
                        .visuals(card.def.slot.position, card.def.slot.rotation_y, &tuning),
                }
            })
            .collect();

        let out = SceneFrame {
            frame: self.frame,
            time_s: self.time_s + dt,
            layout,
            layout_changed: changed.is_some(),
            cards,
        };
        self.frame += 1;
        self.time_s += dt;
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/driver.rs"]
mod tests;
