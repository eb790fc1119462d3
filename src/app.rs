//! Root owner of the interactive state.
//!
//! Event methods mutate state between ticks; [`App::tick`] is the render callback and returns
//! everything a host draws for the frame.

use crate::config::SceneConfig;
use crate::content::language::LanguageContext;
use crate::content::translations::Language;
use crate::foundation::core::{Point, Viewport};
use crate::foundation::error::TarotResult;
use crate::foundation::math::Rng64;
use crate::overlay::cursor::CursorTrail;
use crate::overlay::panel::PanelView;
use crate::overlay::switcher::{ParticleBurst, SwitchView};
use crate::scene::deck::CardId;
use crate::scene::driver::{Scene, SceneFrame};
use crate::scene::state::AppState;

const BURST_STREAM: u64 = 4;
const TRAIL_STREAM: u64 = 5;

/// Everything a host needs to draw one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AppFrame {
    /// Host clock in milliseconds since mount.
    pub now_ms: f64,
    /// Card visuals.
    pub scene: SceneFrame,
    /// Header, footer and modal.
    pub panel: PanelView,
    /// Language toggle.
    pub switch: SwitchView,
    /// Language attribute of the host document.
    pub document_lang: String,
    /// Bursts still on screen.
    pub bursts: Vec<ParticleBurst>,
}

/// The portfolio application.
#[derive(Debug)]
pub struct App {
    language: LanguageContext,
    state: AppState,
    scene: Scene,
    bursts: Vec<ParticleBurst>,
    burst_rng: Rng64,
    trail: CursorTrail,
    now_ms: f64,
}

impl App {
    /// Mount the scene in the context's current language.
    pub fn new(config: &SceneConfig, language: LanguageContext) -> TarotResult<Self> {
        config.validate()?;
        let seed = config.resolve_seed();
        let scene = Scene::mount(seed, language.t(), config.scene_opts())?;
        let root = Rng64::new(seed);
        Ok(Self {
            language,
            state: AppState::new(),
            scene,
            bursts: Vec::new(),
            burst_rng: root.fork(BURST_STREAM),
            trail: CursorTrail::new(root.fork(TRAIL_STREAM).next_u64()),
            now_ms: 0.0,
        })
    }

    /// Interaction state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Mounted scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Language context.
    pub fn language(&self) -> &LanguageContext {
        &self.language
    }

    /// Cursor sparkles.
    pub fn trail(&self) -> &CursorTrail {
        &self.trail
    }

    /// Pointer entered a card.
    pub fn pointer_over(&mut self, id: CardId) {
        self.state.pointer_over(id);
    }

    /// Pointer left a card.
    pub fn pointer_out(&mut self, id: CardId) {
        self.state.pointer_out(id);
    }

    /// Pointer moved anywhere on the page.
    pub fn pointer_move(&mut self, at: Point) {
        self.trail.pointer_move(at);
    }

    /// Card clicked. Returns the open section afterwards.
    pub fn click(&mut self, id: CardId) -> Option<CardId> {
        self.state.select(id)
    }

    /// Close button or backdrop clicked.
    pub fn close(&mut self) {
        self.state.close();
    }

    /// Switch to `language`, relabel the cards and emit a burst.
    ///
    /// The switch and relabel happen even when persisting the preference fails; that error is
    /// returned afterwards.
    pub fn set_language(&mut self, language: Language) -> TarotResult<()> {
        let persisted = self.language.set_language(language);
        self.scene.relabel(self.language.t())?;
        self.bursts
            .push(ParticleBurst::spawn(&mut self.burst_rng, self.now_ms));
        persisted
    }

    /// Flip between French and English. Returns the new language.
    pub fn toggle_language(&mut self) -> TarotResult<Language> {
        let next = self.language.language().toggled();
        self.set_language(next)?;
        Ok(next)
    }

    /// Advance the host clock by `dt` seconds and produce the frame.
    pub fn tick(&mut self, dt: f64, viewport: Viewport) -> AppFrame {
        if dt.is_finite() && dt > 0.0 {
            self.now_ms += dt * 1000.0;
        }
        let now = self.now_ms;
        self.bursts.retain(|b| !b.is_expired(now));
        self.trail.step();

        let t = self.language.t();
        AppFrame {
            now_ms: now,
            scene: self.scene.tick(dt, viewport, &self.state),
            panel: PanelView::project(self.state.active(), t),
            switch: SwitchView::for_language(self.language.language()),
            document_lang: self.language.document_lang().to_owned(),
            bursts: self.bursts.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/app.rs"]
mod tests;
