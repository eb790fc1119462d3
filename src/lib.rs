//! Engine of a bilingual 3D tarot-card portfolio scene.
//!
//! The crate produces plain data for a host renderer:
//!
//! - procedural 512×896 card-face textures ([`CardTextures`], [`generate_front`],
//!   [`generate_back`]) painted with a CPU rasterizer
//! - a frame-rate independent per-card animation driver ([`CardAnimState::advance`]) and the
//!   [`Scene`] that owns the dealt deck, the [`Stage`] and the responsive layout
//! - the [`LanguageContext`] with its persisted preference, and the overlay [`PanelView`]
//!
//! [`App`] ties them together: event methods mutate its state and [`App::tick`] returns an
//! [`AppFrame`] per rendered frame.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
/// Application root.
pub mod app;
/// JSON scene configuration.
pub mod config;
pub(crate) mod content;
pub(crate) mod overlay;
pub(crate) mod scene;
/// Procedural card-face textures, the painter and its motif library.
pub mod texture;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Point, Rect, Rgba8Premul, Vec2, Vec3, Viewport,
};
pub use crate::foundation::error::{TarotError, TarotResult};
pub use crate::foundation::math::{Rng64, damp, damp_factor, entropy_seed, lerp, shuffle};

pub use crate::animation::card::{
    AnimationTuning, CardAnimState, CardInputs, CardVisuals, Channel, DEAL_ORIGIN,
};
pub use crate::animation::ease::Ease;
pub use crate::app::{App, AppFrame};
pub use crate::config::SceneConfig;
pub use crate::content::language::{LANGUAGE_KEY, LanguageContext};
pub use crate::content::prefs::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use crate::content::translations::{
    About, Contact, CvLink, Degree, Dictionary, Experiences, Footer, Formations, Hero, Job,
    Language, SkillGroup, Skills, Translations,
};
pub use crate::overlay::cursor::{CursorTrail, TrailParticle};
pub use crate::overlay::panel::{
    ContactLink, FooterView, HeaderView, PanelContent, PanelView, SkillCard,
};
pub use crate::overlay::switcher::{
    BURST_LIFETIME_MS, BURST_PARTICLES, BurstParticle, ParticleBurst, SwitchView,
};
pub use crate::scene::deck::{CardDefinition, CardId, Deck, SLOT_POOL, Slot};
pub use crate::scene::driver::{CardFrame, CardInstance, Scene, SceneFrame, SceneOpts};
pub use crate::scene::layout::{
    ResponsiveLayout, ResponsiveTracker, camera_distance_for_width, scale_for_width,
};
pub use crate::scene::stage::{
    CameraRig, CardGeometry, Fog, LIGHT_RIG, Light, LightKind, STAR_COUNT, Star, Starfield, Stage,
};
pub use crate::scene::state::AppState;
pub use crate::texture::color::Color;
pub use crate::texture::illustration::{Illustrator, illustrator_for};
pub use crate::texture::painter::{Gradient, Painter, arc, polyline};
pub use crate::texture::text::TextStyle;
pub use crate::texture::{
    CARD_CANVAS, CardTextures, FaceSpec, TEXTURE_HEIGHT, TEXTURE_WIDTH, Texture, generate_back,
    generate_front,
};
