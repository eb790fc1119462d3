//! Procedural card-face textures.
//!
//! Both faces are painted onto a 512×896 canvas. Every random element draws from a [`Rng64`]
//! seeded by the caller, so the same seed always reproduces the same pixels.

use std::path::Path;

use crate::foundation::core::Canvas;
use crate::foundation::error::{TarotError, TarotResult};
use crate::foundation::math::Rng64;
use crate::scene::deck::{CardDefinition, CardId};
use crate::texture::color::Color;
use crate::texture::painter::Painter;

pub(crate) mod back;
pub mod color;
pub(crate) mod front;
pub(crate) mod illustration;
pub mod motifs;
pub mod painter;
pub(crate) mod text;

/// Texture width in pixels.
pub const TEXTURE_WIDTH: u32 = 512;
/// Texture height in pixels.
pub const TEXTURE_HEIGHT: u32 = 896;

/// Card canvas size.
pub const CARD_CANVAS: Canvas = Canvas {
    width: TEXTURE_WIDTH,
    height: TEXTURE_HEIGHT,
};

/// Premultiplied RGBA8 bitmap.
#[derive(Clone, PartialEq, Eq)]
pub struct Texture {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major premultiplied RGBA8 bytes.
    pub data: Vec<u8>,
}

impl std::fmt::Debug for Texture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Texture")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl Texture {
    /// `true` when no pixel has any coverage.
    pub fn is_blank(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 0)
    }

    /// Un-premultiplied copy as an `image` buffer.
    pub fn to_rgba_image(&self) -> TarotResult<image::RgbaImage> {
        let mut straight = self.data.clone();
        for px in straight.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 {
                px[..3].fill(0);
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        image::RgbaImage::from_raw(self.width, self.height, straight)
            .ok_or_else(|| TarotError::render("texture byte len mismatch"))
    }

    /// Write the texture as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> TarotResult<()> {
        let path = path.as_ref();
        let img = self.to_rgba_image()?;
        image::save_buffer_with_format(
            path,
            img.as_raw(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| TarotError::storage(format!("write png '{}': {e}", path.display())))
    }
}

/// What the front face of a card shows.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FaceSpec {
    /// Card key; selects the palette, numeral, subtitle and illustration.
    pub key: String,
    /// Title printed in the lower panel (upper-cased when drawn).
    pub label: String,
    /// Glyph drawn as the faint background symbol.
    pub symbol: String,
    /// Accent color.
    pub accent: Color,
}

impl FaceSpec {
    /// Face of a dealt card.
    pub fn for_card(def: &CardDefinition) -> TarotResult<Self> {
        Ok(Self {
            key: def.id.key().to_owned(),
            label: def.label.clone(),
            symbol: def.symbol.clone(),
            accent: Color::hex(&def.accent)?,
        })
    }

    /// Known card this face belongs to, if any.
    pub fn card(&self) -> Option<CardId> {
        CardId::from_key(&self.key)
    }

    /// Roman numeral printed at the top; unknown keys read `I`.
    pub fn numeral(&self) -> &'static str {
        match self.card() {
            Some(CardId::Formations) => "II",
            Some(CardId::Contact) => "III",
            Some(CardId::About) | None => "I",
        }
    }

    /// Italic line under the title; empty for unknown keys.
    pub fn subtitle(&self) -> &'static str {
        match self.card() {
            Some(CardId::About) => "☽  the self  ☽",
            Some(CardId::Formations) => "✦  the path  ✦",
            Some(CardId::Contact) => "✉  the thread  ✉",
            None => "",
        }
    }
}

/// Both faces of one card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardTextures {
    /// Front face.
    pub front: Texture,
    /// Back face.
    pub back: Texture,
}

impl CardTextures {
    /// Paint both faces. The faces draw from independent streams of `seed`.
    #[tracing::instrument(skip(spec), fields(card = %spec.key))]
    pub fn generate(spec: &FaceSpec, seed: u64) -> TarotResult<Self> {
        Ok(Self {
            front: generate_front(spec, front_seed(seed))?,
            back: generate_back(Rng64::new(seed).fork(2).next_u64())?,
        })
    }

    /// Repaint the front only, e.g. after the label changed language. The back is untouched.
    pub fn regenerate_front(&mut self, spec: &FaceSpec, seed: u64) -> TarotResult<()> {
        self.front = generate_front(spec, front_seed(seed))?;
        Ok(())
    }
}

fn front_seed(seed: u64) -> u64 {
    Rng64::new(seed).fork(1).next_u64()
}

/// Paint the front face.
pub fn generate_front(spec: &FaceSpec, seed: u64) -> TarotResult<Texture> {
    let mut p = Painter::new(TEXTURE_WIDTH, TEXTURE_HEIGHT)?;
    front::paint(&mut p, spec, &mut Rng64::new(seed))?;
    p.finish()
}

/// Paint the back face shared by every card.
pub fn generate_back(seed: u64) -> TarotResult<Texture> {
    let mut p = Painter::new(TEXTURE_WIDTH, TEXTURE_HEIGHT)?;
    back::paint(&mut p, &mut Rng64::new(seed))?;
    p.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/texture/mod.rs"]
mod tests;
