//! Single-line text rasterized through an SVG `<text>` element.
//!
//! Glyph coverage comes from the host's system fonts. When no installed font covers a glyph the
//! element renders nothing, which the painter treats as an empty draw rather than an error.

use std::sync::{Arc, OnceLock};

use crate::foundation::error::{TarotError, TarotResult};
use crate::texture::color::Color;

/// Font settings for one text draw. The anchor is always the centre of the line box.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// CSS font-family list.
    pub family: &'static str,
    /// Size in canvas pixels.
    pub size: f64,
    /// CSS weight (400 regular, 700 bold).
    pub weight: u16,
    /// Italic face.
    pub italic: bool,
    /// Fill color.
    pub color: Color,
}

const SERIF: &str = "Georgia, 'DejaVu Serif', 'Noto Serif', serif";
const MONO: &str = "'DejaVu Sans Mono', 'Noto Sans Mono', monospace";

impl TextStyle {
    /// Regular serif text.
    pub fn serif(size: f64, color: Color) -> Self {
        Self {
            family: SERIF,
            size,
            weight: 400,
            italic: false,
            color,
        }
    }

    /// Regular monospace text.
    pub fn mono(size: f64, color: Color) -> Self {
        Self {
            family: MONO,
            ..Self::serif(size, color)
        }
    }

    /// Bold variant.
    pub fn bold(self) -> Self {
        Self {
            weight: 700,
            ..self
        }
    }

    /// Italic variant.
    pub fn italic(self) -> Self {
        Self {
            italic: true,
            ..self
        }
    }
}

/// Rasterized text, premultiplied RGBA8.
pub(crate) struct TextRaster {
    pub(crate) data: Vec<u8>,
    pub(crate) width: u32,
    pub(crate) height: u32,
    /// Line box size in canvas units (the raster is `box * scale`).
    pub(crate) box_w: f64,
    pub(crate) box_h: f64,
}

/// System font database, loaded once per process.
pub(crate) fn system_fonts() -> Arc<usvg::fontdb::Database> {
    static FONTS: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    FONTS
        .get_or_init(|| {
            let mut db = usvg::fontdb::Database::new();
            db.load_system_fonts();
            tracing::debug!(faces = db.len(), "loaded system fonts");
            Arc::new(db)
        })
        .clone()
}

/// Rasterize `text` at `scale` device pixels per canvas unit.
///
/// Returns `None` when nothing was drawn (blank text or no covering font).
pub(crate) fn rasterize(
    fonts: &Arc<usvg::fontdb::Database>,
    text: &str,
    style: &TextStyle,
    scale: f64,
) -> TarotResult<Option<TextRaster>> {
    if text.trim().is_empty() || style.size <= 0.0 || style.color.a <= 0.0 {
        return Ok(None);
    }

    let chars = text.chars().count() as f64;
    let box_w = (chars * style.size * 0.8 + style.size * 2.0).ceil();
    let box_h = (style.size * 2.0).ceil();
    let width = ((box_w * scale).ceil() as u32).max(1);
    let height = ((box_h * scale).ceil() as u32).max(1);

    let svg = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            r#"<text x="{cx}" y="{cy}" font-family="{family}" font-size="{size}" font-weight="{weight}" "#,
            r#"font-style="{style}" text-anchor="middle" dominant-baseline="central" "#,
            r#"fill="{fill}" fill-opacity="{alpha}" xml:space="preserve">{text}</text></svg>"#
        ),
        w = box_w,
        h = box_h,
        cx = box_w / 2.0,
        cy = box_h / 2.0,
        family = style.family,
        size = style.size,
        weight = style.weight,
        style = if style.italic { "italic" } else { "normal" },
        fill = style.color.to_hex_rgb(),
        alpha = style.color.a.clamp(0.0, 1.0),
        text = escape_xml(text),
    );

    let opts = usvg::Options {
        fontdb: fonts.clone(),
        ..usvg::Options::default()
    };
    let tree = usvg::Tree::from_str(&svg, &opts)
        .map_err(|e| TarotError::render(format!("text svg: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| TarotError::render("failed to allocate text pixmap"))?;
    let xform = resvg::tiny_skia::Transform::from_scale(scale as f32, scale as f32);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let data = pixmap.take();
    if data.chunks_exact(4).all(|px| px[3] == 0) {
        return Ok(None);
    }
    Ok(Some(TextRaster {
        data,
        width,
        height,
        box_w,
        box_h,
    }))
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
