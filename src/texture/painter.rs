//! Immediate-mode 2D drawing over a `vello_cpu` render context.
//!
//! The painter keeps a canvas-style state stack of (transform, global alpha). Shapes are any
//! `kurbo::Shape`; they are flattened to paths in the painter's local space and drawn with the
//! current transform.

use std::sync::Arc;

use kurbo::Shape;

use crate::foundation::core::{Affine, BezPath, Point, Rect};
use crate::foundation::error::{TarotError, TarotResult};
use crate::texture::Texture;
use crate::texture::color::Color;
use crate::texture::text::{self, TextStyle};

const TOLERANCE: f64 = 0.1;

/// Multi-stop gradient in the painter's local space.
#[derive(Clone, Debug, PartialEq)]
pub enum Gradient {
    /// Linear ramp from `start` to `end`.
    Linear {
        /// Offset 0.
        start: Point,
        /// Offset 1.
        end: Point,
        /// `(offset, color)` pairs sorted by offset.
        stops: Vec<(f64, Color)>,
    },
    /// Two-circle radial ramp.
    Radial {
        /// Centre at offset 0.
        c0: Point,
        /// Radius at offset 0.
        r0: f64,
        /// Centre at offset 1.
        c1: Point,
        /// Radius at offset 1.
        r1: f64,
        /// `(offset, color)` pairs sorted by offset.
        stops: Vec<(f64, Color)>,
    },
}

impl Gradient {
    /// Linear gradient without stops.
    pub fn linear(start: Point, end: Point) -> Self {
        Self::Linear {
            start,
            end,
            stops: Vec::new(),
        }
    }

    /// Radial gradient without stops.
    pub fn radial(c0: Point, r0: f64, c1: Point, r1: f64) -> Self {
        Self::Radial {
            c0,
            r0,
            c1,
            r1,
            stops: Vec::new(),
        }
    }

    /// Add a stop. Stops at equal offsets keep insertion order.
    pub fn stop(mut self, offset: f64, color: Color) -> Self {
        let stops = match &mut self {
            Self::Linear { stops, .. } | Self::Radial { stops, .. } => stops,
        };
        let offset = offset.clamp(0.0, 1.0);
        let at = stops.partition_point(|(o, _)| *o <= offset);
        stops.insert(at, (offset, color));
        self
    }

    fn stops(&self) -> &[(f64, Color)] {
        match self {
            Self::Linear { stops, .. } | Self::Radial { stops, .. } => stops,
        }
    }

    fn color_at(&self, t: f64) -> Color {
        let stops = self.stops();
        let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
            return Color::TRANSPARENT;
        };
        if t <= first.0 {
            return first.1;
        }
        if t >= last.0 {
            return last.1;
        }
        for pair in stops.windows(2) {
            let (o0, c0) = pair[0];
            let (o1, c1) = pair[1];
            if t >= o0 && t < o1 {
                return c0.lerp(c1, (t - o0) / (o1 - o0));
            }
        }
        last.1
    }

    /// Gradient color at local point `p`.
    pub fn sample(&self, p: Point) -> Color {
        match self {
            Self::Linear { start, end, .. } => {
                let d = *end - *start;
                let len2 = d.hypot2();
                if len2 <= f64::EPSILON {
                    return Color::TRANSPARENT;
                }
                self.color_at((p - *start).dot(d) / len2)
            }
            Self::Radial { c0, r0, c1, r1, .. } => {
                match conical_t(*c0, *r0, *c1, *r1, p) {
                    Some(t) => self.color_at(t),
                    None => Color::TRANSPARENT,
                }
            }
        }
    }
}

/// Largest `t` with `|p - c(t)| = r(t)` and `r(t) >= 0`, where `c` and `r` interpolate the two
/// circles linearly.
fn conical_t(c0: Point, r0: f64, c1: Point, r1: f64, p: Point) -> Option<f64> {
    let cd = c1 - c0;
    let pd = p - c0;
    let dr = r1 - r0;
    let a = cd.hypot2() - dr * dr;
    let b = pd.dot(cd) + r0 * dr;
    let c = pd.hypot2() - r0 * r0;

    let valid = |t: f64| r0 + t * dr >= 0.0;
    if a.abs() < 1e-9 {
        if b.abs() < 1e-12 {
            return None;
        }
        let t = c / (2.0 * b);
        return valid(t).then_some(t);
    }
    let disc = b * b - a * c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let (t1, t2) = ((b + sq) / a, (b - sq) / a);
    let (hi, lo) = if t1 >= t2 { (t1, t2) } else { (t2, t1) };
    if valid(hi) {
        Some(hi)
    } else if valid(lo) {
        Some(lo)
    } else {
        None
    }
}

/// Circular arc path from `start` to `end` radians, clockwise on screen like the canvas API.
pub fn arc(center: Point, radius: f64, start: f64, end: f64) -> BezPath {
    let mut sweep = end - start;
    if sweep <= 0.0 {
        sweep += std::f64::consts::TAU;
    }
    let arc = kurbo::Arc::new(center, (radius, radius), start, sweep, 0.0);
    let mut path = BezPath::new();
    let mut first = true;
    for el in arc.path_elements(TOLERANCE) {
        match el {
            kurbo::PathEl::MoveTo(p) if !first => path.line_to(p),
            other => path.push(other),
        }
        first = false;
    }
    path
}

/// Polyline through `points`, optionally closed.
pub fn polyline(points: impl IntoIterator<Item = Point>, close: bool) -> BezPath {
    let mut path = BezPath::new();
    for (i, p) in points.into_iter().enumerate() {
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    if close {
        path.close_path();
    }
    path
}

#[derive(Clone, Copy, Debug)]
struct State {
    transform: Affine,
    alpha: f64,
}

/// 2D drawing context producing a [`Texture`].
pub struct Painter {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
    state: State,
    stack: Vec<State>,
    fonts: Arc<usvg::fontdb::Database>,
}

impl std::fmt::Debug for Painter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Painter")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("depth", &self.stack.len())
            .finish_non_exhaustive()
    }
}

impl Painter {
    /// Painter over a transparent `width`×`height` canvas using the system fonts.
    pub fn new(width: u32, height: u32) -> TarotResult<Self> {
        Self::with_fonts(width, height, text::system_fonts())
    }

    /// Painter using an explicit font database.
    pub fn with_fonts(
        width: u32,
        height: u32,
        fonts: Arc<usvg::fontdb::Database>,
    ) -> TarotResult<Self> {
        if width == 0 || height == 0 {
            return Err(TarotError::render("canvas dimensions must be > 0"));
        }
        let w: u16 = width
            .try_into()
            .map_err(|_| TarotError::render("canvas width exceeds u16"))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| TarotError::render("canvas height exceeds u16"))?;
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(w, h),
            width: w,
            height: h,
            state: State {
                transform: Affine::IDENTITY,
                alpha: 1.0,
            },
            stack: Vec::new(),
            fonts,
        })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> f64 {
        f64::from(self.width)
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> f64 {
        f64::from(self.height)
    }

    /// Push the current transform and alpha.
    pub fn save(&mut self) {
        self.stack.push(self.state);
    }

    /// Pop the last saved transform and alpha. Unbalanced calls are ignored.
    pub fn restore(&mut self) {
        if let Some(s) = self.stack.pop() {
            self.state = s;
        }
    }

    /// Run `f` between [`Painter::save`] and [`Painter::restore`].
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.save();
        let out = f(self);
        self.restore();
        out
    }

    /// Translate the local space.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.state.transform *= Affine::translate((dx, dy));
    }

    /// Rotate the local space by `angle` radians (clockwise on screen).
    pub fn rotate(&mut self, angle: f64) {
        self.state.transform *= Affine::rotate(angle);
    }

    /// Scale the local space.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.state.transform *= Affine::scale_non_uniform(sx, sy);
    }

    /// Current transform.
    pub fn transform(&self) -> Affine {
        self.state.transform
    }

    /// Set the global alpha applied to every subsequent draw.
    pub fn set_alpha(&mut self, alpha: f64) {
        self.state.alpha = alpha.clamp(0.0, 1.0);
    }

    /// Current global alpha.
    pub fn alpha(&self) -> f64 {
        self.state.alpha
    }

    fn prepare(&mut self) {
        self.ctx.set_transform(affine_to_cpu(self.state.transform));
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    }

    /// Fill `shape` with a solid color.
    pub fn fill(&mut self, shape: &impl Shape, color: Color) {
        let color = color.fade(self.state.alpha);
        if color.a <= 0.0 {
            return;
        }
        self.prepare();
        self.ctx.set_paint(color.to_cpu());
        self.ctx.fill_path(&bezpath_to_cpu(&shape.to_path(TOLERANCE)));
    }

    /// Stroke `shape` with a solid color and butt caps.
    pub fn stroke(&mut self, shape: &impl Shape, color: Color, width: f64) {
        let color = color.fade(self.state.alpha);
        if color.a <= 0.0 || width <= 0.0 {
            return;
        }
        self.prepare();
        self.ctx.set_paint(color.to_cpu());
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx
            .stroke_path(&bezpath_to_cpu(&shape.to_path(TOLERANCE)));
    }

    /// Fill `shape` with a gradient evaluated per pixel of the shape's bounding box.
    pub fn fill_gradient(&mut self, shape: &impl Shape, gradient: &Gradient) -> TarotResult<()> {
        let bbox = shape.bounding_box();
        let w = (bbox.width().ceil() as u32).max(1);
        let h = (bbox.height().ceil() as u32).max(1);
        let alpha = self.state.alpha;

        let mut bytes = vec![0u8; (w as usize) * (h as usize) * 4];
        for y in 0..h {
            for x in 0..w {
                let p = Point::new(
                    bbox.x0 + f64::from(x) + 0.5,
                    bbox.y0 + f64::from(y) + 0.5,
                );
                let c = gradient.sample(p).fade(alpha).to_rgba8_premul();
                let idx = ((y as usize) * (w as usize) + (x as usize)) * 4;
                bytes[idx..idx + 4].copy_from_slice(&[c.r, c.g, c.b, c.a]);
            }
        }
        let img = rgba_premul_to_image(&bytes, w, h)?;

        self.prepare();
        self.ctx.set_paint(img);
        self.ctx
            .set_paint_transform(affine_to_cpu(Affine::translate((bbox.x0, bbox.y0))));
        self.ctx.fill_path(&bezpath_to_cpu(&shape.to_path(TOLERANCE)));
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(())
    }

    /// Soft halo around a filled disc, standing in for a canvas shadow blur.
    pub fn glow_disc(
        &mut self,
        center: Point,
        radius: f64,
        blur: f64,
        color: Color,
    ) -> TarotResult<()> {
        let outer = radius + blur;
        if outer <= 0.0 {
            return Ok(());
        }
        let g = Gradient::radial(center, 0.0, center, outer)
            .stop(0.0, color.fade(0.55))
            .stop(radius / outer, color.fade(0.45))
            .stop(1.0, color.fade(0.0));
        self.fill_gradient(&kurbo::Circle::new(center, outer), &g)
    }

    /// Soft halo straddling a circle outline.
    pub fn glow_ring(
        &mut self,
        center: Point,
        radius: f64,
        blur: f64,
        color: Color,
    ) -> TarotResult<()> {
        let outer = radius + blur;
        let inner = (radius - blur).max(0.0);
        if outer <= 0.0 {
            return Ok(());
        }
        let g = Gradient::radial(center, 0.0, center, outer)
            .stop(inner / outer, color.fade(0.0))
            .stop(radius / outer, color.fade(0.4))
            .stop(1.0, color.fade(0.0));
        self.fill_gradient(&kurbo::Circle::new(center, outer), &g)
    }

    /// Halo along an arbitrary outline, built from widening translucent strokes.
    pub fn glow_stroke(&mut self, shape: &impl Shape, width: f64, blur: f64, color: Color) {
        const PASSES: [(f64, f64); 3] = [(1.0, 0.06), (0.6, 0.1), (0.3, 0.16)];
        for (spread, a) in PASSES {
            self.stroke(shape, color.fade(a), width + blur * spread);
        }
    }

    /// Draw `text` centred on `at`.
    pub fn text(&mut self, text: &str, at: Point, style: &TextStyle) -> TarotResult<()> {
        let style = TextStyle {
            color: style.color.fade(self.state.alpha),
            ..style.clone()
        };
        let det = self.state.transform.determinant().abs();
        let scale = det.sqrt().clamp(0.25, 4.0);
        let Some(raster) = text::rasterize(&self.fonts, text, &style, scale)? else {
            return Ok(());
        };

        let img = rgba_premul_to_image(&raster.data, raster.width, raster.height)?;
        let placement = self.state.transform
            * Affine::translate((at.x - raster.box_w / 2.0, at.y - raster.box_h / 2.0))
            * Affine::scale(1.0 / scale);
        self.ctx.set_transform(affine_to_cpu(placement));
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(img);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(raster.width),
            f64::from(raster.height),
        ));
        Ok(())
    }

    /// Blit a premultiplied texture into `dst` (local space), with the global alpha as opacity.
    pub fn draw_texture(&mut self, texture: &Texture, dst: Rect) -> TarotResult<()> {
        let img = rgba_premul_to_image(&texture.data, texture.width, texture.height)?;
        let sx = dst.width() / f64::from(texture.width.max(1));
        let sy = dst.height() / f64::from(texture.height.max(1));
        self.ctx.set_transform(affine_to_cpu(
            self.state.transform
                * Affine::translate((dst.x0, dst.y0))
                * Affine::scale_non_uniform(sx, sy),
        ));
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(img);
        let opacity = self.state.alpha as f32;
        if opacity < 1.0 {
            self.ctx.push_opacity_layer(opacity);
        }
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(texture.width),
            f64::from(texture.height),
        ));
        if opacity < 1.0 {
            self.ctx.pop_layer();
        }
        Ok(())
    }

    /// Rasterize everything drawn so far.
    pub fn finish(mut self) -> TarotResult<Texture> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        Ok(Texture {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
        })
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> TarotResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| TarotError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| TarotError::render("pixmap height exceeds u16"))?;
    if bytes.len() != (width as usize) * (height as usize) * 4 {
        return Err(TarotError::render("pixmap byte len mismatch"));
    }
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| {
            vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]])
        })
        .collect();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true))
}

fn rgba_premul_to_image(bytes: &[u8], width: u32, height: u32) -> TarotResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(bytes, width, height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/texture/painter.rs"]
mod tests;
