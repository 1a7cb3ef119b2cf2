//! Raster emitter: redraws the lockup geometry into a transparent `vello_cpu` surface.

use vello_cpu::kurbo::Shape as _;

use crate::assets::fonts::{FontCandidates, FontRole};
use crate::assets::text::TextFace;
use crate::foundation::core::{Affine, GOLD, MUTED_WHITE, Point, Rgba8, WHITE};
use crate::foundation::error::{BrandError, BrandResult};
use crate::foundation::math::round_px;
use crate::geometry::lockup::{DesignFit, LockupLayout, SUBTITLE, TITLE_SEGMENTS, TextSegment};
use crate::geometry::mark::MarkGeometry;
use crate::layout::tracking::{LineLayout, TextMeasure, layout_centered};
use crate::render::frame::FrameRGBA;

/// Smallest font size used on the raster surface, in pixels.
pub const MIN_FONT_PX: f64 = 12.0;

/// Options for the raster emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterOpts {
    pub width: u32,
    pub height: u32,
}

impl Default for RasterOpts {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1400,
        }
    }
}

impl RasterOpts {
    /// Return options with a different canvas size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    fn surface_size(self) -> BrandResult<(u16, u16)> {
        let w: u16 = self
            .width
            .try_into()
            .map_err(|_| BrandError::validation("canvas width exceeds u16"))?;
        let h: u16 = self
            .height
            .try_into()
            .map_err(|_| BrandError::validation("canvas height exceeds u16"))?;
        if w == 0 || h == 0 {
            return Err(BrandError::validation("canvas width/height must be > 0"));
        }
        Ok((w, h))
    }
}

/// Title font size in pixels for a given fit scale.
pub fn title_font_px(layout: &LockupLayout, fit: DesignFit) -> f32 {
    round_px(layout.title.font_size * fit.scale).max(MIN_FONT_PX) as f32
}

/// Subtitle font size in pixels for a given fit scale.
pub fn subtitle_font_px(layout: &LockupLayout, fit: DesignFit) -> f32 {
    round_px(layout.subtitle.font_size * fit.scale).max(MIN_FONT_PX) as f32
}

/// Stroke width in device pixels: scaled, rounded, at least one pixel.
pub fn device_stroke_width(width: f64, scale: f64) -> f64 {
    round_px(width * scale).max(1.0)
}

/// Lay out the multi-color title in device pixels, centered on the design center.
pub fn raster_title_layout<M: TextMeasure + ?Sized>(
    measure: &mut M,
    layout: &LockupLayout,
    fit: DesignFit,
) -> BrandResult<LineLayout> {
    layout_centered(
        measure,
        &TITLE_SEGMENTS,
        fit.map_x(layout.center_x),
        layout.title.letter_spacing * fit.scale,
    )
}

/// Lay out the single-color subtitle in device pixels, centered on the design center.
pub fn raster_subtitle_layout<M: TextMeasure + ?Sized>(
    measure: &mut M,
    layout: &LockupLayout,
    fit: DesignFit,
) -> BrandResult<LineLayout> {
    let segment = TextSegment {
        text: SUBTITLE,
        color: MUTED_WHITE,
    };
    layout_centered(
        measure,
        std::slice::from_ref(&segment),
        fit.map_x(layout.center_x),
        layout.subtitle.letter_spacing * fit.scale,
    )
}

/// The two faces used for the wordmark, already sized for the target canvas.
pub struct LockupText<'a> {
    pub title: &'a mut TextFace,
    pub subtitle: &'a mut TextFace,
}

/// Resolve fonts from `fonts` and render the full lockup.
#[tracing::instrument(skip_all, fields(width = opts.width, height = opts.height))]
pub fn render_lockup(
    geom: &MarkGeometry,
    layout: &LockupLayout,
    opts: RasterOpts,
    fonts: &FontCandidates,
) -> BrandResult<FrameRGBA> {
    let fit = DesignFit::for_canvas(opts.width, opts.height)?;
    let bold = fonts.resolve(FontRole::Bold)?;
    let regular = fonts.resolve(FontRole::Regular)?;
    let mut title = TextFace::new(&bold, title_font_px(layout, fit))?;
    let mut subtitle = TextFace::new(&regular, subtitle_font_px(layout, fit))?;
    draw_lockup(
        geom,
        layout,
        opts,
        fit,
        Some(LockupText {
            title: &mut title,
            subtitle: &mut subtitle,
        }),
    )
}

/// Render the lockup with caller-provided faces; `None` draws the graphics without the wordmark.
pub fn render_lockup_frame(
    geom: &MarkGeometry,
    layout: &LockupLayout,
    opts: RasterOpts,
    text: Option<LockupText<'_>>,
) -> BrandResult<FrameRGBA> {
    let fit = DesignFit::for_canvas(opts.width, opts.height)?;
    draw_lockup(geom, layout, opts, fit, text)
}

fn draw_lockup(
    geom: &MarkGeometry,
    layout: &LockupLayout,
    opts: RasterOpts,
    fit: DesignFit,
    text: Option<LockupText<'_>>,
) -> BrandResult<FrameRGBA> {
    let (w, h) = opts.surface_size()?;
    let mut ctx = vello_cpu::RenderContext::new(w, h);

    draw_mark(
        &mut ctx,
        geom,
        fit.to_affine() * layout.mark_transform(),
        fit.scale * layout.mark_scale(),
    );
    draw_rules(&mut ctx, layout, fit);

    if let Some(text) = text {
        let title = raster_title_layout(&mut *text.title, layout, fit)?;
        draw_line(&mut ctx, text.title, &title, fit.map_y(layout.title.baseline));

        let subtitle = raster_subtitle_layout(&mut *text.subtitle, layout, fit)?;
        draw_line(
            &mut ctx,
            text.subtitle,
            &subtitle,
            fit.map_y(layout.subtitle.baseline),
        );
    }

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);
    tracing::debug!(width = w, height = h, "rendered lockup raster");

    Ok(FrameRGBA {
        width: opts.width,
        height: opts.height,
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}

fn cpu_point(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn cpu_color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn stroke_polyline(
    ctx: &mut vello_cpu::RenderContext,
    points: impl IntoIterator<Item = Point>,
    width_px: f64,
    color: Rgba8,
) {
    let mut path = vello_cpu::kurbo::BezPath::new();
    for (i, p) in points.into_iter().enumerate() {
        if i == 0 {
            path.move_to(cpu_point(p));
        } else {
            path.line_to(cpu_point(p));
        }
    }
    ctx.set_stroke(
        vello_cpu::kurbo::Stroke::new(width_px)
            .with_caps(vello_cpu::kurbo::Cap::Round)
            .with_join(vello_cpu::kurbo::Join::Round),
    );
    ctx.set_paint(cpu_color(color));
    ctx.stroke_path(&path);
}

fn fill_circle(ctx: &mut vello_cpu::RenderContext, center: Point, radius: f64, color: Rgba8) {
    let circle = vello_cpu::kurbo::Circle::new(cpu_point(center), radius);
    ctx.set_paint(cpu_color(color));
    ctx.fill_path(&circle.to_path(0.1));
}

/// Draw the mark with `to_device` mapping its 512 design space to pixels; `scale` is the
/// uniform scale inside `to_device`.
fn draw_mark(
    ctx: &mut vello_cpu::RenderContext,
    geom: &MarkGeometry,
    to_device: Affine,
    scale: f64,
) {
    for s in geom.strokes() {
        stroke_polyline(
            ctx,
            s.points.iter().map(|&p| to_device * p),
            device_stroke_width(s.width, scale),
            WHITE,
        );
    }
    for n in geom.nodes() {
        fill_circle(ctx, to_device * n.center, n.radius * scale, WHITE);
    }
}

fn draw_rules(ctx: &mut vello_cpu::RenderContext, layout: &LockupLayout, fit: DesignFit) {
    let width = device_stroke_width(layout.rule_stroke, fit.scale);
    let c = layout.rule_corners();
    for (a, b) in [(c[0], c[1]), (c[2], c[3])] {
        stroke_polyline(ctx, [fit.map(a), fit.map(b)], width, GOLD);
    }
    for p in c {
        fill_circle(ctx, fit.map(p), layout.rule_dot_radius * fit.scale, GOLD);
    }
}

fn draw_line(
    ctx: &mut vello_cpu::RenderContext,
    face: &mut TextFace,
    line: &LineLayout,
    baseline_y: f64,
) {
    let mut buf = [0u8; 4];
    for placed in &line.chars {
        let glyphs = face.glyphs(placed.ch.encode_utf8(&mut buf));
        if glyphs.is_empty() {
            continue;
        }
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((placed.x, baseline_y)));
        ctx.set_paint(cpu_color(placed.color));
        ctx.glyph_run(face.font_data())
            .font_size(face.size_px())
            .fill_glyphs(glyphs.into_iter().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            }));
    }
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
