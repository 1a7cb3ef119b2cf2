use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use crate::assets::fonts::{FontBytes, FontOrigin};
use crate::foundation::core::Rgba8;
use crate::foundation::error::{BrandError, BrandResult};
use crate::layout::tracking::TextMeasure;

/// A glyph relative to the pen position on the baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionedGlyph {
    pub id: u32,
    pub x: f32,
    pub y: f32,
}

/// One font face at one size, shaped through Parley.
///
/// Implements [`TextMeasure`] by shaping each character on its own and taking the advance of the
/// resulting line, so whitespace has width too. Widths are cached per character.
pub struct TextFace {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgba8>,
    family: String,
    size_px: f32,
    origin: FontOrigin,
    font: vello_cpu::peniko::FontData,
    widths: HashMap<char, f64>,
}

impl TextFace {
    pub fn new(font: &FontBytes, size_px: f32) -> BrandResult<Self> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(BrandError::validation("font size must be finite and > 0"));
        }

        let bytes: Arc<dyn AsRef<[u8]> + Send + Sync> = font.data.clone();
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::new(bytes.clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            BrandError::font(format!("no font families registered from '{}'", font.origin))
        })?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| BrandError::font("registered font family has no name"))?
            .to_string();
        tracing::debug!(%family, size_px, origin = %font.origin, "loaded text face");

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family,
            size_px,
            origin: font.origin.clone(),
            font: vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::new(bytes), font.index),
            widths: HashMap::new(),
        })
    }

    pub fn family_name(&self) -> &str {
        &self.family
    }

    pub fn size_px(&self) -> f32 {
        self.size_px
    }

    pub fn origin(&self) -> &FontOrigin {
        &self.origin
    }

    pub(crate) fn font_data(&self) -> &vello_cpu::peniko::FontData {
        &self.font
    }

    /// Shape `text` as a single unwrapped line.
    pub fn layout(&mut self, text: &str) -> parley::Layout<Rgba8> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(self.size_px));

        let mut layout: parley::Layout<Rgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }

    /// Glyphs of `text` relative to a pen at its baseline origin.
    pub fn glyphs(&mut self, text: &str) -> Vec<PositionedGlyph> {
        let layout = self.layout(text);
        let mut out = Vec::new();
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                // Positioned glyphs carry the line baseline; drawing adds its own.
                let baseline = run.baseline();
                out.extend(run.positioned_glyphs().map(|g| PositionedGlyph {
                    id: g.id,
                    x: g.x,
                    y: g.y - baseline,
                }));
            }
        }
        out
    }
}

impl TextMeasure for TextFace {
    fn char_width(&mut self, ch: char) -> BrandResult<f64> {
        if let Some(&w) = self.widths.get(&ch) {
            return Ok(w);
        }
        let mut buf = [0u8; 4];
        let w = f64::from(self.layout(ch.encode_utf8(&mut buf)).full_width());
        self.widths.insert(ch, w);
        Ok(w)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/text.rs"]
mod tests;
