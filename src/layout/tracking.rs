//! Manual letter-spaced ("tracked") text layout.
//!
//! The raster surface has no letter-spacing or centering primitive, so lines are laid out one
//! character at a time: each character advances by its measured width plus a fixed tracking
//! value, except the last character of a segment. Measurement is behind [`TextMeasure`] so the
//! layout does not care where widths come from.

use crate::foundation::core::Rgba8;
use crate::foundation::error::{BrandError, BrandResult};
use crate::geometry::lockup::TextSegment;

/// Source of per-character advance widths at a fixed font size.
pub trait TextMeasure {
    fn char_width(&mut self, ch: char) -> BrandResult<f64>;
}

/// Width estimate from a constant glyph-width factor, no font involved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EstimatedMeasure {
    pub font_size: f64,
    pub glyph_factor: f64,
}

impl EstimatedMeasure {
    pub fn advance(&self) -> f64 {
        self.font_size * self.glyph_factor
    }

    /// Tracked width of `text`; the same value [`tracked_width`] computes, without a `Result`.
    pub fn line_width(&self, text: &str, tracking: f64) -> f64 {
        let n = text.chars().count();
        if n == 0 {
            return 0.0;
        }
        n as f64 * self.advance() + (n - 1) as f64 * tracking
    }
}

impl TextMeasure for EstimatedMeasure {
    fn char_width(&mut self, _ch: char) -> BrandResult<f64> {
        Ok(self.advance())
    }
}

/// Width of `text` laid out with `tracking` between consecutive characters.
pub fn tracked_width<M: TextMeasure + ?Sized>(
    measure: &mut M,
    text: &str,
    tracking: f64,
) -> BrandResult<f64> {
    let mut total = 0.0;
    let n = text.chars().count();
    for (i, ch) in text.chars().enumerate() {
        total += measure.char_width(ch)?;
        if i + 1 < n {
            total += tracking;
        }
    }
    Ok(total)
}

/// A character placed on a line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedChar {
    pub ch: char,
    /// Left edge of the character cell.
    pub x: f64,
    pub color: Rgba8,
}

/// Place `text` starting at `start_x`; returns the cursor after the last character.
pub fn place_tracked<M: TextMeasure + ?Sized>(
    measure: &mut M,
    text: &str,
    color: Rgba8,
    start_x: f64,
    tracking: f64,
    out: &mut Vec<PlacedChar>,
) -> BrandResult<f64> {
    let mut cursor = start_x;
    let n = text.chars().count();
    for (i, ch) in text.chars().enumerate() {
        out.push(PlacedChar {
            ch,
            x: cursor,
            color,
        });
        cursor += measure.char_width(ch)?;
        if i + 1 < n {
            cursor += tracking;
        }
    }
    Ok(cursor)
}

/// A horizontally centered multi-segment line.
#[derive(Clone, Debug, PartialEq)]
pub struct LineLayout {
    pub start_x: f64,
    pub width: f64,
    /// Width of each input segment, in order.
    pub segment_widths: Vec<f64>,
    pub chars: Vec<PlacedChar>,
}

impl LineLayout {
    pub fn center_x(&self) -> f64 {
        self.start_x + self.width / 2.0
    }
}

/// Center `segments` on `center_x`. Tracking applies within a segment only; segments abut.
pub fn layout_centered<M: TextMeasure + ?Sized>(
    measure: &mut M,
    segments: &[TextSegment],
    center_x: f64,
    tracking: f64,
) -> BrandResult<LineLayout> {
    if !tracking.is_finite() {
        return Err(BrandError::validation("tracking must be finite"));
    }

    let segment_widths = segments
        .iter()
        .map(|s| tracked_width(measure, s.text, tracking))
        .collect::<BrandResult<Vec<_>>>()?;
    let width: f64 = segment_widths.iter().sum();
    let start_x = center_x - width / 2.0;

    let mut chars = Vec::with_capacity(segments.iter().map(|s| s.text.len()).sum());
    let mut cursor = start_x;
    for s in segments {
        cursor = place_tracked(measure, s.text, s.color, cursor, tracking, &mut chars)?;
    }

    Ok(LineLayout {
        start_x,
        width,
        segment_widths,
        chars,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/tracking.rs"]
mod tests;
