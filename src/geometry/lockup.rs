//! Placement constants for the stacked lockup, in the 960×700 design space.

use serde::Serialize;

use crate::foundation::core::{Affine, GOLD, Point, Rgba8, Vec2, WHITE};
use crate::foundation::error::{BrandError, BrandResult};
use crate::geometry::mark::DESIGN_SIZE;

pub const LOCKUP_WIDTH: f64 = 960.0;
pub const LOCKUP_HEIGHT: f64 = 700.0;

pub const FONT_FAMILY: &str = "Segoe UI, Inter, Arial, sans-serif";

/// One colored run of a text line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TextSegment {
    pub text: &'static str,
    pub color: Rgba8,
}

pub const TITLE_SEGMENTS: [TextSegment; 3] = [
    TextSegment {
        text: "APPLIED ",
        color: WHITE,
    },
    TextSegment {
        text: "AI",
        color: GOLD,
    },
    TextSegment {
        text: " CLUB",
        color: WHITE,
    },
];

pub const SUBTITLE: &str = "PURDUE UNIVERSITY NORTHWEST";

/// Typographic settings of one centered text line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TextLine {
    /// Baseline y in design space.
    pub baseline: f64,
    pub font_size: f64,
    pub font_weight: u16,
    /// Extra advance between consecutive characters, in design units.
    pub letter_spacing: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LockupLayout {
    /// Horizontal center shared by the mark, the title and the subtitle.
    pub center_x: f64,
    /// Rendered side length of the 512×512 mark.
    pub mark_size: f64,
    pub mark_top: f64,
    pub rule_ys: [f64; 2],
    pub rule_x0: f64,
    pub rule_x1: f64,
    pub rule_stroke: f64,
    pub rule_dot_radius: f64,
    pub title: TextLine,
    pub subtitle: TextLine,
    /// Average glyph width as a fraction of font size, for width estimates without a font.
    pub glyph_factor: f64,
}

pub const LOCKUP: LockupLayout = LockupLayout {
    center_x: LOCKUP_WIDTH / 2.0,
    mark_size: 360.0,
    mark_top: 34.0,
    rule_ys: [432.0, 610.0],
    rule_x0: 86.0,
    rule_x1: 874.0,
    rule_stroke: 6.0,
    rule_dot_radius: 10.0,
    title: TextLine {
        baseline: 530.0,
        font_size: 72.0,
        font_weight: 700,
        letter_spacing: 1.2,
    },
    subtitle: TextLine {
        baseline: 584.0,
        font_size: 34.0,
        font_weight: 500,
        letter_spacing: 1.2,
    },
    glyph_factor: 0.62,
};

impl LockupLayout {
    /// Top-left corner of the mark box.
    pub fn mark_origin(&self) -> Point {
        Point::new(self.center_x - self.mark_size / 2.0, self.mark_top)
    }

    pub fn mark_scale(&self) -> f64 {
        self.mark_size / DESIGN_SIZE
    }

    /// Maps mark design space into lockup design space.
    pub fn mark_transform(&self) -> Affine {
        Affine::translate(self.mark_origin().to_vec2()) * Affine::scale(self.mark_scale())
    }

    /// Rule end points: top-left, top-right, bottom-left, bottom-right.
    pub fn rule_corners(&self) -> [Point; 4] {
        let [top, bottom] = self.rule_ys;
        [
            Point::new(self.rule_x0, top),
            Point::new(self.rule_x1, top),
            Point::new(self.rule_x0, bottom),
            Point::new(self.rule_x1, bottom),
        ]
    }
}

/// Uniform fit of the lockup design space into a pixel canvas, centered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DesignFit {
    pub scale: f64,
    pub offset: Vec2,
}

impl DesignFit {
    pub fn for_canvas(width: u32, height: u32) -> BrandResult<Self> {
        if width == 0 || height == 0 {
            return Err(BrandError::validation("canvas width/height must be > 0"));
        }
        let (w, h) = (f64::from(width), f64::from(height));
        let scale = (w / LOCKUP_WIDTH).min(h / LOCKUP_HEIGHT);
        let offset = Vec2::new(
            (w - LOCKUP_WIDTH * scale) / 2.0,
            (h - LOCKUP_HEIGHT * scale) / 2.0,
        );
        Ok(Self { scale, offset })
    }

    pub fn to_affine(self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    pub fn map(self, p: Point) -> Point {
        Point::new(self.offset.x + p.x * self.scale, self.offset.y + p.y * self.scale)
    }

    pub fn map_x(self, x: f64) -> f64 {
        self.offset.x + x * self.scale
    }

    pub fn map_y(self, y: f64) -> f64 {
        self.offset.y + y * self.scale
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/lockup.rs"]
mod tests;
