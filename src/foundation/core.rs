use crate::foundation::error::{BrandError, BrandResult};

pub use kurbo::{Affine, BezPath, Point, Vec2};

/// Straight (non-premultiplied) RGBA8 color. Also used as the Parley brush type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (case-insensitive, `#` optional).
    pub fn from_hex(s: &str) -> BrandResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> BrandResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| BrandError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        if !s.is_ascii() {
            return Err(BrandError::validation("hex color must be ASCII"));
        }
        match s.len() {
            6 => Ok(Self::opaque(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
            )),
            8 => Ok(Self {
                r: hex_byte(&s[0..2])?,
                g: hex_byte(&s[2..4])?,
                b: hex_byte(&s[4..6])?,
                a: hex_byte(&s[6..8])?,
            }),
            _ => Err(BrandError::validation(
                "hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)",
            )),
        }
    }

    /// Uppercase `#RRGGBB`; alpha is dropped.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Base foreground: outline, traces, nodes and the white title segments.
pub const WHITE: Rgba8 = Rgba8::opaque(0xF8, 0xF8, 0xFA);
/// Accent: rules, rule dots and the "AI" title segment.
pub const GOLD: Rgba8 = Rgba8::opaque(0xD8, 0xA2, 0x21);
/// Subtitle fill.
pub const MUTED_WHITE: Rgba8 = Rgba8::opaque(0xF3, 0xF3, 0xF6);

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
