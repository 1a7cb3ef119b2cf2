use std::io::Write;
use std::path::Path;

use anyhow::Context as _;
use image::ImageEncoder as _;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};

use crate::foundation::error::{BrandError, BrandResult};
use crate::render::frame::FrameRGBA;

/// Convert premultiplied RGBA8 to straight alpha in place.
pub fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

/// Encode `frame` as an RGBA PNG with maximum compression and adaptive filtering.
pub fn encode_png<W: Write>(frame: &FrameRGBA, out: W) -> BrandResult<()> {
    let expected = (frame.width as usize)
        .saturating_mul(frame.height as usize)
        .saturating_mul(4);
    if frame.data.len() != expected {
        return Err(BrandError::encode(format!(
            "frame byte len {} does not match {}x{} RGBA",
            frame.data.len(),
            frame.width,
            frame.height
        )));
    }

    let mut straight = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_rgba8_in_place(&mut straight);
    }

    PngEncoder::new_with_quality(out, CompressionType::Best, FilterType::Adaptive)
        .write_image(
            &straight,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| BrandError::encode(format!("png: {e}")))
}

/// Encode `frame` and write it to `path`.
pub fn write_png(frame: &FrameRGBA, path: &Path) -> BrandResult<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create png '{}'", path.display()))?;
    let mut w = std::io::BufWriter::new(file);
    encode_png(frame, &mut w)?;
    w.flush()
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
