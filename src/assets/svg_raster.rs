use crate::foundation::error::{BrandError, BrandResult};
use crate::render::frame::FrameRGBA;

/// Largest square icon we rasterize.
pub const MAX_ICON_PX: u32 = 4096;

/// Parse SVG markup with default options (no fonts loaded).
pub fn parse_svg(markup: &str) -> BrandResult<usvg::Tree> {
    usvg::Tree::from_str(markup, &usvg::Options::default())
        .map_err(|e| BrandError::render(format!("svg parse failed: {e}")))
}

/// Rasterize `tree` into a `width`×`height` premultiplied frame, scaling the viewport to fill it.
pub fn rasterize_svg(tree: &usvg::Tree, width: u32, height: u32) -> BrandResult<FrameRGBA> {
    if width == 0 || height == 0 || width > MAX_ICON_PX || height > MAX_ICON_PX {
        return Err(BrandError::validation(format!(
            "svg raster size must be within 1..={MAX_ICON_PX}, got {width}x{height}"
        )));
    }
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| BrandError::render("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(FrameRGBA {
        width,
        height,
        data: pixmap.data().to_vec(),
        premultiplied: true,
    })
}

/// Square icon of the standalone mark markup.
#[tracing::instrument(level = "debug", skip(mark_svg))]
pub fn rasterize_mark_icon(mark_svg: &str, size_px: u32) -> BrandResult<FrameRGBA> {
    let tree = parse_svg(mark_svg)?;
    rasterize_svg(&tree, size_px, size_px)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/svg_raster.rs"]
mod tests;
