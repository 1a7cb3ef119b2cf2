//! One generation pass: build the geometry once, emit every asset into a directory.

use std::path::PathBuf;

use crate::assets::fonts::FontCandidates;
use crate::assets::svg_raster::rasterize_mark_icon;
use crate::encode::files::{BrandAssets, ensure_dir, write_text};
use crate::encode::png::write_png;
use crate::foundation::error::BrandResult;
use crate::geometry::lockup::LOCKUP;
use crate::geometry::mark::MarkGeometry;
use crate::render::cpu::{RasterOpts, render_lockup};
use crate::render::svg::{lockup_svg, mark_svg};

/// Options for [`generate`].
#[derive(Clone, Debug, Default)]
pub struct GenerateOpts {
    pub raster: RasterOpts,
    pub fonts: FontCandidates,
    /// Also write a square PNG of the mark at this size.
    pub mark_png: Option<u32>,
}

/// Write the mark SVG, the lockup SVG and the lockup PNG (plus the optional mark PNG) into
/// `assets.dir`, creating it if needed. Returns the written paths in write order.
///
/// Files already written stay on disk if a later step fails.
#[tracing::instrument(skip_all, fields(dir = %assets.dir.display()))]
pub fn generate(assets: &BrandAssets, opts: &GenerateOpts) -> BrandResult<Vec<PathBuf>> {
    let geom = MarkGeometry::build();
    geom.validate()?;
    ensure_dir(&assets.dir)?;

    let mut written = Vec::with_capacity(4);

    let mark = mark_svg(&geom);
    let path = assets.mark_svg();
    write_text(&path, &mark)?;
    written.push(path);

    let path = assets.logo_svg();
    write_text(&path, &lockup_svg(&geom, &LOCKUP))?;
    written.push(path);

    let frame = render_lockup(&geom, &LOCKUP, opts.raster, &opts.fonts)?;
    let path = assets.logo_png();
    write_png(&frame, &path)?;
    written.push(path);

    if let Some(size) = opts.mark_png {
        let icon = rasterize_mark_icon(&mark, size)?;
        let path = assets.mark_png();
        write_png(&icon, &path)?;
        written.push(path);
    }

    tracing::info!(files = written.len(), "brand assets written");
    Ok(written)
}
