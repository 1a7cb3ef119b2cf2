pub mod fonts;
pub mod svg_raster;
pub mod text;
