//! brandmark procedurally generates the Applied AI Club identity: a symmetric circuit/brain
//! mark and a stacked wordmark lockup, emitted as SVG and as a transparent PNG.
//!
//! # Pipeline overview
//!
//! 1. **Geometry**: [`MarkGeometry`] expands the literal left-half tables (outline recipe,
//!    circuit traces, stems, nodes) and mirrors them across the vertical axis.
//! 2. **Vector**: [`mark_svg`] and [`lockup_svg`] serialize that model as markup.
//! 3. **Raster**: [`render_lockup`] redraws the same model with `vello_cpu`, laying out the
//!    wordmark one tracked character at a time.
//! 4. **Output**: [`generate`] writes the files into a brand assets directory.
//!
//! Everything is rebuilt from constants on each run; there is no state between runs.
#![forbid(unsafe_code)]

pub mod assets;
pub mod encode;
pub mod foundation;
pub mod geometry;
pub mod layout;
pub mod pipeline;
pub mod render;

pub use assets::fonts::{FontBytes, FontCandidates, FontOrigin, FontRole};
pub use assets::svg_raster::rasterize_mark_icon;
pub use assets::text::TextFace;
pub use encode::files::BrandAssets;
pub use encode::png::{encode_png, write_png};
pub use foundation::core::{GOLD, MUTED_WHITE, Point, Rgba8, WHITE};
pub use foundation::error::{BrandError, BrandResult};
pub use foundation::math::{mirror_x, sample_quadratic};
pub use geometry::lockup::{DesignFit, LOCKUP, LockupLayout, TextSegment};
pub use geometry::mark::{CircuitLine, MarkGeometry, build_circuit_lines, build_outline_half};
pub use layout::tracking::{LineLayout, TextMeasure, layout_centered, tracked_width};
pub use pipeline::{GenerateOpts, generate};
pub use render::cpu::{RasterOpts, render_lockup, render_lockup_frame};
pub use render::frame::FrameRGBA;
pub use render::svg::{lockup_svg, mark_svg};
