use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

/// Generate the Applied AI Club mark and lockup as SVG and PNG.
///
/// With no arguments, writes `applied-ai-mark.svg`, `applied-ai-club-logo.svg` and
/// `applied-ai-club-logo.png` into `public/assets/brand` under the crate root.
#[derive(Parser, Debug)]
#[command(name = "brandmark", version)]
struct Cli {
    /// Output directory (created if missing).
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Raster canvas width in pixels.
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Raster canvas height in pixels.
    #[arg(long, default_value_t = 1400)]
    height: u32,

    /// Bold font file, tried before the built-in candidate list.
    #[arg(long)]
    font_bold: Option<PathBuf>,

    /// Regular font file, tried before the built-in candidate list.
    #[arg(long)]
    font_regular: Option<PathBuf>,

    /// Also write `applied-ai-mark.png` at this square size.
    #[arg(long, value_name = "PX")]
    mark_png: Option<u32>,

    /// Print the geometry model as JSON and exit without writing files.
    #[arg(long)]
    dump_geometry: bool,

    /// Print the resolved bold/regular font sources and exit without writing files.
    #[arg(long)]
    dump_fonts: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(serde::Serialize)]
struct GeometryDump<'a> {
    mark: &'a brandmark::MarkGeometry,
    lockup: &'a brandmark::LockupLayout,
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.dump_geometry {
        let geom = brandmark::MarkGeometry::build();
        let dump = GeometryDump {
            mark: &geom,
            lockup: &brandmark::LOCKUP,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&dump).context("serialize geometry")?
        );
        return Ok(());
    }

    let mut fonts = brandmark::FontCandidates::from_env();
    if let Some(p) = cli.font_bold {
        fonts = fonts.with_bold_first(p);
    }
    if let Some(p) = cli.font_regular {
        fonts = fonts.with_regular_first(p);
    }

    if cli.dump_fonts {
        for role in [brandmark::FontRole::Bold, brandmark::FontRole::Regular] {
            let font = fonts.resolve(role)?;
            println!(
                "{role:?}: {} (face {}, {} bytes)",
                font.origin,
                font.index,
                font.data.len()
            );
        }
        return Ok(());
    }

    let assets =
        brandmark::BrandAssets::new(cli.out_dir.unwrap_or_else(brandmark::BrandAssets::default_dir));
    let opts = brandmark::GenerateOpts {
        raster: brandmark::RasterOpts::default().with_size(cli.width, cli.height),
        fonts,
        mark_png: cli.mark_png,
    };

    for path in brandmark::generate(&assets, &opts)? {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
