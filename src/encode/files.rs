use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::BrandResult;

pub const MARK_SVG: &str = "applied-ai-mark.svg";
pub const LOGO_SVG: &str = "applied-ai-club-logo.svg";
pub const LOGO_PNG: &str = "applied-ai-club-logo.png";
pub const MARK_PNG: &str = "applied-ai-mark.png";

/// Destination paths of the brand assets inside one directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrandAssets {
    pub dir: PathBuf,
}

impl BrandAssets {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `public/assets/brand` under the crate root.
    pub fn default_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("public")
            .join("assets")
            .join("brand")
    }

    pub fn mark_svg(&self) -> PathBuf {
        self.dir.join(MARK_SVG)
    }

    pub fn logo_svg(&self) -> PathBuf {
        self.dir.join(LOGO_SVG)
    }

    pub fn logo_png(&self) -> PathBuf {
        self.dir.join(LOGO_PNG)
    }

    pub fn mark_png(&self) -> PathBuf {
        self.dir.join(MARK_PNG)
    }
}

/// Create `dir` and all missing parents.
pub fn ensure_dir(dir: &Path) -> BrandResult<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory '{}'", dir.display()))?;
    Ok(())
}

/// Write UTF-8 markup to `path`.
pub fn write_text(path: &Path, text: &str) -> BrandResult<()> {
    std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "wrote text asset");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/files.rs"]
mod tests;
