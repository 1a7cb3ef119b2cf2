//! Font discovery: ordered candidate paths, first existing file wins, then a system fallback.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;

use crate::foundation::error::{BrandError, BrandResult};

/// Environment variable prepending a bold font path to the candidate list.
pub const ENV_FONT_BOLD: &str = "BRANDMARK_FONT_BOLD";
/// Environment variable prepending a regular font path to the candidate list.
pub const ENV_FONT_REGULAR: &str = "BRANDMARK_FONT_REGULAR";

const DEFAULT_BOLD: &[&str] = &[
    r"C:\Windows\Fonts\segoeuib.ttf",
    r"C:\Windows\Fonts\arialbd.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
];

const DEFAULT_REGULAR: &[&str] = &[
    r"C:\Windows\Fonts\segoeui.ttf",
    r"C:\Windows\Fonts\arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
];

/// Which of the two lockup faces is being resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontRole {
    Bold,
    Regular,
}

impl FontRole {
    fn weight(self) -> u16 {
        match self {
            Self::Bold => 700,
            Self::Regular => 400,
        }
    }
}

/// Ordered bold and regular candidate paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontCandidates {
    pub bold: Vec<PathBuf>,
    pub regular: Vec<PathBuf>,
    /// Whether to fall back to an installed sans-serif face when no candidate exists.
    pub system_fallback: bool,
}

impl Default for FontCandidates {
    fn default() -> Self {
        Self {
            bold: DEFAULT_BOLD.iter().map(PathBuf::from).collect(),
            regular: DEFAULT_REGULAR.iter().map(PathBuf::from).collect(),
            system_fallback: true,
        }
    }
}

impl FontCandidates {
    /// Defaults, with `BRANDMARK_FONT_BOLD` / `BRANDMARK_FONT_REGULAR` tried first when set.
    pub fn from_env() -> Self {
        let mut out = Self::default();
        if let Some(p) = std::env::var_os(ENV_FONT_BOLD).filter(|v| !v.is_empty()) {
            out = out.with_bold_first(p);
        }
        if let Some(p) = std::env::var_os(ENV_FONT_REGULAR).filter(|v| !v.is_empty()) {
            out = out.with_regular_first(p);
        }
        out
    }

    pub fn with_bold_first(mut self, path: impl Into<PathBuf>) -> Self {
        self.bold.insert(0, path.into());
        self
    }

    pub fn with_regular_first(mut self, path: impl Into<PathBuf>) -> Self {
        self.regular.insert(0, path.into());
        self
    }

    pub fn with_system_fallback(mut self, enabled: bool) -> Self {
        self.system_fallback = enabled;
        self
    }

    pub fn paths(&self, role: FontRole) -> &[PathBuf] {
        match role {
            FontRole::Bold => &self.bold,
            FontRole::Regular => &self.regular,
        }
    }

    /// Resolve `role` to font bytes.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn resolve(&self, role: FontRole) -> BrandResult<FontBytes> {
        if let Some(path) = first_existing(self.paths(role)) {
            let data = std::fs::read(path)
                .with_context(|| format!("read font '{}'", path.display()))?;
            tracing::debug!(path = %path.display(), "resolved font file");
            return Ok(FontBytes {
                origin: FontOrigin::Path(path.to_path_buf()),
                data: Arc::new(data),
                index: 0,
            });
        }

        if !self.system_fallback {
            return Err(BrandError::font(format!(
                "no {role:?} font found among {} candidate path(s)",
                self.paths(role).len()
            )));
        }

        let font = system_fallback(role)?;
        tracing::warn!(?role, origin = %font.origin, "no candidate font file found, using system face");
        Ok(font)
    }
}

/// First path that exists as a regular file.
pub fn first_existing(paths: &[PathBuf]) -> Option<&Path> {
    paths.iter().map(PathBuf::as_path).find(|p| p.is_file())
}

/// Where resolved font bytes came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontOrigin {
    Path(PathBuf),
    /// Installed face found through the system font database, by family name.
    System(String),
}

impl fmt::Display for FontOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(p) => write!(f, "{}", p.display()),
            Self::System(family) => write!(f, "system:{family}"),
        }
    }
}

/// Raw font file contents plus the face index inside it.
#[derive(Clone, Debug)]
pub struct FontBytes {
    pub origin: FontOrigin,
    pub data: Arc<Vec<u8>>,
    pub index: u32,
}

fn system_fallback(role: FontRole) -> BrandResult<FontBytes> {
    use usvg::fontdb::{Database, Family, Query, Stretch, Style, Weight};

    let mut db = Database::new();
    db.load_system_fonts();

    let families = [
        Family::SansSerif,
        Family::Name("DejaVu Sans"),
        Family::Name("Liberation Sans"),
        Family::Name("Noto Sans"),
        Family::Name("Arial"),
    ];
    let query = Query {
        families: &families,
        weight: Weight(role.weight()),
        stretch: Stretch::Normal,
        style: Style::Normal,
    };
    let id = db
        .query(&query)
        .or_else(|| db.faces().next().map(|f| f.id))
        .ok_or_else(|| {
            BrandError::font(format!(
                "no {role:?} font candidates exist and no system fonts are installed"
            ))
        })?;

    let family = db
        .face(id)
        .and_then(|f| f.families.first().map(|(name, _)| name.clone()))
        .unwrap_or_else(|| "unknown".to_owned());
    let (data, index) = db
        .with_face_data(id, |data, index| (data.to_vec(), index))
        .ok_or_else(|| BrandError::font(format!("failed to load system face '{family}'")))?;

    Ok(FontBytes {
        origin: FontOrigin::System(family),
        data: Arc::new(data),
        index,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
