/// Convenience result type used across brandmark.
pub type BrandResult<T> = Result<T, BrandError>;

/// Top-level error taxonomy used by the emitters and the output writer.
#[derive(thiserror::Error, Debug)]
pub enum BrandError {
    /// Invalid options or constant tables.
    #[error("validation error: {0}")]
    Validation(String),

    /// No usable font could be resolved, or font bytes could not be used.
    #[error("font error: {0}")]
    Font(String),

    /// Rasterization failures.
    #[error("render error: {0}")]
    Render(String),

    /// Image encoding failures.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BrandError {
    /// Build a [`BrandError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BrandError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`BrandError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BrandError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
