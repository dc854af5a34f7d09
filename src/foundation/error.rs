/// Convenience result type used across pixelshape.
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Top-level error taxonomy used by the fallible edges of the crate.
///
/// The geometry pipeline itself never returns these; they come from building inputs
/// (ragged grids, bad documents, malformed bridge pairs) and from the export layer.
#[derive(thiserror::Error, Debug)]
pub enum ShapeError {
    /// Invalid user-provided grid, configuration or document data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while rasterizing or encoding an export.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShapeError {
    /// Build a [`ShapeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ShapeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`ShapeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
