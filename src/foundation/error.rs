use crate::classify::ClassifyError;
use crate::script::SegmentError;

/// Convenience result type used across the crate.
pub type AksaraResult<T> = Result<T, AksaraError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum AksaraError {
    /// Invalid user-provided input or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Operations on a drawing surface that cannot be carried out.
    #[error("canvas error: {0}")]
    Canvas(String),

    /// A name could not be split into mappable syllables.
    #[error("segmentation error: {0}")]
    Segmentation(#[from] SegmentError),

    /// The remote classifier failed or answered with an unusable payload.
    #[error("classification error: {0}")]
    Classification(#[from] ClassifyError),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AksaraError {
    /// Build an [`AksaraError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AksaraError::Canvas`] value.
    pub fn canvas(msg: impl Into<String>) -> Self {
        Self::Canvas(msg.into())
    }

    /// Build an [`AksaraError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
