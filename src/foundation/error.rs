/// Result alias used across the crate.
pub type PlacardResult<T> = Result<T, PlacardError>;

/// Errors produced while validating, rendering, or exporting a placeholder image.
#[derive(thiserror::Error, Debug)]
pub enum PlacardError {
    /// Width or height is below 1. Raised before any surface is allocated.
    #[error("invalid dimension: {width}x{height} (both sides must be >= 1)")]
    InvalidDimension {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// A color could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// The drawing surface could not be created or is missing a capability.
    #[error("surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// Encoding a rendered frame into PNG/JPEG bytes failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// A batch export request was rejected.
    #[error("batch error: {0}")]
    Batch(String),

    /// A style document could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other failure, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlacardError {
    /// Build an [`PlacardError::InvalidDimension`].
    pub fn invalid_dimension(width: u32, height: u32) -> Self {
        Self::InvalidDimension { width, height }
    }

    /// Build an [`PlacardError::InvalidColor`].
    pub fn invalid_color(msg: impl Into<String>) -> Self {
        Self::InvalidColor(msg.into())
    }

    /// Build a [`PlacardError::SurfaceUnavailable`].
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::SurfaceUnavailable(msg.into())
    }

    /// Build a [`PlacardError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`PlacardError::Batch`].
    pub fn batch(msg: impl Into<String>) -> Self {
        Self::Batch(msg.into())
    }

    /// Build a [`PlacardError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
