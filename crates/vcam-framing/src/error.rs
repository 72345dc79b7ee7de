//! Error types for framing operations.

use thiserror::Error;

/// Result type for framing operations.
pub type FramingResult<T> = Result<T, FramingError>;

/// Errors that can occur while setting up or driving the framing pipeline.
///
/// The per-frame update path itself is infallible: missing detections freeze
/// the camera and out-of-range geometry is absorbed by clamping.
#[derive(Debug, Error)]
pub enum FramingError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("detection trace decode failed: {0}")]
    TraceDecode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FramingError {
    /// Create an invalid-configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
