//! Error types for podfleet objects.

use thiserror::Error;

/// Result type alias for object conversions.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while converting wire objects.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialize(String),

    #[error("deserialization error: {0}")]
    Deserialize(String),
}
