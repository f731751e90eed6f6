//! Template stamping error types.

use thiserror::Error;

pub type StampResult<T> = Result<T, StampError>;

/// Errors that abort template stamping.
#[derive(Debug, Error)]
pub enum StampError {
    /// The stored template could not be copied into an owned value.
    #[error("failed to copy pod template: {0}")]
    DeepCopy(#[from] podfleet_core::CoreError),
}
