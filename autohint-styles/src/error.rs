//! Errors produced while computing style coverage.

use raw::ReadError;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum CoverageError {
    /// An input to coverage resolution was not usable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The shaping provider failed to read layout data.
    #[error("Error reading layout data: {0}")]
    Shaping(ReadError),
}

impl From<ReadError> for CoverageError {
    fn from(value: ReadError) -> Self {
        Self::Shaping(value)
    }
}
