//! Setlist generation errors.

use thiserror::Error;

/// Errors that can occur while generating a setlist.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// The catalog holds no song flagged active.
    #[error("No active songs available to generate setlist")]
    NoActiveSongs,
}

/// Convenience alias for generation results.
pub type GenerateResult<T> = std::result::Result<T, GenerateError>;
