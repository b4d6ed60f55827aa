//! Bulk import error types.

use thiserror::Error;

/// Errors that can occur while importing a song sheet.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The pasted text is empty or whitespace only.
    #[error("Please paste data first")]
    EmptyInput,

    /// Every data row was missing a name or an artist.
    #[error("No valid songs found to import")]
    NoValidRows,

    /// The text exceeds the configured size ceiling.
    #[error("import text is {size} bytes, limit is {limit}")]
    InputTooLarge { size: usize, limit: usize },

    /// The catalog refused the parsed records.
    #[error("catalog error: {0}")]
    Catalog(#[from] eclectic_core::Error),
}

impl ImportError {
    /// Returns `true` when the problem lies with the pasted text rather than
    /// the catalog.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput | Self::NoValidRows | Self::InputTooLarge { .. }
        )
    }
}

/// Convenience alias for import results.
pub type ImportResult<T> = std::result::Result<T, ImportError>;
