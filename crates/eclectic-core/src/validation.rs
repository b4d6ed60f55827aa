//! Validation rules shared by the catalog and the bulk importer.
//!
//! A song may only be stored when both its name and its artist contain
//! something other than whitespace. Every entry point that writes to the
//! catalog goes through [`validate_song_fields`].

use crate::error::{Error, Result};

/// Whether `value` is empty once surrounding whitespace is removed.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Fail with [`Error::Validation`] naming `field` when `value` is blank.
pub fn require_text(field: &'static str, value: &str) -> Result<()> {
    if is_blank(value) {
        return Err(Error::Validation { field });
    }
    Ok(())
}

/// Check the name/artist rule for a song record.
pub fn validate_song_fields(name: &str, artist: &str) -> Result<()> {
    require_text("name", name)?;
    require_text("artist", artist)
}

/// Case-insensitive substring test. An empty needle matches everything.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
