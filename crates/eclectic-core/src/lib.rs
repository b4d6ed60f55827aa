//! Core domain model for eclectic.
//!
//! This crate defines the song catalog and its records, the band roster,
//! the generated setlist types, and the shared validation rules that every
//! mutation of the catalog goes through.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod roster;
pub mod settings;
pub mod validation;

pub use catalog::{ActiveFilter, SongCatalog, SongFilter};
pub use error::{Error, Result};
pub use model::{Active, BandMember, Set, Setlist, SetlistId, Song, SongDraft, SongId, SongRef};
pub use roster::Roster;
pub use settings::{GeneratorSettings, MAX_SETS, MAX_SONGS_PER_SET};
