//! Bulk import for eclectic.
//!
//! Turns a tab-separated sheet (header row first, as copied out of a
//! spreadsheet) into catalog records. Individual malformed cells fall back to
//! per-field defaults; only rows missing a name or an artist are dropped.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod coerce;
pub mod error;
pub mod fields;
pub mod parser;
pub mod workflow;

pub use error::{ImportError, ImportResult};
pub use fields::{HeaderMap, ImportField, RawRow};
pub use parser::{BulkImportParser, DEFAULT_MAX_INPUT_BYTES, PREVIEW_ROWS};
pub use workflow::{ImportState, ImportWorkflow};
