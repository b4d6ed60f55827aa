//! Library half of the `eclectic` binary.
//!
//! Holds the pieces the subcommands share: layered configuration and the
//! in-memory session that ties the roster, catalog, importer and generator
//! together.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod session;

pub use config::Config;
pub use session::{Session, SessionError, SongEdit};
