//! Setlist generation for eclectic.
//!
//! Draws a random, duplicate-free selection of the catalog's active songs
//! and splits it into capacity-bounded sets.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod generator;

pub use error::{GenerateError, GenerateResult};
pub use generator::SetlistGenerator;
