use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use eclectic_cli::{Config, Session};

pub mod config;
pub mod generate;
pub mod import;
pub mod preview;
pub mod roster;
pub mod songs;

pub use generate::{generate_setlist, GenerateOptions};
pub use import::import_sheet;
pub use preview::preview_sheet;
pub use roster::show_roster;
pub use songs::list_songs;

/// Read a song sheet from `path`, or from stdin when `path` is `-`.
fn read_sheet(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read song sheet from stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read song sheet {}", path.display()))
}

/// Start a session from `config` and import the sheet at `path` into it.
fn open_session(config: &Config, path: &Path) -> Result<(Session, usize)> {
    let mut session = Session::new(
        config.roster()?,
        config.generator_settings(),
        config.parser(),
    );

    let text = read_sheet(path)?;
    let count = session
        .bulk_import(&text)
        .with_context(|| format!("Failed to import {}", path.display()))?;

    log::info!("Imported {} songs from {}", count, path.display());
    Ok((session, count))
}
