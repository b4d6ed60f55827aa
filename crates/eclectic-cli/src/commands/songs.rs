use anyhow::{Context, Result};
use std::path::Path;

use eclectic_cli::Config;
use eclectic_core::{ActiveFilter, SongFilter};

use super::import::print_songs;
use super::open_session;

/// Import a sheet and print the songs matching the filter.
pub fn list_songs(
    config: &Config,
    path: &Path,
    active: ActiveFilter,
    search: String,
    json: bool,
) -> Result<()> {
    let (session, _) = open_session(config, path)?;
    let filter = SongFilter::new(active, search);
    let songs = session.filtered_songs(&filter);

    if json {
        let out = serde_json::to_string_pretty(&songs).context("Failed to serialize songs")?;
        println!("{out}");
        return Ok(());
    }

    if songs.is_empty() {
        println!("No songs match");
        return Ok(());
    }

    print_songs(songs.iter().copied());
    println!("\n  {} of {} songs", songs.len(), session.catalog().len());

    Ok(())
}
