use anyhow::{Context, Result};
use std::path::Path;

use eclectic_cli::Config;
use eclectic_core::Song;

use super::open_session;

pub fn import_sheet(config: &Config, path: &Path, json: bool) -> Result<()> {
    let (session, count) = open_session(config, path)?;

    if json {
        let out = serde_json::to_string_pretty(session.catalog().songs())
            .context("Failed to serialize songs")?;
        println!("{out}");
        return Ok(());
    }

    println!("Successfully imported {} songs\n", count);
    print_songs(session.catalog().iter());
    println!("\n  Active: {} of {}", session.active_count(), count);

    Ok(())
}

/// One line per song: active flag, name, artist, key, tempo and singer.
pub(crate) fn print_songs<'a>(songs: impl IntoIterator<Item = &'a Song>) {
    for song in songs {
        let singer = if song.singer.is_empty() {
            "-"
        } else {
            song.singer.as_str()
        };
        println!(
            "  [{}] {} - {} ({}, {} bpm) sung by {}",
            song.active, song.name, song.artist, song.tre_key, song.tre_tempo, singer
        );
    }
}
