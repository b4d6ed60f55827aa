use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

use eclectic_cli::Config;
use eclectic_core::Setlist;

use super::open_session;

/// Flags of the `generate` command.
#[derive(Debug)]
pub struct GenerateOptions {
    pub member: String,
    pub sets: Option<usize>,
    pub songs_per_set: Option<usize>,
    pub seed: Option<u64>,
    pub json: bool,
}

pub fn generate_setlist(config: &Config, path: &Path, options: &GenerateOptions) -> Result<()> {
    let (mut session, _) = open_session(config, path)?;
    session.select_member(&options.member)?;

    let defaults = config.generator_settings();
    session.set_generator_settings(
        options.sets.unwrap_or(defaults.num_sets()),
        options.songs_per_set.unwrap_or(defaults.songs_per_set()),
    );

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let setlist = session.generate_setlist(&mut rng)?;

    if options.json {
        let out = serde_json::to_string_pretty(setlist).context("Failed to serialize setlist")?;
        println!("{out}");
    } else {
        print_setlist(setlist);
    }

    Ok(())
}

fn print_setlist(setlist: &Setlist) {
    println!("\n{} (created by {})\n", setlist.name(), setlist.created_by());

    for (number, set) in setlist.sets().iter().enumerate() {
        println!("  Set {}", number + 1);
        for (position, song) in set.iter().enumerate() {
            if song.singer.is_empty() {
                println!("    {:>2}. {} - {}", position + 1, song.name, song.artist);
            } else {
                println!(
                    "    {:>2}. {} - {} ({})",
                    position + 1,
                    song.name,
                    song.artist,
                    song.singer
                );
            }
        }
        println!();
    }

    println!("  {} songs in {} sets", setlist.song_count(), setlist.sets().len());
}
