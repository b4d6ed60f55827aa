use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use eclectic_cli::Config;
use eclectic_core::{ActiveFilter, MAX_SETS, MAX_SONGS_PER_SET};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "eclectic", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Band roster file (default: built-in line-up)
    #[arg(long, global = true)]
    roster: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// List the band members you can sign in as
    Roster,
    /// Show the first rows of a song sheet as they would be read
    ///
    /// The sheet is tab-separated with a header row, as copied out of a
    /// spreadsheet. Recognized headers are SongName, Artist, SongActive,
    /// Singer, SongKey, SongBPM, VoxDifficulty, TREConfidence, MarkGuitar
    /// and SongLink_Artist; other columns are ignored.
    Preview {
        /// Song sheet to read (`-` for stdin)
        file: PathBuf,
    },
    /// Import a song sheet and list the songs accepted
    ///
    /// Rows missing a name or an artist are skipped. Unparseable numbers
    /// fall back to defaults rather than rejecting the row.
    Import {
        /// Song sheet to read (`-` for stdin)
        file: PathBuf,

        /// Print the imported songs as JSON
        #[arg(long)]
        json: bool,
    },
    /// Import a song sheet and filter its songs
    Songs {
        /// Song sheet to read (`-` for stdin)
        file: PathBuf,

        /// Active flag to keep: all, Y or N
        #[arg(long, default_value = "all")]
        active: ActiveFilter,

        /// Case-insensitive text matched against name and artist
        #[arg(long, default_value = "")]
        search: String,

        /// Print the matching songs as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a random setlist from the active songs of a sheet
    ///
    /// Active songs are shuffled and dealt into sets in order. A song never
    /// appears twice, and sets are left short when the songs run out.
    Generate {
        /// Song sheet to read (`-` for stdin)
        file: PathBuf,

        /// Band member generating the setlist (email or name)
        #[arg(long)]
        member: String,

        /// Number of sets (default from config)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=MAX_SETS as i64))]
        sets: Option<u8>,

        /// Songs per set (default from config)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=MAX_SONGS_PER_SET as i64))]
        songs_per_set: Option<u8>,

        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,

        /// Print the setlist as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage configuration
    ///
    /// Configuration is loaded from multiple sources with priority:
    /// CLI args > Environment variables (ECL_*) > Config file > Defaults
    ///
    /// Config file location: ~/.config/eclectic/config.toml
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show current effective configuration
    Show,
    /// Show config file path
    Path,
    /// Show example configuration
    Example,
    /// Initialize config file with defaults
    Init,
    /// Get a config value (or whole file if no key given)
    Get {
        /// Config key
        key: Option<String>,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Value to set
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_with_roster_path(cli.roster.clone());
    let level = config
        .as_ref()
        .map(|config| config.log_level.as_str())
        .unwrap_or("warn");

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(cli.roster)?,
            ConfigAction::Path => commands::config::show_path()?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config()?,
            ConfigAction::Get { key } => commands::config::get_config(key)?,
            ConfigAction::Set { key, value } => commands::config::set_config(&key, &value)?,
        },
        Commands::Roster => commands::show_roster(&config?)?,
        Commands::Preview { file } => commands::preview_sheet(&config?, &file)?,
        Commands::Import { file, json } => commands::import_sheet(&config?, &file, json)?,
        Commands::Songs {
            file,
            active,
            search,
            json,
        } => commands::list_songs(&config?, &file, active, search, json)?,
        Commands::Generate {
            file,
            member,
            sets,
            songs_per_set,
            seed,
            json,
        } => {
            let options = commands::GenerateOptions {
                member,
                sets: sets.map(usize::from),
                songs_per_set: songs_per_set.map(usize::from),
                seed,
                json,
            };
            commands::generate_setlist(&config?, &file, &options)?;
        }
    }

    Ok(())
}
