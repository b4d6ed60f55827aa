use anyhow::{Context, Result};
use std::path::PathBuf;
use toml_edit::DocumentMut;

use eclectic_cli::config::{self, Config};

const VALID_KEYS: &str =
    "roster_path, default_num_sets, default_songs_per_set, max_import_bytes, log_level";

/// Show the current effective configuration.
pub fn show_config(roster: Option<PathBuf>) -> Result<()> {
    let config = Config::load_with_roster_path(roster)?;

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!(
        "File exists: {}\n",
        if exists { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    println!(
        "  roster_path: {}",
        config
            .roster_path
            .as_ref()
            .map_or_else(|| String::from("<built-in>"), |p| p.display().to_string())
    );
    println!("  default_num_sets: {}", config.default_num_sets);
    println!("  default_songs_per_set: {}", config.default_songs_per_set);
    println!("  max_import_bytes: {}", config.max_import_bytes);
    println!("  log_level: {}", config.log_level);

    println!("\nPriority: CLI args > ENV vars (ECL_*) > Config file > Defaults");

    Ok(())
}

/// Get a specific config value.
pub fn get_config(key: Option<String>) -> Result<()> {
    if let Some(key) = key {
        let config = Config::load()?;

        match key.as_str() {
            "roster_path" => match config.roster_path {
                Some(path) => println!("{}", path.display()),
                None => println!("<built-in>"),
            },
            "default_num_sets" => println!("{}", config.default_num_sets),
            "default_songs_per_set" => println!("{}", config.default_songs_per_set),
            "max_import_bytes" => println!("{}", config.max_import_bytes),
            "log_level" => println!("{}", config.log_level),
            _ => {
                anyhow::bail!("Unknown config key: {}\n\nValid keys: {}", key, VALID_KEYS);
            }
        }
    } else {
        // No key provided, show entire config file contents
        let config_path = config::config_file_path();

        if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).context("Failed to read config file")?;
            print!("{}", contents);
        } else {
            println!("Config file does not exist: {}", config_path.display());
            println!("\nRun 'eclectic config init' to create it.");
        }
    }

    Ok(())
}

/// Set a config value, keeping the rest of the file and its comments.
pub fn set_config(key: &str, value: &str) -> Result<()> {
    let config_path = config::config_file_path();
    config::ensure_config_file()?;

    let contents = std::fs::read_to_string(&config_path).context("Failed to read config file")?;
    let updated = set_key(&contents, key, value)?;

    std::fs::write(&config_path, updated).context("Failed to write config file")?;

    println!("✓ Updated {} = {}", key, value);
    println!("  in {}", config_path.display());

    Ok(())
}

/// Apply one key change to a config document.
fn set_key(contents: &str, key: &str, value: &str) -> Result<String> {
    let mut doc: DocumentMut = contents.parse().context("Config file is not valid TOML")?;

    match key {
        "roster_path" | "log_level" => {
            doc[key] = toml_edit::value(value);
        }
        "default_num_sets" | "default_songs_per_set" | "max_import_bytes" => {
            let number: i64 = value
                .parse()
                .with_context(|| format!("{} must be a whole number, got '{}'", key, value))?;
            if number < 1 {
                anyhow::bail!("{} must be at least 1", key);
            }
            doc[key] = toml_edit::value(number);
        }
        _ => {
            anyhow::bail!("Unknown config key: {}\n\nValid keys: {}", key, VALID_KEYS);
        }
    }

    Ok(doc.to_string())
}

/// Show the config file path.
pub fn show_path() -> Result<()> {
    let config_path = config::config_file_path();
    println!("{}", config_path.display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure eclectic.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
