use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

use eclectic_core::{GeneratorSettings, Roster};
use eclectic_import::{BulkImportParser, DEFAULT_MAX_INPUT_BYTES};

/// Configuration for eclectic.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (ECL_* prefix)
/// 3. Config file (~/.config/eclectic/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// TOML file listing the band roster.
    ///
    /// Can be set via:
    /// - CLI: --roster /path/to/roster.toml
    /// - ENV: ECL_ROSTER_PATH
    /// - Config: roster_path = "/path/to/roster.toml"
    /// - Default: the built-in four-piece line-up
    #[serde(default)]
    pub roster_path: Option<PathBuf>,

    /// Number of sets generated when `--sets` is not given.
    #[serde(default = "default_num_sets", deserialize_with = "deserialize_count")]
    pub default_num_sets: usize,

    /// Songs per set when `--songs-per-set` is not given.
    #[serde(default = "default_songs_per_set", deserialize_with = "deserialize_count")]
    pub default_songs_per_set: usize,

    /// Largest song sheet, in bytes, the importer will read.
    #[serde(
        default = "default_max_import_bytes",
        deserialize_with = "deserialize_count"
    )]
    pub max_import_bytes: usize,

    /// Log filter used when RUST_LOG is unset (e.g. "warn", "info", "debug").
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_path: None,
            default_num_sets: default_num_sets(),
            default_songs_per_set: default_songs_per_set(),
            max_import_bytes: default_max_import_bytes(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/eclectic/config.toml
    /// Reads environment variables with ECL_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("ecl");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration, letting an explicit roster file win.
    ///
    /// This is used when the --roster CLI flag is provided.
    pub fn load_with_roster_path(roster_path: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::load()?;
        if roster_path.is_some() {
            config.roster_path = roster_path;
        }
        Ok(config)
    }

    /// The configured roster, or the built-in band when none is set.
    pub fn roster(&self) -> Result<Roster> {
        match &self.roster_path {
            Some(path) => Roster::load(path)
                .with_context(|| format!("Failed to load roster from {}", path.display())),
            None => Ok(Roster::default_band()),
        }
    }

    /// Generator settings from the configured defaults (raised to 1 if lower).
    pub fn generator_settings(&self) -> GeneratorSettings {
        GeneratorSettings::new(self.default_num_sets, self.default_songs_per_set)
    }

    /// A parser honouring the configured size ceiling.
    pub fn parser(&self) -> BulkImportParser {
        BulkImportParser::new().with_max_input_bytes(self.max_import_bytes)
    }
}

fn default_num_sets() -> usize {
    GeneratorSettings::default().num_sets()
}

fn default_songs_per_set() -> usize {
    GeneratorSettings::default().songs_per_set()
}

const fn default_max_import_bytes() -> usize {
    DEFAULT_MAX_INPUT_BYTES
}

fn default_log_level() -> String {
    String::from("warn")
}

/// A whole number written bare or quoted. Values taken from the
/// environment always arrive quoted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CountValue {
    Number(u64),
    Text(String),
}

fn deserialize_count<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match CountValue::deserialize(deserializer)? {
        CountValue::Number(number) => number,
        CountValue::Text(text) => text.trim().parse::<u64>().map_err(|_| {
            <D::Error as de::Error>::invalid_value(de::Unexpected::Str(&text), &"a whole number")
        })?,
    };
    usize::try_from(number).map_err(|_| {
        <D::Error as de::Error>::invalid_value(
            de::Unexpected::Unsigned(number),
            &"a smaller whole number",
        )
    })
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/eclectic/config.toml
/// - macOS: ~/Library/Application Support/eclectic/config.toml
/// - Windows: %APPDATA%\eclectic\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("eclectic")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Eclectic Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (ECL_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Band roster file
#
# A TOML file of [[members]] tables, each with name, email and instrument.
# When unset, the built-in line-up is used.
#
# Can also be set via:
# - CLI: eclectic --roster /path/to/roster.toml roster
# - Environment: ECL_ROSTER_PATH=/path/to/roster.toml
#roster_path = "/path/to/roster.toml"

# Setlist shape used when --sets / --songs-per-set are not given
default_num_sets = 2
default_songs_per_set = 8

# Largest song sheet the importer accepts, in bytes
max_import_bytes = 1048576

# Log filter when RUST_LOG is unset
log_level = "warn"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.roster_path.is_none());
        assert_eq!(config.default_num_sets, 2);
        assert_eq!(config.default_songs_per_set, 8);
        assert_eq!(config.max_import_bytes, DEFAULT_MAX_INPUT_BYTES);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_example_config_parses() {
        let config: Config = toml::from_str(example_config()).unwrap();
        assert!(config.roster_path.is_none());
        assert_eq!(config.default_num_sets, 2);
        assert_eq!(config.max_import_bytes, 1_048_576);
    }

    #[test]
    fn test_generator_settings_clamped() {
        let config = Config {
            default_num_sets: 0,
            ..Config::default()
        };
        let settings = config.generator_settings();
        assert_eq!(settings.num_sets(), 1);
        assert_eq!(settings.songs_per_set(), 8);
    }

    #[test]
    fn test_parser_uses_ceiling() {
        let config = Config {
            max_import_bytes: 10,
            ..Config::default()
        };
        assert_eq!(config.parser().max_input_bytes(), 10);
    }

    #[test]
    fn test_roster_default_and_file() {
        let config = Config::default();
        assert_eq!(config.roster().unwrap().members().len(), 4);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.toml");
        std::fs::write(
            &path,
            "[[members]]\nname = \"Solo\"\nemail = \"solo@example.com\"\ninstrument = \"Ukulele\"\n",
        )
        .unwrap();

        let config = Config {
            roster_path: Some(path),
            ..Config::default()
        };
        let roster = config.roster().unwrap();
        assert_eq!(roster.names(), vec!["Solo"]);
    }

    #[test]
    fn test_roster_missing_file_is_error() {
        let config = Config {
            roster_path: Some(PathBuf::from("/nonexistent/roster.toml")),
            ..Config::default()
        };
        assert!(config.roster().is_err());
    }

    #[test]
    fn test_quoted_numbers_accepted() {
        let config: Config = toml::from_str(
            "default_num_sets = \"3\"\ndefault_songs_per_set = \" 12 \"\nmax_import_bytes = 2048\n",
        )
        .unwrap();
        assert_eq!(config.default_num_sets, 3);
        assert_eq!(config.default_songs_per_set, 12);
        assert_eq!(config.max_import_bytes, 2048);
    }

    #[test]
    fn test_non_numeric_count_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("default_num_sets = \"three\"\n");
        assert!(result.is_err());

        let result: std::result::Result<Config, _> = toml::from_str("max_import_bytes = -1\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides_num_sets() {
        std::env::set_var("ECL_DEFAULT_NUM_SETS", "3");
        let result = Config::load();
        std::env::remove_var("ECL_DEFAULT_NUM_SETS");

        assert_eq!(result.unwrap().default_num_sets, 3);
    }

    #[test]
    fn test_config_load() {
        // Should not fail even if config file doesn't exist
        let result = Config::load();
        assert!(result.is_ok());
    }
}
