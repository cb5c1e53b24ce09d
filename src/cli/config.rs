//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::store::{SeedNote, default_seed};

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Database file path
    pub db: Option<PathBuf>,

    /// TOML file with sample notes used to seed an empty database,
    /// replacing the built-in set
    pub seed_file: Option<PathBuf>,
}

/// On-disk shape of a seed file: a list of `[[note]]` tables.
#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(rename = "note", default)]
    notes: Vec<SeedNote>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/alem/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("alem")
            .join("config.toml")
    }

    /// Resolve the database path, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--db` argument
    /// 2. Config file `db` setting
    /// 3. `None`, meaning the platform default location (with its
    ///    current-directory fallback) applies
    pub fn db_path(&self, cli_db: Option<&PathBuf>) -> Option<PathBuf> {
        cli_db.cloned().or_else(|| self.db.clone())
    }

    /// Returns the seed set for an empty database: the contents of the
    /// configured seed file, or the built-in samples when none is set.
    pub fn seed_notes(&self) -> Result<Vec<SeedNote>> {
        let Some(path) = &self.seed_file else {
            return Ok(default_seed());
        };

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file: {}", path.display()))?;
        let seed_file: SeedFile = toml::from_str(&contents)
            .with_context(|| format!("failed to parse seed file: {}", path.display()))?;
        Ok(seed_file.notes)
    }
}
