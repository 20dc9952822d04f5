//! Application configuration.
//!
//! Settings live in `config.json` inside the platform data directory (see
//! [`DataStorage`]). A missing file is not an error: defaults are used until
//! the user changes something.
//!
//! ```json
//! {
//!   "database_file": "tasktrack.db",
//!   "checkpoint_interval_secs": 60
//! }
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasktrack::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.set_checkpoint_interval(30)?;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_DATABASE_FILE: &str = "tasktrack.db";
pub const DEFAULT_CHECKPOINT_INTERVAL_SECS: u64 = 60;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Store file name. Relative names resolve inside the data directory.
    pub database_file: String,

    /// How often the running task is checkpointed while tracking.
    pub checkpoint_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_file: DEFAULT_DATABASE_FILE.to_string(),
            checkpoint_interval_secs: DEFAULT_CHECKPOINT_INTERVAL_SECS,
        }
    }
}

impl Config {
    /// Reads the config from the data directory, falling back to defaults
    /// when there is no file yet.
    pub fn read() -> Result<Config> {
        Self::read_from(&Self::path()?)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// Location of `config.json`.
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Absolute path of the store file.
    pub fn database_path(&self) -> Result<PathBuf> {
        let file = Path::new(&self.database_file);
        if file.is_absolute() {
            return Ok(file.to_path_buf());
        }
        DataStorage::new().get_path(&self.database_file)
    }

    pub fn set_checkpoint_interval(&mut self, secs: u64) -> Result<()> {
        if secs == 0 {
            msg_bail_anyhow!(Message::ConfigInvalidInterval(secs));
        }
        self.checkpoint_interval_secs = secs;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.checkpoint_interval_secs == 0 {
            msg_bail_anyhow!(Message::ConfigInvalidInterval(self.checkpoint_interval_secs));
        }
        Ok(())
    }
}
