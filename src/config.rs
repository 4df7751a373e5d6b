use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};

use incubator_core::store::{DEFAULT_DATA_FILE, DEFAULT_LOG_FILE};

const APP_NAME: &str = "egg-incubator";
const CONFIG_FILE: &str = "config.json";

/// One hour between auto-refresh renders.
pub const DEFAULT_REFRESH_SECS: u64 = 3600;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON file holding the eight slots
    pub data_file: PathBuf,
    /// Append-only audit log
    pub log_file: PathBuf,
    /// Seconds between auto-refresh renders
    pub refresh_interval_secs: u64,
    /// Colorize the grid with terminal escape codes
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            refresh_interval_secs: DEFAULT_REFRESH_SECS,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the user's config directory
    /// when no path is given. A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => match get_config_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", config_path.display()))?;

        Ok(config)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs.max(1))
    }
}

fn get_config_path() -> Option<PathBuf> {
    let mut path = config_dir()?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Some(path)
}
