use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Properties file read by `vermouth load` when no file is given
pub const DEFAULT_PROPERTIES_FILE: &str = "version.properties";

/// Default log level when neither config nor environment sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log file name inside the data directory
pub const LOG_FILE_NAME: &str = "vermouth.log";

/// Environment variable that overrides the configured log filter
pub const LOG_ENV_VAR: &str = "VERMOUTH_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub log: LogConfig,
    pub properties_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            properties_file: PathBuf::from(DEFAULT_PROPERTIES_FILE),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Logging-related configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LogConfig {
    /// Filter directive, e.g. "debug" or "vermouth=trace"
    pub level: String,
    /// Write logs to [`log_path`] instead of stderr
    pub to_file: bool,
    /// Emit JSON lines instead of human-readable text
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            to_file: false,
            json: false,
        }
    }
}

/// Returns the path to the data directory for vermouth.
/// Uses $XDG_DATA_HOME/vermouth if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/vermouth,
/// or ./vermouth if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join(LOG_FILE_NAME)
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("vermouth")
}
