use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Optional user settings. Every key may be omitted from the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_csv_path")]
    pub csv_path: String,
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    #[serde(default = "default_fill_text")]
    pub fill_text: String,
}

fn default_csv_path() -> String {
    "../sessions.csv".to_string()
}
fn default_recent_limit() -> usize {
    5
}
fn default_fill_text() -> String {
    "unknown".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            recent_limit: default_recent_limit(),
            fill_text: default_fill_text(),
        }
    }
}

impl Config {
    /// `~/.vibestats` on Unix-likes, the roaming config dir on Windows.
    /// Falls back to `./.vibestats` when neither is known.
    pub fn config_dir() -> PathBuf {
        let base = if cfg!(target_os = "windows") {
            dirs::config_dir().map(|d| d.join("vibestats"))
        } else {
            dirs::home_dir().map(|h| h.join(".vibestats"))
        };
        base.unwrap_or_else(|| PathBuf::from(".vibestats"))
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("vibestats.conf")
    }

    /// Load configuration from the standard location, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`, or defaults if the file does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

        // An empty file is a valid "all defaults" config
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }
}
