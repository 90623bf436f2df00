//! Configuration loading and parsing.
//!
//! Parses `dm.toml` (or an override path provided by the binary). Every table
//! and key is optional; missing keys take their defaults and unknown keys are
//! ignored. A file that fails to parse is logged and replaced by defaults so a
//! typo in the config never prevents editing.
//!
//! ```toml
//! [gutter]
//! line_numbers = true
//! min_digits = 3
//!
//! [status]
//! enabled = true
//! message_ms = 3000
//!
//! [log]
//! dir = "/tmp/dm-logs"
//! ```

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf, time::Duration};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "dm.toml";
const MAX_GUTTER_DIGITS: u16 = 10;

#[derive(Debug, Deserialize, Clone)]
pub struct GutterConfig {
    #[serde(default = "GutterConfig::default_line_numbers")]
    pub line_numbers: bool,
    #[serde(default = "GutterConfig::default_min_digits")]
    pub min_digits: u16,
}

impl Default for GutterConfig {
    fn default() -> Self {
        Self {
            line_numbers: Self::default_line_numbers(),
            min_digits: Self::default_min_digits(),
        }
    }
}

impl GutterConfig {
    const fn default_line_numbers() -> bool {
        true
    }
    const fn default_min_digits() -> u16 {
        3
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct StatusConfig {
    #[serde(default = "StatusConfig::default_enabled")]
    pub enabled: bool,
    #[serde(default = "StatusConfig::default_message_ms")]
    pub message_ms: u64,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            message_ms: Self::default_message_ms(),
        }
    }
}

impl StatusConfig {
    const fn default_enabled() -> bool {
        true
    }
    const fn default_message_ms() -> u64 {
        3000
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct LogConfig {
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub gutter: GutterConfig,
    #[serde(default)]
    pub status: StatusConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub file: ConfigFile,    // parsed (or default) data
}

/// Best-effort config path following platform conventions (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("dm").join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config {
                raw: Some(content),
                file,
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Rows reserved at the bottom of the screen for the status line.
    pub fn status_rows(&self) -> u16 {
        u16::from(self.file.status.enabled)
    }

    /// Minimum gutter digits, clamped to `1..=10`.
    pub fn gutter_min_digits(&self) -> u16 {
        self.file.gutter.min_digits.clamp(1, MAX_GUTTER_DIGITS)
    }

    pub fn line_numbers(&self) -> bool {
        self.file.gutter.line_numbers
    }

    pub fn message_ttl(&self) -> Duration {
        Duration::from_millis(self.file.status.message_ms)
    }

    /// Directory the log file is written to: `[log] dir`, else the platform
    /// cache dir, else the working directory.
    pub fn log_dir(&self) -> PathBuf {
        if let Some(dir) = &self.file.log.dir {
            return dir.clone();
        }
        dirs::cache_dir()
            .map(|d| d.join("dm"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

}
