use crate::error::{AidreqError, Result};
use crate::pagination::DEFAULT_PAGE_SIZE;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Overrides the data directory when set.
pub const HOME_ENV: &str = "AIDREQ_HOME";

/// Keys accepted by [`AidreqConfig::get`] and [`AidreqConfig::set`].
pub const CONFIG_KEYS: [&str; 2] = ["page-size", "log-level"];

/// Configuration for aidreq, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AidreqConfig {
    /// Records per page for list queries
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Fallback log filter when `AIDREQ_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for AidreqConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            log_level: default_log_level(),
        }
    }
}

impl AidreqConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: AidreqConfig = serde_json::from_str(&content)?;
        if config.page_size == 0 {
            return Err(AidreqError::Config(format!(
                "page_size must be at least 1 in {}",
                config_path.display()
            )));
        }
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "page-size" => Some(self.page_size.to_string()),
            "log-level" => Some(self.log_level.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "page-size" => self.set_page_size(value),
            "log-level" => self.set_log_level(value),
            _ => Err(AidreqError::Config(format!("Unknown config key: {}", key))),
        }
    }

    fn set_page_size(&mut self, value: &str) -> Result<()> {
        match value.trim().parse::<usize>() {
            Ok(size) if size > 0 => {
                self.page_size = size;
                Ok(())
            }
            _ => Err(AidreqError::Config(format!(
                "page-size must be a positive integer, got '{}'",
                value
            ))),
        }
    }

    fn set_log_level(&mut self, value: &str) -> Result<()> {
        let level = value.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(AidreqError::Config(format!(
                "log-level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                value
            )));
        }
        self.log_level = level;
        Ok(())
    }
}

/// Where requests and config live: `AIDREQ_HOME` if set, else the platform data dir.
pub fn resolve_data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }

    ProjectDirs::from("org", "aidreq", "aidreq")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AidreqError::Config("Could not determine data directory".to_string()))
}
