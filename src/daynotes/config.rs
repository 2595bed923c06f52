use crate::error::{DaynotesError, Result};
use crate::store::fs::validate_key;
use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub const CONFIG_KEYS: [&str; 2] = ["storage-key", "log-level"];

/// Configuration for daynotes, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DaynotesConfig {
    /// Name of the blob the notes are saved under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Log level used when `--verbose` is not given
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for DaynotesConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            log_level: default_log_level(),
        }
    }
}

impl DaynotesConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DaynotesError::Io)?;
        let config: DaynotesConfig =
            serde_json::from_str(&content).map_err(DaynotesError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DaynotesError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DaynotesError::Serialization)?;
        fs::write(config_path, content).map_err(DaynotesError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "log-level" => Some(self.log_level.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "storage-key" => {
                validate_key(value).map_err(|_| {
                    DaynotesError::Config(format!(
                        "Invalid storage key: {:?} (letters, digits, '.', '_' and '-' only)",
                        value
                    ))
                })?;
                self.storage_key = value.to_string();
            }
            "log-level" => {
                let level = value.to_ascii_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(DaynotesError::Config(format!(
                        "Unsupported log level: {:?} (expected {})",
                        value,
                        LOG_LEVELS.join("|")
                    )));
                }
                self.log_level = level;
            }
            _ => {
                return Err(DaynotesError::Config(format!(
                    "Unknown config key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}
