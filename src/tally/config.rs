use crate::error::{Result, TallyError};
use crate::store::fs::DEFAULT_SNAPSHOT_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Default low-stock threshold when neither config nor flag supplies one.
pub const DEFAULT_LOW_THRESHOLD: u64 = 5;

/// Configuration for tally, stored in .tally/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TallyConfig {
    /// Snapshot file to load from and save to
    #[serde(default = "default_snapshot_file")]
    pub snapshot_file: String,

    /// Threshold below which an item counts as low stock
    #[serde(default = "default_low_threshold")]
    pub low_threshold: u64,
}

fn default_snapshot_file() -> String {
    DEFAULT_SNAPSHOT_FILE.to_string()
}

fn default_low_threshold() -> u64 {
    DEFAULT_LOW_THRESHOLD
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            snapshot_file: default_snapshot_file(),
            low_threshold: DEFAULT_LOW_THRESHOLD,
        }
    }
}

impl TallyConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TallyError::Io)?;
        let config: TallyConfig =
            serde_json::from_str(&content).map_err(TallyError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TallyError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TallyError::Serialization)?;
        fs::write(config_path, content).map_err(TallyError::Io)?;
        Ok(())
    }

    /// Formatted value for a config key, or None for unknown keys
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "file" => Some(self.snapshot_file.clone()),
            "threshold" => Some(self.low_threshold.to_string()),
            _ => None,
        }
    }

    /// Set a config key from its string form; the error is a user-facing
    /// message, not a typed failure.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "file" => {
                if value.is_empty() {
                    return Err("Snapshot file name cannot be empty".to_string());
                }
                self.snapshot_file = value.to_string();
                Ok(())
            }
            "threshold" => {
                let threshold: u64 = value
                    .parse()
                    .map_err(|_| format!("Not a valid threshold: {}", value))?;
                self.low_threshold = threshold;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
