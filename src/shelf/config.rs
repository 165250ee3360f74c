//! # Configuration
//!
//! Shelf configuration lives in `config.json` inside the data directory.
//! A missing file means defaults; unknown fields are ignored.
//!
//! | Key          | Default | Description                                      |
//! |--------------|---------|--------------------------------------------------|
//! | `slot-key`   | `books` | Storage key holding the serialized book list     |
//! | `on-corrupt` | `fail`  | `fail` to error on a corrupt slot, `empty` to read it as empty |

use crate::error::{Result, ShelfError};
use crate::store::fs_storage::validate_key;
use crate::store::{CorruptSlotPolicy, BOOKS_KEY};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Storage key whose item file would be the config file itself.
const RESERVED_SLOT_KEY: &str = "config";

/// Configuration for shelf, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Storage key for the book list
    #[serde(default = "default_slot_key")]
    pub slot_key: String,

    /// Behavior when the stored book list cannot be parsed
    #[serde(default)]
    pub on_corrupt: CorruptSlotPolicy,
}

fn default_slot_key() -> String {
    BOOKS_KEY.to_string()
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            slot_key: default_slot_key(),
            on_corrupt: CorruptSlotPolicy::default(),
        }
    }
}

impl ShelfConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig = serde_json::from_str(&content).map_err(|e| {
            ShelfError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "slot-key" => Some(self.slot_key.clone()),
            "on-corrupt" => Some(self.on_corrupt.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "slot-key" => {
                if value.is_empty() {
                    return Err("slot-key cannot be empty".to_string());
                }
                if value.eq_ignore_ascii_case(RESERVED_SLOT_KEY) {
                    return Err(format!("slot-key cannot be '{}'", value));
                }
                validate_key(value)
                    .map_err(|_| format!("slot-key '{}' is not a valid storage key", value))?;
                self.slot_key = value.to_string();
                Ok(())
            }
            "on-corrupt" => {
                self.on_corrupt = value.parse()?;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        vec![
            ("slot-key", self.slot_key.clone()),
            ("on-corrupt", self.on_corrupt.to_string()),
        ]
    }
}
