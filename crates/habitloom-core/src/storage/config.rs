//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Default frequency applied when the CLI omits `--frequency`
//! - Whether mutating commands echo the weekly progress chart
//!
//! Configuration is stored at `~/.config/habitloom/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::habit::Frequency;

use super::data_dir;

/// Habit defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitsConfig {
    #[serde(default)]
    pub default_frequency: Frequency,
}

/// Terminal output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Print the ASCII weekly chart after mutating commands.
    #[serde(default = "default_true")]
    pub weekly_chart: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/habitloom/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub habits: HabitsConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

fn default_true() -> bool {
    true
}

impl Default for HabitsConfig {
    fn default() -> Self {
        Self {
            default_frequency: Frequency::Daily,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { weekly_chart: true }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            habits: HabitsConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    fn pointer(key: &str) -> String {
        format!("/{}", key.replace('.', "/"))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        match json.pointer(&Self::pointer(key))? {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key and persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed
    /// as the key's type, or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut json = serde_json::to_value(&*self)?;
        let slot = json
            .pointer_mut(&Self::pointer(key))
            .ok_or_else(|| format!("unknown config key: {key}"))?;

        let new_value = match slot {
            serde_json::Value::Bool(_) => serde_json::Value::Bool(value.parse::<bool>()?),
            serde_json::Value::Number(_) => {
                let n = value
                    .parse::<u64>()
                    .map_err(|_| format!("cannot parse '{value}' as number"))?;
                serde_json::Value::Number(n.into())
            }
            serde_json::Value::Object(_) => return Err(format!("'{key}' is a section").into()),
            _ => serde_json::Value::String(value.into()),
        };
        *slot = new_value;

        *self = serde_json::from_value(json)?;
        self.save()?;
        Ok(())
    }
}
