//! TOML-based application configuration.
//!
//! Stores:
//! - The default example points and query temperature
//! - Display preferences (unit suffix, table step)
//!
//! Configuration is stored at `~/.config/heatcurve/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::calculator::{CurveInputs, DEFAULT_UNIT};
use crate::error::{ConfigError, Result};

/// Default inputs used when a field is not given explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    #[serde(default = "default_warm_outside")]
    pub warm_outside: f64,
    #[serde(default = "default_warm_flow")]
    pub warm_flow: f64,
    #[serde(default = "default_cold_outside")]
    pub cold_outside: f64,
    #[serde(default = "default_cold_flow")]
    pub cold_flow: f64,
    #[serde(default = "default_outside")]
    pub outside: f64,
}

/// Display configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_unit")]
    pub unit: String,
    /// Default step for `table` sweeps, in °C
    #[serde(default = "default_table_step")]
    pub table_step: f64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/heatcurve/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub curve: CurveConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_warm_outside() -> f64 {
    20.0
}
fn default_warm_flow() -> f64 {
    25.0
}
fn default_cold_outside() -> f64 {
    -10.0
}
fn default_cold_flow() -> f64 {
    40.0
}
fn default_outside() -> f64 {
    10.0
}
fn default_unit() -> String {
    DEFAULT_UNIT.into()
}
fn default_table_step() -> f64 {
    5.0
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            warm_outside: default_warm_outside(),
            warm_flow: default_warm_flow(),
            cold_outside: default_cold_outside(),
            cold_flow: default_cold_flow(),
            outside: default_outside(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            unit: default_unit(),
            table_step: default_table_step(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> std::result::Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        let mut current = root;
        while let Some(part) = parts.next() {
            if part.is_empty() {
                return Err(unknown());
            }
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;
            let new_value = match existing {
                serde_json::Value::Number(_) => {
                    let n = value
                        .trim()
                        .parse::<f64>()
                        .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                    serde_json::Number::from_f64(n)
                        .map(serde_json::Value::Number)
                        .ok_or_else(|| invalid(format!("'{value}' is not a finite number")))?
                }
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value
                        .parse::<bool>()
                        .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
                ),
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    return Err(invalid("cannot replace a whole section".into()));
                }
                _ => serde_json::Value::String(value.into()),
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    fn path() -> std::result::Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the data directory, writing defaults on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::path()?)
    }

    /// Load from an explicit file, writing defaults if it does not exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                tracing::debug!(path = %path.display(), "loaded config");
                Ok(cfg)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to_path(path)?;
                Ok(cfg)
            }
            Err(err) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
            .into()),
        }
    }

    /// Persist to the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::path()?)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))?;
        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key without saving.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed
    /// into the key's type.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json)?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Set a config value by key and persist. Returns error if key is unknown.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.set_value(key, value)?;
        self.save()
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !(self.display.table_step.is_finite() && self.display.table_step > 0.0) {
            return Err(ConfigError::InvalidValue {
                key: "display.table_step".into(),
                message: "must be a positive number".into(),
            });
        }
        Ok(())
    }

    /// Configured defaults as raw calculator inputs.
    pub fn inputs(&self) -> CurveInputs {
        let c = &self.curve;
        CurveInputs {
            warm_outside: c.warm_outside.to_string(),
            warm_flow: c.warm_flow.to_string(),
            cold_outside: c.cold_outside.to_string(),
            cold_flow: c.cold_flow.to_string(),
            outside: c.outside.to_string(),
        }
    }
}
