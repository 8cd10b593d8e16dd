use anyhow::{Context, Result};
use packing::{PackerConfig, MAX_RELAXED, WAGON_CAPACITY};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// How the train is reported on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown output format {0:?} (expected \"text\" or \"json\")")]
pub struct UnknownFormat(String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// Application configuration.
///
/// Layered: built-in defaults, then an optional TOML file, then `TRAIN_*`
/// environment variables, then CLI flags (applied by the binary).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    /// Capacity points per wagon.
    pub wagon_capacity: u32,
    /// Relaxed wagons one run may open.
    pub max_relaxed: u32,
    /// Reject the whole manifest if any record is malformed.
    pub strict: bool,
    /// Report format.
    pub output: OutputFormat,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            wagon_capacity: WAGON_CAPACITY,
            max_relaxed: MAX_RELAXED,
            strict: false,
            output: OutputFormat::Text,
        }
    }
}

impl TrainConfig {
    /// Load from a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).context(format!("Failed to read {}", path.display()))?;
        let config: TrainConfig =
            toml::from_str(&content).context("Failed to parse train config TOML")?;
        Ok(config)
    }

    /// Defaults overridden by the environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Override fields from `TRAIN_*` environment variables. Unparseable
    /// values are ignored with a warning.
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| std::env::var(key).ok());
    }

    fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("TRAIN_WAGON_CAPACITY") {
            match val.parse() {
                Ok(n) => self.wagon_capacity = n,
                Err(_) => tracing::warn!(value = %val, "Ignoring invalid TRAIN_WAGON_CAPACITY"),
            }
        }
        if let Some(val) = var("TRAIN_MAX_RELAXED") {
            match val.parse() {
                Ok(n) => self.max_relaxed = n,
                Err(_) => tracing::warn!(value = %val, "Ignoring invalid TRAIN_MAX_RELAXED"),
            }
        }
        if let Some(val) = var("TRAIN_STRICT") {
            match val.trim().to_lowercase().as_str() {
                "true" | "1" => self.strict = true,
                "false" | "0" => self.strict = false,
                _ => tracing::warn!(value = %val, "Ignoring invalid TRAIN_STRICT"),
            }
        }
        if let Some(val) = var("TRAIN_OUTPUT") {
            match val.parse() {
                Ok(format) => self.output = format,
                Err(e) => tracing::warn!("Ignoring TRAIN_OUTPUT: {}", e),
            }
        }
    }

    /// Core packer settings.
    pub fn packer_config(&self) -> PackerConfig {
        PackerConfig {
            wagon_capacity: self.wagon_capacity,
            max_relaxed: self.max_relaxed,
        }
    }
}
