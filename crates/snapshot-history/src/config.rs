/// Configuration for the history system: defaults, sanitizing, and JSON files.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "SNAPSHOT_HISTORY_CONFIG";

/// File name used when no override is given.
const CONFIG_FILE_NAME: &str = "snapshot-history.json";

/// Configuration for a `History`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Max snapshots retained (current, past and redo-able future).
    /// Oldest entries are evicted first. `None` = unbounded.
    pub max_depth: Option<usize>,
}

impl HistoryConfig {
    /// Resolves the config file path.
    ///
    /// Resolution order:
    /// 1. `SNAPSHOT_HISTORY_CONFIG` environment variable
    /// 2. `snapshot-history.json` next to the executable
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return PathBuf::from(path);
        }
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|d| d.join(CONFIG_FILE_NAME)))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (unreadable file, parse error, etc.).
    pub fn load_or_create(path: &Path) -> Self {
        if !path.exists() {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e:#}", path.display());
            }
            return config;
        }

        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                // Don't overwrite a broken file
                tracing::warn!("Using default history config: {e:#}");
                Self::default()
            }
        }
    }

    /// Reads and sanitizes config from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or isn't valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        config.sanitize();
        Ok(config)
    }

    /// Saves config to `path` as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Clamps values to valid ranges.
    pub fn sanitize(&mut self) {
        // A history always has room for the current snapshot.
        if let Some(max) = self.max_depth.as_mut() {
            *max = (*max).max(1);
        }
    }
}
