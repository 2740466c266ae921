// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! History configuration
//!
//! ```toml
//! recovery_enabled = true
//! timeline_enabled = true
//! recovery_log = "logs/recovery.log"
//! timeline_log = "logs/timeline.jsonl"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("{0} is required when its sink is enabled")]
    MissingPath(&'static str),
}

/// Which downstream concerns receive history events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HistoryConfig {
    #[serde(default = "default_recovery_enabled")]
    pub recovery_enabled: bool,
    #[serde(default)]
    pub timeline_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_log: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline_log: Option<PathBuf>,
}

fn default_recovery_enabled() -> bool {
    true
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            recovery_enabled: default_recovery_enabled(),
            timeline_enabled: false,
            recovery_log: None,
            timeline_log: None,
        }
    }
}

impl HistoryConfig {
    /// Parse configuration from TOML content
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    ///
    /// Relative log paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&content)?;

        if let Some(base) = path.parent() {
            config.recovery_log = config.recovery_log.map(|p| base.join(p));
            config.timeline_log = config.timeline_log.map(|p| base.join(p));
        }

        Ok(config)
    }

    /// Path of the recovery log, required when recovery is enabled
    pub fn recovery_log_path(&self) -> Result<&Path, ConfigError> {
        self.recovery_log
            .as_deref()
            .ok_or(ConfigError::MissingPath("recovery_log"))
    }

    /// Path of the timeline log, required when the timeline is enabled
    pub fn timeline_log_path(&self) -> Result<&Path, ConfigError> {
        self.timeline_log
            .as_deref()
            .ok_or(ConfigError::MissingPath("timeline_log"))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
