//! Configuration management for `gitgang-core`.
//!
//! Every deployment-specific value lives here: the maintainer allow-list, the
//! staging template markers, the ledger layout and the moderation endpoint and
//! retry schedule. Nothing in the library reads a global; callers pass a
//! [`GitGangConfig`] (or one of its sections) down explicitly.
//!
//! Configs are YAML. Every field has a default, so a file only needs the
//! values it overrides.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::errors::GitGangError;

/// Markers a staging document must keep from its template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StagingConfig {
    pub title: String,
    pub instructions: String,
    /// Entry fields are read from the lines after this marker.
    pub section_marker: String,
    /// List markers the entry section must still contain.
    pub list_markers: Vec<String>,
    /// Free-text note rendered into a fresh template.
    pub note: String,
}

impl Default for StagingConfig {
    fn default() -> Self {
        Self {
            title: "# Add Your Name Here".to_string(),
            instructions: "Want to join the Git Gang?".to_string(),
            section_marker: "Add your entry below this line".to_string(),
            list_markers: vec![
                "- Name:".to_string(),
                "- Username:".to_string(),
                "- Message:".to_string(),
            ],
            note: "**Note:** Name can be your real name or any alias/handle you prefer.".to_string(),
        }
    }
}

/// Layout of the contributors ledger.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LedgerConfig {
    pub heading: String,
    pub total_prefix: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            heading: "## Our Contributors".to_string(),
            total_prefix: "Total contributors:".to_string(),
        }
    }
}

/// Moderation endpoint and retry schedule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ModerationConfig {
    /// Full URL of the `containsprofanity` service; `?text=` is appended.
    pub endpoint: String,
    /// Per-attempt timeout in milliseconds.
    pub timeout_ms: u64,
    pub max_attempts: u32,
    /// Delay before attempt N+1, indexed by N-1. The last value repeats.
    pub retry_delays_ms: Vec<u64>,
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://www.purgomalum.com/service/containsprofanity".to_string(),
            timeout_ms: 5_000,
            max_attempts: 3,
            retry_delays_ms: vec![1_000, 2_000, 3_000],
        }
    }
}

impl ModerationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn retry_delays(&self) -> Vec<Duration> {
        self.retry_delays_ms.iter().copied().map(Duration::from_millis).collect()
    }
}

/// Represents the top-level configuration structure for Git Gang.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GitGangConfig {
    /// Usernames exempt from the duplicate check and pinned first in the ledger.
    pub maintainers: Vec<String>,
    pub staging: StagingConfig,
    pub ledger: LedgerConfig,
    pub moderation: ModerationConfig,
}

impl Default for GitGangConfig {
    fn default() -> Self {
        Self {
            maintainers: vec![
                "SashankBhamidi".to_string(),
                "github-actions[bot]".to_string(),
            ],
            staging: StagingConfig::default(),
            ledger: LedgerConfig::default(),
            moderation: ModerationConfig::default(),
        }
    }
}

impl GitGangConfig {
    /// Loads a configuration from a YAML file and validates it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!("Loaded configuration with {} maintainers.", config.maintainers.len());
        Ok(config)
    }

    /// Parses and validates a YAML configuration string.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: GitGangConfig = serde_yml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations the workflow cannot run with.
    pub fn validate(&self) -> Result<(), GitGangError> {
        let mut errors = Vec::new();

        if self.moderation.max_attempts == 0 {
            errors.push("moderation.max_attempts must be at least 1.".to_string());
        }
        if self.moderation.endpoint.trim().is_empty() {
            errors.push("moderation.endpoint cannot be empty.".to_string());
        }
        if self.ledger.heading.trim().is_empty() {
            errors.push("ledger.heading cannot be empty.".to_string());
        }
        if self.ledger.total_prefix.trim().is_empty() {
            errors.push("ledger.total_prefix cannot be empty.".to_string());
        }
        if self.staging.section_marker.trim().is_empty() {
            errors.push("staging.section_marker cannot be empty.".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(GitGangError::Config(errors.join(" ")))
        }
    }
}
