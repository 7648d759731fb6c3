//! Configuration for the pipeline

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunable pipeline parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Most recent procedural-status events kept per record
    pub status_history_limit: usize,

    /// Minimum usable subjects a classification must yield; below this the
    /// whole result is discarded
    pub subject_floor: usize,

    /// Maximum subjects kept per record
    pub subject_cap: usize,

    /// Maximum words kept per subject
    pub subject_word_cap: usize,

    /// Maximum time for a single enrichment call (seconds)
    pub enrichment_timeout_secs: u64,
}

impl PipelineConfig {
    /// Get the enrichment timeout as a Duration
    pub fn enrichment_timeout(&self) -> Duration {
        Duration::from_secs(self.enrichment_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.subject_cap == 0 {
            return Err("subject_cap must be greater than 0".to_string());
        }
        if self.subject_floor > self.subject_cap {
            return Err("subject_floor cannot exceed subject_cap".to_string());
        }
        if self.subject_word_cap == 0 {
            return Err("subject_word_cap must be greater than 0".to_string());
        }
        if self.enrichment_timeout_secs == 0 {
            return Err("enrichment_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            status_history_limit: 3,
            subject_floor: 3,
            subject_cap: 8,
            subject_word_cap: 7,
            enrichment_timeout_secs: 120,
        }
    }
}
