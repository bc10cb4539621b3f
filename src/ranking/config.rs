//! Scorer configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RankSimError, Result};
use crate::ranking::item::DEFAULT_KEY_FIELD;

/// Configuration for [`RankingSimilarity`](crate::ranking::RankingSimilarity).
///
/// Missing fields take their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingSimilarityConfig {
    /// Minimum score for a comparison to count as successful.
    pub success_threshold: f64,
    /// RBO persistence `p`, in `(0, 1)`. Lower values weight the top ranks more.
    pub persistence: f64,
    /// Weight of the rank-biased overlap term; the top-k Kendall order term
    /// gets the remainder.
    pub overlap_weight: f64,
    /// Top-k Kendall penalty `p`, in `[0, 1]`, for a pair of items that only
    /// one of the rankings contains.
    pub kendall_penalty: f64,
    /// Record field holding the comparison key.
    pub key_field: String,
}

impl Default for RankingSimilarityConfig {
    fn default() -> Self {
        Self {
            success_threshold: 0.1,
            persistence: 0.9,
            overlap_weight: 0.5,
            kendall_penalty: 0.5,
            key_field: DEFAULT_KEY_FIELD.to_string(),
        }
    }
}

impl RankingSimilarityConfig {
    /// Default configuration with the given success threshold.
    pub fn with_threshold(success_threshold: f64) -> Self {
        Self {
            success_threshold,
            ..Self::default()
        }
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Check that every parameter is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.success_threshold.is_finite() {
            return Err(RankSimError::invalid_config(format!(
                "success_threshold must be finite, got {}",
                self.success_threshold
            )));
        }
        if !(self.persistence > 0.0 && self.persistence < 1.0) {
            return Err(RankSimError::invalid_config(format!(
                "persistence must be in (0, 1), got {}",
                self.persistence
            )));
        }
        if !(0.0..=1.0).contains(&self.overlap_weight) {
            return Err(RankSimError::invalid_config(format!(
                "overlap_weight must be in [0, 1], got {}",
                self.overlap_weight
            )));
        }
        if !(0.0..=1.0).contains(&self.kendall_penalty) {
            return Err(RankSimError::invalid_config(format!(
                "kendall_penalty must be in [0, 1], got {}",
                self.kendall_penalty
            )));
        }
        if self.key_field.is_empty() {
            return Err(RankSimError::invalid_config("key_field cannot be empty"));
        }
        Ok(())
    }
}
