//! Counter configuration module.
//!
//! This module defines configuration related to tokenization and reporting:
//! how raw tokens are cleaned up before insertion and which entries make it
//! into the final report.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Counter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Whether to strip trailing punctuation from tokens before counting
    pub trim_punctuation: bool,

    /// Minimum occurrence count for a word to appear in the report
    pub min_count: u64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            trim_punctuation: true,
            min_count: 1,
        }
    }
}

impl Validate for CounterConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.min_count == 0 {
            return Err(ConfigError::ValidationError(
                "min_count must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
