//! Logging configuration

use serde::{Deserialize, Serialize};

use crate::error::{EolianError, EolianResult};

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const FORMATS: [&str; 3] = ["pretty", "compact", "json"];

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (json, pretty, compact)
    pub format: String,
    /// Whether to colorize console output
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
            ansi: true,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> EolianResult<()> {
        if !LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(EolianError::config(format!(
                "Unknown log level '{}', expected one of: {}",
                self.level,
                LEVELS.join(", ")
            )));
        }
        if !FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(EolianError::config(format!(
                "Unknown log format '{}', expected one of: {}",
                self.format,
                FORMATS.join(", ")
            )));
        }
        Ok(())
    }
}
