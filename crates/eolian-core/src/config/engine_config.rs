//! Top-level engine configuration

use serde::{Deserialize, Serialize};

use super::logging_config::LoggingConfig;
use crate::directives::SyntaxType;
use crate::error::{EolianError, EolianResult};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Prefix that marks a message as addressed to the bot
    pub prefix: String,
    /// Syntax used for messages when none is given
    pub syntax: SyntaxType,
    pub logging: LoggingConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            prefix: "!".to_string(),
            syntax: SyntaxType::Keyword,
            logging: LoggingConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_syntax(mut self, syntax: SyntaxType) -> Self {
        self.syntax = syntax;
        self
    }

    /// Reject configurations the router cannot work with
    pub fn validate(&self) -> EolianResult<()> {
        if self.prefix.is_empty() {
            return Err(EolianError::config("Prefix must not be empty"));
        }
        if self.prefix.chars().any(char::is_whitespace) {
            return Err(EolianError::config(format!(
                "Prefix must not contain whitespace: {:?}",
                self.prefix
            )));
        }
        self.logging.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_default() {
        let config = EngineConfig::default();
        assert_eq!(config.prefix, "!");
        assert_eq!(config.syntax, SyntaxType::Keyword);
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_prefix() {
        assert!(EngineConfig::default().with_prefix("").validate().is_err());
        assert!(EngineConfig::default().with_prefix("! ").validate().is_err());
        assert!(EngineConfig::default().with_prefix("$$").validate().is_ok());
    }

    #[test]
    fn test_partial_deserialization() {
        let config: EngineConfig = serde_json::from_str(r#"{"syntax": "traditional"}"#).unwrap();
        assert_eq!(config.prefix, "!");
        assert_eq!(config.syntax, SyntaxType::Traditional);
        assert_eq!(config.logging, LoggingConfig::default());
    }
}
