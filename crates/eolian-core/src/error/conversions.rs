//! From trait implementations for EolianError conversions

use super::types::EolianError;

impl From<std::io::Error> for EolianError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for EolianError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string(), "json")
    }
}

impl From<toml::de::Error> for EolianError {
    fn from(error: toml::de::Error) -> Self {
        Self::serialization(error.to_string(), "toml")
    }
}

impl From<serde_yaml::Error> for EolianError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::serialization(error.to_string(), "yaml")
    }
}
