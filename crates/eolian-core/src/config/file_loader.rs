//! File-based configuration loading

use std::fs;
use std::path::Path;

use super::engine_config::EngineConfig;
use crate::error::{EolianError, EolianResult};

/// Load configuration from a file
///
/// Supports JSON, TOML, and YAML formats based on file extension.
/// Returns default config if file doesn't exist.
pub fn load_from_file(path: &Path) -> EolianResult<EngineConfig> {
    if !path.exists() {
        return Ok(EngineConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        EolianError::io_with_path(
            format!("Failed to read config file: {}", e),
            path.display().to_string(),
        )
        .with_context("Reading configuration")
    })?;

    let config: EngineConfig = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            EolianError::config_with_context(
                format!("Failed to parse TOML config: {}", e),
                format!("Deserializing TOML configuration from '{}'", path.display()),
            )
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
            EolianError::config_with_context(
                format!("Failed to parse YAML config: {}", e),
                format!("Deserializing YAML configuration from '{}'", path.display()),
            )
        })?,
        _ => serde_json::from_str(&content).map_err(|e| {
            EolianError::config_with_context(
                format!("Failed to parse JSON config: {}", e),
                format!("Deserializing JSON configuration from '{}'", path.display()),
            )
        })?,
    };

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directives::SyntaxType;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("eolian.json");
        let config_json = r#"{
            "prefix": "$",
            "syntax": "traditional",
            "logging": {
                "level": "debug",
                "format": "json"
            }
        }"#;
        fs::write(&config_path, config_json).unwrap();

        let config = load_from_file(&config_path).unwrap();
        assert_eq!(config.prefix, "$");
        assert_eq!(config.syntax, SyntaxType::Traditional);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.ansi);
    }

    #[test]
    fn test_load_from_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("eolian.toml");
        let config_toml = r#"
prefix = "?"

[logging]
level = "info"
format = "pretty"
ansi = false
"#;
        fs::write(&config_path, config_toml).unwrap();

        let config = load_from_file(&config_path).unwrap();
        assert_eq!(config.prefix, "?");
        assert_eq!(config.syntax, SyntaxType::Keyword);
        assert_eq!(config.logging.format, "pretty");
        assert!(!config.logging.ansi);
    }

    #[test]
    fn test_load_from_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("eolian.yml");
        let yaml_content = r#"
prefix: "%"
syntax: slash
"#;
        fs::write(&config_path, yaml_content).unwrap();

        let config = load_from_file(&config_path).unwrap();
        assert_eq!(config.prefix, "%");
        assert_eq!(config.syntax, SyntaxType::Slash);
    }

    #[test]
    fn test_load_from_nonexistent_file() {
        let config = load_from_file(Path::new("/nonexistent/eolian.json")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_unreadable_path_reports_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("eolian.json");
        fs::create_dir(&config_path).unwrap();

        match load_from_file(&config_path) {
            Err(EolianError::Io { path, .. }) => {
                assert_eq!(path, Some(config_path.display().to_string()));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_load_from_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("invalid.json");
        fs::write(&config_path, "{ invalid json }").unwrap();

        let result = load_from_file(&config_path);
        assert!(matches!(result, Err(EolianError::Config { .. })));
    }
}
