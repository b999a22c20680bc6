//! Environment variable overrides

use std::env;

use super::engine_config::EngineConfig;
use crate::directives::SyntaxType;
use crate::error::{EolianError, EolianResult};

/// Apply `EOLIAN_*` environment variables on top of `config`
pub fn apply_env(config: &mut EngineConfig) -> EolianResult<()> {
    apply_env_with(config, |key| env::var(key).ok())
}

/// Apply overrides using `lookup` to read variables
///
/// Recognized: `EOLIAN_PREFIX`, `EOLIAN_SYNTAX`, `EOLIAN_LOG_LEVEL`,
/// `EOLIAN_LOG_FORMAT`.
pub fn apply_env_with<F>(config: &mut EngineConfig, lookup: F) -> EolianResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(prefix) = lookup("EOLIAN_PREFIX") {
        config.prefix = prefix;
    }

    if let Some(syntax) = lookup("EOLIAN_SYNTAX") {
        config.syntax = syntax.parse::<SyntaxType>().map_err(|e| {
            EolianError::config_with_context(
                format!("Invalid EOLIAN_SYNTAX value: {}", e),
                "Reading environment overrides",
            )
        })?;
    }

    if let Some(level) = lookup("EOLIAN_LOG_LEVEL") {
        config.logging.level = level;
    }

    if let Some(format) = lookup("EOLIAN_LOG_FORMAT") {
        config.logging.format = format;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_env_overrides() {
        let mut config = EngineConfig::default();
        apply_env_with(
            &mut config,
            lookup(&[
                ("EOLIAN_PREFIX", "?"),
                ("EOLIAN_SYNTAX", "traditional"),
                ("EOLIAN_LOG_LEVEL", "debug"),
            ]),
        )
        .unwrap();

        assert_eq!(config.prefix, "?");
        assert_eq!(config.syntax, SyntaxType::Traditional);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "compact");
    }

    #[test]
    fn test_no_overrides() {
        let mut config = EngineConfig::default();
        apply_env_with(&mut config, lookup(&[])).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_invalid_syntax() {
        let mut config = EngineConfig::default();
        let result = apply_env_with(&mut config, lookup(&[("EOLIAN_SYNTAX", "morse")]));
        assert!(matches!(result, Err(EolianError::Config { .. })));
    }
}
