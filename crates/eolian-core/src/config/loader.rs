//! Layered configuration loading

use std::path::Path;

use tracing::debug;

use super::engine_config::EngineConfig;
use super::env_loader::apply_env;
use super::file_loader::load_from_file;
use crate::error::EolianResult;

/// Load configuration from `path` (if any), apply environment overrides and
/// validate the result
pub fn load_config(path: Option<&Path>) -> EolianResult<EngineConfig> {
    let mut config = match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading configuration file");
            load_from_file(path)?
        }
        None => EngineConfig::default(),
    };

    apply_env(&mut config)?;
    config.validate()?;
    Ok(config)
}
