//! Engine configuration
//!
//! Configuration comes from an optional file (TOML, YAML or JSON), then
//! `EOLIAN_*` environment variables, then validation.

mod engine_config;
mod env_loader;
mod file_loader;
mod loader;
mod logging_config;

pub use engine_config::EngineConfig;
pub use env_loader::{apply_env, apply_env_with};
pub use file_loader::load_from_file;
pub use loader::load_config;
pub use logging_config::LoggingConfig;
