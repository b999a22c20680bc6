//! Configuration display

use anyhow::Result;
use eolian_core::config::EngineConfig;

use crate::console::CliConsole;

/// Show the effective configuration
pub fn show(config: &EngineConfig) -> Result<()> {
    let console = CliConsole::new(true);

    console.print_header("Configuration");
    config.validate()?;
    console.success("Configuration is valid");

    console.print_row("prefix", &config.prefix);
    console.print_row("syntax", &config.syntax.to_string());
    console.print_row("log level", &config.logging.level);
    console.print_row("log format", &config.logging.format);
    Ok(())
}
