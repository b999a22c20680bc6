//! Eolian CLI application
//!
//! Exercises the directive engine from a shell.
//!
//! ```bash
//! eolian parse "play spotify playlist (retrowave) shuffle"
//! eolian parse --syntax traditional "!list top 10"
//! eolian slash play source=spotify type=playlist search=retrowave
//! eolian message Play "you have to hear this https://youtu.be/dQw4w9WgXcQ"
//! eolian schema
//! eolian range 4:10 --length 50 --bottom
//! eolian commands --permission admin
//! eolian directives
//! ```
//!
//! Set RUST_LOG=debug to see why directives were dropped.

mod args;
mod commands;
mod console;
mod router;

use clap::Parser;
use eolian_core::config::{LoggingConfig, load_config};
use tracing_subscriber::EnvFilter;

use crate::args::Cli;
use crate::console::CliConsole;

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            CliConsole::new(false).error(&format!("Failed to load configuration: {}", e));
            std::process::exit(2);
        }
    };
    init_logging(&config.logging, cli.verbose);

    if let Err(e) = router::route(cli, config) {
        CliConsole::new(false).error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Install the tracing subscriber, RUST_LOG takes precedence over the config
fn init_logging(config: &LoggingConfig, verbose: bool) {
    let level = if verbose { "debug" } else { config.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi);

    match config.format.to_lowercase().as_str() {
        "json" => builder.json().init(),
        "pretty" => builder.pretty().init(),
        _ => builder.compact().init(),
    }
}
