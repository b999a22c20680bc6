//! Command routing logic for CLI

use anyhow::Result;
use eolian_core::config::EngineConfig;

use crate::args::{Cli, Commands};
use crate::commands;

/// Route CLI commands to their respective handlers
pub fn route(cli: Cli, config: EngineConfig) -> Result<()> {
    match cli.command {
        Commands::Parse {
            message,
            permission,
            syntax,
        } => {
            let syntax = syntax.unwrap_or(config.syntax);
            commands::parse::run(&config, &message, permission, syntax)
        }
        Commands::Slash {
            command,
            options,
            permission,
        } => commands::parse::run_slash(&config, &command, options, permission),
        Commands::Message {
            command,
            text,
            permission,
        } => commands::parse::run_message_command(&config, &command, &text, permission),
        Commands::Schema => commands::parse::show_schema(&config),
        Commands::Range {
            range,
            length,
            bottom,
        } => commands::range::run(&range, length, bottom),
        Commands::Commands { permission } => commands::list::show_commands(permission),
        Commands::Directives { syntax } => commands::list::show_directives(syntax),
        Commands::Config => commands::config::show(&config),
    }
}
