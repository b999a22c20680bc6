//! Message, slash and message command parsing

use anyhow::{Context, Result};
use eolian_core::commands::{CommandRouter, ParsedCommand, SlashOptions};
use eolian_core::config::EngineConfig;
use eolian_core::directives::{SyntaxType, UserPermission};

/// Parse a chat message and print the resolved command as JSON
pub fn run(
    config: &EngineConfig,
    message: &str,
    permission: UserPermission,
    syntax: SyntaxType,
) -> Result<()> {
    let router = CommandRouter::new(config).context("Failed to build command router")?;

    if syntax == SyntaxType::Traditional && !router.message_invokes_bot(message) {
        tracing::warn!(prefix = %router.prefix(), "Message does not start with the prefix");
    }

    let parsed = router.parse_message(message, permission, syntax)?;
    print_parsed(&parsed)
}

/// Resolve a slash command and print the resolved command as JSON
pub fn run_slash(
    config: &EngineConfig,
    command: &str,
    options: Vec<(String, String)>,
    permission: UserPermission,
) -> Result<()> {
    let router = CommandRouter::new(config).context("Failed to build command router")?;
    let options: SlashOptions = options.into_iter().collect();

    let parsed = router.parse_slash(command, &options, permission)?;
    print_parsed(&parsed)
}

/// Run a message command and print the resolved command as JSON
pub fn run_message_command(
    config: &EngineConfig,
    command: &str,
    text: &str,
    permission: UserPermission,
) -> Result<()> {
    let router = CommandRouter::new(config).context("Failed to build command router")?;

    let parsed = router.parse_message_command(command, text, permission)?;
    print_json(&parsed.to_json())
}

/// Print the definitions to register with the chat platform
pub fn show_schema(config: &EngineConfig) -> Result<()> {
    let router = CommandRouter::new(config).context("Failed to build command router")?;
    print_json(&serde_json::to_value(router.application_commands())?)
}

fn print_parsed(parsed: &ParsedCommand) -> Result<()> {
    print_json(&parsed.to_json())
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
