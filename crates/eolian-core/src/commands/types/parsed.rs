//! Resolution output

use std::sync::Arc;

use super::command::CommandDescriptor;
use super::message::MessageCommand;
use crate::directives::CommandOptions;

/// The command that was invoked and the options extracted for it
#[derive(Debug, Clone)]
pub struct ParsedCommand {
    pub command: Arc<CommandDescriptor>,
    pub options: CommandOptions,
}

impl ParsedCommand {
    pub fn new(command: Arc<CommandDescriptor>, options: CommandOptions) -> Self {
        Self { command, options }
    }

    pub fn name(&self) -> &str {
        &self.command.name
    }

    /// JSON view of the command name and options
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "command": self.command.name,
            "options": self.options,
        })
    }
}

/// A message command and the options found in the message it was run on
#[derive(Debug, Clone)]
pub struct ParsedMessageCommand {
    pub command: Arc<MessageCommand>,
    pub options: CommandOptions,
}

impl ParsedMessageCommand {
    pub fn new(command: Arc<MessageCommand>, options: CommandOptions) -> Self {
        Self { command, options }
    }

    pub fn name(&self) -> &str {
        &self.command.name
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "command": self.command.name,
            "options": self.options,
        })
    }
}
