//! Command registry types and core implementation

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use super::super::types::{CommandDescriptor, MessageCommand};
use crate::directives::{DirectiveCatalog, UserPermission};
use crate::error::{EolianError, EolianResult};

/// Registry of command declarations
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    /// Registered commands by lowercase name
    pub(super) commands: HashMap<String, Arc<CommandDescriptor>>,
    /// Registered message commands by lowercase name
    pub(super) message_commands: HashMap<String, Arc<MessageCommand>>,
}

impl CommandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in commands
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_builtins();
        registry
    }

    /// Register a command, replacing any previous one with the same name
    pub fn register(&mut self, command: CommandDescriptor) {
        self.commands
            .insert(command.name.clone(), Arc::new(command));
    }

    /// Get a command by name, regardless of permission
    pub fn get(&self, name: &str) -> Option<&Arc<CommandDescriptor>> {
        self.commands.get(&name.trim().to_lowercase())
    }

    /// Get a command the caller is allowed to use
    pub fn get_for(
        &self,
        name: &str,
        permission: UserPermission,
    ) -> Option<&Arc<CommandDescriptor>> {
        self.get(name)
            .filter(|command| permission.allows(command.permission))
    }

    /// Commands the caller is allowed to use, by category then name
    pub fn list(&self, permission: UserPermission) -> Vec<&Arc<CommandDescriptor>> {
        let mut commands: Vec<_> = self
            .commands
            .values()
            .filter(|command| permission.allows(command.permission))
            .collect();
        commands.sort_by(|a, b| {
            (a.category as u8, &a.name).cmp(&(b.category as u8, &b.name))
        });
        commands
    }

    /// Check if a command exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove a command
    pub fn remove(&mut self, name: &str) -> Option<Arc<CommandDescriptor>> {
        self.commands.remove(&name.trim().to_lowercase())
    }

    /// Get command count
    pub fn count(&self) -> usize {
        self.commands.len()
    }

    /// Register a message command, replacing any previous one with the same name
    pub fn register_message(&mut self, command: MessageCommand) {
        self.message_commands
            .insert(command.name.to_lowercase(), Arc::new(command));
    }

    /// Get a message command the caller is allowed to use
    pub fn get_message_for(
        &self,
        name: &str,
        permission: UserPermission,
    ) -> Option<&Arc<MessageCommand>> {
        self.message_commands
            .get(&name.trim().to_lowercase())
            .filter(|command| permission.allows(command.permission))
    }

    /// Message commands, by name
    pub fn message_commands(&self) -> Vec<&Arc<MessageCommand>> {
        let mut commands: Vec<_> = self.message_commands.values().collect();
        commands.sort_by(|a, b| a.name.cmp(&b.name));
        commands
    }

    /// Check every command against the catalog
    ///
    /// Declared keywords must be keywords, declared patterns must be
    /// patterns, and conflicts may only name declared directives.
    pub fn validate(&self, catalog: &DirectiveCatalog) -> EolianResult<()> {
        let mut names: Vec<_> = self.commands.keys().collect();
        names.sort();

        for name in names {
            let command = &self.commands[name];
            for keyword in &command.keywords {
                if catalog.keyword(keyword).is_none() {
                    warn!(
                        command = %command.name,
                        directive = %keyword,
                        "Unknown keyword declared"
                    );
                    return Err(EolianError::config_with_context(
                        format!("Command {} declares unknown keyword {}", command.name, keyword),
                        "Validating command registry",
                    ));
                }
            }
            for pattern in &command.patterns {
                if catalog.pattern(pattern).is_none() {
                    return Err(unknown_pattern(&command.name, pattern));
                }
            }
            for (a, b) in &command.conflicts {
                for directive in [a, b] {
                    let declared =
                        command.declares_keyword(directive) || command.declares_pattern(directive);
                    if !declared {
                        warn!(
                            command = %command.name,
                            directive = %directive,
                            "Conflict names undeclared directive"
                        );
                        return Err(EolianError::config_with_context(
                            format!(
                                "Command {} declares a conflict on {} which it does not accept",
                                command.name, directive
                            ),
                            "Validating command registry",
                        ));
                    }
                }
            }
        }

        for command in self.message_commands() {
            for pattern in &command.patterns {
                if catalog.pattern(pattern).is_none() {
                    return Err(unknown_pattern(&command.name, pattern));
                }
            }
        }

        Ok(())
    }
}

fn unknown_pattern(command: &str, pattern: &str) -> EolianError {
    warn!(command, directive = pattern, "Unknown pattern declared");
    EolianError::config_with_context(
        format!("Command {} declares unknown pattern {}", command, pattern),
        "Validating command registry",
    )
}
