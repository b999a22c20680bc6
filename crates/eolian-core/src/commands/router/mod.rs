//! Message routing
//!
//! Finds the command a message invokes and resolves the rest of the message
//! against it.

use std::ops::Range;
use std::sync::Arc;

use tracing::{debug, info};

use super::registry::CommandRegistry;
use super::resolver::DirectiveResolver;
use super::schema::ApplicationCommandSchema;
use super::types::{CommandDescriptor, ParsedCommand, ParsedMessageCommand, SlashOptions};
use crate::config::EngineConfig;
use crate::directives::{DirectiveCatalog, SyntaxType, UserPermission};
use crate::error::{EolianError, EolianResult};

/// Entry point for turning input into a [`ParsedCommand`]
#[derive(Debug, Clone)]
pub struct CommandRouter {
    registry: Arc<CommandRegistry>,
    resolver: DirectiveResolver,
    prefix: String,
}

impl CommandRouter {
    /// Create a router with the built-in catalog and commands
    pub fn new(config: &EngineConfig) -> EolianResult<Self> {
        config.validate()?;
        let catalog = Arc::new(DirectiveCatalog::builtin()?);
        Self::with_parts(catalog, CommandRegistry::with_builtins(), config.prefix.clone())
    }

    /// Create a router from explicit parts
    ///
    /// Fails if a command declares directives the catalog does not have.
    pub fn with_parts(
        catalog: Arc<DirectiveCatalog>,
        registry: CommandRegistry,
        prefix: impl Into<String>,
    ) -> EolianResult<Self> {
        registry.validate(&catalog)?;
        info!(
            commands = registry.count(),
            directives = catalog.len(),
            "Command router ready"
        );

        Ok(Self {
            registry: Arc::new(registry),
            resolver: DirectiveResolver::new(catalog),
            prefix: prefix.into(),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn resolver(&self) -> &DirectiveResolver {
        &self.resolver
    }

    /// Check if a message is addressed to the bot
    #[inline]
    pub fn message_invokes_bot(&self, message: &str) -> bool {
        message.trim_start().starts_with(&self.prefix)
    }

    /// Parse a chat message
    ///
    /// In traditional syntax the first word after the prefix names the
    /// command. In keyword syntax any word outside delimiters may name it;
    /// the first one that does is taken out of the text.
    pub fn parse_message(
        &self,
        message: &str,
        permission: UserPermission,
        syntax: SyntaxType,
    ) -> EolianResult<ParsedCommand> {
        let body = message.trim();
        let body = body.strip_prefix(self.prefix.as_str()).unwrap_or(body);

        let (command, rest) = match syntax {
            SyntaxType::Traditional => {
                let body = body.trim_start();
                let end = body.find(char::is_whitespace).unwrap_or(body.len());
                let name = &body[..end];
                if name.is_empty() {
                    return Err(EolianError::missing_input("No command given"));
                }
                let command = self.registry.get_for(name, permission).ok_or_else(|| {
                    EolianError::not_found_resource(format!("Unknown command: {}", name), "command")
                })?;
                (command.clone(), body[end..].to_string())
            }
            SyntaxType::Keyword => {
                let (command, span) = self.find_command_word(body, permission).ok_or_else(|| {
                    EolianError::not_found_resource("No command found in message", "command")
                })?;
                let rest = format!("{} {}", &body[..span.start], &body[span.end..]);
                (command, rest)
            }
            SyntaxType::Slash => {
                return Err(EolianError::invalid_input_field(
                    "Slash commands are parsed from structured options",
                    "syntax",
                ));
            }
        };

        debug!(command = %command.name, %syntax, %permission, "Routing message");
        let options = self
            .resolver
            .resolve_text(&command, &rest, permission, syntax)?;
        Ok(ParsedCommand::new(command, options))
    }

    /// Parse a slash command invocation
    pub fn parse_slash(
        &self,
        name: &str,
        options: &SlashOptions,
        permission: UserPermission,
    ) -> EolianResult<ParsedCommand> {
        let name = name.trim().trim_start_matches('/');
        let command = self.registry.get_for(name, permission).ok_or_else(|| {
            EolianError::not_found_resource(format!("Unknown command: {}", name), "command")
        })?;

        debug!(command = %command.name, %permission, "Routing slash command");
        let resolved = self.resolver.resolve_slash(command, options, permission)?;
        Ok(ParsedCommand::new(command.clone(), resolved))
    }

    /// Parse a message command run on a chat message
    pub fn parse_message_command(
        &self,
        name: &str,
        text: &str,
        permission: UserPermission,
    ) -> EolianResult<ParsedMessageCommand> {
        let command = self
            .registry
            .get_message_for(name, permission)
            .ok_or_else(|| {
                EolianError::not_found_resource(
                    format!("Unknown message command: {}", name.trim()),
                    "message command",
                )
            })?;

        debug!(command = %command.name, %permission, "Routing message command");
        let options = self
            .resolver
            .resolve_message_command(command, text, permission)?;
        Ok(ParsedMessageCommand::new(command.clone(), options))
    }

    /// Definitions to register with the chat platform
    pub fn application_commands(&self) -> Vec<ApplicationCommandSchema> {
        self.registry.application_commands(self.resolver.catalog())
    }

    /// First word outside any delimiters that names an available command
    fn find_command_word(
        &self,
        text: &str,
        permission: UserPermission,
    ) -> Option<(Arc<CommandDescriptor>, Range<usize>)> {
        let mut depth = 0usize;
        let mut offset = 0;

        for word in text.split_whitespace() {
            let start = offset + text[offset..].find(word)?;
            offset = start + word.len();

            let bare = depth == 0 && !word.contains(['(', ')', '[', ']', '{', '}']);
            for c in word.chars() {
                match c {
                    '(' | '[' | '{' => depth += 1,
                    ')' | ']' | '}' => depth = depth.saturating_sub(1),
                    _ => {}
                }
            }

            if bare {
                if let Some(command) = self.registry.get_for(word, permission) {
                    return Some((command.clone(), start..offset));
                }
            }
        }

        None
    }
}
