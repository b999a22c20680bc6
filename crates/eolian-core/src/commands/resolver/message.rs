//! Message command resolution

use tracing::debug;

use super::DirectiveResolver;
use super::builder::{CollisionPolicy, OptionsBuilder};
use super::text::strip_empty_delimiters;
use crate::commands::types::MessageCommand;
use crate::directives::matcher::collapse_whitespace;
use crate::directives::{CommandOptions, DirectiveValue, SyntaxType, UserPermission, names};
use crate::error::EolianResult;

impl DirectiveResolver {
    /// Resolve the text of a chat message a message command was run on
    ///
    /// Declared patterns other than SEARCH are extracted as in traditional
    /// text. The text left over becomes SEARCH when the command declares it.
    /// Leftover text is never an error: the message was written for people,
    /// not for the bot.
    pub fn resolve_message_command(
        &self,
        command: &MessageCommand,
        text: &str,
        permission: UserPermission,
    ) -> EolianResult<CommandOptions> {
        let mut builder = OptionsBuilder::new(CollisionPolicy::FirstMatchWins);
        let mut remaining = text.to_string();

        let patterns = self
            .catalog
            .all_patterns()
            .iter()
            .filter(|pattern| pattern.name != names::SEARCH)
            .filter(|pattern| command.declares_pattern(&pattern.name));
        for pattern in patterns {
            let Some(found) = pattern.match_text(&remaining, SyntaxType::Traditional) else {
                continue;
            };
            remaining = found.remainder;

            if !permission.allows(pattern.permission) {
                debug!(
                    directive = %pattern.name,
                    %permission,
                    "Ignoring pattern above caller permission"
                );
                continue;
            }
            builder.record(&pattern.name, pattern.group, found.payload)?;
        }

        let residue = collapse_whitespace(&strip_empty_delimiters(&remaining));
        let search = self
            .catalog
            .pattern(names::SEARCH)
            .filter(|pattern| command.declares_pattern(&pattern.name))
            .filter(|pattern| permission.allows(pattern.permission));
        match search {
            Some(pattern) if !residue.is_empty() => {
                builder.record(&pattern.name, pattern.group, DirectiveValue::Text(residue))?;
            }
            _ if !residue.is_empty() => {
                debug!(command = %command.name, %residue, "Dropping message text");
            }
            _ => {}
        }

        Ok(builder.finish())
    }
}
