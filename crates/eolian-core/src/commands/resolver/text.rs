//! Free text resolution

use tracing::{debug, warn};

use super::builder::{CollisionPolicy, OptionsBuilder};
use super::{DirectiveResolver, simple_options};
use crate::commands::types::CommandDescriptor;
use crate::directives::matcher::collapse_whitespace;
use crate::directives::{CommandOptions, DirectiveValue, SyntaxType, UserPermission, names};
use crate::error::{EolianError, EolianResult};

impl DirectiveResolver {
    /// Resolve a message body (command word already removed)
    ///
    /// Patterns are extracted first, highest priority first, each one seeing
    /// the text left by the previous. Keywords follow in the order the
    /// command declares them. Directives the caller may not use are stripped
    /// but never recorded. Whatever is left becomes SEARCH when the command
    /// accepts it.
    pub fn resolve_text(
        &self,
        command: &CommandDescriptor,
        text: &str,
        permission: UserPermission,
        syntax: SyntaxType,
    ) -> EolianResult<CommandOptions> {
        if syntax == SyntaxType::Slash {
            return Err(EolianError::invalid_input_field(
                "Slash commands are resolved from structured options, not text",
                "syntax",
            ));
        }

        if !command.uses_directives() {
            return Ok(simple_options(text));
        }

        let mut builder = OptionsBuilder::new(CollisionPolicy::FirstMatchWins);
        let mut remaining = text.to_string();

        let patterns = self
            .catalog
            .all_patterns()
            .iter()
            .filter(|pattern| command.declares_pattern(&pattern.name));
        for pattern in patterns {
            let Some(found) = pattern.match_text(&remaining, syntax) else {
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

        for name in &command.keywords {
            let Some(keyword) = self.catalog.keyword(name) else {
                warn!(
                    command = %command.name,
                    directive = %name,
                    "Declared keyword missing from catalog"
                );
                continue;
            };
            let Some(rest) = keyword.match_text(&remaining) else {
                continue;
            };
            remaining = rest;

            if !permission.allows(keyword.permission) {
                debug!(
                    directive = %keyword.name,
                    %permission,
                    "Ignoring keyword above caller permission"
                );
                continue;
            }
            builder.record(&keyword.name, keyword.group, DirectiveValue::Flag(true))?;
        }

        let residue = collapse_whitespace(&strip_empty_delimiters(&remaining));
        if !residue.is_empty() {
            let search = self
                .catalog
                .pattern(names::SEARCH)
                .filter(|pattern| command.declares_pattern(&pattern.name))
                .filter(|pattern| permission.allows(pattern.permission));
            match search {
                Some(_) if builder.contains(names::SEARCH) => {
                    debug!(%residue, "Dropping residue, search already given");
                }
                Some(pattern) => {
                    builder.record(&pattern.name, pattern.group, DirectiveValue::Text(residue))?;
                }
                None => {
                    return Err(EolianError::unrecognized_residue_for(residue, &command.name));
                }
            }
        }

        builder.check_conflicts(command)?;
        Ok(builder.finish())
    }
}

/// Drop delimiter pairs emptied by an earlier extraction, e.g. `[ ]` left
/// after a URL was taken out of brackets
pub(super) fn strip_empty_delimiters(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        let close = match c {
            '(' => Some(')'),
            '[' => Some(']'),
            '{' => Some('}'),
            _ => None,
        };
        if let Some(after) = close.and_then(|close| rest[1..].trim_start().strip_prefix(close)) {
            out.push(' ');
            rest = after;
            continue;
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}
