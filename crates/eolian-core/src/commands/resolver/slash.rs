//! Structured option resolution

use tracing::debug;

use super::args::parse_command_args;
use super::builder::{CollisionPolicy, OptionsBuilder};
use super::{DirectiveResolver, simple_options};
use crate::commands::types::{CommandDescriptor, SlashOptions};
use crate::directives::matcher::collapse_whitespace;
use crate::directives::{
    CommandOptions, Directive, DirectiveGroup, DirectiveValue, SyntaxType, UserPermission, names,
};
use crate::error::{EolianError, EolianResult};

impl DirectiveResolver {
    /// Resolve options delivered by a slash command
    ///
    /// Group keys (`source: spotify`) are resolved first, then boolean keys
    /// named after keywords, then pattern values keyed by pattern name.
    /// Picking two members of one group fails.
    pub fn resolve_slash(
        &self,
        command: &CommandDescriptor,
        options: &SlashOptions,
        permission: UserPermission,
    ) -> EolianResult<CommandOptions> {
        if !command.uses_directives() {
            if let Some(args) = parse_command_args(command, options)? {
                let mut resolved = CommandOptions::new();
                resolved.insert(names::ARG, DirectiveValue::List(args));
                return Ok(resolved);
            }
            return Ok(simple_options(options.value("args").unwrap_or_default()));
        }

        let mut builder = OptionsBuilder::new(CollisionPolicy::Reject);

        for group in DirectiveGroup::ALL {
            let Some(value) = options.value(group.name()) else {
                continue;
            };
            let declared = self.catalog.group_members(group).iter().any(|member| {
                command.declares_keyword(member.name()) || command.declares_pattern(member.name())
            });
            if !declared {
                continue;
            }
            let (name, payload) = self.resolve_group_value(command, group, value)?;
            if let Some(directive) = self.catalog.lookup(&name) {
                if !permission.allows(directive.permission()) {
                    debug!(
                        directive = %name,
                        %permission,
                        "Ignoring option above caller permission"
                    );
                    continue;
                }
            }
            builder.record(&name, Some(group), payload)?;
        }

        for name in &command.keywords {
            let Some(keyword) = self.catalog.keyword(name) else {
                continue;
            };
            if !options.flag(&keyword.option_name()) {
                continue;
            }
            if !permission.allows(keyword.permission) {
                debug!(
                    directive = %keyword.name,
                    %permission,
                    "Ignoring option above caller permission"
                );
                continue;
            }
            builder.record(&keyword.name, keyword.group, DirectiveValue::Flag(true))?;
        }

        let patterns = self
            .catalog
            .all_patterns()
            .iter()
            .filter(|pattern| command.declares_pattern(&pattern.name));
        for pattern in patterns {
            if pattern.name == names::ARG && command.args.is_some() {
                continue;
            }
            let key = pattern.option_name();
            let Some(value) = options.value(&key) else {
                continue;
            };
            let Some(found) = pattern.match_text(value, SyntaxType::Slash) else {
                return Err(EolianError::invalid_input_field(
                    format!("`{}` is not a valid {}", value, key),
                    key,
                ));
            };
            if !permission.allows(pattern.permission) {
                debug!(
                    directive = %pattern.name,
                    %permission,
                    "Ignoring option above caller permission"
                );
                continue;
            }
            builder.record(&pattern.name, pattern.group, found.payload)?;
        }

        if let Some(args) = parse_command_args(command, options)? {
            builder.record(names::ARG, None, DirectiveValue::List(args))?;
        }

        builder.check_conflicts(command)?;
        Ok(builder.finish())
    }

    /// Map a group option value to the member it selects
    ///
    /// Keyword groups take a member name (`type: playlist`). Pattern groups
    /// take the member in text form (`range: top 10`). Naming a member the
    /// command does not declare is rejected.
    fn resolve_group_value(
        &self,
        command: &CommandDescriptor,
        group: DirectiveGroup,
        value: &str,
    ) -> EolianResult<(String, DirectiveValue)> {
        if let Some(Directive::Keyword(keyword)) = self.catalog.lookup(value) {
            if keyword.group == Some(group) {
                if !command.declares_keyword(&keyword.name) {
                    return Err(undeclared_member(command, group, value));
                }
                return Ok((keyword.name.clone(), DirectiveValue::Flag(true)));
            }
        }

        let members = self.catalog.group_members(group);
        for member in &members {
            let Directive::Pattern(pattern) = member else {
                continue;
            };
            let Some(found) = pattern.match_text(value, SyntaxType::Keyword) else {
                continue;
            };
            if !collapse_whitespace(&found.remainder).is_empty() {
                continue;
            }
            if !command.declares_pattern(&pattern.name) {
                return Err(undeclared_member(command, group, value));
            }
            return Ok((pattern.name.clone(), found.payload));
        }

        let choices = members
            .iter()
            .map(|member| member.name().to_lowercase())
            .collect::<Vec<_>>()
            .join(", ");
        Err(EolianError::invalid_input_field(
            format!("`{}` is not a valid {}, expected one of: {}", value, group, choices),
            group.name(),
        ))
    }
}

fn undeclared_member(
    command: &CommandDescriptor,
    group: DirectiveGroup,
    value: &str,
) -> EolianError {
    EolianError::invalid_input_field(
        format!("`{}` is not a valid {} for /{}", value, group, command.name),
        group.name(),
    )
}
