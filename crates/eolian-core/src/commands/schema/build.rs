//! Deriving schemas from command declarations

use tracing::warn;

use super::types::{
    ApplicationCommandKind, ApplicationCommandSchema, MAX_CHOICES, MAX_DESCRIPTION_LENGTH,
    SlashOptionSchema,
};
use crate::commands::registry::CommandRegistry;
use crate::commands::types::{CommandArgs, CommandDescriptor, MessageCommand};
use crate::directives::types::{Keyword, Pattern};
use crate::directives::{DirectiveCatalog, UserPermission, names};

impl CommandRegistry {
    /// Schemas for every command below owner level, then every message command
    pub fn application_commands(
        &self,
        catalog: &DirectiveCatalog,
    ) -> Vec<ApplicationCommandSchema> {
        let mut commands: Vec<_> = self
            .list(UserPermission::Owner)
            .into_iter()
            .filter(|command| command.permission < UserPermission::Owner)
            .collect();
        commands.sort_by(|a, b| a.name.cmp(&b.name));

        commands
            .into_iter()
            .map(|command| slash_command_schema(command, catalog))
            .chain(
                self.message_commands()
                    .into_iter()
                    .map(|command| message_command_schema(command)),
            )
            .collect()
    }
}

/// Structured options for a command
///
/// Patterns come first, highest priority first, then keywords by name.
/// Directives missing from the catalog are skipped.
pub fn slash_command_schema(
    command: &CommandDescriptor,
    catalog: &DirectiveCatalog,
) -> ApplicationCommandSchema {
    let mut options = Vec::new();

    if command.uses_directives() {
        let patterns = catalog
            .all_patterns()
            .iter()
            .filter(|pattern| command.declares_pattern(&pattern.name));
        for pattern in patterns {
            add_pattern_option(&mut options, command, pattern);
        }

        let mut keywords: Vec<_> = catalog
            .all_keywords()
            .iter()
            .filter(|keyword| command.declares_keyword(&keyword.name))
            .collect();
        keywords.sort_by(|a, b| a.name.cmp(&b.name));
        for keyword in keywords {
            add_keyword_option(&mut options, keyword);
        }
    } else if let Some(args) = &command.args {
        add_arg_options(&mut options, args);
    } else {
        options.push(SlashOptionSchema::string(
            "args",
            format!("Use \"/help {}\" to see arguments", command.name),
        ));
    }

    ApplicationCommandSchema {
        name: command.name.clone(),
        kind: ApplicationCommandKind::ChatInput,
        description: clamp_description(command.description()),
        dm_allowed: command.dm_allowed,
        default_member_permissions: (command.permission >= UserPermission::Admin)
            .then(|| "0".to_string()),
        options,
    }
}

pub fn message_command_schema(command: &MessageCommand) -> ApplicationCommandSchema {
    ApplicationCommandSchema {
        name: command.name.clone(),
        kind: ApplicationCommandKind::Message,
        description: String::new(),
        dm_allowed: command.dm_allowed,
        default_member_permissions: None,
        options: Vec::new(),
    }
}

fn add_pattern_option(
    options: &mut Vec<SlashOptionSchema>,
    command: &CommandDescriptor,
    pattern: &Pattern,
) {
    if pattern.name == names::ARG {
        if let Some(args) = &command.args {
            add_arg_options(options, args);
            return;
        }
    }

    match pattern.group {
        Some(group) => {
            if !options.iter().any(|option| option.name == group.name()) {
                options.push(SlashOptionSchema::string(group.name(), group.details()));
            }
        }
        None => options.push(SlashOptionSchema::string(
            pattern.option_name(),
            clamp_description(&pattern.details),
        )),
    }
}

fn add_keyword_option(options: &mut Vec<SlashOptionSchema>, keyword: &Keyword) {
    let Some(group) = keyword.group else {
        options.push(SlashOptionSchema::boolean(
            keyword.option_name(),
            clamp_description(&keyword.details),
        ));
        return;
    };

    match options.iter_mut().find(|option| option.name == group.name()) {
        Some(option) => option.choices.push(keyword.option_name()),
        None => {
            let mut option = SlashOptionSchema::string(group.name(), group.details());
            option.choices.push(keyword.option_name());
            options.push(option);
        }
    }
}

fn add_arg_options(options: &mut Vec<SlashOptionSchema>, args: &CommandArgs) {
    for slot in args.groups.iter().flat_map(|group| &group.options) {
        let mut option = SlashOptionSchema::string(&slot.name, clamp_description(&slot.details));
        if slot.choices.len() <= MAX_CHOICES {
            option.choices = slot.choices.clone();
        } else {
            warn!(
                option = %slot.name,
                choices = slot.choices.len(),
                "Too many choices to offer, accepting free text"
            );
        }
        options.push(option);
    }
}

fn clamp_description(text: &str) -> String {
    if text.chars().count() <= MAX_DESCRIPTION_LENGTH {
        return text.to_string();
    }
    warn!(%text, "Description too long, truncating");
    text.chars().take(MAX_DESCRIPTION_LENGTH).collect()
}
