//! Tests for application command schemas

use super::*;
use crate::commands::registry::CommandRegistry;
use crate::commands::resolver::DirectiveResolver;
use crate::commands::types::{ArgGroup, ArgOption, CommandArgs, CommandDescriptor, SlashOptions};
use crate::directives::{DirectiveCatalog, UserPermission};

fn schema(name: &str) -> ApplicationCommandSchema {
    let registry = CommandRegistry::with_builtins();
    let catalog = DirectiveCatalog::builtin().unwrap();
    slash_command_schema(registry.get(name).unwrap(), &catalog)
}

fn option_names(schema: &ApplicationCommandSchema) -> Vec<&str> {
    schema.options.iter().map(|o| o.name.as_str()).collect()
}

#[test]
fn test_play_options() {
    let play = schema("play");

    assert_eq!(play.kind, ApplicationCommandKind::ChatInput);
    assert_eq!(play.description, "Add songs to the queue");
    assert!(play.default_member_permissions.is_none());
    assert_eq!(
        option_names(&play),
        vec!["url", "identifier", "search", "range", "type", "my", "next", "shuffle", "source"]
    );

    let source = play.option("source").unwrap();
    assert_eq!(source.kind, SlashOptionKind::String);
    assert_eq!(source.choices, vec!["soundcloud", "spotify", "youtube"]);
    assert_eq!(
        play.option("type").unwrap().choices,
        vec!["album", "artist", "likes", "playlist", "tracks"]
    );
    assert_eq!(play.option("shuffle").unwrap().kind, SlashOptionKind::Boolean);

    let range = play.option("range").unwrap();
    assert!(range.choices.is_empty());
    assert!(play.options.iter().all(|option| !option.required));
}

#[test]
fn test_argument_slots_replace_arg() {
    let servers = schema("servers");
    assert_eq!(option_names(&servers), vec!["action", "value", "number"]);
    assert_eq!(servers.option("action").unwrap().choices, vec!["sort", "kick"]);
    assert!(servers.dm_allowed);

    let config = schema("config");
    assert_eq!(option_names(&config), vec!["name", "value"]);
    assert_eq!(config.default_member_permissions.as_deref(), Some("0"));
}

#[test]
fn test_plain_command_takes_free_text() {
    let invite = schema("invite");
    assert_eq!(invite.options.len(), 1);
    assert_eq!(invite.options[0].name, "args");
    assert_eq!(invite.options[0].description, "Use \"/help invite\" to see arguments");
}

#[test]
fn test_limits_are_enforced() {
    let catalog = DirectiveCatalog::builtin().unwrap();
    let choices: Vec<String> = (0..30).map(|i| format!("choice{i}")).collect();
    let choices: Vec<&str> = choices.iter().map(String::as_str).collect();
    let command = CommandDescriptor::new("pick", "x".repeat(150)).with_args(
        CommandArgs::new().with_group(
            ArgGroup::optional()
                .with_option(ArgOption::new("item", "y".repeat(120)).with_choices(&choices)),
        ),
    );

    let pick = slash_command_schema(&command, &catalog);
    assert_eq!(pick.description.chars().count(), MAX_DESCRIPTION_LENGTH);
    let item = pick.option("item").unwrap();
    assert_eq!(item.description.chars().count(), MAX_DESCRIPTION_LENGTH);
    assert!(item.choices.is_empty());
}

#[test]
fn test_registry_skips_owner_commands() {
    let registry = CommandRegistry::with_builtins();
    let catalog = DirectiveCatalog::builtin().unwrap();
    let schemas = registry.application_commands(&catalog);

    let names: Vec<_> = schemas.iter().map(|s| s.name.as_str()).collect();
    assert!(!names.contains(&"servers"));
    assert!(names.contains(&"config"));
    assert_eq!(schemas.len(), registry.count() - 1 + registry.message_commands().len());

    let last = schemas.last().unwrap();
    assert_eq!(last.name, "Play");
    assert_eq!(last.kind, ApplicationCommandKind::Message);
    assert!(last.options.is_empty());

    let json = serde_json::to_value(last).unwrap();
    assert_eq!(json["kind"], "message");
    assert!(json.get("description").is_none());
}

#[test]
fn test_every_boolean_option_resolves() {
    let catalog = std::sync::Arc::new(DirectiveCatalog::builtin().unwrap());
    let resolver = DirectiveResolver::new(catalog.clone());
    let registry = CommandRegistry::with_builtins();

    for schema in registry.application_commands(&catalog) {
        let Some(command) = registry.get(&schema.name) else {
            continue;
        };
        let flags = schema
            .options
            .iter()
            .filter(|option| option.kind == SlashOptionKind::Boolean);
        for option in flags {
            let options = resolver
                .resolve_slash(
                    command,
                    &SlashOptions::new().with(&option.name, "true"),
                    UserPermission::Owner,
                )
                .unwrap();
            assert!(
                options.flag(&option.name.to_uppercase()),
                "{} on {}",
                option.name,
                schema.name
            );
        }

        let grouped = schema
            .options
            .iter()
            .filter(|option| !option.choices.is_empty() && command.args.is_none());
        for option in grouped {
            for choice in &option.choices {
                let options = resolver
                    .resolve_slash(
                        command,
                        &SlashOptions::new().with(&option.name, choice.as_str()),
                        UserPermission::Owner,
                    )
                    .unwrap();
                assert!(options.flag(&choice.to_uppercase()), "{choice} on {}", schema.name);
            }
        }
    }
}
