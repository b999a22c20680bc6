//! Built-in command registration

use super::super::types::{
    ArgGroup, ArgOption, CommandArgs, CommandCategory, CommandDescriptor, MessageCommand,
};
use super::types::CommandRegistry;
use crate::directives::{UserPermission, names};

impl CommandRegistry {
    /// Register built-in commands
    pub fn register_builtins(&mut self) {
        // Help
        self.register(
            CommandDescriptor::new(
                "help",
                "Show the list of commands, or details about a specific command or keyword.",
            )
            .with_short_details("Show help")
            .dm_allowed()
            .with_patterns(&[names::SEARCH])
            .with_usage("Show all commands", "help")
            .with_usage("Show details about a command", "help (play)"),
        );

        // Invite
        self.register(
            CommandDescriptor::new("invite", "Get an invite link for the bot.")
                .dm_allowed()
                .with_usage("Get an invite link", "invite"),
        );

        // List
        self.register(
            CommandDescriptor::new(
                "list",
                "Show the current queue of songs. Can also clear or shuffle the queue.",
            )
            .with_short_details("Show the queue")
            .with_category(CommandCategory::Queue)
            .with_keywords(&[names::CLEAR, names::SHUFFLE])
            .with_patterns(&[names::TOP, names::BOTTOM])
            .with_usage("Show the queue", "list")
            .with_usage("Show the first 10 songs", "list top 10")
            .with_usage("Shuffle the queue", "list shuffle"),
        );

        // Play
        self.register(
            CommandDescriptor::new(
                "play",
                "Search for and add songs to the queue. \
                 Accepts a search query, a URL or an identifier.",
            )
            .with_short_details("Add songs to the queue")
            .with_category(CommandCategory::Music)
            .with_keywords(&[
                names::MY,
                names::SOUNDCLOUD,
                names::SPOTIFY,
                names::YOUTUBE,
                names::PLAYLIST,
                names::ALBUM,
                names::ARTIST,
                names::LIKES,
                names::TRACKS,
                names::NEXT,
                names::SHUFFLE,
            ])
            .with_patterns(&[
                names::SEARCH,
                names::IDENTIFIER,
                names::URL,
                names::TOP,
                names::BOTTOM,
            ])
            .with_conflict(names::URL, names::SEARCH)
            .with_usage("Play a song", "play (what is love)")
            .with_usage("Play a playlist from Spotify", "play spotify playlist (retrowave)")
            .with_usage("Play your liked tracks, shuffled", "play my likes shuffle"),
        );

        // Identify
        self.register(
            CommandDescriptor::new(
                "identify",
                "Find a resource and remember it under an identifier for later use.",
            )
            .with_short_details("Set an identifier")
            .with_category(CommandCategory::Account)
            .dm_allowed()
            .with_keywords(&[
                names::MY,
                names::SOUNDCLOUD,
                names::SPOTIFY,
                names::YOUTUBE,
                names::PLAYLIST,
                names::ALBUM,
                names::ARTIST,
                names::LIKES,
                names::TRACKS,
                names::CLEAR,
            ])
            .with_patterns(&[names::SEARCH, names::IDENTIFIER, names::URL])
            .with_conflict(names::URL, names::SEARCH)
            .with_usage(
                "Remember a Spotify playlist",
                "identify spotify playlist (retrowave) [rw]",
            )
            .with_usage("Forget an identifier", "identify clear [rw]"),
        );

        // Volume
        self.register(
            CommandDescriptor::new("volume", "Show or change the volume of the player.")
                .with_category(CommandCategory::Music)
                .with_keywords(&[names::MORE, names::LESS])
                .with_patterns(&[names::NUMBER])
                .with_usage("Turn the volume up", "volume more")
                .with_usage("Set the volume", "volume 40"),
        );

        // Servers
        self.register(
            CommandDescriptor::new("servers", "Manage the servers the bot is in.")
                .with_category(CommandCategory::Settings)
                .with_permission(UserPermission::Owner)
                .dm_allowed()
                .with_patterns(&[names::NUMBER, names::ARG])
                .with_args(
                    CommandArgs::new()
                        .with_group(
                            ArgGroup::optional().with_option(
                                ArgOption::new("action", "What to do with the server list")
                                    .with_choices(&["sort", "kick"]),
                            ),
                        )
                        .with_group(
                            ArgGroup::optional()
                                .with_option(ArgOption::new("value", "Sort order or server id")),
                        ),
                )
                .with_usage("List servers", "servers")
                .with_usage("Leave a server", "servers { kick; 1234 }"),
        );

        // Config
        self.register(
            CommandDescriptor::new(
                "config",
                "Show or change the bot configuration for this server.",
            )
                .with_category(CommandCategory::Settings)
                .with_permission(UserPermission::Admin)
                .with_args(
                    CommandArgs::new()
                        .with_group(
                            ArgGroup::optional().with_option(
                                ArgOption::new("name", "Setting to change")
                                    .with_choices(&["prefix", "volume"]),
                            ),
                        )
                        .with_group(
                            ArgGroup::optional()
                                .with_option(ArgOption::new("value", "New value for the setting")),
                        ),
                )
                .with_usage("Show the configuration", "config")
                .with_usage("Change the prefix", "config prefix $"),
        );

        // Feature
        self.register(
            CommandDescriptor::new("feature", "Turn bot features on or off everywhere.")
                .with_category(CommandCategory::Settings)
                .dm_allowed()
                .with_keywords(&[names::ENABLE, names::DISABLE])
                .with_patterns(&[names::SEARCH])
                .with_usage("Turn on a feature", "feature enable (autoplay)"),
        );

        // Play the link or text of a chat message
        self.register_message(
            MessageCommand::new("Play")
                .with_patterns(&[names::URL, names::IDENTIFIER, names::SEARCH]),
        );
    }
}
