//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use eolian_core::directives::{SyntaxType, UserPermission};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "eolian")]
#[command(about = "Eolian - turn chat messages into typed bot directives")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (TOML, YAML or JSON)
    #[arg(long, global = true, env = "EOLIAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a chat message into a command and its options
    Parse {
        /// The message, including the prefix for traditional syntax
        message: String,

        /// Permission level of the caller (user, admin, owner)
        #[arg(long, short, default_value = "user")]
        permission: UserPermission,

        /// Message syntax (keyword, traditional); defaults to the configured one
        #[arg(long, short)]
        syntax: Option<SyntaxType>,
    },

    /// Resolve a slash command from key=value options
    Slash {
        /// Command name
        command: String,

        /// Options as key=value pairs; a bare key is a true flag
        #[arg(value_parser = parse_pair)]
        options: Vec<(String, String)>,

        /// Permission level of the caller (user, admin, owner)
        #[arg(long, short, default_value = "user")]
        permission: UserPermission,
    },

    /// Run a message command on the text of a chat message
    Message {
        /// Message command name
        command: String,

        /// Text of the chat message
        text: String,

        /// Permission level of the caller (user, admin, owner)
        #[arg(long, short, default_value = "user")]
        permission: UserPermission,
    },

    /// Print the application command definitions as JSON
    Schema,

    /// Normalize a range against a list length
    Range {
        /// Range as N or N:M, M may be negative
        range: String,

        /// Length of the list
        #[arg(long, short)]
        length: usize,

        /// Count from the end of the list
        #[arg(long)]
        bottom: bool,
    },

    /// List the commands available at a permission level
    Commands {
        /// Permission level of the caller (user, admin, owner)
        #[arg(long, short, default_value = "user")]
        permission: UserPermission,
    },

    /// List every keyword and pattern with examples
    Directives {
        /// Show examples in this syntax
        #[arg(long, short, default_value = "keyword")]
        syntax: SyntaxType,
    },

    /// Show the effective configuration
    Config,
}

/// Parse `key=value`, or `key` alone as `key=true`
fn parse_pair(input: &str) -> Result<(String, String), String> {
    match input.split_once('=') {
        Some((key, _)) if key.trim().is_empty() => Err(format!("missing key in '{}'", input)),
        Some((key, value)) => Ok((key.trim().to_string(), value.to_string())),
        None if input.trim().is_empty() => Err("empty option".to_string()),
        None => Ok((input.trim().to_string(), "true".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        assert_eq!(
            parse_pair("search=daft punk").unwrap(),
            ("search".to_string(), "daft punk".to_string())
        );
        assert_eq!(
            parse_pair("shuffle").unwrap(),
            ("shuffle".to_string(), "true".to_string())
        );
        assert_eq!(
            parse_pair("url=https://x.com/a?b=c").unwrap().1,
            "https://x.com/a?b=c"
        );
        assert!(parse_pair("=x").is_err());
        assert!(parse_pair(" ").is_err());
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from([
            "eolian",
            "slash",
            "play",
            "source=spotify",
            "next",
            "--permission",
            "admin",
        ])
        .unwrap();

        match cli.command {
            Commands::Slash {
                command,
                options,
                permission,
            } => {
                assert_eq!(command, "play");
                assert_eq!(options.len(), 2);
                assert_eq!(permission, UserPermission::Admin);
            }
            _ => panic!("expected slash subcommand"),
        }

        assert!(Cli::try_parse_from(["eolian", "parse", "x", "--permission", "god"]).is_err());

        let cli = Cli::try_parse_from(["eolian", "message", "Play", "hear this"]).unwrap();
        match cli.command {
            Commands::Message {
                command,
                text,
                permission,
            } => {
                assert_eq!(command, "Play");
                assert_eq!(text, "hear this");
                assert_eq!(permission, UserPermission::User);
            }
            _ => panic!("expected message subcommand"),
        }
    }
}
