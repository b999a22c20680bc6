//! Command declarations and resolution
//!
//! Commands declare which directives they accept. Resolution turns a chat
//! message (or a set of slash options) into a [`ParsedCommand`]: the command
//! that was invoked plus the canonical [`CommandOptions`] extracted for it.
//!
//! # Syntaxes
//!
//! | Syntax | Example |
//! |--------|---------|
//! | Keyword | `@eolian play spotify playlist (retrowave) shuffle` |
//! | Traditional | `!play retrowave` |
//! | Slash | `/play source:spotify type:playlist search:retrowave` |
//!
//! All three converge on the same `CommandOptions`, so command
//! implementations never need to know how they were invoked.
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use eolian_core::commands::CommandRouter;
//! use eolian_core::config::EngineConfig;
//! use eolian_core::directives::{SyntaxType, UserPermission};
//!
//! let router = CommandRouter::new(&EngineConfig::default())?;
//! let parsed =
//!     router.parse_message("!list top 10", UserPermission::User, SyntaxType::Traditional)?;
//! assert_eq!(parsed.command.name, "list");
//! ```
//!
//! [`CommandOptions`]: crate::directives::CommandOptions

pub mod registry;
pub mod resolver;
pub mod router;
pub mod schema;
pub mod types;

pub use registry::CommandRegistry;
pub use resolver::DirectiveResolver;
pub use router::CommandRouter;
pub use schema::{
    ApplicationCommandKind, ApplicationCommandSchema, SlashOptionKind, SlashOptionSchema,
};
pub use types::{
    ArgGroup, ArgOption, CommandArgs, CommandCategory, CommandDescriptor, CommandUsage,
    MessageCommand, ParsedCommand, ParsedMessageCommand, SlashOptions,
};
