//! Eolian Core Library
//!
//! This crate turns chat messages and slash command options into typed
//! directives for the Eolian music bot: the directive catalog and matchers,
//! the range normalizer, command declarations, resolution and routing,
//! configuration and errors.

pub mod commands;
pub mod config;
pub mod directives;
pub mod error;

// Re-export commonly used types
pub use commands::{
    CommandDescriptor, CommandRegistry, CommandRouter, DirectiveResolver, ParsedCommand,
    SlashOptions,
};
pub use config::{EngineConfig, LoggingConfig, load_config};
pub use directives::{
    AbsoluteRange, CommandOptions, DirectiveCatalog, DirectiveGroup, DirectiveValue,
    RangeArgument, SyntaxType, UserPermission, apply_range, normalize,
};
pub use error::{EolianError, EolianResult, UnifiedError};
