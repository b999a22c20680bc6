//! Application command definitions
//!
//! Describes every command the way a chat platform expects it to be
//! registered: one structured option per keyword, group, pattern or argument
//! slot, named exactly as the slash resolver reads them back.
//!
//! | Declared as | Option |
//! |-------------|--------|
//! | Grouped keyword | string named after the group, member as a choice |
//! | Ungrouped keyword | boolean named after the keyword |
//! | Grouped pattern | string named after the group |
//! | Pattern | string named after the pattern |
//! | ARG with slots | one string per slot |
//!
//! Owner commands are never registered.

mod build;
mod types;

#[cfg(test)]
mod tests;

pub use build::{message_command_schema, slash_command_schema};
pub use types::{
    ApplicationCommandKind, ApplicationCommandSchema, MAX_CHOICES, MAX_DESCRIPTION_LENGTH,
    SlashOptionKind, SlashOptionSchema,
};
