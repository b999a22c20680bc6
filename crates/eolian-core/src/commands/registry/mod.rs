//! Command registry
//!
//! Holds every command the bot understands, keyed by name.

mod builtins;
mod types;


pub use types::CommandRegistry;
