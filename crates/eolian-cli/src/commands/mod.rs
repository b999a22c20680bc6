//! CLI commands

pub mod config;
pub mod list;
pub mod parse;
pub mod range;
