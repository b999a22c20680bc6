//! Command type definitions

mod args;
mod category;
mod command;
mod message;
mod parsed;
mod slash;

pub use args::{ArgGroup, ArgOption, CommandArgs};
pub use category::CommandCategory;
pub use command::{CommandDescriptor, CommandUsage};
pub use message::MessageCommand;
pub use parsed::{ParsedCommand, ParsedMessageCommand};
pub use slash::SlashOptions;
