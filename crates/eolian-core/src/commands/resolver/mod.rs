//! Directive resolution
//!
//! Turns free text or structured options into [`CommandOptions`] for a
//! command, honoring the command's declared directives, the caller's
//! permission and the mutual-exclusion groups.
//!
//! Text and structured input treat group collisions differently. In text
//! the first member found wins and later members are stripped silently, since
//! words of a sentence may overlap by accident. Structured input names every
//! option explicitly, so picking two members of one group is an error.

mod args;
mod builder;
mod message;
mod slash;
mod text;


pub use args::parse_command_args;

use std::sync::Arc;

use crate::directives::{CommandOptions, DirectiveCatalog, DirectiveValue, names};

/// Resolves input against a shared directive catalog
#[derive(Debug, Clone)]
pub struct DirectiveResolver {
    catalog: Arc<DirectiveCatalog>,
}

impl DirectiveResolver {
    pub fn new(catalog: Arc<DirectiveCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Arc<DirectiveCatalog> {
        &self.catalog
    }
}

/// Options for commands that take their words verbatim
fn simple_options(words: &str) -> CommandOptions {
    let mut options = CommandOptions::new();
    let args: Vec<String> = words.split_whitespace().map(str::to_string).collect();
    if !args.is_empty() {
        options.insert(names::ARG, DirectiveValue::List(args));
    }
    options
}
