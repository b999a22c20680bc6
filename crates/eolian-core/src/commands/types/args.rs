//! Positional argument slots for structured input

use serde::{Deserialize, Serialize};

/// Ordered argument tiers resolved into ARG
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandArgs {
    pub groups: Vec<ArgGroup>,
}

impl CommandArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(mut self, group: ArgGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Every slot name, in order
    pub fn option_names(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|group| group.options.iter().map(|option| option.name.as_str()))
    }
}

/// One tier: at most one of its options may be given
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgGroup {
    pub required: bool,
    pub options: Vec<ArgOption>,
}

impl ArgGroup {
    pub fn optional() -> Self {
        Self::default()
    }

    pub fn required() -> Self {
        Self {
            required: true,
            options: Vec::new(),
        }
    }

    pub fn with_option(mut self, option: ArgOption) -> Self {
        self.options.push(option);
        self
    }
}

/// A named slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgOption {
    /// Lowercase structured option key
    pub name: String,
    pub details: String,
    #[serde(default)]
    pub choices: Vec<String>,
}

impl ArgOption {
    pub fn new(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            name: name.into().to_lowercase(),
            details: details.into(),
            choices: Vec::new(),
        }
    }

    pub fn with_choices(mut self, choices: &[&str]) -> Self {
        self.choices = choices.iter().map(|c| c.to_string()).collect();
        self
    }
}
