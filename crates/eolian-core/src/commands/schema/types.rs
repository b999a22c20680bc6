//! Application command schema types

use serde::{Deserialize, Serialize};

/// Longest description the platform accepts
pub const MAX_DESCRIPTION_LENGTH: usize = 100;

/// Most choices a single option may offer
pub const MAX_CHOICES: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationCommandKind {
    /// Invoked by typing `/name`
    ChatInput,
    /// Invoked from the context menu of a chat message
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlashOptionKind {
    String,
    Boolean,
}

/// One structured option of a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashOptionSchema {
    pub name: String,
    pub description: String,
    pub kind: SlashOptionKind,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
}

impl SlashOptionSchema {
    pub fn string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: SlashOptionKind::String,
            required: false,
            choices: Vec::new(),
        }
    }

    pub fn boolean(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: SlashOptionKind::Boolean,
            ..Self::string(name, description)
        }
    }
}

/// A command as registered with the chat platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationCommandSchema {
    pub name: String,
    pub kind: ApplicationCommandKind,
    /// Empty for message commands
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub dm_allowed: bool,
    /// `"0"` hides the command from members until a server admin grants it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_member_permissions: Option<String>,
    #[serde(default)]
    pub options: Vec<SlashOptionSchema>,
}

impl ApplicationCommandSchema {
    pub fn option(&self, name: &str) -> Option<&SlashOptionSchema> {
        self.options.iter().find(|option| option.name == name)
    }
}
