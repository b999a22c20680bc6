//! Message context menu commands

use serde::{Deserialize, Serialize};

use crate::directives::UserPermission;

/// A command run against the text of an existing chat message
///
/// Message commands take no keywords and no options. Their patterns are
/// pulled out of the message text and SEARCH receives what is left.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageCommand {
    /// Display name, matched without regard to case
    pub name: String,
    pub permission: UserPermission,
    #[serde(default)]
    pub dm_allowed: bool,
    /// Pattern names
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl MessageCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            permission: UserPermission::User,
            dm_allowed: false,
            patterns: Vec::new(),
        }
    }

    pub fn with_permission(mut self, permission: UserPermission) -> Self {
        self.permission = permission;
        self
    }

    pub fn dm_allowed(mut self) -> Self {
        self.dm_allowed = true;
        self
    }

    pub fn with_patterns(mut self, patterns: &[&str]) -> Self {
        self.patterns = patterns.iter().map(|p| p.to_uppercase()).collect();
        self
    }

    pub fn declares_pattern(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.eq_ignore_ascii_case(name))
    }
}
