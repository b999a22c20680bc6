//! Command declaration types

use serde::{Deserialize, Serialize};

use super::args::CommandArgs;
use super::category::CommandCategory;
use crate::directives::UserPermission;

/// A bot command and the directives it accepts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandDescriptor {
    /// Command name, lowercase
    pub name: String,
    pub details: String,
    /// Shorter description for space-constrained listings
    #[serde(default)]
    pub short_details: Option<String>,
    pub category: CommandCategory,
    /// Minimum permission to invoke the command at all
    pub permission: UserPermission,
    /// Whether the command may be used in direct messages
    #[serde(default)]
    pub dm_allowed: bool,
    /// Keyword names, in matching order
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Pattern names; extraction order comes from pattern priority
    #[serde(default)]
    pub patterns: Vec<String>,
    /// Positional slots for ARG in structured input
    #[serde(default)]
    pub args: Option<CommandArgs>,
    /// Pairs of directives that may not both be present
    #[serde(default)]
    pub conflicts: Vec<(String, String)>,
    #[serde(default)]
    pub usage: Vec<CommandUsage>,
}

impl CommandDescriptor {
    pub fn new(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            name: name.into().to_lowercase(),
            details: details.into(),
            short_details: None,
            category: CommandCategory::General,
            permission: UserPermission::User,
            dm_allowed: false,
            keywords: Vec::new(),
            patterns: Vec::new(),
            args: None,
            conflicts: Vec::new(),
            usage: Vec::new(),
        }
    }

    pub fn with_short_details(mut self, short_details: impl Into<String>) -> Self {
        self.short_details = Some(short_details.into());
        self
    }

    pub fn with_category(mut self, category: CommandCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_permission(mut self, permission: UserPermission) -> Self {
        self.permission = permission;
        self
    }

    pub fn dm_allowed(mut self) -> Self {
        self.dm_allowed = true;
        self
    }

    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_uppercase()).collect();
        self
    }

    pub fn with_patterns(mut self, patterns: &[&str]) -> Self {
        self.patterns = patterns.iter().map(|p| p.to_uppercase()).collect();
        self
    }

    pub fn with_args(mut self, args: CommandArgs) -> Self {
        self.args = Some(args);
        self
    }

    /// Declare that `a` and `b` may not be given together
    pub fn with_conflict(mut self, a: &str, b: &str) -> Self {
        self.conflicts.push((a.to_uppercase(), b.to_uppercase()));
        self
    }

    pub fn with_usage(mut self, title: impl Into<String>, example: impl Into<String>) -> Self {
        self.usage.push(CommandUsage {
            title: Some(title.into()),
            example: example.into(),
        });
        self
    }

    pub fn declares_keyword(&self, name: &str) -> bool {
        self.keywords.iter().any(|k| k.eq_ignore_ascii_case(name))
    }

    pub fn declares_pattern(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.eq_ignore_ascii_case(name))
    }

    /// Whether options are extracted through directives
    ///
    /// Commands without any take their words verbatim as ARG.
    pub fn uses_directives(&self) -> bool {
        !self.keywords.is_empty() || !self.patterns.is_empty()
    }

    pub fn description(&self) -> &str {
        self.short_details.as_deref().unwrap_or(&self.details)
    }
}

/// An example invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandUsage {
    pub title: Option<String>,
    pub example: String,
}
