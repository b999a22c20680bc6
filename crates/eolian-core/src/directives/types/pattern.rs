//! Pattern directives

use std::sync::Arc;

use super::group::DirectiveGroup;
use super::permission::{SyntaxType, UserPermission};
use crate::directives::matcher::{PatternMatcher, TextMatch};

/// A directive carrying a typed payload
#[derive(Debug, Clone)]
pub struct Pattern {
    /// Uppercase directive name
    pub name: String,
    pub details: String,
    pub permission: UserPermission,
    /// Higher priority patterns are extracted and removed from the text before others
    pub priority: i32,
    pub group: Option<DirectiveGroup>,
    pub usage: Vec<String>,
    matcher: Arc<dyn PatternMatcher>,
}

impl Pattern {
    pub fn new(
        name: impl Into<String>,
        details: impl Into<String>,
        priority: i32,
        matcher: impl PatternMatcher + 'static,
    ) -> Self {
        Self {
            name: name.into().to_uppercase(),
            details: details.into(),
            permission: UserPermission::User,
            priority,
            group: None,
            usage: Vec::new(),
            matcher: Arc::new(matcher),
        }
    }

    pub fn with_permission(mut self, permission: UserPermission) -> Self {
        self.permission = permission;
        self
    }

    pub fn with_group(mut self, group: DirectiveGroup) -> Self {
        self.group = Some(group);
        self
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_usage(mut self, usage: &[&str]) -> Self {
        self.usage = usage.iter().map(|u| u.to_string()).collect();
        self
    }

    /// Lowercase name, the structured option key for this pattern
    pub fn option_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// Extract the pattern from `text`
    ///
    /// For [`SyntaxType::Slash`] the whole text is a bare option value and the
    /// remainder is always empty.
    pub fn match_text(&self, text: &str, syntax: SyntaxType) -> Option<TextMatch> {
        match syntax {
            SyntaxType::Slash => self
                .matcher
                .match_value(text)
                .map(|payload| TextMatch::new(payload, String::new())),
            SyntaxType::Keyword | SyntaxType::Traditional => self.matcher.match_text(text, syntax),
        }
    }

    /// How a user would write `input` for this pattern
    pub fn example(&self, input: &str, syntax: SyntaxType) -> String {
        match syntax {
            SyntaxType::Slash => format!("{}: {}", self.option_name(), input),
            SyntaxType::Keyword | SyntaxType::Traditional => self.matcher.example(input, syntax),
        }
    }
}
