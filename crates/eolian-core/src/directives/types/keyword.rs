//! Keyword directives

use regex::Regex;

use super::group::DirectiveGroup;
use super::permission::{SyntaxType, UserPermission};
use crate::error::{EolianError, EolianResult};

/// A boolean directive matched by one or more fixed words
#[derive(Debug, Clone)]
pub struct Keyword {
    /// Uppercase directive name
    pub name: String,
    pub details: String,
    pub permission: UserPermission,
    pub group: Option<DirectiveGroup>,
    /// Accepted words, the first one is used in examples
    pub tokens: Vec<String>,
    matcher: Regex,
}

impl Keyword {
    /// Create a keyword accepting any of `tokens` as a whole word, ignoring case
    pub fn new(
        name: impl Into<String>,
        details: impl Into<String>,
        tokens: &[&str],
    ) -> EolianResult<Self> {
        let name = name.into().to_uppercase();
        if tokens.is_empty() {
            return Err(EolianError::config(format!(
                "Keyword {} must accept at least one token",
                name
            )));
        }

        let alternatives = tokens
            .iter()
            .map(|token| regex::escape(token.trim()))
            .collect::<Vec<_>>()
            .join("|");
        let matcher = Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives)).map_err(|e| {
            EolianError::config_with_context(
                format!("Invalid tokens for keyword {}: {}", name, e),
                "Building directive catalog",
            )
        })?;

        Ok(Self {
            name,
            details: details.into(),
            permission: UserPermission::User,
            group: None,
            tokens: tokens.iter().map(|t| t.trim().to_lowercase()).collect(),
            matcher,
        })
    }

    pub fn with_permission(mut self, permission: UserPermission) -> Self {
        self.permission = permission;
        self
    }

    pub fn with_group(mut self, group: DirectiveGroup) -> Self {
        self.group = Some(group);
        self
    }

    /// Lowercase name, the structured option key for ungrouped keywords
    pub fn option_name(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn matches(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }

    /// Remove every occurrence of the keyword, or `None` if it is absent
    pub fn match_text(&self, text: &str) -> Option<String> {
        if !self.matcher.is_match(text) {
            return None;
        }
        Some(self.matcher.replace_all(text, " ").into_owned())
    }

    /// How a user would write this keyword
    pub fn example(&self, syntax: SyntaxType) -> String {
        let token = self.tokens.first().cloned().unwrap_or_else(|| self.option_name());
        match (syntax, self.group) {
            (SyntaxType::Slash, Some(group)) => format!("{}: {}", group.name(), self.option_name()),
            (SyntaxType::Slash, None) => format!("{}: True", self.option_name()),
            _ => token,
        }
    }
}
