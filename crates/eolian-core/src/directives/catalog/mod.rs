//! Directive catalog
//!
//! The catalog is built once at startup and then only read. It is shared by
//! `Arc` with every resolver, so resolutions on different threads never
//! contend on it.

mod keywords;
mod patterns;

pub use keywords::builtin_keywords;
pub use patterns::builtin_patterns;

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::types::{DirectiveGroup, Keyword, Pattern, UserPermission};
use crate::error::{EolianError, EolianResult};

/// Either kind of directive
#[derive(Debug, Clone)]
pub enum Directive {
    Keyword(Arc<Keyword>),
    Pattern(Arc<Pattern>),
}

impl Directive {
    pub fn name(&self) -> &str {
        match self {
            Self::Keyword(keyword) => &keyword.name,
            Self::Pattern(pattern) => &pattern.name,
        }
    }

    pub fn details(&self) -> &str {
        match self {
            Self::Keyword(keyword) => &keyword.details,
            Self::Pattern(pattern) => &pattern.details,
        }
    }

    pub fn permission(&self) -> UserPermission {
        match self {
            Self::Keyword(keyword) => keyword.permission,
            Self::Pattern(pattern) => pattern.permission,
        }
    }

    pub fn group(&self) -> Option<DirectiveGroup> {
        match self {
            Self::Keyword(keyword) => keyword.group,
            Self::Pattern(pattern) => pattern.group,
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(self, Self::Keyword(_))
    }
}

/// Registry of every keyword and pattern definition
#[derive(Debug, Clone)]
pub struct DirectiveCatalog {
    keywords: Vec<Arc<Keyword>>,
    /// Sorted by descending priority, ties keep declaration order
    patterns: Vec<Arc<Pattern>>,
    index: HashMap<String, Directive>,
}

impl DirectiveCatalog {
    /// Build a catalog from explicit definitions
    ///
    /// Fails if two directives share a name.
    pub fn new(keywords: Vec<Keyword>, patterns: Vec<Pattern>) -> EolianResult<Self> {
        let keywords: Vec<Arc<Keyword>> = keywords.into_iter().map(Arc::new).collect();
        let mut patterns: Vec<Arc<Pattern>> = patterns.into_iter().map(Arc::new).collect();
        patterns.sort_by(|a, b| b.priority.cmp(&a.priority));

        let mut index = HashMap::new();
        let directives = keywords
            .iter()
            .cloned()
            .map(Directive::Keyword)
            .chain(patterns.iter().cloned().map(Directive::Pattern));
        for directive in directives {
            let name = directive.name().to_string();
            if index.insert(name.clone(), directive).is_some() {
                return Err(EolianError::config(format!(
                    "Directive {} is declared more than once",
                    name
                )));
            }
        }

        debug!(
            keywords = keywords.len(),
            patterns = patterns.len(),
            "Built directive catalog"
        );

        Ok(Self {
            keywords,
            patterns,
            index,
        })
    }

    /// The catalog of every directive the bot understands
    pub fn builtin() -> EolianResult<Self> {
        Self::new(builtin_keywords()?, builtin_patterns()?)
    }

    /// Look up any directive by name, ignoring case
    pub fn lookup(&self, name: &str) -> Option<&Directive> {
        self.index.get(&name.trim().to_uppercase())
    }

    pub fn keyword(&self, name: &str) -> Option<&Arc<Keyword>> {
        match self.lookup(name)? {
            Directive::Keyword(keyword) => Some(keyword),
            Directive::Pattern(_) => None,
        }
    }

    pub fn pattern(&self, name: &str) -> Option<&Arc<Pattern>> {
        match self.lookup(name)? {
            Directive::Pattern(pattern) => Some(pattern),
            Directive::Keyword(_) => None,
        }
    }

    /// All patterns, highest priority first
    pub fn all_patterns(&self) -> &[Arc<Pattern>] {
        &self.patterns
    }

    pub fn all_keywords(&self) -> &[Arc<Keyword>] {
        &self.keywords
    }

    /// Directives belonging to `group`, keywords first
    pub fn group_members(&self, group: DirectiveGroup) -> Vec<Directive> {
        self.keywords
            .iter()
            .filter(|k| k.group == Some(group))
            .cloned()
            .map(Directive::Keyword)
            .chain(
                self.patterns
                    .iter()
                    .filter(|p| p.group == Some(group))
                    .cloned()
                    .map(Directive::Pattern),
            )
            .collect()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
