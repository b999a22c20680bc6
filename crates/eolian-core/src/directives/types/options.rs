//! Canonical resolved options

use serde::Serialize;
use std::collections::BTreeMap;

use super::value::{DirectiveValue, RangeArgument, UrlArgument};
use crate::directives::names;

/// Sparse mapping from directive name to its resolved value
///
/// A missing key means "not specified", never false or zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CommandOptions {
    values: BTreeMap<String, DirectiveValue>,
}

impl CommandOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous one
    ///
    /// Group and permission rules are enforced by the resolver, not here.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: DirectiveValue,
    ) -> Option<DirectiveValue> {
        self.values.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&DirectiveValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<DirectiveValue> {
        self.values.remove(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Directive names present, in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DirectiveValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// True only when a keyword was matched and honored
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).and_then(DirectiveValue::as_flag).unwrap_or(false)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(DirectiveValue::as_text)
    }

    pub fn list(&self, name: &str) -> Option<&[String]> {
        self.get(name).and_then(DirectiveValue::as_list)
    }

    pub fn number_list(&self, name: &str) -> Option<&[i64]> {
        self.get(name).and_then(DirectiveValue::as_numbers)
    }

    pub fn range(&self, name: &str) -> Option<&RangeArgument> {
        self.get(name).and_then(DirectiveValue::as_range)
    }

    pub fn search(&self) -> Option<&str> {
        self.text(names::SEARCH)
    }

    pub fn identifier(&self) -> Option<&str> {
        self.text(names::IDENTIFIER)
    }

    pub fn numbers(&self) -> Option<&[i64]> {
        self.number_list(names::NUMBER)
    }

    pub fn url(&self) -> Option<&UrlArgument> {
        self.get(names::URL).and_then(DirectiveValue::as_url)
    }

    pub fn args(&self) -> Option<&[String]> {
        self.list(names::ARG)
    }

    pub fn top(&self) -> Option<&RangeArgument> {
        self.range(names::TOP)
    }

    pub fn bottom(&self) -> Option<&RangeArgument> {
        self.range(names::BOTTOM)
    }
}

impl FromIterator<(String, DirectiveValue)> for CommandOptions {
    fn from_iter<I: IntoIterator<Item = (String, DirectiveValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
