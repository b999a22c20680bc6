//! Text matchers for pattern directives
//!
//! Each matcher both detects its directive and removes it from the text in a
//! single call, so extraction never sees stale spans. The delimiter classes
//! handled here are disjoint: a parenthesized query, a bracketed identifier,
//! a braced argument list and a URL never contain each other's delimiters.

mod delimited;
mod number;
mod range;
mod url;

pub use delimited::{ArgListMatcher, Delimiter, DelimitedMatcher};
pub use number::NumberMatcher;
pub use range::RangeMatcher;
pub use url::UrlMatcher;

use regex::{Captures, Regex};

use crate::directives::types::{DirectiveValue, SyntaxType};
use crate::error::{EolianError, EolianResult};

/// Result of a successful extraction
#[derive(Debug, Clone, PartialEq)]
pub struct TextMatch {
    /// Payload of the first occurrence
    pub payload: DirectiveValue,
    /// Input with every occurrence removed
    pub remainder: String,
}

impl TextMatch {
    pub fn new(payload: DirectiveValue, remainder: impl Into<String>) -> Self {
        Self {
            payload,
            remainder: remainder.into(),
        }
    }
}

/// Typed matcher behind a [`crate::directives::Pattern`]
pub trait PatternMatcher: std::fmt::Debug + Send + Sync {
    /// Find the directive in free text
    ///
    /// Returns `None` and leaves the text alone when the directive is absent
    /// or malformed.
    fn match_text(&self, text: &str, syntax: SyntaxType) -> Option<TextMatch>;

    /// Parse a bare structured option value
    fn match_value(&self, value: &str) -> Option<DirectiveValue>;

    /// Render `input` the way a user would type it in free text
    fn example(&self, input: &str, syntax: SyntaxType) -> String;
}

/// Collapse runs of whitespace and trim both ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn compile(pattern: &str, directive: &str) -> EolianResult<Regex> {
    Regex::new(pattern).map_err(|e| {
        EolianError::config_with_context(
            format!("Invalid matcher for {}: {}", directive, e),
            "Building directive catalog",
        )
    })
}

/// Parse the first occurrence that yields a value and strip every one that does
///
/// Occurrences the parser rejects stay in the remainder.
pub(crate) fn extract_first<F>(regex: &Regex, text: &str, parse: F) -> Option<TextMatch>
where
    F: Fn(&Captures<'_>) -> Option<DirectiveValue>,
{
    let payload = regex.captures_iter(text).find_map(|caps| parse(&caps))?;
    let remainder = regex
        .replace_all(text, |caps: &Captures<'_>| match parse(caps) {
            Some(_) => " ".to_string(),
            None => caps[0].to_string(),
        })
        .into_owned();
    Some(TextMatch::new(payload, remainder))
}

#[cfg(test)]
mod tests;
