//! `TOP 4:10` style range expressions

use regex::Regex;

use super::{PatternMatcher, TextMatch, compile, extract_first};
use crate::directives::types::{DirectiveValue, RangeArgument, SyntaxType};
use crate::error::EolianResult;

/// Matches `<keyword> start[:stop]`
///
/// Digits that do not fit an `i64` make the expression malformed, which is
/// reported as no match so the literal tokens stay in the text.
#[derive(Debug, Clone)]
pub struct RangeMatcher {
    keyword: String,
    text_regex: Regex,
    value_regex: Regex,
}

impl RangeMatcher {
    pub fn new(keyword: &str) -> EolianResult<Self> {
        let keyword = keyword.trim().to_lowercase();
        let text_regex = compile(
            &format!(r"(?i)\b{}\s+(\d+)(?::(-?\d+))?\b", regex::escape(&keyword)),
            &keyword,
        )?;
        let value_regex = compile(r"^(\d+)(?::(-?\d+))?$", &keyword)?;
        Ok(Self {
            keyword,
            text_regex,
            value_regex,
        })
    }

    fn parse(start: &str, stop: Option<&str>) -> Option<DirectiveValue> {
        let start = start.parse::<i64>().ok()?;
        let stop = match stop {
            Some(stop) => Some(stop.parse::<i64>().ok()?),
            None => None,
        };
        Some(DirectiveValue::Range(RangeArgument { start, stop }))
    }
}

impl PatternMatcher for RangeMatcher {
    fn match_text(&self, text: &str, _syntax: SyntaxType) -> Option<TextMatch> {
        extract_first(&self.text_regex, text, |caps| {
            Self::parse(caps.get(1)?.as_str(), caps.get(2).map(|m| m.as_str()))
        })
    }

    fn match_value(&self, value: &str) -> Option<DirectiveValue> {
        let caps = self.value_regex.captures(value.trim())?;
        Self::parse(caps.get(1)?.as_str(), caps.get(2).map(|m| m.as_str()))
    }

    fn example(&self, input: &str, _syntax: SyntaxType) -> String {
        format!("{} {}", self.keyword, input)
    }
}
