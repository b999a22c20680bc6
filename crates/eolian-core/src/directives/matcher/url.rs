//! Links to music sources

use regex::Regex;

use super::{PatternMatcher, TextMatch, compile, extract_first};
use crate::directives::types::{DirectiveValue, SyntaxType, UrlArgument};
use crate::error::EolianResult;

/// Matches `http(s)://host.com/...`, `youtu.be/...` and `spotify:type:id`
///
/// URL bodies stop at whitespace and at any bracket, parenthesis or brace so a
/// neighbouring delimited span is never swallowed.
#[derive(Debug, Clone)]
pub struct UrlMatcher {
    regex: Regex,
    value_regex: Regex,
}

impl UrlMatcher {
    pub fn new() -> EolianResult<Self> {
        let body = r"[^\s\[\]\(\)\{\}]+";
        let link = format!(
            concat!(
                r"(?:https?://)?{body}\.com/{body}",
                r"|(?:https?://)?youtu\.be/{body}",
                r"|spotify:[a-zA-Z]+:{body}",
            ),
            body = body
        );
        Ok(Self {
            regex: compile(&format!(r"\b({})", link), "url")?,
            value_regex: compile(&format!(r"^({})$", link), "url")?,
        })
    }
}

impl PatternMatcher for UrlMatcher {
    fn match_text(&self, text: &str, _syntax: SyntaxType) -> Option<TextMatch> {
        extract_first(&self.regex, text, |caps| {
            caps.get(1)
                .map(|m| DirectiveValue::Url(UrlArgument::new(m.as_str())))
        })
    }

    fn match_value(&self, value: &str) -> Option<DirectiveValue> {
        self.value_regex
            .captures(value.trim())
            .and_then(|caps| caps.get(1))
            .map(|m| DirectiveValue::Url(UrlArgument::new(m.as_str())))
    }

    fn example(&self, input: &str, _syntax: SyntaxType) -> String {
        input.to_string()
    }
}
