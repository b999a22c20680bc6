//! Parenthesized, bracketed and braced spans

use regex::Regex;

use super::{PatternMatcher, TextMatch, compile, extract_first};
use crate::directives::types::{DirectiveValue, SyntaxType};
use crate::error::EolianResult;

/// Characters no delimited payload may contain
const DELIMITERS: &str = r"\[\]\(\)\{\}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `( ... )`
    Paren,
    /// `[ ... ]`
    Bracket,
}

impl Delimiter {
    fn open(&self) -> char {
        match self {
            Self::Paren => '(',
            Self::Bracket => '[',
        }
    }

    fn close(&self) -> char {
        match self {
            Self::Paren => ')',
            Self::Bracket => ']',
        }
    }
}

/// Matches a single delimited span and yields its trimmed content as text
#[derive(Debug, Clone)]
pub struct DelimitedMatcher {
    delimiter: Delimiter,
    keyword_syntax_only: bool,
    regex: Regex,
}

impl DelimitedMatcher {
    pub fn new(delimiter: Delimiter) -> EolianResult<Self> {
        let open = regex::escape(&delimiter.open().to_string());
        let close = regex::escape(&delimiter.close().to_string());
        let pattern = format!(
            r"\B{open}\s*([^{d}]*[^\s{d}])\s*{close}\B",
            open = open,
            close = close,
            d = DELIMITERS
        );
        Ok(Self {
            delimiter,
            keyword_syntax_only: false,
            regex: compile(&pattern, "delimited span")?,
        })
    }

    /// Only recognize the delimited form in keyword syntax
    ///
    /// In traditional syntax the delimiters are left in place and become part
    /// of the residual text.
    pub fn keyword_syntax_only(mut self) -> Self {
        self.keyword_syntax_only = true;
        self
    }
}

impl PatternMatcher for DelimitedMatcher {
    fn match_text(&self, text: &str, syntax: SyntaxType) -> Option<TextMatch> {
        if self.keyword_syntax_only && syntax != SyntaxType::Keyword {
            return None;
        }
        extract_first(&self.regex, text, |caps| {
            caps.get(1)
                .map(|m| DirectiveValue::Text(m.as_str().trim().to_string()))
        })
    }

    fn match_value(&self, value: &str) -> Option<DirectiveValue> {
        let mut value = value.trim();
        if let Some(inner) = value
            .strip_prefix(self.delimiter.open())
            .and_then(|v| v.strip_suffix(self.delimiter.close()))
        {
            value = inner.trim();
        }
        if value.is_empty() {
            None
        } else {
            Some(DirectiveValue::Text(value.to_string()))
        }
    }

    fn example(&self, input: &str, syntax: SyntaxType) -> String {
        if self.keyword_syntax_only && syntax != SyntaxType::Keyword {
            input.to_string()
        } else {
            format!("{}{}{}", self.delimiter.open(), input, self.delimiter.close())
        }
    }
}

/// Matches `{ a; b; c }` and yields the items as a list
///
/// The free-text form needs at least two items so that a stray brace pair is
/// not mistaken for an argument list.
#[derive(Debug, Clone)]
pub struct ArgListMatcher {
    regex: Regex,
}

impl ArgListMatcher {
    pub fn new() -> EolianResult<Self> {
        let pattern = format!(
            r"\B\{{\s*([^{d}]+(?:;[^{d}]+)+)\}}\B",
            d = DELIMITERS
        );
        Ok(Self {
            regex: compile(&pattern, "argument list")?,
        })
    }

    fn split(list: &str) -> Vec<String> {
        list.split(';')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect()
    }
}

impl PatternMatcher for ArgListMatcher {
    fn match_text(&self, text: &str, _syntax: SyntaxType) -> Option<TextMatch> {
        extract_first(&self.regex, text, |caps| {
            let items = Self::split(caps.get(1)?.as_str());
            (!items.is_empty()).then_some(DirectiveValue::List(items))
        })
    }

    fn match_value(&self, value: &str) -> Option<DirectiveValue> {
        let value = value.trim();
        let value = value
            .strip_prefix('{')
            .and_then(|v| v.strip_suffix('}'))
            .unwrap_or(value);
        let items = Self::split(value);
        (!items.is_empty()).then_some(DirectiveValue::List(items))
    }

    fn example(&self, input: &str, _syntax: SyntaxType) -> String {
        format!("{{ {} }}", input)
    }
}
