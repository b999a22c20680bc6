//! Standalone integers

use super::{PatternMatcher, TextMatch};
use crate::directives::types::{DirectiveValue, SyntaxType};

/// Collects every whitespace-separated token that is an integer
///
/// A structured value must consist of integers only.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberMatcher;

impl NumberMatcher {
    fn split(text: &str) -> (Vec<i64>, Vec<&str>) {
        let mut numbers = Vec::new();
        let mut rest = Vec::new();
        for token in text.split_whitespace() {
            match token.parse::<i64>() {
                Ok(number) => numbers.push(number),
                Err(_) => rest.push(token),
            }
        }
        (numbers, rest)
    }
}

impl PatternMatcher for NumberMatcher {
    fn match_text(&self, text: &str, _syntax: SyntaxType) -> Option<TextMatch> {
        let (numbers, rest) = Self::split(text);
        if numbers.is_empty() {
            return None;
        }
        Some(TextMatch::new(DirectiveValue::Numbers(numbers), rest.join(" ")))
    }

    fn match_value(&self, value: &str) -> Option<DirectiveValue> {
        let (numbers, rest) = Self::split(value);
        (!numbers.is_empty() && rest.is_empty()).then_some(DirectiveValue::Numbers(numbers))
    }

    fn example(&self, input: &str, _syntax: SyntaxType) -> String {
        input.to_string()
    }
}
