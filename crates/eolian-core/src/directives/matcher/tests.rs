//! Tests for pattern matchers

use super::*;
use crate::directives::types::{MusicSource, RangeArgument};

fn range(matcher: &RangeMatcher, text: &str) -> Option<(RangeArgument, String)> {
    matcher.match_text(text, SyntaxType::Keyword).map(|m| {
        let range = *m.payload.as_range().unwrap();
        (range, collapse_whitespace(&m.remainder))
    })
}

#[test]
fn test_range_single_sided() {
    let top = RangeMatcher::new("top").unwrap();
    let (range_arg, rest) = range(&top, "list TOP 100").unwrap();
    assert_eq!(range_arg, RangeArgument::first(100));
    assert_eq!(rest, "list");
}

#[test]
fn test_range_with_negative_stop() {
    let bottom = RangeMatcher::new("bottom").unwrap();
    let (range_arg, rest) = range(&bottom, "bottom 5:-5 please").unwrap();
    assert_eq!(range_arg, RangeArgument::between(5, -5));
    assert_eq!(rest, "please");
}

#[test]
fn test_range_requires_word_boundary() {
    let top = RangeMatcher::new("top").unwrap();
    assert!(range(&top, "stop 10").is_none());
    assert!(range(&top, "topping 10").is_none());
}

#[test]
fn test_malformed_range_leaves_text() {
    let top = RangeMatcher::new("top").unwrap();
    assert!(top.match_text("top abc", SyntaxType::Keyword).is_none());
    // Overflowing digits are malformed, not a hard failure
    assert!(top
        .match_text("top 99999999999999999999999", SyntaxType::Keyword)
        .is_none());
}

#[test]
fn test_range_value() {
    let top = RangeMatcher::new("top").unwrap();
    assert_eq!(
        top.match_value(" 4:10 "),
        Some(DirectiveValue::Range(RangeArgument::between(4, 10)))
    );
    assert_eq!(top.match_value("ten"), None);
}

#[test]
fn test_stripping_is_idempotent() {
    let top = RangeMatcher::new("top").unwrap();
    let first = top.match_text("top 5 and top 6", SyntaxType::Keyword).unwrap();
    assert_eq!(first.payload, DirectiveValue::Range(RangeArgument::first(5)));
    assert!(top.match_text(&first.remainder, SyntaxType::Keyword).is_none());

    let url = UrlMatcher::new().unwrap();
    let first = url
        .match_text("https://youtu.be/abc https://youtu.be/def", SyntaxType::Keyword)
        .unwrap();
    assert!(url.match_text(&first.remainder, SyntaxType::Keyword).is_none());
}

#[test]
fn test_paren_query() {
    let search = DelimitedMatcher::new(Delimiter::Paren).unwrap();
    let m = search
        .match_text("spotify playlist ( what is love )", SyntaxType::Keyword)
        .unwrap();
    assert_eq!(m.payload, DirectiveValue::Text("what is love".to_string()));
    assert_eq!(collapse_whitespace(&m.remainder), "spotify playlist");
}

#[test]
fn test_paren_query_not_attached_to_word() {
    let search = DelimitedMatcher::new(Delimiter::Paren).unwrap();
    assert!(search.match_text("play(foo)", SyntaxType::Keyword).is_none());
}

#[test]
fn test_keyword_only_query_ignored_in_traditional() {
    let search = DelimitedMatcher::new(Delimiter::Paren)
        .unwrap()
        .keyword_syntax_only();
    assert!(search.match_text("(retrowave)", SyntaxType::Traditional).is_none());
    assert!(search.match_text("(retrowave)", SyntaxType::Keyword).is_some());
    assert_eq!(search.example("retrowave", SyntaxType::Traditional), "retrowave");
    assert_eq!(search.example("retrowave", SyntaxType::Keyword), "(retrowave)");
}

#[test]
fn test_bracket_does_not_cross_delimiters() {
    let identifier = DelimitedMatcher::new(Delimiter::Bracket).unwrap();
    assert!(identifier.match_text("[a (b) c]", SyntaxType::Keyword).is_none());
    let m = identifier
        .match_text("[music playlist #2] (query)", SyntaxType::Keyword)
        .unwrap();
    assert_eq!(m.payload, DirectiveValue::Text("music playlist #2".to_string()));
    assert_eq!(collapse_whitespace(&m.remainder), "(query)");
}

#[test]
fn test_bracket_value_strips_delimiters() {
    let identifier = DelimitedMatcher::new(Delimiter::Bracket).unwrap();
    assert_eq!(
        identifier.match_value("[retro]"),
        Some(DirectiveValue::Text("retro".to_string()))
    );
    assert_eq!(
        identifier.match_value("retro"),
        Some(DirectiveValue::Text("retro".to_string()))
    );
    assert_eq!(identifier.match_value("  "), None);
}

#[test]
fn test_arg_list() {
    let args = ArgListMatcher::new().unwrap();
    let m = args
        .match_text("servers { sort ; botCount }", SyntaxType::Keyword)
        .unwrap();
    assert_eq!(
        m.payload,
        DirectiveValue::List(vec!["sort".to_string(), "botCount".to_string()])
    );
    assert_eq!(collapse_whitespace(&m.remainder), "servers");
}

#[test]
fn test_arg_list_needs_two_items() {
    let args = ArgListMatcher::new().unwrap();
    assert!(args.match_text("{ lonely }", SyntaxType::Keyword).is_none());
    assert_eq!(
        args.match_value("lonely"),
        Some(DirectiveValue::List(vec!["lonely".to_string()]))
    );
}

#[test]
fn test_arg_list_rejects_nested_delimiters() {
    let args = ArgListMatcher::new().unwrap();
    assert!(args.match_text("{ a; [b] }", SyntaxType::Keyword).is_none());
}

#[test]
fn test_url_sources() {
    let url = UrlMatcher::new().unwrap();
    let cases = [
        (
            "https://open.spotify.com/album/3cWA6fj7NEfoGuGRYGxsam?si=cAQnHBD0Q6GO62egKBJmFQ",
            MusicSource::Spotify,
        ),
        (
            "soundcloud.com/kayfluxx/timbaland-apologize-ft-one-republic-kayfluxx-remix",
            MusicSource::SoundCloud,
        ),
        ("spotify:album:3cWA6fj7NEfoGuGRYGxsam", MusicSource::Spotify),
        ("https://www.youtube.com/watch?v=FRjOSmc01-M", MusicSource::YouTube),
        ("https://youtu.be/FRjOSmc01-M", MusicSource::YouTube),
        ("https://example.com/song", MusicSource::Unknown),
    ];
    for (input, source) in cases {
        let m = url
            .match_text(&format!("play {} next", input), SyntaxType::Keyword)
            .unwrap();
        let arg = m.payload.as_url().unwrap();
        assert_eq!(arg.value, input);
        assert_eq!(arg.source, source);
        assert_eq!(collapse_whitespace(&m.remainder), "play next");
    }
}

#[test]
fn test_url_stops_at_bracket() {
    let url = UrlMatcher::new().unwrap();
    let m = url
        .match_text("https://youtu.be/abc[retro]", SyntaxType::Keyword)
        .unwrap();
    assert_eq!(m.payload.as_url().unwrap().value, "https://youtu.be/abc");
    assert_eq!(m.remainder.trim(), "[retro]");
}

#[test]
fn test_url_value_must_be_whole_link() {
    let url = UrlMatcher::new().unwrap();
    let value = url.match_value("  https://youtu.be/abc ").unwrap();
    assert_eq!(value.as_url().unwrap().value, "https://youtu.be/abc");
    assert!(url.match_value("never gonna https://youtu.be/abc").is_none());
    assert!(url.match_value("https://youtu.be/abc give you up").is_none());
}

#[test]
fn test_range_skips_unparseable_occurrence() {
    let top = RangeMatcher::new("top").unwrap();
    let (range_arg, rest) = range(&top, "list top 99999999999999999999 top 5").unwrap();
    assert_eq!(range_arg, RangeArgument::first(5));
    assert_eq!(rest, "list top 99999999999999999999");
    assert!(range(&top, &rest).is_none());
}

#[test]
fn test_number_value_rejects_words() {
    let number = NumberMatcher;
    assert_eq!(
        number.match_value("40 60"),
        Some(DirectiveValue::Numbers(vec![40, 60]))
    );
    assert!(number.match_value("40 loud").is_none());
    assert!(number.match_value("").is_none());
}

#[test]
fn test_numbers() {
    let number = NumberMatcher;
    let m = number.match_text("page 2 of 10", SyntaxType::Keyword).unwrap();
    assert_eq!(m.payload, DirectiveValue::Numbers(vec![2, 10]));
    assert_eq!(m.remainder, "page of");
    assert!(number.match_text("no digits here", SyntaxType::Keyword).is_none());
    assert!(number.match_text("4:10", SyntaxType::Keyword).is_none());
}

#[test]
fn test_collapse_whitespace() {
    assert_eq!(collapse_whitespace("  a   b \t c  "), "a b c");
    assert_eq!(collapse_whitespace("   "), "");
}
