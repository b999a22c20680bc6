//! Tests for directive types

use super::*;
use crate::directives::matcher::NumberMatcher;

#[test]
fn test_permission_ordering() {
    assert!(UserPermission::User < UserPermission::Admin);
    assert!(UserPermission::Admin < UserPermission::Owner);
    assert!(UserPermission::Owner.allows(UserPermission::Admin));
    assert!(!UserPermission::User.allows(UserPermission::Admin));
    assert!(UserPermission::Admin.allows(UserPermission::Admin));
}

#[test]
fn test_permission_parse() {
    assert_eq!("Owner".parse::<UserPermission>().unwrap(), UserPermission::Owner);
    assert!("root".parse::<UserPermission>().is_err());
    assert_eq!(UserPermission::Admin.to_string(), "admin");
}

#[test]
fn test_syntax_parse() {
    assert_eq!("slash".parse::<SyntaxType>().unwrap(), SyntaxType::Slash);
    assert_eq!(SyntaxType::default(), SyntaxType::Keyword);
    assert!("prose".parse::<SyntaxType>().is_err());
}

#[test]
fn test_group_names() {
    for group in DirectiveGroup::ALL {
        assert_eq!(DirectiveGroup::from_name(group.name()), Some(group));
    }
    assert_eq!(DirectiveGroup::from_name("Source"), Some(DirectiveGroup::Source));
    assert_eq!(DirectiveGroup::from_name("genre"), None);
}

#[test]
fn test_keyword_word_boundary() {
    let keyword = Keyword::new("NEXT", "next", &["next"]).unwrap();
    assert!(keyword.matches("play NEXT"));
    assert!(!keyword.matches("nextdoor"));
    assert!(!keyword.matches("context"));
    assert_eq!(keyword.match_text("nextdoor"), None);
}

#[test]
fn test_keyword_aliases_and_removal() {
    let keyword = Keyword::new("SHUFFLE", "shuffle", &["shuffle", "shuffled"]).unwrap();
    let rest = keyword.match_text("play shuffled and shuffle").unwrap();
    assert_eq!(rest.split_whitespace().collect::<Vec<_>>(), vec!["play", "and"]);
    assert!(keyword.match_text(&rest).is_none());
}

#[test]
fn test_keyword_requires_tokens() {
    assert!(Keyword::new("EMPTY", "nothing", &[]).is_err());
}

#[test]
fn test_keyword_examples() {
    let grouped = Keyword::new("spotify", "spotify", &["spotify"])
        .unwrap()
        .with_group(DirectiveGroup::Source);
    assert_eq!(grouped.name, "SPOTIFY");
    assert_eq!(grouped.example(SyntaxType::Keyword), "spotify");
    assert_eq!(grouped.example(SyntaxType::Slash), "source: spotify");

    let plain = Keyword::new("NEXT", "next", &["next"]).unwrap();
    assert_eq!(plain.example(SyntaxType::Slash), "next: True");
}

#[test]
fn test_pattern_slash_matching_uses_whole_value() {
    let pattern = Pattern::new("number", "numbers", 1, NumberMatcher);
    let found = pattern.match_text("3 4", SyntaxType::Slash).unwrap();
    assert_eq!(found.payload, DirectiveValue::Numbers(vec![3, 4]));
    assert!(found.remainder.is_empty());
    assert_eq!(pattern.example("3", SyntaxType::Slash), "number: 3");
}

#[test]
fn test_music_source_detection() {
    assert_eq!(MusicSource::detect("spotify:track:123"), MusicSource::Spotify);
    assert_eq!(
        MusicSource::detect("https://soundcloud.com/artist/track"),
        MusicSource::SoundCloud
    );
    assert_eq!(MusicSource::detect("youtu.be/xyz"), MusicSource::YouTube);
    assert_eq!(MusicSource::detect("https://example.com/x"), MusicSource::Unknown);
}

#[test]
fn test_options_accessors() {
    let mut options = CommandOptions::new();
    options.insert("SHUFFLE", DirectiveValue::Flag(true));
    options.insert("SEARCH", DirectiveValue::Text("deadmau5".to_string()));
    options.insert("TOP", DirectiveValue::Range(RangeArgument::first(10)));

    assert!(options.flag("SHUFFLE"));
    assert!(!options.flag("NEXT"));
    assert!(!options.flag("SEARCH"));
    assert_eq!(options.search(), Some("deadmau5"));
    assert_eq!(options.top(), Some(&RangeArgument::first(10)));
    assert_eq!(options.bottom(), None);
    assert_eq!(options.names().collect::<Vec<_>>(), vec!["SEARCH", "SHUFFLE", "TOP"]);
}

#[test]
fn test_options_serialize() {
    let mut options = CommandOptions::new();
    options.insert("NEXT", DirectiveValue::Flag(true));
    options.insert("URL", DirectiveValue::Url(UrlArgument::new("spotify:album:abc")));
    options.insert("BOTTOM", DirectiveValue::Range(RangeArgument::between(5, -5)));

    let json = serde_json::to_value(&options).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "BOTTOM": {"start": 5, "stop": -5},
            "NEXT": true,
            "URL": {"value": "spotify:album:abc", "source": "spotify"},
        })
    );
}
