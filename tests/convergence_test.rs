//! Convergence integration test
//!
//! A message and the equivalent slash options must resolve to the same
//! options, whichever way the user invoked the command.

use eolian::commands::{CommandRouter, SlashOptions};
use eolian::config::EngineConfig;
use eolian::directives::{SyntaxType, UserPermission};

fn router() -> CommandRouter {
    CommandRouter::new(&EngineConfig::default()).unwrap()
}

fn assert_converges(
    message: &str,
    command: &str,
    options: &[(&str, &str)],
    permission: UserPermission,
) {
    let router = router();
    let from_text = router
        .parse_message(message, permission, SyntaxType::Keyword)
        .unwrap();
    let from_slash = router
        .parse_slash(command, &options.iter().copied().collect::<SlashOptions>(), permission)
        .unwrap();

    assert_eq!(from_text.name(), from_slash.name(), "command for {message:?}");
    assert_eq!(from_text.options, from_slash.options, "options for {message:?}");
}

#[test]
fn test_play_playlist() {
    assert_converges(
        "play spotify playlist (retrowave)",
        "play",
        &[("source", "spotify"), ("type", "playlist"), ("search", "retrowave")],
        UserPermission::User,
    );
}

#[test]
fn test_play_with_flags_and_range() {
    assert_converges(
        "play my likes shuffle next bottom 20",
        "play",
        &[
            ("my", "true"),
            ("type", "likes"),
            ("shuffle", "true"),
            ("next", ""),
            ("range", "bottom 20"),
        ],
        UserPermission::User,
    );
}

#[test]
fn test_play_url() {
    assert_converges(
        "play https://www.youtube.com/watch?v=FRjOSmc01-M next",
        "play",
        &[("url", "https://www.youtube.com/watch?v=FRjOSmc01-M"), ("next", "true")],
        UserPermission::User,
    );
}

#[test]
fn test_identify() {
    assert_converges(
        "identify soundcloud artist (deadmau5) [mau]",
        "identify",
        &[
            ("source", "soundcloud"),
            ("type", "artist"),
            ("search", "deadmau5"),
            ("identifier", "mau"),
        ],
        UserPermission::User,
    );
}

#[test]
fn test_list_range() {
    assert_converges(
        "list top 5:-5",
        "list",
        &[("top", "5:-5")],
        UserPermission::User,
    );
}

#[test]
fn test_volume() {
    assert_converges(
        "volume less 5",
        "volume",
        &[("less", "true"), ("number", "5")],
        UserPermission::User,
    );
}

#[test]
fn test_feature_switch_for_owner() {
    assert_converges(
        "feature disable (autoplay)",
        "feature",
        &[("switch", "disable"), ("search", "autoplay")],
        UserPermission::Owner,
    );
}
