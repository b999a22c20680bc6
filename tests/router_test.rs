//! Router integration test
//!
//! Builds a router from a configuration file and parses messages end to end.

use std::fs;

use eolian::commands::CommandRouter;
use eolian::config::load_from_file;
use eolian::directives::{MusicSource, SyntaxType, UserPermission};
use eolian::error::{EolianError, UnifiedError};
use tempfile::TempDir;

#[test]
fn test_router_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("eolian.toml");
    fs::write(&config_path, "prefix = \"$\"\nsyntax = \"traditional\"\n").unwrap();

    let config = load_from_file(&config_path).unwrap();
    let router = CommandRouter::new(&config).unwrap();

    assert!(router.message_invokes_bot("$play x"));
    assert!(!router.message_invokes_bot("!play x"));

    let parsed = router
        .parse_message("$play soundcloud daft punk", UserPermission::User, config.syntax)
        .unwrap();
    assert_eq!(parsed.name(), "play");
    assert!(parsed.options.flag("SOUNDCLOUD"));
    assert_eq!(parsed.options.search(), Some("daft punk"));
}

#[test]
fn test_parsed_command_json() {
    let router = CommandRouter::new(&Default::default()).unwrap();
    let parsed = router
        .parse_message(
            "!play spotify:album:3cWA6fj7NEfoGuGRYGxsam shuffle top 4:10",
            UserPermission::User,
            SyntaxType::Keyword,
        )
        .unwrap();

    let json = parsed.to_json();
    assert_eq!(
        json,
        serde_json::json!({
            "command": "play",
            "options": {
                "URL": {
                    "value": "spotify:album:3cWA6fj7NEfoGuGRYGxsam",
                    "source": "spotify"
                },
                "SHUFFLE": true,
                "TOP": { "start": 4, "stop": 10 }
            }
        })
    );
    assert_eq!(parsed.options.url().unwrap().source, MusicSource::Spotify);
}

#[test]
fn test_user_facing_errors() {
    let router = CommandRouter::new(&Default::default()).unwrap();

    let err = router
        .parse_message("!list shuffle everything", UserPermission::User, SyntaxType::Keyword)
        .unwrap_err();
    assert!(err.is_user_facing());
    assert_eq!(err.error_code(), "EOLIAN_UNRECOGNIZED_RESIDUE");
    assert_eq!(err.to_string(), "Unrecognized input: everything");

    let err = router
        .parse_message("!servers", UserPermission::Admin, SyntaxType::Traditional)
        .unwrap_err();
    assert!(matches!(err, EolianError::NotFound { .. }));
}

#[test]
fn test_router_is_shareable_across_threads() {
    let router = std::sync::Arc::new(CommandRouter::new(&Default::default()).unwrap());

    let handles: Vec<_> = (1..=4)
        .map(|n| {
            let router = router.clone();
            std::thread::spawn(move || {
                router
                    .parse_message(
                        &format!("!volume {n}"),
                        UserPermission::User,
                        SyntaxType::Traditional,
                    )
                    .unwrap()
                    .options
                    .numbers()
                    .map(|numbers| numbers.to_vec())
            })
        })
        .collect();

    for (n, handle) in (1..=4).zip(handles) {
        assert_eq!(handle.join().unwrap(), Some(vec![n]));
    }
}
