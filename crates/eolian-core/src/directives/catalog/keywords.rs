//! Built-in keyword definitions

use crate::directives::names;
use crate::directives::types::{DirectiveGroup, Keyword, UserPermission};
use crate::error::EolianResult;

/// Every keyword the bot understands
pub fn builtin_keywords() -> EolianResult<Vec<Keyword>> {
    Ok(vec![
        Keyword::new(names::ENABLE, "Indicates to enable a particular feature", &["enable"])?
            .with_permission(UserPermission::Owner)
            .with_group(DirectiveGroup::Switch),
        Keyword::new(names::DISABLE, "Indicates to disable a particular feature", &["disable"])?
            .with_permission(UserPermission::Owner)
            .with_group(DirectiveGroup::Switch),
        Keyword::new(names::CLEAR, "Indicates to remove some data", &["clear"])?,
        Keyword::new(names::MORE, "Indicates to increase a value", &["more"])?
            .with_group(DirectiveGroup::Increment),
        Keyword::new(names::LESS, "Indicates to decrease a value", &["less"])?
            .with_group(DirectiveGroup::Increment),
        Keyword::new(
            names::MY,
            "Indicates to fetch information from your account",
            &["my"],
        )?,
        Keyword::new(
            names::SOUNDCLOUD,
            "Indicates to fetch a resource from SoundCloud if applicable",
            &["soundcloud"],
        )?
        .with_group(DirectiveGroup::Source),
        Keyword::new(
            names::SPOTIFY,
            "Indicates to fetch a resource from Spotify if applicable",
            &["spotify"],
        )?
        .with_group(DirectiveGroup::Source),
        Keyword::new(
            names::YOUTUBE,
            "Indicates to fetch a resource from YouTube if applicable",
            &["youtube"],
        )?
        .with_group(DirectiveGroup::Source),
        Keyword::new(
            names::PLAYLIST,
            "Indicates to fetch songs from a playlist given a query",
            &["playlist"],
        )?
        .with_group(DirectiveGroup::Type),
        Keyword::new(
            names::ALBUM,
            "Indicates to fetch songs from an album given a query",
            &["album"],
        )?
        .with_group(DirectiveGroup::Type),
        Keyword::new(
            names::ARTIST,
            "Indicates to fetch songs for an artist given the query",
            &["artist"],
        )?
        .with_group(DirectiveGroup::Type),
        Keyword::new(
            names::LIKES,
            "Indicates to fetch liked songs",
            &["likes", "favorites"],
        )?
        .with_group(DirectiveGroup::Type),
        Keyword::new(names::TRACKS, "Indicates to fetch SoundCloud tracks", &["tracks"])?
            .with_group(DirectiveGroup::Type),
        Keyword::new(
            names::NEXT,
            "Indicates to place fetched tracks at the top of the queue",
            &["next"],
        )?,
        Keyword::new(
            names::SHUFFLE,
            "Indicates to shuffle the fetched tracks",
            &["shuffle", "shuffled"],
        )?,
    ])
}
