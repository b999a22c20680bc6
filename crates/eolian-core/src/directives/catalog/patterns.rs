//! Built-in pattern definitions
//!
//! Priorities decide extraction order. URLs go first because their bodies may
//! contain words that look like keywords; NUMBER goes last so it only sees
//! digits nothing else claimed.

use crate::directives::matcher::{
    ArgListMatcher, DelimitedMatcher, Delimiter, NumberMatcher, RangeMatcher, UrlMatcher,
};
use crate::directives::names;
use crate::directives::types::{DirectiveGroup, Pattern};
use crate::error::EolianResult;

const URL_PRIORITY: i32 = 6;
const ARG_PRIORITY: i32 = 5;
const IDENTIFIER_PRIORITY: i32 = 4;
const SEARCH_PRIORITY: i32 = 3;
const RANGE_PRIORITY: i32 = 2;
const NUMBER_PRIORITY: i32 = 1;

/// Every pattern the bot understands
pub fn builtin_patterns() -> EolianResult<Vec<Pattern>> {
    Ok(vec![
        Pattern::new(
            names::URL,
            "Indicates that you may specify a URL to a resource from YouTube, Spotify, \
             or SoundCloud.",
            URL_PRIORITY,
            UrlMatcher::new()?,
        )
        .with_usage(&[
            "https://open.spotify.com/album/3cWA6fj7NEfoGuGRYGxsam",
            "soundcloud.com/kayfluxx/timbaland-apologize-ft-one-republic-kayfluxx-remix",
            "spotify:album:3cWA6fj7NEfoGuGRYGxsam",
            "https://www.youtube.com/watch?v=FRjOSmc01-M",
        ]),
        Pattern::new(
            names::ARG,
            "Used for when keywords just won't cut it.",
            ARG_PRIORITY,
            ArgListMatcher::new()?,
        )
        .with_usage(&["arg1; arg2; arg3"]),
        Pattern::new(
            names::IDENTIFIER,
            "Used for referring to an identifier (a shortcut) for some resource \
             such as a playlist.",
            IDENTIFIER_PRIORITY,
            DelimitedMatcher::new(Delimiter::Bracket)?,
        )
        .with_usage(&["my identifier", "music playlist #2"]),
        Pattern::new(
            names::SEARCH,
            "Used for searching",
            SEARCH_PRIORITY,
            DelimitedMatcher::new(Delimiter::Paren)?.keyword_syntax_only(),
        )
        .with_usage(&["what is love", "deadmau5"]),
        Pattern::new(
            names::TOP,
            "Indicates to fetch the range of tracks starting from the beginning of the list",
            RANGE_PRIORITY,
            RangeMatcher::new("top")?,
        )
        .with_group(DirectiveGroup::Range)
        .with_usage(&["100", "4:10", "5:-5"]),
        Pattern::new(
            names::BOTTOM,
            "Indicates to fetch the range of tracks starting from the end of the list",
            RANGE_PRIORITY,
            RangeMatcher::new("bottom")?,
        )
        .with_group(DirectiveGroup::Range)
        .with_usage(&["100", "4:10", "5:-5"]),
        Pattern::new(
            names::NUMBER,
            "Indicates a number or a list of numbers",
            NUMBER_PRIORITY,
            NumberMatcher,
        )
        .with_usage(&["5", "1 2 3"]),
    ])
}
