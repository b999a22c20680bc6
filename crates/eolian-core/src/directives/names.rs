//! Names of the built-in directives

pub const ENABLE: &str = "ENABLE";
pub const DISABLE: &str = "DISABLE";
pub const CLEAR: &str = "CLEAR";
pub const MORE: &str = "MORE";
pub const LESS: &str = "LESS";
pub const MY: &str = "MY";
pub const SOUNDCLOUD: &str = "SOUNDCLOUD";
pub const SPOTIFY: &str = "SPOTIFY";
pub const YOUTUBE: &str = "YOUTUBE";
pub const PLAYLIST: &str = "PLAYLIST";
pub const ALBUM: &str = "ALBUM";
pub const ARTIST: &str = "ARTIST";
pub const NEXT: &str = "NEXT";
pub const SHUFFLE: &str = "SHUFFLE";
pub const LIKES: &str = "LIKES";
pub const TRACKS: &str = "TRACKS";

pub const TOP: &str = "TOP";
pub const BOTTOM: &str = "BOTTOM";
pub const SEARCH: &str = "SEARCH";
pub const IDENTIFIER: &str = "IDENTIFIER";
pub const URL: &str = "URL";
pub const NUMBER: &str = "NUMBER";
pub const ARG: &str = "ARG";
