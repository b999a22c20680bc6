//! Typed directive payloads

use serde::{Deserialize, Serialize};

/// A 1-based range as the user wrote it
///
/// `stop` may be negative, counting from the end of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeArgument {
    pub start: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<i64>,
}

impl RangeArgument {
    /// A single-sided range: the first (or last) `count` items
    pub fn first(count: i64) -> Self {
        Self {
            start: count,
            stop: None,
        }
    }

    pub fn between(start: i64, stop: i64) -> Self {
        Self {
            start,
            stop: Some(stop),
        }
    }
}

/// Where a URL points to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MusicSource {
    Spotify,
    SoundCloud,
    YouTube,
    Unknown,
}

impl MusicSource {
    /// Classify a URL or URI by host
    pub fn detect(url: &str) -> Self {
        let lower = url.to_ascii_lowercase();
        if lower.starts_with("spotify:") || lower.contains("spotify.com/") {
            Self::Spotify
        } else if lower.contains("soundcloud.com/") {
            Self::SoundCloud
        } else if lower.contains("youtube.com/") || lower.contains("youtu.be/") {
            Self::YouTube
        } else {
            Self::Unknown
        }
    }
}

impl std::fmt::Display for MusicSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spotify => write!(f, "spotify"),
            Self::SoundCloud => write!(f, "soundcloud"),
            Self::YouTube => write!(f, "youtube"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A URL together with the source it was recognized as
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlArgument {
    pub value: String,
    pub source: MusicSource,
}

impl UrlArgument {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let source = MusicSource::detect(&value);
        Self { value, source }
    }
}

/// Payload recorded for a directive in [`super::CommandOptions`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DirectiveValue {
    /// Keywords
    Flag(bool),
    /// SEARCH, IDENTIFIER
    Text(String),
    /// ARG
    List(Vec<String>),
    /// NUMBER
    Numbers(Vec<i64>),
    /// TOP, BOTTOM
    Range(RangeArgument),
    /// URL
    Url(UrlArgument),
}

impl DirectiveValue {
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_numbers(&self) -> Option<&[i64]> {
        match self {
            Self::Numbers(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_range(&self) -> Option<&RangeArgument> {
        match self {
            Self::Range(range) => Some(range),
            _ => None,
        }
    }

    pub fn as_url(&self) -> Option<&UrlArgument> {
        match self {
            Self::Url(url) => Some(url),
            _ => None,
        }
    }
}
