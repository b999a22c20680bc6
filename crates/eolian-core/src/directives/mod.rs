//! Directives: the typed units of meaning extracted from user input
//!
//! A directive is either a [`Keyword`] (a boolean toggle matched by a fixed
//! word) or a [`Pattern`] (a typed payload such as a range, URL or search
//! query, matched by a delimiter-aware matcher and extracted in priority
//! order).
//!
//! # Overview
//!
//! ```text
//!  "play spotify playlist (retrowave) top 10"
//!        │
//!        ▼  patterns, highest priority first
//!  SEARCH "retrowave", TOP {start: 10}
//!        │
//!        ▼  keywords on what is left
//!  SPOTIFY, PLAYLIST
//!        │
//!        ▼
//!  CommandOptions
//! ```
//!
//! The [`DirectiveCatalog`] holds every definition. It is built once at
//! startup and shared read-only by all resolutions.

pub mod catalog;
pub mod matcher;
pub mod names;
pub mod range;
pub mod types;

pub use catalog::{Directive, DirectiveCatalog};
pub use matcher::{PatternMatcher, TextMatch};
pub use range::{AbsoluteRange, apply_range, normalize, range_option};
pub use types::{
    CommandOptions, DirectiveGroup, DirectiveValue, Keyword, MusicSource, Pattern, RangeArgument,
    SyntaxType, UrlArgument, UserPermission,
};
