//! Directive type definitions

mod group;
mod keyword;
mod options;
mod pattern;
mod permission;
mod value;

pub use group::DirectiveGroup;
pub use keyword::Keyword;
pub use options::CommandOptions;
pub use pattern::Pattern;
pub use permission::{SyntaxType, UserPermission};
pub use value::{DirectiveValue, MusicSource, RangeArgument, UrlArgument};

#[cfg(test)]
mod tests;
