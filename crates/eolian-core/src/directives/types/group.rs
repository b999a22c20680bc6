//! Mutual-exclusion groups

use serde::{Deserialize, Serialize};

/// A mutual-exclusion tier: at most one member survives in resolved options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectiveGroup {
    /// Where to fetch a resource from
    Source,
    /// What kind of resource to fetch
    Type,
    /// Turning a feature on or off
    Switch,
    /// Raising or lowering a value
    Increment,
    /// Which end of a list a range counts from
    Range,
}

impl DirectiveGroup {
    pub const ALL: [DirectiveGroup; 5] = [
        Self::Source,
        Self::Type,
        Self::Switch,
        Self::Increment,
        Self::Range,
    ];

    /// Lowercase name, also the structured option key for the group
    pub fn name(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Type => "type",
            Self::Switch => "switch",
            Self::Increment => "increment",
            Self::Range => "range",
        }
    }

    pub fn details(&self) -> &'static str {
        match self {
            Self::Source => "The source to fetch a resource from",
            Self::Type => "The type of resource to fetch",
            Self::Switch => "Enable or disable a feature",
            Self::Increment => "Increase or decrease a value",
            Self::Range => "Select a range of items from the start or the end of a list",
        }
    }

    /// Look up a group by its structured option key
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|group| group.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::fmt::Display for DirectiveGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
