//! Caller privilege levels and input syntax kinds

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EolianError;

/// Minimum privilege a caller needs for a command or directive to be honored
///
/// Ordered `User < Admin < Owner`; a directive is honored when
/// `directive.permission <= caller`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum UserPermission {
    #[default]
    User,
    Admin,
    Owner,
}

impl UserPermission {
    /// Whether a caller at this level may use something requiring `required`
    pub fn allows(self, required: UserPermission) -> bool {
        required <= self
    }
}

impl std::fmt::Display for UserPermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Admin => write!(f, "admin"),
            Self::Owner => write!(f, "owner"),
        }
    }
}

impl FromStr for UserPermission {
    type Err = EolianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            "owner" => Ok(Self::Owner),
            other => Err(EolianError::invalid_input_field(
                format!("Unknown permission level '{}'", other),
                "permission",
            )),
        }
    }
}

/// How the input was written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyntaxType {
    /// Inline natural language, directives anywhere in the text
    #[default]
    Keyword,
    /// Prefix, command name first, then arguments
    Traditional,
    /// Pre-segmented structured options
    Slash,
}

impl std::fmt::Display for SyntaxType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keyword => write!(f, "keyword"),
            Self::Traditional => write!(f, "traditional"),
            Self::Slash => write!(f, "slash"),
        }
    }
}

impl FromStr for SyntaxType {
    type Err = EolianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keyword" => Ok(Self::Keyword),
            "traditional" => Ok(Self::Traditional),
            "slash" => Ok(Self::Slash),
            other => Err(EolianError::invalid_input_field(
                format!("Unknown syntax type '{}'", other),
                "syntax",
            )),
        }
    }
}
