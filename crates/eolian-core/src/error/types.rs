//! Core error types and traits for Eolian

use thiserror::Error;

/// Result type alias for Eolian operations
pub type EolianResult<T> = Result<T, EolianError>;

/// Unified error trait that all Eolian errors implement.
pub trait UnifiedError: std::error::Error + Send + Sync {
    /// Get the error code for programmatic handling
    fn error_code(&self) -> &str;

    /// Get the human-readable error message
    fn message(&self) -> &str;

    /// Get optional context about the error
    fn context(&self) -> Option<&str> {
        None
    }

    /// Whether the message is meant to be relayed to the user who sent the input
    fn is_user_facing(&self) -> bool {
        false
    }
}

/// Main error type for Eolian
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EolianError {
    /// Two options were given that cannot be used together
    #[error("Conflicting input: {message}")]
    ConflictingInput {
        message: String,
        /// Names of the directives or option slots in conflict
        options: Vec<String>,
        context: Option<String>,
    },

    /// Text was left over after every declared directive was extracted
    #[error("Unrecognized input: {residue}")]
    UnrecognizedResidue {
        residue: String,
        command: Option<String>,
        context: Option<String>,
    },

    /// A required argument tier had no populated slot
    #[error("Missing input: {message}")]
    MissingInput {
        message: String,
        context: Option<String>,
    },

    /// Unknown command or directive
    #[error("Not found: {message}")]
    NotFound {
        message: String,
        resource_type: Option<String>,
        context: Option<String>,
    },

    /// Invalid input errors
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
        context: Option<String>,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
        context: Option<String>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        format: Option<String>,
        context: Option<String>,
    },
}
