//! UnifiedError trait implementation for EolianError

use super::types::{EolianError, UnifiedError};

impl UnifiedError for EolianError {
    fn error_code(&self) -> &str {
        match self {
            Self::ConflictingInput { .. } => "EOLIAN_CONFLICTING_INPUT",
            Self::UnrecognizedResidue { .. } => "EOLIAN_UNRECOGNIZED_RESIDUE",
            Self::MissingInput { .. } => "EOLIAN_MISSING_INPUT",
            Self::NotFound { .. } => "EOLIAN_NOT_FOUND",
            Self::InvalidInput { .. } => "EOLIAN_INVALID_INPUT",
            Self::Config { .. } => "EOLIAN_CONFIG",
            Self::Io { .. } => "EOLIAN_IO",
            Self::Serialization { .. } => "EOLIAN_SERIALIZATION",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::ConflictingInput { message, .. } => message,
            Self::UnrecognizedResidue { residue, .. } => residue,
            Self::MissingInput { message, .. } => message,
            Self::NotFound { message, .. } => message,
            Self::InvalidInput { message, .. } => message,
            Self::Config { message, .. } => message,
            Self::Io { message, .. } => message,
            Self::Serialization { message, .. } => message,
        }
    }

    fn context(&self) -> Option<&str> {
        match self {
            Self::ConflictingInput { context, .. } => context.as_deref(),
            Self::UnrecognizedResidue { context, .. } => context.as_deref(),
            Self::MissingInput { context, .. } => context.as_deref(),
            Self::NotFound { context, .. } => context.as_deref(),
            Self::InvalidInput { context, .. } => context.as_deref(),
            Self::Config { context, .. } => context.as_deref(),
            Self::Io { context, .. } => context.as_deref(),
            Self::Serialization { context, .. } => context.as_deref(),
        }
    }

    fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::ConflictingInput { .. }
                | Self::UnrecognizedResidue { .. }
                | Self::MissingInput { .. }
                | Self::NotFound { .. }
                | Self::InvalidInput { .. }
        )
    }
}
