//! Constructor methods for EolianError

use super::types::EolianError;

impl EolianError {
    /// Create a conflicting input error naming the options in conflict
    pub fn conflicting_input<I, S>(message: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::ConflictingInput {
            message: message.into(),
            options: options.into_iter().map(Into::into).collect(),
            context: None,
        }
    }

    /// Create an unrecognized residue error for a specific command
    pub fn unrecognized_residue_for(
        residue: impl Into<String>,
        command: impl Into<String>,
    ) -> Self {
        Self::UnrecognizedResidue {
            residue: residue.into(),
            command: Some(command.into()),
            context: None,
        }
    }

    /// Create a missing input error
    pub fn missing_input(message: impl Into<String>) -> Self {
        Self::MissingInput {
            message: message.into(),
            context: None,
        }
    }

    /// Create a not found error with resource type
    pub fn not_found_resource(
        message: impl Into<String>,
        resource_type: impl Into<String>,
    ) -> Self {
        Self::NotFound {
            message: message.into(),
            resource_type: Some(resource_type.into()),
            context: None,
        }
    }

    /// Create an invalid input error with field name
    pub fn invalid_input_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            field: Some(field.into()),
            context: None,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration error with context
    pub fn config_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create a new IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
            context: None,
        }
    }

    /// Create an IO error with path
    pub fn io_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
            context: None,
        }
    }

    /// Create a serialization error for the given format
    pub fn serialization(message: impl Into<String>, format: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
            format: Some(format.into()),
            context: None,
        }
    }

    /// Attach context to any variant, replacing previous context
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        let ctx = Some(ctx.into());
        match &mut self {
            Self::ConflictingInput { context, .. }
            | Self::UnrecognizedResidue { context, .. }
            | Self::MissingInput { context, .. }
            | Self::NotFound { context, .. }
            | Self::InvalidInput { context, .. }
            | Self::Config { context, .. }
            | Self::Io { context, .. }
            | Self::Serialization { context, .. } => *context = ctx,
        }
        self
    }
}
