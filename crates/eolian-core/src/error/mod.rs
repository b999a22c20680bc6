//! Error types for Eolian
//!
//! Every failure the engine can report is an `EolianError`. All variants
//! implement the `UnifiedError` trait which provides consistent fields:
//! - error_code: A unique identifier for programmatic error handling
//! - message: Human-readable error message, safe to show to the chat user
//! - context: Optional additional context about where/why the error occurred
//!
//! A directive that is simply absent, or present but not permitted for the
//! caller, is never an error. Only well-formed but contradictory input is.

mod constructors;
mod conversions;
mod types;
mod unified_error;

pub use types::{EolianError, EolianResult, UnifiedError};
