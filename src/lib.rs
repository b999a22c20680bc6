//! Eolian
//!
//! Directive parsing engine for the Eolian music bot. See [`eolian_core`].

pub use eolian_core::*;
