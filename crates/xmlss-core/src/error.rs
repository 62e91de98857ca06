//! Error types for xmlss

use thiserror::Error;

use crate::state::GeneratorState;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building styles or generating a document
///
/// Every failure is final: once an operation returns an error, the
/// generator and whatever was already written to the sink must be
/// discarded.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested operation is not legal from the current state
    #[error(
        "Invalid transition from {from} to {to} (allowed next states: {})",
        list_states(.allowed)
    )]
    InvalidTransition {
        from: GeneratorState,
        to: GeneratorState,
        allowed: Vec<GeneratorState>,
    },

    /// Caller input was rejected (empty sheet name, overlapping column, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// The underlying sink failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new validation error with a message
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Error::Validation(msg.into())
    }

    /// Check if this is an invalid transition error
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Error::InvalidTransition { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

fn list_states(states: &[GeneratorState]) -> String {
    if states.is_empty() {
        return "none".to_string();
    }
    states
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
