//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in configurator domain operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// A submitted value is not in the catalog's choice list for a field.
    #[error("Invalid choice for {field}: {value}")]
    InvalidChoice { field: &'static str, value: String },

    /// A required field was submitted empty.
    #[error("Missing value for {field}")]
    MissingField { field: &'static str },

    /// A route segment does not name a wizard step.
    #[error("Unknown wizard step: {0}")]
    UnknownStep(String),

    /// A submission shape that the step does not accept.
    #[error("Step {step} does not accept this submission")]
    UnsupportedSubmission { step: &'static str },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}
