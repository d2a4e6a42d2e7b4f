//! Error types for post generation.

use thiserror::Error;

/// A failure while generating a single platform's post.
///
/// Provider errors never abort a run: they are stored as that platform's
/// outcome and rendered through their `Display` text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The provider answered with a non-success HTTP status.
    #[error("Error with {provider} API: {body}")]
    Http {
        provider: &'static str,
        status: u16,
        body: String,
    },

    /// The response body did not have the expected shape.
    #[error("Error parsing {provider} API response: {detail}")]
    ResponseShape {
        provider: &'static str,
        detail: String,
    },

    /// The request never produced a response (connect failure, timeout, ...).
    #[error("Error: {0}")]
    Transport(String),
}

/// Event details failed validation; the run is blocked entirely.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Event name and description are required!")]
    MissingRequiredFields,
}

/// A string could not be parsed into one of the core enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
