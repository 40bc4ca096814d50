// src/error.rs
//! Gateway error types with structured error handling.
//!
//! Errors here are the vocabulary for *why a transport strategy failed*.
//! They circulate between the strategies and the gateway's fallback chain;
//! the gateway's public accessors absorb them all, so nothing in this
//! module ever reaches a page-rendering caller.

use thiserror::Error;

/// Failure modes of a content fetch against the WordPress backend.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The base URL (or another required setting) is absent. This is a
    /// soft condition: the gateway logs it and moves to the next strategy
    /// or returns an empty result.
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("WordPress API returned {status}: {message}")]
    Service {
        status: reqwest::StatusCode,
        message: String,
    },

    /// The GraphQL endpoint answered 200 but reported errors in the
    /// response envelope (schema mismatch, unknown field, etc.).
    #[error("GraphQL error: {}", messages.join("; "))]
    Graphql { messages: Vec<String> },

    /// The response body could not be decoded into the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Caller-supplied input failed validation (comment creation).
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    InvalidConfig(#[from] crate::types::ValidationError),
}

impl GatewayError {
    /// Whether this failure means the layer was never configured at all,
    /// as opposed to a configured backend misbehaving.
    pub fn is_not_configured(&self) -> bool {
        matches!(self, Self::MissingConfiguration(_))
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::MalformedResponse(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T, E = GatewayError> = std::result::Result<T, E>;
