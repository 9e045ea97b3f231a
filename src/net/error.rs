//! Error model for backend API calls.
//!
//! DESIGN
//! ======
//! One error type covers every call in `net::api`. Failure bodies are not
//! uniform across the backend (`message` on the auth and post routes,
//! `error` on claim rejections), so extraction tries both keys before
//! falling back to the HTTP status.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Failure payload shapes the backend emits.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Failure from any backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// The response body does not match any shape this client accepts.
    #[error("unrecognized payload shape: {0}")]
    Payload(String),
}

/// Human-readable message for a failed response.
///
/// Prefers the body's `message`, then its `error`, then a generic line
/// carrying the HTTP status.
pub fn failure_message(status: u16, body: Option<&ErrorBody>) -> String {
    body.and_then(|b| b.message.clone().or_else(|| b.error.clone()))
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}
