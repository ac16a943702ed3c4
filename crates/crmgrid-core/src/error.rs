//! Error types for crmgrid

use thiserror::Error;

/// Result type for upstream operations
pub type Result<T> = std::result::Result<T, UpstreamError>;

/// Errors produced by calls against the CRM API
#[derive(Debug, Clone, Error)]
pub enum UpstreamError {
    /// The request never produced a response (connect failure, timeout, ...)
    #[error("{message}")]
    Network { message: String },

    /// The API answered with a non-success status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The response body could not be interpreted
    #[error("{message}")]
    Decode { message: String },
}

const UNKNOWN_ERROR: &str = "Unknown error";

impl UpstreamError {
    /// Wrap a transport-level reqwest error.
    pub fn transport(err: reqwest::Error) -> Self {
        Self::Network {
            message: non_empty(err.to_string()),
        }
    }

    /// Build an error from a non-success response body.
    ///
    /// The API reports failures as JSON with a human-readable `message`
    /// field; when that is missing the status line stands in.
    pub fn api(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
            .unwrap_or_else(|| format!("HTTP {status}"));
        Self::Api {
            status,
            message: non_empty(message),
        }
    }

    /// Wrap a body-decoding failure.
    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode {
            message: non_empty(err.to_string()),
        }
    }
}

fn non_empty(message: String) -> String {
    if message.trim().is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        message
    }
}
