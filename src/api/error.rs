//! Errors returned by the user service client.

use std::time::Duration;
use thiserror::Error;

/// Failures of a detail fetch or an update call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Identifier was empty; no request was issued.
    #[error("Invalid user identifier: {0:?}")]
    InvalidIdentifier(String),

    /// Could not reach the service.
    #[error("Connection to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The attempt did not complete within the bounded wait and was aborted.
    #[error("Request timed out after {}s", duration.as_secs())]
    Timeout { duration: Duration },

    /// The service answered with a non-2xx status.
    #[error("Service returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not a user record.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// The request could not be built (bad base URL and the like).
    #[error("Invalid request: {0}")]
    Request(String),
}

impl ApiError {
    /// Human-readable message for notifications.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Status { status, .. } => format!("Request failed with status code {}", status),
            ApiError::Timeout { .. } => "The server took too long to respond".to_string(),
            ApiError::Connection { .. } => "Network Error".to_string(),
            other => other.to_string(),
        }
    }

    /// Pull a message out of an error body: `{"message": ..}` or `{"error": ..}`,
    /// falling back to the raw text.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                ["message", "error"].iter().find_map(|key| match value.get(*key) {
                    Some(serde_json::Value::String(s)) => Some(s.clone()),
                    Some(serde_json::Value::Object(inner)) => inner
                        .get("message")
                        .and_then(|m| m.as_str())
                        .map(str::to_string),
                    _ => None,
                })
            })
            .unwrap_or_else(|| body.trim().to_string());
        ApiError::Status { status, message }
    }
}
