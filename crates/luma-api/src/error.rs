//! # API Errors
//!
//! Every call through a [`ResourceClient`](crate::ResourceClient) or
//! [`HealthClient`](crate::HealthClient) resolves to `Result<_, ApiError>`.
//! Transport failures, non-2xx answers and channel failures all land here so
//! callers only ever match on one type.

use std::time::Duration;

/// Errors produced by the data access layer.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ApiError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("no message"))]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Response for {0} carried no data")]
    MissingData(String),
    #[error("Resource actor closed")]
    ActorClosed,
    #[error("Resource actor dropped response channel")]
    ActorDropped,
}

impl ApiError {
    /// The message the server put in the error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => Some(message),
            _ => None,
        }
    }

    /// Text to show the user: the server-provided message, or `fallback`.
    pub fn alert_text(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_text_prefers_server_message() {
        let err = ApiError::Status {
            status: 409,
            message: Some("Email already registered".into()),
        };
        assert_eq!(err.alert_text("Error saving user"), "Email already registered");
    }

    #[test]
    fn alert_text_falls_back() {
        let empty = ApiError::Status {
            status: 500,
            message: Some(String::new()),
        };
        assert_eq!(empty.alert_text("Error saving user"), "Error saving user");
        assert_eq!(
            ApiError::Transport("connection refused".into()).alert_text("Error deleting item"),
            "Error deleting item"
        );
    }
}
