//! Error types of the admin core.
//!
//! Aggregation never fails (per-resource errors are absorbed), so these only surface
//! from configuration, mutations, form validation and shutdown.

use luma_api::ApiError;

/// Top-level error for the admin core.
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Validation(#[from] DraftError),
    #[error("Shutdown failed: {0}")]
    Shutdown(String),
}

impl AdminError {
    /// Text shown to the user when a mutation fails.
    ///
    /// API failures show the server's message when it sent one, otherwise
    /// `fallback`; validation failures name the offending field.
    pub fn alert_text(&self, fallback: &str) -> String {
        match self {
            AdminError::Api(e) => e.alert_text(fallback),
            AdminError::Validation(e) => e.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// A form draft that cannot be turned into a payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Rating must be between 0 and 5, got {0}")]
    InvalidRating(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_text_by_kind() {
        let api = AdminError::from(ApiError::Status {
            status: 400,
            message: Some("Specialty is not supported".into()),
        });
        assert_eq!(api.alert_text("Error saving doctor"), "Specialty is not supported");

        let offline = AdminError::from(ApiError::Transport("refused".into()));
        assert_eq!(offline.alert_text("Error saving doctor"), "Error saving doctor");

        let invalid = AdminError::from(DraftError::MissingField("specialty"));
        assert_eq!(invalid.alert_text("Error saving doctor"), "specialty is required");
    }
}
