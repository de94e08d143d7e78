//! # Response Envelopes
//!
//! The REST API wraps every payload: lists come back as `{ data: [...], count? }`,
//! single records as `{ data: {...} }` and the health probe as `{ success }`.
//! Any of those fields may be missing, so they are modelled as `Option`s and the
//! callers decide on the fallback.

use serde::{Deserialize, Serialize};

/// Envelope returned by `GET /{resource}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<T>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

impl<T> ListEnvelope<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            data: Some(data),
            count: None,
        }
    }

    pub fn with_count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    /// An envelope with neither `data` nor `count`, i.e. `{}`.
    pub fn empty() -> Self {
        Self {
            data: None,
            count: None,
        }
    }

    /// The items, or an empty list when the server sent none.
    pub fn into_items(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}

impl<T> Default for ListEnvelope<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Envelope returned by single-record endpoints (`GET`, `POST`, `PUT`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemEnvelope<T> {
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthEnvelope {
    #[serde(default)]
    pub success: Option<bool>,
}

impl HealthEnvelope {
    pub fn new(success: bool) -> Self {
        Self {
            success: Some(success),
        }
    }

    /// Only an explicit `success: true` counts as healthy.
    pub fn is_healthy(&self) -> bool {
        self.success == Some(true)
    }
}

/// Body the server sends along with a non-2xx status.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub(crate) fn into_message(self) -> Option<String> {
        self.error.or(self.message)
    }
}

/// Query parameters appended to `GET /{resource}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    params: Vec<(String, String)>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_envelope_accepts_missing_fields() {
        let env: ListEnvelope<serde_json::Value> = serde_json::from_value(json!({})).unwrap();
        assert_eq!(env, ListEnvelope::empty());

        let env: ListEnvelope<u32> =
            serde_json::from_value(json!({ "data": [1, 2, 3], "count": 7 })).unwrap();
        assert_eq!(env.count, Some(7));
        assert_eq!(env.into_items(), vec![1, 2, 3]);
    }

    #[test]
    fn health_requires_explicit_true() {
        let missing: HealthEnvelope = serde_json::from_value(json!({})).unwrap();
        assert!(!missing.is_healthy());
        assert!(!HealthEnvelope::new(false).is_healthy());
        assert!(HealthEnvelope::new(true).is_healthy());
    }

    #[test]
    fn error_body_prefers_error_field() {
        let body: ErrorBody =
            serde_json::from_value(json!({ "error": "Duplicate", "message": "ignored" })).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Duplicate"));

        let body: ErrorBody = serde_json::from_value(json!({ "message": "Bad input" })).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Bad input"));
    }
}
