use luma_api::{ApiEntity, ResourceAction};
use serde::{Deserialize, Serialize};
use super::lenient::lenient;

/// A piece of user feedback, as served by `/feedback`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Feedback {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub subject: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub message: Option<String>,
    #[serde(deserialize_with = "lenient")]
    /// Stored as sent; older clients posted fractional ratings.
    pub rating: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub is_read: bool,
    #[serde(deserialize_with = "lenient")]
    pub created_at: Option<String>,
}

/// Body of `POST /feedback` and `PUT /feedback/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeedbackPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub rating: u8,
}

/// Commands beyond plain CRUD on a feedback entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackAction {
    /// `PUT /feedback/{id}/read`
    MarkRead,
}

impl ResourceAction for FeedbackAction {
    fn path_segment(&self) -> &'static str {
        match self {
            FeedbackAction::MarkRead => "read",
        }
    }
}

impl ApiEntity for Feedback {
    const RESOURCE: &'static str = "feedback";
    type Create = FeedbackPayload;
    type Update = FeedbackPayload;
    type Action = FeedbackAction;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luma_api::ListEnvelope;
    use serde_json::json;

    #[test]
    fn fractional_rating_and_null_flag_decode() {
        let envelope: ListEnvelope<Feedback> = serde_json::from_value(json!({
            "data": [
                { "_id": "f1", "rating": 4.5, "isRead": null },
                { "_id": "f2", "rating": "great", "isRead": true },
                { "_id": "f3", "rating": 3 }
            ]
        }))
        .unwrap();

        let feedback = envelope.into_items();
        assert_eq!(feedback.len(), 3);
        assert_eq!(feedback[0].rating, Some(4.5));
        assert!(!feedback[0].is_read);
        assert_eq!(feedback[1].rating, None);
        assert!(feedback[1].is_read);
        assert_eq!(feedback[2].star_count(), 3);
    }
}
