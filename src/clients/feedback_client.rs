use super::FeedbackClient;
use crate::model::FeedbackAction;
use luma_api::{ApiClient, ApiError};
use tracing::{debug, instrument};

impl FeedbackClient {
    /// `PUT /feedback/{id}/read`
    #[instrument(skip(self))]
    pub async fn mark_as_read(&self, id: String) -> Result<(), ApiError> {
        debug!("Sending request");
        self.inner().perform_action(id, FeedbackAction::MarkRead).await
    }
}
