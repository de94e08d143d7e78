//! The public feedback form on the welcome page.

use crate::clients::FeedbackClient;
use crate::error::AdminError;
use crate::forms::{FeedbackDraft, FormDraft};
use luma_api::ApiClient;
use tracing::{info, warn};

pub const SUBMITTED: &str = "Thank you for your feedback! We appreciate your input.";
pub const SUBMIT_FAILED: &str = "Failed to submit feedback. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

pub struct FeedbackForm {
    client: FeedbackClient,
    draft: FeedbackDraft,
    submitting: bool,
    banner: Option<Banner>,
}

impl FeedbackForm {
    pub fn new(client: FeedbackClient) -> Self {
        Self {
            client,
            draft: FeedbackDraft::default(),
            submitting: false,
            banner: None,
        }
    }

    pub fn draft(&self) -> &FeedbackDraft {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn edit(&mut self, change: impl FnOnce(FeedbackDraft) -> FeedbackDraft) {
        let draft = std::mem::take(&mut self.draft);
        self.draft = change(draft);
    }

    /// Sends the feedback. The draft resets on success and is kept on failure.
    pub async fn submit(&mut self) -> Result<(), AdminError> {
        self.banner = None;
        self.submitting = true;
        let result = self.send().await;
        self.submitting = false;

        match result {
            Ok(()) => {
                info!("Feedback submitted");
                self.draft = FeedbackDraft::default();
                self.banner = Some(Banner {
                    kind: BannerKind::Success,
                    text: SUBMITTED.to_string(),
                });
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Feedback submission failed");
                let text = match &e {
                    AdminError::Validation(invalid) => invalid.to_string(),
                    _ => SUBMIT_FAILED.to_string(),
                };
                self.banner = Some(Banner {
                    kind: BannerKind::Error,
                    text,
                });
                Err(e)
            }
        }
    }

    async fn send(&self) -> Result<(), AdminError> {
        let payload = self.draft.to_create()?;
        self.client.create(payload).await?;
        Ok(())
    }
}
