use super::{required, text, FormDraft};
use crate::error::DraftError;
use crate::model::{Feedback, FeedbackPayload};

pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// 0 means "not rated".
    pub rating: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackField {
    Name,
    Email,
    Subject,
    Message,
}

impl FeedbackDraft {
    pub fn with(mut self, field: FeedbackField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            FeedbackField::Name => self.name = value,
            FeedbackField::Email => self.email = value,
            FeedbackField::Subject => self.subject = value,
            FeedbackField::Message => self.message = value,
        }
        self
    }

    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = rating;
        self
    }

    fn payload(&self) -> Result<FeedbackPayload, DraftError> {
        let subject = required(&self.subject, "subject")?;
        let message = required(&self.message, "message")?;
        if self.rating > MAX_RATING {
            return Err(DraftError::InvalidRating(self.rating));
        }
        Ok(FeedbackPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            subject,
            message,
            rating: self.rating,
        })
    }
}

impl FormDraft<Feedback> for FeedbackDraft {
    fn from_record(feedback: &Feedback) -> Self {
        Self {
            name: text(&feedback.name),
            email: text(&feedback.email),
            subject: text(&feedback.subject),
            message: text(&feedback.message),
            rating: feedback.star_count(),
        }
    }

    fn to_create(&self) -> Result<FeedbackPayload, DraftError> {
        self.payload()
    }

    fn to_update(&self) -> Result<FeedbackPayload, DraftError> {
        self.payload()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_is_bounded() {
        let draft = FeedbackDraft::default()
            .with(FeedbackField::Subject, "App")
            .with(FeedbackField::Message, "Love the games")
            .with_rating(6);
        assert_eq!(draft.to_create(), Err(DraftError::InvalidRating(6)));

        let payload = draft.with_rating(5).to_create().unwrap();
        assert_eq!(payload.rating, 5);
        assert_eq!(payload.name, "");
    }

    #[test]
    fn subject_then_message_required() {
        assert_eq!(
            FeedbackDraft::default().to_create(),
            Err(DraftError::MissingField("subject"))
        );
        let draft = FeedbackDraft::default().with(FeedbackField::Subject, "App");
        assert_eq!(draft.to_create(), Err(DraftError::MissingField("message")));
    }
}
