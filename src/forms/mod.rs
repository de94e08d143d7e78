//! # Form Drafts
//!
//! Editable, typed copies of a record's fields as a modal form holds them. A draft
//! changes one field at a time through its `with(field, value)` function, which
//! takes the draft by value and returns the updated one. Nested groups (a kid's
//! medical info and emergency contact) are addressed with nested field enums.
//!
//! Converting a draft into a create/update payload validates it: required fields
//! must be non-blank, dates must be `YYYY-MM-DD`, ratings must be within 0..=5.

use crate::error::DraftError;
use chrono::NaiveDate;
use luma_api::ApiEntity;
use std::fmt::Debug;

pub mod article;
pub mod doctor;
pub mod feedback;
pub mod kid;
pub mod user;

pub use article::{ArticleDraft, ArticleField};
pub use doctor::{DoctorDraft, DoctorField};
pub use feedback::{FeedbackDraft, FeedbackField};
pub use kid::{ContactField, KidDraft, KidField, MedicalField};
pub use user::{UserDraft, UserField};

/// The draft a list page edits for records of type `T`.
pub trait FormDraft<T: ApiEntity>: Clone + Default + Debug + Send + Sync {
    /// Draft pre-filled from an existing record; absent fields become empty.
    fn from_record(record: &T) -> Self;

    fn to_create(&self) -> Result<T::Create, DraftError>;

    fn to_update(&self) -> Result<T::Update, DraftError>;
}

pub(crate) fn required(value: &str, field: &'static str) -> Result<String, DraftError> {
    if value.trim().is_empty() {
        return Err(DraftError::MissingField(field));
    }
    Ok(value.to_string())
}

/// `"a, b,,c "` → `["a", "b", "c"]`.
pub(crate) fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validates a `YYYY-MM-DD` date.
pub(crate) fn parse_date(text: &str) -> Result<String, DraftError> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(|date| date.format("%Y-%m-%d").to_string())
        .map_err(|_| DraftError::InvalidDate(text.to_string()))
}

/// Optional date: blank stays blank, anything else must parse.
pub(crate) fn parse_optional_date(text: &str) -> Result<String, DraftError> {
    if text.trim().is_empty() {
        Ok(String::new())
    } else {
        parse_date(text)
    }
}

/// Date part of a stored ISO timestamp (`2019-04-02T00:00:00.000Z` → `2019-04-02`).
pub(crate) fn date_part(stored: Option<&str>) -> String {
    stored
        .and_then(|s| s.split('T').next())
        .unwrap_or_default()
        .to_string()
}

pub(crate) fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}
