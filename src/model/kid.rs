use luma_api::{ApiEntity, NoAction};
use serde::{Deserialize, Serialize};
use super::lenient::lenient;

/// A child profile, as served by `/kids`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Kid {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub user_id: Option<ParentRef>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub date_of_birth: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub gender: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub medical_info: Option<MedicalInfo>,
    #[serde(deserialize_with = "lenient")]
    pub emergency_contact: Option<EmergencyContact>,
}

/// The owning parent: a bare id, or the user document when the API populated it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParentRef {
    Id(String),
    Populated(ParentSummary),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParentSummary {
    #[serde(rename = "_id", deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub last_name: Option<String>,
}

impl ParentRef {
    pub fn id(&self) -> Option<&str> {
        match self {
            ParentRef::Id(id) => Some(id),
            ParentRef::Populated(parent) => parent.id.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicalInfo {
    #[serde(deserialize_with = "lenient")]
    pub allergies: Option<TextList>,
    #[serde(deserialize_with = "lenient")]
    pub medications: Option<TextList>,
    #[serde(deserialize_with = "lenient")]
    pub special_needs: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub blood_type: Option<String>,
}

/// Older records store allergies and medications as free text, newer ones as lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextList {
    List(Vec<String>),
    Text(String),
}

impl TextList {
    /// Comma-separated form used by the edit draft.
    pub fn joined(&self) -> String {
        match self {
            TextList::List(items) => items.join(", "),
            TextList::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmergencyContact {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub relationship: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub phone: Option<String>,
}

/// Body of `POST /kids` and `PUT /kids/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KidPayload {
    pub user_id: String,
    pub name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub medical_info: MedicalInfoPayload,
    pub emergency_contact: EmergencyContactPayload,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalInfoPayload {
    pub allergies: Vec<String>,
    pub medications: Vec<String>,
    pub special_needs: String,
    pub blood_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmergencyContactPayload {
    pub name: String,
    pub relationship: String,
    pub phone: String,
}

impl ApiEntity for Kid {
    const RESOURCE: &'static str = "kids";
    type Create = KidPayload;
    type Update = KidPayload;
    type Action = NoAction;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
