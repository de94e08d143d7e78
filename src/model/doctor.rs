use luma_api::{ApiEntity, NoAction};
use serde::{Deserialize, Serialize};
use super::lenient::lenient;

/// A doctor in the directory, as served by `/doctors`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Doctor {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub specialty: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub address: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub city: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub notes: Option<String>,
}

/// Body of `POST /doctors` and `PUT /doctors/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DoctorPayload {
    pub name: String,
    pub specialty: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub notes: String,
}

impl ApiEntity for Doctor {
    const RESOURCE: &'static str = "doctors";
    type Create = DoctorPayload;
    type Update = DoctorPayload;
    type Action = NoAction;

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
