use luma_api::{ApiEntity, NoAction};
use serde::{Deserialize, Serialize};
use super::lenient::lenient;

/// A parent account, as served by `/users`.
///
/// Every field except the id is optional on the wire; the aggregation engine only
/// reads [`city`](User::city) and [`country`](User::country).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub date_of_birth: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub address: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub city: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub state: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub zip_code: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub country: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub selected_special_needs: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub is_onboarding_complete: bool,
}

/// Body of `POST /users` and `PUT /users/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub selected_special_needs: Vec<String>,
    pub is_onboarding_complete: bool,
}

impl User {
    /// Builds a user located in `city`, mostly useful in tests.
    pub fn located(city: Option<&str>, country: Option<&str>) -> Self {
        Self {
            city: city.map(str::to_string),
            country: country.map(str::to_string),
            ..Self::default()
        }
    }

    /// "First Last", skipping whichever half is missing.
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl ApiEntity for User {
    const RESOURCE: &'static str = "users";
    type Create = UserPayload;
    type Update = UserPayload;
    type Action = NoAction;

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
    fn malformed_optional_fields_keep_the_list() {
        let envelope: ListEnvelope<User> = serde_json::from_value(json!({
            "count": 3,
            "data": [
                { "_id": "u1", "city": "Tunis", "selectedSpecialNeeds": ["autism"] },
                { "_id": "u2", "city": "Sfax", "selectedSpecialNeeds": null, "isOnboardingComplete": null },
                { "_id": "u3", "country": "Tunisia", "phone": 21612345, "isOnboardingComplete": "yes" }
            ]
        }))
        .unwrap();

        let users = envelope.into_items();
        assert_eq!(users.len(), 3);
        assert!(users[1].selected_special_needs.is_empty());
        assert!(!users[1].is_onboarding_complete);
        assert_eq!(users[1].city.as_deref(), Some("Sfax"));
        assert_eq!(users[2].phone, None);
        assert_eq!(users[2].country.as_deref(), Some("Tunisia"));
    }
}
