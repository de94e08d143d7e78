use super::{date_part, parse_optional_date, required, split_list, text, FormDraft};
use crate::error::DraftError;
use crate::model::{User, UserPayload};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDraft {
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    FirstName,
    LastName,
    Email,
    Phone,
    DateOfBirth,
    Address,
    City,
    State,
    ZipCode,
    Country,
    /// Comma-separated input, stored as a list.
    SpecialNeeds,
}

impl UserDraft {
    pub fn with(mut self, field: UserField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            UserField::FirstName => self.first_name = value,
            UserField::LastName => self.last_name = value,
            UserField::Email => self.email = value,
            UserField::Phone => self.phone = value,
            UserField::DateOfBirth => self.date_of_birth = value,
            UserField::Address => self.address = value,
            UserField::City => self.city = value,
            UserField::State => self.state = value,
            UserField::ZipCode => self.zip_code = value,
            UserField::Country => self.country = value,
            UserField::SpecialNeeds => self.selected_special_needs = split_list(&value),
        }
        self
    }

    pub fn with_onboarding_complete(mut self, complete: bool) -> Self {
        self.is_onboarding_complete = complete;
        self
    }

    fn payload(&self) -> Result<UserPayload, DraftError> {
        Ok(UserPayload {
            first_name: required(&self.first_name, "firstName")?,
            last_name: required(&self.last_name, "lastName")?,
            email: required(&self.email, "email")?,
            phone: self.phone.clone(),
            date_of_birth: parse_optional_date(&self.date_of_birth)?,
            address: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip_code: self.zip_code.clone(),
            country: self.country.clone(),
            selected_special_needs: self.selected_special_needs.clone(),
            is_onboarding_complete: self.is_onboarding_complete,
        })
    }
}

impl FormDraft<User> for UserDraft {
    fn from_record(user: &User) -> Self {
        Self {
            first_name: text(&user.first_name),
            last_name: text(&user.last_name),
            email: text(&user.email),
            phone: text(&user.phone),
            date_of_birth: date_part(user.date_of_birth.as_deref()),
            address: text(&user.address),
            city: text(&user.city),
            state: text(&user.state),
            zip_code: text(&user.zip_code),
            country: text(&user.country),
            selected_special_needs: user.selected_special_needs.clone(),
            is_onboarding_complete: user.is_onboarding_complete,
        }
    }

    fn to_create(&self) -> Result<UserPayload, DraftError> {
        self.payload()
    }

    fn to_update(&self) -> Result<UserPayload, DraftError> {
        self.payload()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_build_a_payload() {
        let payload = UserDraft::default()
            .with(UserField::FirstName, "Amira")
            .with(UserField::LastName, "Ben Salah")
            .with(UserField::Email, "amira@luma.tn")
            .with(UserField::City, "Tunis")
            .with(UserField::SpecialNeeds, "autism, adhd")
            .with_onboarding_complete(true)
            .to_create()
            .unwrap();
        assert_eq!(payload.selected_special_needs, vec!["autism", "adhd"]);
        assert_eq!(payload.city, "Tunis");
        assert!(payload.is_onboarding_complete);
        assert_eq!(payload.date_of_birth, "");
    }

    #[test]
    fn missing_email_is_rejected() {
        let draft = UserDraft::default()
            .with(UserField::FirstName, "Amira")
            .with(UserField::LastName, "Ben Salah");
        assert_eq!(draft.to_create(), Err(DraftError::MissingField("email")));
    }

    #[test]
    fn record_fills_draft() {
        let user = User {
            id: Some("u1".into()),
            first_name: Some("Sami".into()),
            date_of_birth: Some("1990-01-31T00:00:00.000Z".into()),
            ..User::default()
        };
        let draft = UserDraft::from_record(&user);
        assert_eq!(draft.first_name, "Sami");
        assert_eq!(draft.date_of_birth, "1990-01-31");
        assert_eq!(draft.email, "");
    }
}
