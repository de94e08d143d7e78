use super::{date_part, parse_date, required, split_list, text, FormDraft};
use crate::error::DraftError;
use crate::model::{
    EmergencyContactPayload, Kid, KidPayload, MedicalInfoPayload, ParentRef, TextList,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KidDraft {
    pub user_id: String,
    pub name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub medical_info: MedicalDraft,
    pub emergency_contact: ContactDraft,
}

/// Allergies and medications are held as comma-separated text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MedicalDraft {
    pub allergies: String,
    pub medications: String,
    pub special_needs: String,
    pub blood_type: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub relationship: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KidField {
    UserId,
    Name,
    DateOfBirth,
    Gender,
    MedicalInfo(MedicalField),
    EmergencyContact(ContactField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedicalField {
    Allergies,
    Medications,
    SpecialNeeds,
    BloodType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Relationship,
    Phone,
}

impl KidDraft {
    /// Empty draft already assigned to `user_id` (the page's parent filter).
    pub fn for_parent(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    pub fn with(mut self, field: KidField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            KidField::UserId => self.user_id = value,
            KidField::Name => self.name = value,
            KidField::DateOfBirth => self.date_of_birth = value,
            KidField::Gender => self.gender = value,
            KidField::MedicalInfo(field) => {
                let medical = &mut self.medical_info;
                match field {
                    MedicalField::Allergies => medical.allergies = value,
                    MedicalField::Medications => medical.medications = value,
                    MedicalField::SpecialNeeds => medical.special_needs = value,
                    MedicalField::BloodType => medical.blood_type = value,
                }
            }
            KidField::EmergencyContact(field) => {
                let contact = &mut self.emergency_contact;
                match field {
                    ContactField::Name => contact.name = value,
                    ContactField::Relationship => contact.relationship = value,
                    ContactField::Phone => contact.phone = value,
                }
            }
        }
        self
    }

    fn payload(&self) -> Result<KidPayload, DraftError> {
        let user_id = required(&self.user_id, "userId")?;
        let name = required(&self.name, "name")?;
        let date_of_birth = parse_date(&required(&self.date_of_birth, "dateOfBirth")?)?;

        Ok(KidPayload {
            user_id,
            name,
            date_of_birth,
            gender: self.gender.clone(),
            medical_info: MedicalInfoPayload {
                allergies: split_list(&self.medical_info.allergies),
                medications: split_list(&self.medical_info.medications),
                special_needs: self.medical_info.special_needs.clone(),
                blood_type: self.medical_info.blood_type.clone(),
            },
            emergency_contact: EmergencyContactPayload {
                name: self.emergency_contact.name.clone(),
                relationship: self.emergency_contact.relationship.clone(),
                phone: self.emergency_contact.phone.clone(),
            },
        })
    }
}

impl FormDraft<Kid> for KidDraft {
    fn from_record(kid: &Kid) -> Self {
        let medical = kid.medical_info.clone().unwrap_or_default();
        let contact = kid.emergency_contact.clone().unwrap_or_default();
        let joined = |list: &Option<TextList>| list.as_ref().map(TextList::joined).unwrap_or_default();

        Self {
            user_id: kid
                .user_id
                .as_ref()
                .and_then(ParentRef::id)
                .unwrap_or_default()
                .to_string(),
            name: text(&kid.name),
            date_of_birth: date_part(kid.date_of_birth.as_deref()),
            gender: text(&kid.gender),
            medical_info: MedicalDraft {
                allergies: joined(&medical.allergies),
                medications: joined(&medical.medications),
                special_needs: text(&medical.special_needs),
                blood_type: text(&medical.blood_type),
            },
            emergency_contact: ContactDraft {
                name: text(&contact.name),
                relationship: text(&contact.relationship),
                phone: text(&contact.phone),
            },
        }
    }

    fn to_create(&self) -> Result<KidPayload, DraftError> {
        self.payload()
    }

    fn to_update(&self) -> Result<KidPayload, DraftError> {
        self.payload()
    }
}
