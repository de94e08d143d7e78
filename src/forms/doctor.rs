use super::{required, text, FormDraft};
use crate::error::DraftError;
use crate::model::{Doctor, DoctorPayload};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoctorDraft {
    pub name: String,
    pub specialty: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoctorField {
    Name,
    Specialty,
    Phone,
    Email,
    Address,
    City,
    Notes,
}

impl DoctorDraft {
    pub fn with(mut self, field: DoctorField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            DoctorField::Name => self.name = value,
            DoctorField::Specialty => self.specialty = value,
            DoctorField::Phone => self.phone = value,
            DoctorField::Email => self.email = value,
            DoctorField::Address => self.address = value,
            DoctorField::City => self.city = value,
            DoctorField::Notes => self.notes = value,
        }
        self
    }

    fn payload(&self) -> Result<DoctorPayload, DraftError> {
        Ok(DoctorPayload {
            name: required(&self.name, "name")?,
            specialty: required(&self.specialty, "specialty")?,
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            notes: self.notes.clone(),
        })
    }
}

impl FormDraft<Doctor> for DoctorDraft {
    fn from_record(doctor: &Doctor) -> Self {
        Self {
            name: text(&doctor.name),
            specialty: text(&doctor.specialty),
            phone: text(&doctor.phone),
            email: text(&doctor.email),
            address: text(&doctor.address),
            city: text(&doctor.city),
            notes: text(&doctor.notes),
        }
    }

    fn to_create(&self) -> Result<DoctorPayload, DraftError> {
        self.payload()
    }

    fn to_update(&self) -> Result<DoctorPayload, DraftError> {
        self.payload()
    }
}
