//! Patient record and its example-query filter

use serde::{Deserialize, Serialize};

use super::{field_matches, optional_matches};

/// Patient record as stored and exchanged over HTTP.
///
/// Missing string fields deserialize as empty strings and missing numbers as
/// zero, so an incomplete payload reaches the validator instead of failing
/// at decode time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Patient {
    /// Assigned by the store on create
    pub id: Option<u64>,
    pub first_name: String,
    pub last_name: String,
    pub ssn: String,
    /// Unique across all patients
    pub email: String,
    pub street: String,
    pub city: String,
    /// Two-letter state code
    pub state: String,
    pub postal: String,
    pub age: i32,
    pub height: i32,
    pub weight: i32,
    pub insurance: String,
    /// One of "Male", "Female", "Other"
    pub gender: String,
}

impl Patient {
    /// Returns a copy carrying the given id.
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Sparse patient filter for example-based queries.
///
/// Every set field must equal the record's value; unset fields are
/// wildcards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientFilter {
    pub id: Option<u64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub ssn: Option<String>,
    pub email: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal: Option<String>,
    pub age: Option<i32>,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub insurance: Option<String>,
    pub gender: Option<String>,
}

impl PatientFilter {
    /// True when no field is set; such a filter matches every patient.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Checks a patient against every set field.
    pub fn matches(&self, patient: &Patient) -> bool {
        optional_matches(&self.id, &patient.id)
            && field_matches(&self.first_name, &patient.first_name)
            && field_matches(&self.last_name, &patient.last_name)
            && field_matches(&self.ssn, &patient.ssn)
            && field_matches(&self.email, &patient.email)
            && field_matches(&self.street, &patient.street)
            && field_matches(&self.city, &patient.city)
            && field_matches(&self.state, &patient.state)
            && field_matches(&self.postal, &patient.postal)
            && field_matches(&self.age, &patient.age)
            && field_matches(&self.height, &patient.height)
            && field_matches(&self.weight, &patient.weight)
            && field_matches(&self.insurance, &patient.insurance)
            && field_matches(&self.gender, &patient.gender)
    }
}
