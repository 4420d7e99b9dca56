//! Encounter record and its example-query filter

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{field_matches, optional_matches};

/// A single clinical visit belonging to a patient.
///
/// `date` serializes as `yyyy-MM-dd`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Encounter {
    pub id: Option<u64>,
    /// Owning patient. Not checked for existence on write.
    pub patient_id: Option<u64>,
    pub notes: Option<String>,
    pub visit_code: String,
    pub provider: String,
    pub billing_code: String,
    pub icd10: String,
    pub total_cost: f64,
    pub copay: f64,
    pub chief_complaint: String,
    pub pulse: Option<i32>,
    pub systolic: Option<i32>,
    pub diastolic: Option<i32>,
    pub date: Option<NaiveDate>,
}

impl Encounter {
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}

/// Sparse encounter filter. Same semantics as [`super::PatientFilter`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EncounterFilter {
    pub id: Option<u64>,
    pub patient_id: Option<u64>,
    pub notes: Option<String>,
    pub visit_code: Option<String>,
    pub provider: Option<String>,
    pub billing_code: Option<String>,
    pub icd10: Option<String>,
    pub total_cost: Option<f64>,
    pub copay: Option<f64>,
    pub chief_complaint: Option<String>,
    pub pulse: Option<i32>,
    pub systolic: Option<i32>,
    pub diastolic: Option<i32>,
    pub date: Option<NaiveDate>,
}

impl EncounterFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, encounter: &Encounter) -> bool {
        optional_matches(&self.id, &encounter.id)
            && optional_matches(&self.patient_id, &encounter.patient_id)
            && optional_matches(&self.notes, &encounter.notes)
            && field_matches(&self.visit_code, &encounter.visit_code)
            && field_matches(&self.provider, &encounter.provider)
            && field_matches(&self.billing_code, &encounter.billing_code)
            && field_matches(&self.icd10, &encounter.icd10)
            && field_matches(&self.total_cost, &encounter.total_cost)
            && field_matches(&self.copay, &encounter.copay)
            && field_matches(&self.chief_complaint, &encounter.chief_complaint)
            && optional_matches(&self.pulse, &encounter.pulse)
            && optional_matches(&self.systolic, &encounter.systolic)
            && optional_matches(&self.diastolic, &encounter.diastolic)
            && optional_matches(&self.date, &encounter.date)
    }

    pub fn by_patient(patient_id: u64) -> Self {
        Self {
            patient_id: Some(patient_id),
            ..Default::default()
        }
    }
}
