//! Encounter field rules

use crate::model::Encounter;

use super::errors::{FieldError, ValidationErrors};
use super::rules;

/// Validates an encounter, collecting every failing field.
///
/// `pulse`, `systolic`, `diastolic`, `copay`, `notes` and `patientId` carry
/// no rules.
pub fn validate_encounter(encounter: &Encounter) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if encounter.visit_code.is_empty() {
        errors.push(FieldError::required("visitCode", "Visit code"));
    } else if !rules::VISIT_CODE.is_match(&encounter.visit_code) {
        errors.push(FieldError::new("visitCode", "Invalid visit code"));
    }

    if encounter.provider.is_empty() {
        errors.push(FieldError::required("provider", "Provider"));
    }

    if encounter.billing_code.is_empty() {
        errors.push(FieldError::required("billingCode", "Billing code"));
    } else if !rules::BILLING_CODE.is_match(&encounter.billing_code) {
        errors.push(FieldError::new("billingCode", "Invalid billing code"));
    }

    if encounter.icd10.is_empty() {
        errors.push(FieldError::required("icd10", "Icd10"));
    } else if !rules::ICD10.is_match(&encounter.icd10) {
        errors.push(FieldError::new("icd10", "Invalid icd10"));
    }

    // NaN fails this comparison as well
    if !(encounter.total_cost > 0.0) {
        errors.push(FieldError::required("totalCost", "Total cost"));
    }

    if encounter.chief_complaint.is_empty() {
        errors.push(FieldError::required("chiefComplaint", "Chief complaint"));
    }

    if encounter.date.is_none() {
        errors.push(FieldError::required("date", "Date"));
    }

    errors.into_result()
}
