//! Patient field rules

use crate::model::Patient;

use super::errors::{FieldError, ValidationErrors};
use super::rules::{self, GENDERS};

/// Validates every patient field and collects all failures.
///
/// Rules are independent of each other. Within the state field the
/// two-letter check runs first; only a well-formed code is looked up in the
/// valid state set.
pub fn validate_patient(patient: &Patient) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    check_pattern(
        &mut errors,
        "firstName",
        "First Name",
        &patient.first_name,
        |v| rules::NAME.is_match(v),
        "Invalid first name",
    );
    check_pattern(
        &mut errors,
        "lastName",
        "Last Name",
        &patient.last_name,
        |v| rules::NAME.is_match(v),
        "Invalid last name",
    );
    check_pattern(
        &mut errors,
        "ssn",
        "Social Security Number",
        &patient.ssn,
        |v| rules::SSN.is_match(v),
        "Social Security Number must be in format XXX-XX-XXXX",
    );
    check_present(&mut errors, "street", "Street", &patient.street);
    check_present(&mut errors, "city", "City", &patient.city);

    if patient.state.is_empty() {
        errors.push(FieldError::required("state", "State"));
    } else if !rules::STATE_CODE.is_match(&patient.state) {
        errors.push(FieldError::new(
            "state",
            "State must be two character state code",
        ));
    } else if !rules::is_valid_state(&patient.state) {
        errors.push(FieldError::new("state", "Invalid state"));
    }

    check_pattern(
        &mut errors,
        "postal",
        "Zip Code",
        &patient.postal,
        rules::is_valid_postal,
        "The zip code must have the format XXXXX or XXXXX-XXXX",
    );
    check_pattern(
        &mut errors,
        "email",
        "Email",
        &patient.email,
        |v| rules::EMAIL.is_match(v),
        "Invalid email address",
    );

    // Zero doubles as "missing" for numeric fields.
    check_positive(&mut errors, "age", "Age", patient.age);
    check_positive(&mut errors, "height", "Height", patient.height);
    check_positive(&mut errors, "weight", "Weight", patient.weight);

    check_present(&mut errors, "insurance", "Insurance", &patient.insurance);
    check_pattern(
        &mut errors,
        "gender",
        "Gender",
        &patient.gender,
        |v| GENDERS.contains(&v),
        "Gender must be 'Male', 'Female', or 'Other'",
    );

    errors.into_result()
}

fn check_present(errors: &mut ValidationErrors, field: &'static str, label: &str, value: &str) {
    if value.is_empty() {
        errors.push(FieldError::required(field, label));
    }
}

fn check_pattern(
    errors: &mut ValidationErrors,
    field: &'static str,
    label: &str,
    value: &str,
    is_valid: impl Fn(&str) -> bool,
    invalid: &str,
) {
    if value.is_empty() {
        errors.push(FieldError::required(field, label));
    } else if !is_valid(value) {
        errors.push(FieldError::new(field, invalid));
    }
}

fn check_positive(errors: &mut ValidationErrors, field: &'static str, label: &str, value: i32) {
    if value <= 0 {
        errors.push(FieldError::required(field, label));
    }
}
