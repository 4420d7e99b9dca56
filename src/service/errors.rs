//! Service error taxonomy
//!
//! | variant            | meaning                                        |
//! |--------------------|------------------------------------------------|
//! | BadData            | validation failure or path/body id mismatch    |
//! | NotFound           | nothing stored at the requested id             |
//! | Conflict           | email already in use, or delete blocked        |
//! | ServiceUnavailable | the record store failed                        |
//!
//! None of these are retried.

use thiserror::Error;

use crate::storage::StoreError;
use crate::validation::{FieldError, ValidationErrors};

pub const NOT_FOUND: &str = "Not Found";
pub const ID_MISMATCH: &str =
    "The id of the request body's entity must match the id of the path parameter";
pub const PATIENT_ID_MISMATCH: &str =
    "The patientId of the request body must match the patient id of the path parameter";
pub const EMAIL_CONFLICT: &str = "The email address is already associated with another patient";
pub const DELETE_CONFLICT: &str = "Unable to delete patient with existing encounters";

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    /// Caller sent invalid data; `fields` is empty for id mismatches
    #[error("{message}")]
    BadData {
        message: String,
        fields: Vec<FieldError>,
    },

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("The record store is unavailable: {0}")]
    ServiceUnavailable(#[from] StoreError),
}

impl ServiceError {
    pub fn bad_data(message: impl Into<String>) -> Self {
        ServiceError::BadData {
            message: message.into(),
            fields: Vec::new(),
        }
    }

    pub fn not_found() -> Self {
        ServiceError::NotFound(NOT_FOUND.to_string())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ServiceError::Conflict(message.into())
    }

    /// Returns the string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::BadData { .. } => "CLINIC_BAD_DATA",
            ServiceError::NotFound(_) => "CLINIC_NOT_FOUND",
            ServiceError::Conflict(_) => "CLINIC_CONFLICT",
            ServiceError::ServiceUnavailable(_) => "CLINIC_SERVICE_UNAVAILABLE",
        }
    }

    /// Field-level details, empty unless validation failed
    pub fn fields(&self) -> &[FieldError] {
        match self {
            ServiceError::BadData { fields, .. } => fields,
            _ => &[],
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        ServiceError::BadData {
            message: errors.message(),
            fields: errors.into_errors(),
        }
    }
}
