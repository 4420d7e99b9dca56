//! # Entity Services
//!
//! Orchestrate validation, cross-record checks and repository calls, and
//! translate every failure into a [`ServiceError`].

mod encounter;
mod errors;
mod patient;

pub use encounter::EncounterService;
pub use errors::{
    ServiceError, ServiceResult, DELETE_CONFLICT, EMAIL_CONFLICT, ID_MISMATCH, NOT_FOUND,
    PATIENT_ID_MISMATCH,
};
pub use patient::PatientService;

use std::sync::Arc;

use crate::observability::Logger;
use crate::storage::{RecordRepository, StoreError};
use crate::validation::ValidationErrors;

/// Both services wired to the same store
pub struct Services {
    pub patients: PatientService,
    pub encounters: EncounterService,
}

impl Services {
    pub fn new<S: RecordRepository + 'static>(store: Arc<S>) -> Self {
        Self {
            patients: PatientService::new(store.clone(), store.clone()),
            encounters: EncounterService::new(store.clone(), store),
        }
    }
}

/// Logs a store failure and wraps it as service unavailable
fn store_fault(operation: &'static str) -> impl FnOnce(StoreError) -> ServiceError {
    move |err| {
        let message = err.to_string();
        Logger::error(
            "STORE_FAULT",
            &[
                ("code", err.code()),
                ("message", message.as_str()),
                ("operation", operation),
            ],
        );
        ServiceError::ServiceUnavailable(err)
    }
}

/// Logs which fields failed validation (names only, never values)
fn rejected(record: &'static str, errors: ValidationErrors) -> ServiceError {
    let fields = errors
        .errors()
        .iter()
        .map(|e| e.field)
        .collect::<Vec<_>>()
        .join(",");
    Logger::warn(
        "VALIDATION_REJECTED",
        &[("fields", fields.as_str()), ("record", record)],
    );
    ServiceError::from(errors)
}
