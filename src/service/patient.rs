//! Patient service

use std::sync::Arc;

use crate::model::{Patient, PatientFilter};
use crate::observability::Logger;
use crate::storage::{EncounterRepository, PatientRepository};
use crate::validation::validate_patient;

use super::errors::{ServiceError, ServiceResult, DELETE_CONFLICT, EMAIL_CONFLICT, ID_MISMATCH};
use super::{rejected, store_fault};

/// Patient operations: validation, email uniqueness and the
/// no-delete-with-encounters guard.
///
/// Uniqueness is checked before the write, not atomically with it; two
/// concurrent creates with the same email can both succeed.
pub struct PatientService {
    patients: Arc<dyn PatientRepository>,
    encounters: Arc<dyn EncounterRepository>,
}

impl PatientService {
    pub fn new(
        patients: Arc<dyn PatientRepository>,
        encounters: Arc<dyn EncounterRepository>,
    ) -> Self {
        Self {
            patients,
            encounters,
        }
    }

    /// All patients when `filter` is empty, otherwise those matching every
    /// set field.
    pub fn list(&self, filter: &PatientFilter) -> ServiceResult<Vec<Patient>> {
        self.patients
            .find_patients(filter)
            .map_err(store_fault("patient.list"))
    }

    pub fn get_by_id(&self, id: u64) -> ServiceResult<Patient> {
        self.patients
            .find_patient(id)
            .map_err(store_fault("patient.get"))?
            .ok_or_else(ServiceError::not_found)
    }

    /// Validates and stores a new patient. Any id in the payload is ignored.
    pub fn create(&self, mut patient: Patient) -> ServiceResult<Patient> {
        validate_patient(&patient).map_err(|e| rejected("patient", e))?;

        if self
            .patients
            .email_exists(&patient.email)
            .map_err(store_fault("patient.create"))?
        {
            return Err(ServiceError::conflict(EMAIL_CONFLICT));
        }

        patient.id = None;
        let saved = self
            .patients
            .save_patient(patient)
            .map_err(store_fault("patient.create"))?;

        let id = saved.id.unwrap_or_default().to_string();
        Logger::info("PATIENT_CREATED", &[("patient_id", id.as_str())]);
        Ok(saved)
    }

    /// Full replace of the patient at `id`.
    ///
    /// The email may stay the same or move to an address no patient uses.
    pub fn update(&self, id: u64, patient: Patient) -> ServiceResult<Patient> {
        if patient.id != Some(id) {
            return Err(ServiceError::bad_data(ID_MISMATCH));
        }
        validate_patient(&patient).map_err(|e| rejected("patient", e))?;

        let existing = self
            .patients
            .find_patient(id)
            .map_err(store_fault("patient.update"))?
            .ok_or_else(ServiceError::not_found)?;

        let email_is_same = existing.email == patient.email;
        if !email_is_same
            && self
                .patients
                .email_exists(&patient.email)
                .map_err(store_fault("patient.update"))?
        {
            return Err(ServiceError::conflict(EMAIL_CONFLICT));
        }

        let saved = self
            .patients
            .save_patient(patient)
            .map_err(store_fault("patient.update"))?;

        let id = id.to_string();
        Logger::info("PATIENT_UPDATED", &[("patient_id", id.as_str())]);
        Ok(saved)
    }

    /// Deletes a patient that has no encounters.
    pub fn delete(&self, id: u64) -> ServiceResult<()> {
        if !self
            .patients
            .patient_exists(id)
            .map_err(store_fault("patient.delete"))?
        {
            return Err(ServiceError::not_found());
        }

        let encounters = self
            .encounters
            .find_encounters_by_patient(id)
            .map_err(store_fault("patient.delete"))?;
        if !encounters.is_empty() {
            return Err(ServiceError::conflict(DELETE_CONFLICT));
        }

        let deleted = self
            .patients
            .delete_patient(id)
            .map_err(store_fault("patient.delete"))?;
        if !deleted {
            return Err(ServiceError::not_found());
        }

        let id = id.to_string();
        Logger::info("PATIENT_DELETED", &[("patient_id", id.as_str())]);
        Ok(())
    }
}
