//! Shared test doubles.

use clinicdb::model::{Encounter, EncounterFilter, Patient, PatientFilter};
use clinicdb::storage::{EncounterRepository, PatientRepository, StoreError, StoreResult};

/// A store whose every call fails as if the backend were down.
pub struct UnreachableStore;

fn refused<T>() -> StoreResult<T> {
    Err(StoreError::Unavailable("connection refused".into()))
}

impl PatientRepository for UnreachableStore {
    fn save_patient(&self, _patient: Patient) -> StoreResult<Patient> {
        refused()
    }
    fn find_patient(&self, _id: u64) -> StoreResult<Option<Patient>> {
        refused()
    }
    fn find_patients(&self, _filter: &PatientFilter) -> StoreResult<Vec<Patient>> {
        refused()
    }
    fn patient_exists(&self, _id: u64) -> StoreResult<bool> {
        refused()
    }
    fn email_exists(&self, _email: &str) -> StoreResult<bool> {
        refused()
    }
    fn delete_patient(&self, _id: u64) -> StoreResult<bool> {
        refused()
    }
}

impl EncounterRepository for UnreachableStore {
    fn save_encounter(&self, _encounter: Encounter) -> StoreResult<Encounter> {
        refused()
    }
    fn find_encounter(&self, _id: u64) -> StoreResult<Option<Encounter>> {
        refused()
    }
    fn find_encounters(&self, _filter: &EncounterFilter) -> StoreResult<Vec<Encounter>> {
        refused()
    }
    fn encounter_exists(&self, _id: u64) -> StoreResult<bool> {
        refused()
    }
}
