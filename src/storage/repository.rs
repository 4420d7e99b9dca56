//! # Repository Traits
//!
//! The storage seam used by the services. Saving a record without an id
//! inserts it under a newly assigned id; saving with an id overwrites the
//! record at that id.

use crate::model::{Encounter, EncounterFilter, Patient, PatientFilter};

use super::errors::StoreResult;

/// Patient table operations
pub trait PatientRepository: Send + Sync {
    /// Insert (no id) or overwrite (id set); returns the stored record
    fn save_patient(&self, patient: Patient) -> StoreResult<Patient>;

    fn find_patient(&self, id: u64) -> StoreResult<Option<Patient>>;

    /// All patients matching the filter, ascending by id
    fn find_patients(&self, filter: &PatientFilter) -> StoreResult<Vec<Patient>>;

    fn patient_exists(&self, id: u64) -> StoreResult<bool>;

    fn email_exists(&self, email: &str) -> StoreResult<bool>;

    /// Returns false if nothing was stored at `id`
    fn delete_patient(&self, id: u64) -> StoreResult<bool>;
}

/// Encounter table operations
pub trait EncounterRepository: Send + Sync {
    fn save_encounter(&self, encounter: Encounter) -> StoreResult<Encounter>;

    fn find_encounter(&self, id: u64) -> StoreResult<Option<Encounter>>;

    fn find_encounters(&self, filter: &EncounterFilter) -> StoreResult<Vec<Encounter>>;

    fn encounter_exists(&self, id: u64) -> StoreResult<bool>;

    /// Encounters belonging to one patient
    fn find_encounters_by_patient(&self, patient_id: u64) -> StoreResult<Vec<Encounter>> {
        self.find_encounters(&EncounterFilter::by_patient(patient_id))
    }
}

/// A store holding both tables
pub trait RecordRepository: PatientRepository + EncounterRepository {}

impl<T: PatientRepository + EncounterRepository> RecordRepository for T {}
