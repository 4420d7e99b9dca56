//! Encounter service

use std::sync::Arc;

use crate::model::{Encounter, EncounterFilter};
use crate::observability::Logger;
use crate::storage::{EncounterRepository, PatientRepository};
use crate::validation::validate_encounter;

use super::errors::{ServiceError, ServiceResult, ID_MISMATCH};
use super::{rejected, store_fault};

pub struct EncounterService {
    encounters: Arc<dyn EncounterRepository>,
    patients: Arc<dyn PatientRepository>,
}

impl EncounterService {
    pub fn new(
        encounters: Arc<dyn EncounterRepository>,
        patients: Arc<dyn PatientRepository>,
    ) -> Self {
        Self {
            encounters,
            patients,
        }
    }

    /// Example-based query over all encounters
    pub fn list(&self, filter: &EncounterFilter) -> ServiceResult<Vec<Encounter>> {
        self.encounters
            .find_encounters(filter)
            .map_err(store_fault("encounter.list"))
    }

    /// Encounters of one patient.
    ///
    /// NotFound only when the patient itself does not exist; a patient with
    /// no encounters yields an empty list.
    pub fn list_by_patient_id(&self, patient_id: u64) -> ServiceResult<Vec<Encounter>> {
        if !self
            .patients
            .patient_exists(patient_id)
            .map_err(store_fault("encounter.list_by_patient"))?
        {
            return Err(ServiceError::not_found());
        }

        self.encounters
            .find_encounters_by_patient(patient_id)
            .map_err(store_fault("encounter.list_by_patient"))
    }

    pub fn get_by_id(&self, id: u64) -> ServiceResult<Encounter> {
        self.encounters
            .find_encounter(id)
            .map_err(store_fault("encounter.get"))?
            .ok_or_else(ServiceError::not_found)
    }

    /// Validates and stores a new encounter under a fresh id.
    pub fn create(&self, mut encounter: Encounter) -> ServiceResult<Encounter> {
        encounter.id = None;
        validate_encounter(&encounter).map_err(|e| rejected("encounter", e))?;
        let saved = self.persist(encounter, "encounter.create")?;

        let id = saved.id.unwrap_or_default().to_string();
        let patient_id = saved
            .patient_id
            .map(|p| p.to_string())
            .unwrap_or_default();
        Logger::info(
            "ENCOUNTER_CREATED",
            &[
                ("encounter_id", id.as_str()),
                ("patient_id", patient_id.as_str()),
            ],
        );
        Ok(saved)
    }

    /// Full overwrite of the encounter at `id`; the id is preserved.
    pub fn update(&self, id: u64, encounter: Encounter) -> ServiceResult<Encounter> {
        if encounter.id != Some(id) {
            return Err(ServiceError::bad_data(ID_MISMATCH));
        }
        validate_encounter(&encounter).map_err(|e| rejected("encounter", e))?;

        if !self
            .encounters
            .encounter_exists(id)
            .map_err(store_fault("encounter.update"))?
        {
            return Err(ServiceError::not_found());
        }

        let saved = self.persist(encounter, "encounter.update")?;

        let id = id.to_string();
        Logger::info("ENCOUNTER_UPDATED", &[("encounter_id", id.as_str())]);
        Ok(saved)
    }

    /// Saves an already validated encounter
    fn persist(&self, encounter: Encounter, operation: &'static str) -> ServiceResult<Encounter> {
        self.encounters
            .save_encounter(encounter)
            .map_err(store_fault(operation))
    }
}
