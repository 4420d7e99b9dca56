//! Record store
//!
//! Holds both tables behind one `RwLock`. With a snapshot file attached,
//! every write is applied to a copy of the tables, persisted, and only then
//! made visible; a failed persist leaves the in-memory state untouched.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::model::{Encounter, EncounterFilter, Patient, PatientFilter};
use crate::observability::Logger;

use super::errors::{StoreError, StoreResult};
use super::repository::{EncounterRepository, PatientRepository};
use super::snapshot::SnapshotFile;
use super::tables::Tables;

pub struct RecordStore {
    tables: RwLock<Tables>,
    snapshot: Option<SnapshotFile>,
}

impl RecordStore {
    /// Volatile store; contents are lost when the process exits.
    pub fn in_memory() -> Self {
        Self {
            tables: RwLock::new(Tables::new()),
            snapshot: None,
        }
    }

    /// Opens (or prepares to create) a durable store backed by `path`.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let snapshot = SnapshotFile::new(path);
        let tables = snapshot.load()?;

        let path = snapshot.path().display().to_string();
        let patients = tables.patient_count().to_string();
        let encounters = tables.encounter_count().to_string();
        Logger::info(
            "STORE_OPENED",
            &[
                ("encounters", encounters.as_str()),
                ("path", path.as_str()),
                ("patients", patients.as_str()),
            ],
        );

        Ok(Self {
            tables: RwLock::new(tables),
            snapshot: Some(snapshot),
        })
    }

    pub fn is_durable(&self) -> bool {
        self.snapshot.is_some()
    }

    fn read<R>(&self, f: impl FnOnce(&Tables) -> R) -> StoreResult<R> {
        let tables = self.tables.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(f(&tables))
    }

    fn write<R>(&self, f: impl FnOnce(&mut Tables) -> R) -> StoreResult<R> {
        let mut tables = self.tables.write().map_err(|_| StoreError::LockPoisoned)?;

        match &self.snapshot {
            None => Ok(f(&mut tables)),
            Some(snapshot) => {
                let mut next = tables.clone();
                let out = f(&mut next);
                snapshot.persist(&next)?;
                *tables = next;
                Ok(out)
            }
        }
    }
}

impl PatientRepository for RecordStore {
    fn save_patient(&self, patient: Patient) -> StoreResult<Patient> {
        self.write(|t| t.save_patient(patient))
    }

    fn find_patient(&self, id: u64) -> StoreResult<Option<Patient>> {
        self.read(|t| t.patient(id).cloned())
    }

    fn find_patients(&self, filter: &PatientFilter) -> StoreResult<Vec<Patient>> {
        self.read(|t| t.patients(filter))
    }

    fn patient_exists(&self, id: u64) -> StoreResult<bool> {
        self.read(|t| t.patient(id).is_some())
    }

    fn email_exists(&self, email: &str) -> StoreResult<bool> {
        self.read(|t| t.email_exists(email))
    }

    fn delete_patient(&self, id: u64) -> StoreResult<bool> {
        // Skip the snapshot rewrite when there is nothing to delete
        if !self.patient_exists(id)? {
            return Ok(false);
        }
        self.write(|t| t.delete_patient(id))
    }
}

impl EncounterRepository for RecordStore {
    fn save_encounter(&self, encounter: Encounter) -> StoreResult<Encounter> {
        self.write(|t| t.save_encounter(encounter))
    }

    fn find_encounter(&self, id: u64) -> StoreResult<Option<Encounter>> {
        self.read(|t| t.encounter(id).cloned())
    }

    fn find_encounters(&self, filter: &EncounterFilter) -> StoreResult<Vec<Encounter>> {
        self.read(|t| t.encounters(filter))
    }

    fn encounter_exists(&self, id: u64) -> StoreResult<bool> {
        self.read(|t| t.encounter(id).is_some())
    }
}
