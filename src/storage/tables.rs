//! In-memory record tables
//!
//! Ids are assigned from per-table counters and never reused, even after
//! the record holding the highest id is deleted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Encounter, EncounterFilter, Patient, PatientFilter};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tables {
    patients: BTreeMap<u64, Patient>,
    encounters: BTreeMap<u64, Encounter>,
    last_patient_id: u64,
    last_encounter_id: u64,
}

impl Tables {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================
    // Patients
    // ==================

    pub fn save_patient(&mut self, mut patient: Patient) -> Patient {
        let id = match patient.id {
            Some(id) => {
                self.last_patient_id = self.last_patient_id.max(id);
                id
            }
            None => {
                self.last_patient_id += 1;
                self.last_patient_id
            }
        };
        patient.id = Some(id);
        self.patients.insert(id, patient.clone());
        patient
    }

    pub fn patient(&self, id: u64) -> Option<&Patient> {
        self.patients.get(&id)
    }

    pub fn patients(&self, filter: &PatientFilter) -> Vec<Patient> {
        if filter.is_empty() {
            return self.patients.values().cloned().collect();
        }
        self.patients
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect()
    }

    pub fn email_exists(&self, email: &str) -> bool {
        self.patients.values().any(|p| p.email == email)
    }

    pub fn delete_patient(&mut self, id: u64) -> bool {
        self.patients.remove(&id).is_some()
    }

    // ==================
    // Encounters
    // ==================

    pub fn save_encounter(&mut self, mut encounter: Encounter) -> Encounter {
        let id = match encounter.id {
            Some(id) => {
                self.last_encounter_id = self.last_encounter_id.max(id);
                id
            }
            None => {
                self.last_encounter_id += 1;
                self.last_encounter_id
            }
        };
        encounter.id = Some(id);
        self.encounters.insert(id, encounter.clone());
        encounter
    }

    pub fn encounter(&self, id: u64) -> Option<&Encounter> {
        self.encounters.get(&id)
    }

    pub fn encounters(&self, filter: &EncounterFilter) -> Vec<Encounter> {
        if filter.is_empty() {
            return self.encounters.values().cloned().collect();
        }
        self.encounters
            .values()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect()
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    pub fn encounter_count(&self) -> usize {
        self.encounters.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient(email: &str) -> Patient {
        Patient {
            email: email.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut tables = Tables::new();
        let a = tables.save_patient(patient("a@x.com"));
        let b = tables.save_patient(patient("b@x.com"));
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut tables = Tables::new();
        tables.save_patient(patient("a@x.com"));
        let b = tables.save_patient(patient("b@x.com"));
        assert!(tables.delete_patient(b.id.unwrap()));

        let c = tables.save_patient(patient("c@x.com"));
        assert_eq!(c.id, Some(3));
    }

    #[test]
    fn test_save_with_id_overwrites() {
        let mut tables = Tables::new();
        let saved = tables.save_patient(patient("a@x.com"));

        let replaced = tables.save_patient(patient("z@x.com").with_id(saved.id.unwrap()));
        assert_eq!(replaced.id, saved.id);
        assert_eq!(tables.patient_count(), 1);
        assert!(tables.email_exists("z@x.com"));
        assert!(!tables.email_exists("a@x.com"));
    }

    #[test]
    fn test_encounters_by_patient() {
        let mut tables = Tables::new();
        for patient_id in [1, 1, 2] {
            tables.save_encounter(Encounter {
                patient_id: Some(patient_id),
                ..Default::default()
            });
        }

        assert_eq!(tables.encounters(&EncounterFilter::by_patient(1)).len(), 2);
        assert_eq!(tables.encounters(&EncounterFilter::by_patient(3)).len(), 0);
        assert_eq!(tables.encounter_count(), 3);
    }
}
