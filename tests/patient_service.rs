//! Patient Service Tests
//!
//! - Valid patients are stored under a fresh id
//! - Field rules reject bad input with BadData naming each field
//! - Email is unique across patients
//! - Update requires the body id to match the path id
//! - A patient with encounters cannot be deleted
//! - Store faults surface as ServiceUnavailable

use std::sync::Arc;

use chrono::NaiveDate;
use clinicdb::model::{Encounter, Patient, PatientFilter};
use clinicdb::service::{
    ServiceError, Services, DELETE_CONFLICT, EMAIL_CONFLICT, ID_MISMATCH,
};
use clinicdb::storage::RecordStore;

mod common;

use common::UnreachableStore;

// =============================================================================
// Helper Functions
// =============================================================================

fn services() -> Services {
    Services::new(Arc::new(RecordStore::in_memory()))
}

fn john() -> Patient {
    Patient {
        id: None,
        first_name: "John".into(),
        last_name: "Smith".into(),
        ssn: "123-45-6789".into(),
        email: "test@email.com".into(),
        street: "123 Sesame St.".into(),
        city: "Salt Lake City".into(),
        state: "UT".into(),
        postal: "84084".into(),
        age: 43,
        height: 68,
        weight: 165,
        insurance: "Blue Cross".into(),
        gender: "Male".into(),
    }
}

fn jane() -> Patient {
    Patient {
        first_name: "Jane".into(),
        ssn: "987-65-4321".into(),
        email: "jane@email.com".into(),
        gender: "Female".into(),
        ..john()
    }
}

fn visit(patient_id: u64) -> Encounter {
    Encounter {
        id: None,
        patient_id: Some(patient_id),
        notes: None,
        visit_code: "A1B 2C3".into(),
        provider: "New Hospital".into(),
        billing_code: "123.456.789-10".into(),
        icd10: "A12".into(),
        total_cost: 154.36,
        copay: 20.0,
        chief_complaint: "Sore throat".into(),
        pulse: Some(72),
        systolic: Some(120),
        diastolic: Some(80),
        date: NaiveDate::from_ymd_opt(2023, 3, 23),
    }
}

fn assert_bad_data(err: ServiceError) -> String {
    match err {
        ServiceError::BadData { message, .. } => message,
        other => panic!("expected BadData, got {:?}", other),
    }
}

// =============================================================================
// Create
// =============================================================================

#[test]
fn test_create_assigns_id() {
    let services = services();

    let created = services.patients.create(john()).unwrap();

    assert!(created.id.is_some());
    assert_eq!(created, john().with_id(created.id.unwrap()));
}

#[test]
fn test_create_ignores_payload_id() {
    let services = services();

    let created = services.patients.create(john().with_id(999)).unwrap();

    assert_ne!(created.id, Some(999));
    assert!(matches!(
        services.patients.get_by_id(999),
        Err(ServiceError::NotFound(_))
    ));
}

#[test]
fn test_create_unknown_state_is_bad_data() {
    let services = services();
    let patient = Patient {
        state: "ZX".into(),
        ..john()
    };

    let message = assert_bad_data(services.patients.create(patient).unwrap_err());
    assert_eq!(message, "Invalid state");
    assert!(services.patients.list(&PatientFilter::default()).unwrap().is_empty());
}

#[test]
fn test_create_empty_patient_names_every_label() {
    let services = services();

    let message = assert_bad_data(services.patients.create(Patient::default()).unwrap_err());

    for label in [
        "First Name",
        "Last Name",
        "Social Security Number",
        "Street",
        "City",
        "State",
        "Zip Code",
        "Email",
        "Age",
        "Height",
        "Weight",
        "Insurance",
        "Gender",
    ] {
        assert!(message.contains(label), "message lacks {}: {}", label, message);
    }
}

#[test]
fn test_create_duplicate_email_conflicts() {
    let services = services();
    services.patients.create(john()).unwrap();

    let duplicate = Patient {
        email: john().email,
        ..jane()
    };

    let err = services.patients.create(duplicate).unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(ref m) if m == EMAIL_CONFLICT));
}

// =============================================================================
// Read
// =============================================================================

#[test]
fn test_round_trip() {
    let services = services();
    let id = services.patients.create(john()).unwrap().id.unwrap();

    let fetched = services.patients.get_by_id(id).unwrap();

    assert_eq!(fetched, john().with_id(id));
}

#[test]
fn test_get_missing_is_not_found() {
    let services = services();
    assert!(matches!(
        services.patients.get_by_id(42),
        Err(ServiceError::NotFound(_))
    ));
}

#[test]
fn test_list_with_filter() {
    let services = services();
    let john_id = services.patients.create(john()).unwrap().id.unwrap();
    services.patients.create(jane()).unwrap();

    let all = services.patients.list(&PatientFilter::default()).unwrap();
    assert_eq!(all.len(), 2);

    let filter = PatientFilter {
        gender: Some("Male".into()),
        state: Some("UT".into()),
        ..Default::default()
    };
    let males = services.patients.list(&filter).unwrap();
    assert_eq!(males.len(), 1);
    assert_eq!(males[0].id, Some(john_id));

    let nobody = PatientFilter {
        city: Some("Boise".into()),
        ..Default::default()
    };
    assert!(services.patients.list(&nobody).unwrap().is_empty());
}

// =============================================================================
// Update
// =============================================================================

#[test]
fn test_update_id_mismatch_is_bad_data() {
    let services = services();
    let id = services.patients.create(john()).unwrap().id.unwrap();

    // Invalid fields too; the id check comes first.
    let err = services
        .patients
        .update(id, Patient::default().with_id(id + 1))
        .unwrap_err();
    assert_eq!(assert_bad_data(err), ID_MISMATCH);

    let err = services.patients.update(id, john()).unwrap_err();
    assert_eq!(assert_bad_data(err), ID_MISMATCH);
}

#[test]
fn test_update_missing_is_not_found() {
    let services = services();
    let err = services.patients.update(7, john().with_id(7)).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[test]
fn test_update_keeping_own_email() {
    let services = services();
    let id = services.patients.create(john()).unwrap().id.unwrap();

    let moved = Patient {
        city: "Provo".into(),
        ..john().with_id(id)
    };
    let updated = services.patients.update(id, moved.clone()).unwrap();

    assert_eq!(updated, moved);
    assert_eq!(services.patients.get_by_id(id).unwrap().city, "Provo");
}

#[test]
fn test_update_to_taken_email_conflicts() {
    let services = services();
    services.patients.create(john()).unwrap();
    let jane_id = services.patients.create(jane()).unwrap().id.unwrap();

    let stolen = Patient {
        email: john().email,
        ..jane().with_id(jane_id)
    };
    let err = services.patients.update(jane_id, stolen).unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(ref m) if m == EMAIL_CONFLICT));

    let fresh = Patient {
        email: "jane2@email.com".into(),
        ..jane().with_id(jane_id)
    };
    assert!(services.patients.update(jane_id, fresh).is_ok());
}

// =============================================================================
// Delete
// =============================================================================

#[test]
fn test_delete_removes_patient() {
    let services = services();
    let id = services.patients.create(john()).unwrap().id.unwrap();

    services.patients.delete(id).unwrap();

    assert!(matches!(
        services.patients.get_by_id(id),
        Err(ServiceError::NotFound(_))
    ));
    assert!(matches!(
        services.patients.delete(id),
        Err(ServiceError::NotFound(_))
    ));
}

#[test]
fn test_delete_with_encounters_conflicts() {
    let services = services();
    let id = services.patients.create(john()).unwrap().id.unwrap();
    services.encounters.create(visit(id)).unwrap();

    let err = services.patients.delete(id).unwrap_err();

    assert!(matches!(err, ServiceError::Conflict(ref m) if m == DELETE_CONFLICT));
    assert!(services.patients.get_by_id(id).is_ok());
}

// =============================================================================
// Store Faults
// =============================================================================

#[test]
fn test_store_faults_are_service_unavailable() {
    let services = Services::new(Arc::new(UnreachableStore));

    let results = [
        services.patients.list(&PatientFilter::default()).map(|_| ()),
        services.patients.get_by_id(1).map(|_| ()),
        services.patients.create(john()).map(|_| ()),
        services.patients.update(1, john().with_id(1)).map(|_| ()),
        services.patients.delete(1),
    ];

    for result in results {
        let err = result.unwrap_err();
        assert_eq!(err.code(), "CLINIC_SERVICE_UNAVAILABLE", "{:?}", err);
    }
}

#[test]
fn test_validation_runs_before_store() {
    let services = Services::new(Arc::new(UnreachableStore));

    let err = services.patients.create(Patient::default()).unwrap_err();

    assert_eq!(err.code(), "CLINIC_BAD_DATA");
}
