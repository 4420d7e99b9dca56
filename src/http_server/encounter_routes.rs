//! Encounter HTTP Routes
//!
//! Encounters are addressed under their patient:
//!
//! - `GET  /patients/:id/encounters`
//! - `POST /patients/:id/encounters`
//! - `GET  /patients/:id/encounters/:encounter_id`
//! - `PUT  /patients/:id/encounters/:encounter_id`
//!
//! plus `GET /encounters` for example-based queries across all patients.
//! An encounter stored under a different patient is reported as not found.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::model::{Encounter, EncounterFilter};
use crate::service::{
    ServiceError, ServiceResult, Services, ID_MISMATCH, PATIENT_ID_MISMATCH,
};

use super::blocking::run_blocking;

pub fn encounter_routes(state: Arc<Services>) -> Router {
    Router::new()
        .route("/encounters", get(query_encounters))
        .route(
            "/patients/:id/encounters",
            get(list_patient_encounters).post(create_encounter),
        )
        .route(
            "/patients/:id/encounters/:encounter_id",
            get(get_encounter).put(update_encounter),
        )
        .with_state(state)
}

/// Fills an unset body patientId from the path; rejects a different one.
fn bind_patient(encounter: &mut Encounter, patient_id: u64) -> ServiceResult<()> {
    match encounter.patient_id {
        None => {
            encounter.patient_id = Some(patient_id);
            Ok(())
        }
        Some(id) if id == patient_id => Ok(()),
        Some(_) => Err(ServiceError::bad_data(PATIENT_ID_MISMATCH)),
    }
}

/// NotFound when encounter `id` exists but belongs to another patient.
/// An absent encounter is left for the service to report.
fn ensure_owned(state: &Services, patient_id: u64, id: u64) -> ServiceResult<()> {
    match state.encounters.get_by_id(id) {
        Ok(existing) if existing.patient_id != Some(patient_id) => Err(ServiceError::not_found()),
        Ok(_) | Err(ServiceError::NotFound(_)) => Ok(()),
        Err(e) => Err(e),
    }
}

/// Body/path checks for a PUT; run before any store access.
fn check_update(encounter: &mut Encounter, patient_id: u64, id: u64) -> ServiceResult<()> {
    if encounter.id != Some(id) {
        return Err(ServiceError::bad_data(ID_MISMATCH));
    }
    bind_patient(encounter, patient_id)
}

async fn query_encounters(
    State(state): State<Arc<Services>>,
    filter: Result<Query<EncounterFilter>, QueryRejection>,
) -> Result<Json<Vec<Encounter>>, ServiceError> {
    let Query(filter) = filter?;
    let encounters = run_blocking(state, move |s| s.encounters.list(&filter)).await?;
    Ok(Json(encounters))
}

async fn list_patient_encounters(
    State(state): State<Arc<Services>>,
    patient_id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Vec<Encounter>>, ServiceError> {
    let Path(patient_id) = patient_id?;
    let encounters =
        run_blocking(state, move |s| s.encounters.list_by_patient_id(patient_id)).await?;
    Ok(Json(encounters))
}

async fn create_encounter(
    State(state): State<Arc<Services>>,
    patient_id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<Encounter>, JsonRejection>,
) -> Result<(StatusCode, Json<Encounter>), ServiceError> {
    let Path(patient_id) = patient_id?;
    let Json(mut encounter) = payload?;
    bind_patient(&mut encounter, patient_id)?;
    let created = run_blocking(state, move |s| s.encounters.create(encounter)).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_encounter(
    State(state): State<Arc<Services>>,
    ids: Result<Path<(u64, u64)>, PathRejection>,
) -> Result<Json<Encounter>, ServiceError> {
    let Path((patient_id, id)) = ids?;
    let encounter = run_blocking(state, move |s| s.encounters.get_by_id(id)).await?;
    if encounter.patient_id != Some(patient_id) {
        return Err(ServiceError::not_found());
    }
    Ok(Json(encounter))
}

async fn update_encounter(
    State(state): State<Arc<Services>>,
    ids: Result<Path<(u64, u64)>, PathRejection>,
    payload: Result<Json<Encounter>, JsonRejection>,
) -> Result<Json<Encounter>, ServiceError> {
    let Path((patient_id, id)) = ids?;
    let Json(mut encounter) = payload?;
    check_update(&mut encounter, patient_id, id)?;
    let updated = run_blocking(state, move |s| {
        ensure_owned(s, patient_id, id)?;
        s.encounters.update(id, encounter)
    })
    .await?;
    Ok(Json(updated))
}
