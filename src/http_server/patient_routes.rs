//! Patient HTTP Routes
//!
//! - `GET    /patients`       list, optionally filtered by query parameters
//! - `POST   /patients`       create
//! - `GET    /patients/:id`   fetch one
//! - `PUT    /patients/:id`   full replace
//! - `DELETE /patients/:id`   delete (blocked while encounters exist)

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

use crate::model::{Patient, PatientFilter};
use crate::service::{ServiceError, Services};

use super::blocking::run_blocking;

pub fn patient_routes(state: Arc<Services>) -> Router {
    Router::new()
        .route("/patients", get(list_patients).post(create_patient))
        .route(
            "/patients/:id",
            get(get_patient).put(update_patient).delete(delete_patient),
        )
        .with_state(state)
}

async fn list_patients(
    State(state): State<Arc<Services>>,
    filter: Result<Query<PatientFilter>, QueryRejection>,
) -> Result<Json<Vec<Patient>>, ServiceError> {
    let Query(filter) = filter?;
    let patients = run_blocking(state, move |s| s.patients.list(&filter)).await?;
    Ok(Json(patients))
}

async fn create_patient(
    State(state): State<Arc<Services>>,
    payload: Result<Json<Patient>, JsonRejection>,
) -> Result<(StatusCode, Json<Patient>), ServiceError> {
    let Json(patient) = payload?;
    let created = run_blocking(state, move |s| s.patients.create(patient)).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_patient(
    State(state): State<Arc<Services>>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Patient>, ServiceError> {
    let Path(id) = id?;
    let patient = run_blocking(state, move |s| s.patients.get_by_id(id)).await?;
    Ok(Json(patient))
}

async fn update_patient(
    State(state): State<Arc<Services>>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<Patient>, JsonRejection>,
) -> Result<Json<Patient>, ServiceError> {
    let Path(id) = id?;
    let Json(patient) = payload?;
    let updated = run_blocking(state, move |s| s.patients.update(id, patient)).await?;
    Ok(Json(updated))
}

async fn delete_patient(
    State(state): State<Arc<Services>>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, ServiceError> {
    let Path(id) = id?;
    run_blocking(state, move |s| s.patients.delete(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
