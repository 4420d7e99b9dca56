//! # HTTP Error Mapping
//!
//! Service errors become a status code plus a JSON body:
//!
//! ```json
//! {"error": "Invalid state", "code": 400, "kind": "CLINIC_BAD_DATA",
//!  "fields": [{"field": "state", "message": "Invalid state"}]}
//! ```

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::service::ServiceError;
use crate::validation::FieldError;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

/// HTTP status for a service error
pub fn status_code(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::BadData { .. } => StatusCode::BAD_REQUEST,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Conflict(_) => StatusCode::CONFLICT,
        ServiceError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

impl From<&ServiceError> for ErrorResponse {
    fn from(err: &ServiceError) -> Self {
        Self {
            error: err.to_string(),
            code: status_code(err).as_u16(),
            kind: err.code(),
            fields: err.fields().to_vec(),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = status_code(&self);
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        ServiceError::bad_data(rejection.body_text())
    }
}

impl From<PathRejection> for ServiceError {
    fn from(rejection: PathRejection) -> Self {
        ServiceError::bad_data(rejection.body_text())
    }
}

impl From<QueryRejection> for ServiceError {
    fn from(rejection: QueryRejection) -> Self {
        ServiceError::bad_data(rejection.body_text())
    }
}
