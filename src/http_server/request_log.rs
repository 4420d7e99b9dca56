//! Request logging middleware
//!
//! Tags every request with a fresh `x-request-id` and emits one
//! `HTTP_REQUEST` event when the response is ready. Bodies and query
//! strings are never logged.

use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::observability::Logger;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

pub async fn log_request(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    let status = response.status().as_u16().to_string();
    let duration_ms = started.elapsed().as_millis().to_string();
    let fields = [
        ("duration_ms", duration_ms.as_str()),
        ("method", method.as_str()),
        ("path", path.as_str()),
        ("request_id", request_id.as_str()),
        ("status", status.as_str()),
    ];
    if response.status().is_server_error() {
        Logger::error("HTTP_REQUEST", &fields);
    } else {
        Logger::info("HTTP_REQUEST", &fields);
    }

    response
}
