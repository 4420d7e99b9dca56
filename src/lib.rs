//! clinicdb - patient and encounter records over HTTP
//!
//! Layers, bottom-up:
//! - `model` - Patient and Encounter records and their query filters
//! - `validation` - field rules for both records
//! - `storage` - repositories and the in-memory / snapshot-backed store
//! - `service` - business rules and the service error taxonomy
//! - `http_server` - axum routes, error mapping, request logging
//! - `cli` - `init` and `start`

pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod service;
pub mod storage;
pub mod validation;
