//! # HTTP Server Module
//!
//! JSON over HTTP for patients and their encounters.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/patients`, `/patients/:id` - Patient CRUD
//! - `/patients/:id/encounters[/:encounter_id]` - Encounters of a patient
//! - `/encounters` - Encounter queries across patients

mod blocking;
pub mod config;
mod encounter_routes;
mod errors;
mod observability_routes;
mod patient_routes;
mod request_log;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{status_code, ErrorResponse};
pub use request_log::REQUEST_ID_HEADER;
pub use server::HttpServer;
