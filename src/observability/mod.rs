//! Observability for clinicdb
//!
//! Structured JSON logging. Log fields carry record ids, field names and
//! request metadata only; patient names, SSNs and emails are never logged.
//!
//! # Usage
//!
//! ```ignore
//! use clinicdb::observability::Logger;
//!
//! Logger::info("PATIENT_CREATED", &[("patient_id", "42")]);
//! ```

mod logger;

pub use logger::{Logger, Severity};
