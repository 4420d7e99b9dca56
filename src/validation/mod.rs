//! # Record Validation
//!
//! Pure field-level validators. Each returns every failing field so callers
//! see all problems in one response.

mod encounter;
mod errors;
mod patient;
pub mod rules;

pub use encounter::validate_encounter;
pub use errors::{FieldError, ValidationErrors, REQUIRED_FIELD};
pub use patient::validate_patient;
