//! # Record Model
//!
//! Patient and Encounter records plus the sparse filters used for
//! example-based queries.

mod encounter;
mod patient;

pub use encounter::{Encounter, EncounterFilter};
pub use patient::{Patient, PatientFilter};

/// An unset criterion matches anything.
fn field_matches<T: PartialEq>(criterion: &Option<T>, value: &T) -> bool {
    match criterion {
        Some(expected) => expected == value,
        None => true,
    }
}

// A set criterion never matches an unset value.
fn optional_matches<T: PartialEq>(criterion: &Option<T>, value: &Option<T>) -> bool {
    match criterion {
        Some(expected) => value.as_ref() == Some(expected),
        None => true,
    }
}
