//! # Record Storage
//!
//! Patient and encounter tables with system-assigned ids. The services see
//! storage only through the repository traits; `RecordStore` is the
//! provided implementation, either volatile or backed by a checksummed
//! snapshot file.

mod errors;
mod repository;
mod snapshot;
mod store;
mod tables;

pub use errors::{StoreError, StoreResult};
pub use repository::{EncounterRepository, PatientRepository, RecordRepository};
pub use snapshot::SnapshotFile;
pub use store::RecordStore;
pub use tables::Tables;
