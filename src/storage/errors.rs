//! Record store error types
//!
//! Error codes:
//! - CLINIC_STORE_UNAVAILABLE
//! - CLINIC_STORE_IO_ERROR
//! - CLINIC_STORE_CORRUPT
//! - CLINIC_STORE_LOCK_POISONED
//!
//! Every store error surfaces to API callers as service unavailable.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Store cannot be reached
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Snapshot file could not be read or written
    #[error("Store I/O error: {0}")]
    Io(String),

    /// Snapshot file failed its checksum or could not be decoded
    #[error("Store data corrupt: {0}")]
    Corrupt(String),

    /// A writer panicked while holding the table lock
    #[error("Store lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    /// Returns the string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Unavailable(_) => "CLINIC_STORE_UNAVAILABLE",
            StoreError::Io(_) => "CLINIC_STORE_IO_ERROR",
            StoreError::Corrupt(_) => "CLINIC_STORE_CORRUPT",
            StoreError::LockPoisoned => "CLINIC_STORE_LOCK_POISONED",
        }
    }

    pub fn io(context: &str, err: std::io::Error) -> Self {
        StoreError::Io(format!("{}: {}", context, err))
    }
}
