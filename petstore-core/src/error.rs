use kn0sys_lmdb_rs::MdbError;
use thiserror::Error;

/// Use for mapping errors in functions that can throw multiple errors.
#[derive(Debug, Error)]
pub enum PetstoreError {
    /// No pet is stored under the requested id
    #[error("pet not found")]
    NotFound,
    /// Request input rejected before touching the database
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("database error: {0:?}")]
    Database(MdbError),
    #[error("serialization error: {0}")]
    Serialization(#[from] bincode::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<MdbError> for PetstoreError {
    fn from(e: MdbError) -> Self {
        PetstoreError::Database(e)
    }
}
