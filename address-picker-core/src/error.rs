//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::AddressId;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Selection index past the end of the list
    #[error("Index {index} out of range for {len} addresses")]
    IndexOutOfRange { index: usize, len: usize },

    /// No address with the given id in the list
    #[error("Address not found: {0}")]
    AddressNotFound(AddressId),

    /// Storage layer error (reading address files)
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        Self::StorageError(err.to_string())
    }
}
