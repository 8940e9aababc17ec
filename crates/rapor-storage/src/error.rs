//! Storage error types.
//!
//! Every RocksDB failure carries the operation, column family and key so a
//! failing call can be debugged from the message alone.

use rapor_core::error::RaporError;
use thiserror::Error;

/// Serialization version prefixed to every stored value.
///
/// Bump this when a stored struct changes layout. Values with another
/// version are rejected, never reinterpreted.
pub const STORAGE_VERSION: u8 = 1;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database failed to open at the specified path.
    #[error("Failed to open database at '{path}': {message}")]
    OpenFailed { path: String, message: String },

    /// Column family not found in the database.
    #[error("Column family '{name}' not found")]
    ColumnFamilyNotFound { name: String },

    /// RocksDB operation failed.
    #[error("RocksDB {operation} failed on CF '{cf}' with key '{key:?}': {source}")]
    RocksDbOperation {
        operation: &'static str,
        cf: &'static str,
        key: Option<String>,
        #[source]
        source: rocksdb::Error,
    },

    /// Serialization failed.
    #[error("Serialization error for {type_name}: {message}")]
    Serialization {
        type_name: &'static str,
        message: String,
    },

    /// Deserialization failed.
    #[error("Deserialization error for key '{key}' in CF '{cf}': {message}")]
    Deserialization {
        cf: &'static str,
        key: String,
        message: String,
    },

    /// Stored value has an unknown version byte.
    #[error("Version mismatch in CF '{cf}': expected {expected}, got {actual}")]
    VersionMismatch {
        cf: &'static str,
        expected: u8,
        actual: u8,
    },

    /// A key does not have the layout its column family requires.
    #[error("Corrupted key in CF '{cf}': {details}")]
    KeyCorrupted { cf: &'static str, details: String },

    /// Input rejected before anything was written.
    #[error("Validation error: {0}")]
    ValidationFailed(String),
}

impl StorageError {
    /// Create a RocksDB operation error.
    pub(crate) fn rocksdb_op(
        operation: &'static str,
        cf: &'static str,
        key: Option<&[u8]>,
        source: rocksdb::Error,
    ) -> Self {
        Self::RocksDbOperation {
            operation,
            cf,
            key: key.map(hex_key),
            source,
        }
    }
}

/// Render a binary key for error messages.
pub(crate) fn hex_key(key: &[u8]) -> String {
    key.iter().map(|b| format!("{:02x}", b)).collect()
}

impl From<StorageError> for RaporError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::ValidationFailed(msg) => RaporError::Validation(msg),
            other => RaporError::Persistence(other.to_string()),
        }
    }
}

/// Convenient Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
