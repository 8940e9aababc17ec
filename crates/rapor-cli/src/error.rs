//! CLI exit code handling.
//!
//! Exit codes:
//! - 0: Success (JSON on stdout)
//! - 1: Recoverable error (stderr)
//! - 2: Stored data is corrupted (stderr)

use std::fmt::Display;

use rapor_core::RaporError;
use rapor_storage::StorageError;
use tracing::error;

/// Exit codes for CLI commands.
///
/// Exit 2 is ONLY for corruption, where retrying cannot help.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CliExitCode {
    /// Success
    Success = 0,
    /// Recoverable error
    Warning = 1,
    /// Stored data cannot be read back
    Blocking = 2,
}

impl From<CliExitCode> for i32 {
    fn from(code: CliExitCode) -> Self {
        code as i32
    }
}

impl From<&StorageError> for CliExitCode {
    fn from(err: &StorageError) -> Self {
        match err {
            StorageError::VersionMismatch { .. } => CliExitCode::Blocking,
            StorageError::KeyCorrupted { .. } => CliExitCode::Blocking,
            StorageError::Deserialization { .. } => CliExitCode::Blocking,
            StorageError::RocksDbOperation { source, .. }
                if is_corruption_indicator(&source.to_string()) =>
            {
                CliExitCode::Blocking
            }
            StorageError::OpenFailed { message, .. } if is_corruption_indicator(message) => {
                CliExitCode::Blocking
            }

            StorageError::OpenFailed { .. } => CliExitCode::Warning,
            StorageError::ColumnFamilyNotFound { .. } => CliExitCode::Warning,
            StorageError::RocksDbOperation { .. } => CliExitCode::Warning,
            StorageError::Serialization { .. } => CliExitCode::Warning,
            StorageError::ValidationFailed(_) => CliExitCode::Warning,
        }
    }
}

impl From<&RaporError> for CliExitCode {
    fn from(err: &RaporError) -> Self {
        match err {
            // Storage failures reach the service as Persistence messages
            RaporError::Persistence(msg) if is_corruption_indicator(msg) => CliExitCode::Blocking,
            _ => CliExitCode::Warning,
        }
    }
}

/// Check if error message indicates corruption.
#[inline]
pub fn is_corruption_indicator(msg: &str) -> bool {
    let lower = msg.to_lowercase();
    CORRUPTION_INDICATORS
        .iter()
        .any(|&indicator| lower.contains(indicator))
}

/// Corruption indicator strings (lowercase).
const CORRUPTION_INDICATORS: &[&str] = &[
    "corruption",
    "corrupted",
    "checksum",
    "version mismatch",
    "deserialization error",
    "malformed",
    "truncated",
];

/// Log a failed command and print it on stderr; returns the exit code.
pub fn report_failure(command: &str, code: CliExitCode, err: &dyn Display) -> i32 {
    error!(command, exit_code = code as i32, error = %err, "Command failed");
    eprintln!("rapor {}: {}", command, err);
    code.into()
}

/// [`report_failure`] for service errors.
pub fn report_rapor_error(command: &str, err: &RaporError) -> i32 {
    report_failure(command, CliExitCode::from(err), err)
}

/// [`report_failure`] for storage errors.
pub fn report_storage_error(command: &str, err: &StorageError) -> i32 {
    report_failure(command, CliExitCode::from(err), err)
}
