//! Error handling for scriptman-store
//!
//! Wraps scriptman-core ExError with store-specific helpers

use scriptman_core::errors::{ExError, ExErrorKind};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Storage)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::Storage)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: recorded {}, embedded {}",
            migration_id, expected, actual
        ))
}

/// Create an empty-filter error (deletes must always be scoped)
pub fn empty_filter(filter: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidArgument)
        .with_op("delete_where")
        .with_message(format!("refusing to delete with an empty {} filter", filter))
}

/// Create a corrupt-row error
pub fn corrupt_row(id: i64, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op("read_script_row")
        .with_message(format!("script row {} is unreadable: {}", id, reason))
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Storage)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error for an operation on `path`
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Storage)
        .with_op(operation.to_string())
        .with_path(path.to_string_lossy())
        .with_message(err.to_string())
}
