//! Filesystem operations used by the registry
//!
//! Thin wrappers that turn OS errors into `Storage` errors carrying the
//! operation name and path.

#![allow(clippy::result_large_err)]

use scriptman_store::errors::{io_error, Result};
use std::fs;
use std::path::Path;

/// True when `path` names an existing regular file (symlinks are followed)
pub fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// True when both paths resolve to the same file on disk
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Copy a script into place, creating the destination directory if needed
pub fn copy_script(source: &Path, destination: &Path) -> Result<()> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error("create_managed_dir", parent, e))?;
    }
    fs::copy(source, destination).map_err(|e| io_error("copy_script", destination, e))?;
    tracing::debug!(
        source = %source.display(),
        destination = %destination.display(),
        "script copied"
    );
    Ok(())
}

/// Delete a script file
pub fn delete_script(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| io_error("delete_script", path, e))?;
    tracing::debug!(path = %path.display(), "script file deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptman_core::ExErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_copy_creates_destination_dir() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("a.sh");
        fs::write(&source, "echo a").unwrap();
        let destination = tmp.path().join("managed").join("a.sh");

        copy_script(&source, &destination).unwrap();
        assert_eq!(fs::read_to_string(&destination).unwrap(), "echo a");
    }

    #[test]
    fn test_copy_missing_source_is_storage_error() {
        let tmp = TempDir::new().unwrap();
        let err = copy_script(&tmp.path().join("nope.sh"), &tmp.path().join("out.sh")).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Storage);
        assert_eq!(err.op(), Some("copy_script"));
    }

    #[test]
    fn test_regular_file_checks() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("f.sh");
        fs::write(&file, "").unwrap();

        assert!(is_regular_file(&file));
        assert!(!is_regular_file(tmp.path()));
        assert!(!is_regular_file(&tmp.path().join("absent")));
        assert!(same_file(&file, &tmp.path().join(".").join("f.sh")));
    }

    #[test]
    fn test_delete_missing_file_reports_path() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("gone.sh");
        let err = delete_script(&missing).unwrap_err();
        assert_eq!(err.path(), Some(missing.to_string_lossy().as_ref()));
    }
}
