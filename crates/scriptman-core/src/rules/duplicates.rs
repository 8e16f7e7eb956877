use crate::errors::{Result, ScriptManError};
use crate::model::ScriptRecord;
use crate::rules::naming::derive_script_name;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Why a candidate registration was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuplicateReason {
    /// Some record already has exactly this path
    PathAlreadyRegistered,
    /// Some record already uses the derived name
    NameInUse,
}

impl fmt::Display for DuplicateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateReason::PathAlreadyRegistered => write!(f, "already registered at this path"),
            DuplicateReason::NameInUse => write!(f, "name already in use"),
        }
    }
}

/// Run duplicate detection for a candidate path
///
/// The path check covers every existing record before any name is compared,
/// so re-adding an identical path always reports `PathAlreadyRegistered`
/// even though its derived name collides too.
///
/// # Returns
/// The derived name to register when there is no conflict
///
/// # Errors
/// * `DuplicateScript` - With the first conflicting record
/// * `InvalidArgument` - If no name can be derived from the candidate path
pub fn detect_duplicate(candidate_path: &str, existing: &[ScriptRecord]) -> Result<String> {
    if let Some(conflict) = existing.iter().find(|r| r.path == candidate_path) {
        return Err(ScriptManError::DuplicateScript {
            reason: DuplicateReason::PathAlreadyRegistered,
            existing: Box::new(conflict.clone()),
        });
    }

    let name = derive_script_name(Path::new(candidate_path))?;

    if let Some(conflict) = existing.iter().find(|r| r.name == name) {
        return Err(ScriptManError::DuplicateScript {
            reason: DuplicateReason::NameInUse,
            existing: Box::new(conflict.clone()),
        });
    }

    tracing::debug!(candidate_path, name = %name, "no duplicate found");
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(id: i64, name: &str, path: &str) -> ScriptRecord {
        ScriptRecord {
            id,
            name: name.to_string(),
            path: path.to_string(),
            info: String::new(),
            registered_at: Utc::now(),
        }
    }

    fn reason_of(result: Result<String>) -> (DuplicateReason, i64) {
        match result {
            Err(ScriptManError::DuplicateScript { reason, existing }) => (reason, existing.id),
            other => panic!("expected DuplicateScript, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_registry_accepts_and_derives_name() {
        assert_eq!(detect_duplicate("/tmp/build.sh", &[]).unwrap(), "build");
    }

    #[test]
    fn test_identical_path_reports_path_conflict() {
        let existing = vec![record(1, "build", "/tmp/build.sh")];
        assert_eq!(
            reason_of(detect_duplicate("/tmp/build.sh", &existing)),
            (DuplicateReason::PathAlreadyRegistered, 1)
        );
    }

    #[test]
    fn test_path_check_runs_before_any_name_check() {
        // record 1 collides on name only, record 2 on path only
        let existing = vec![
            record(1, "build", "/opt/build.py"),
            record(2, "renamed", "/tmp/build.sh"),
        ];
        assert_eq!(
            reason_of(detect_duplicate("/tmp/build.sh", &existing)),
            (DuplicateReason::PathAlreadyRegistered, 2)
        );
    }

    #[test]
    fn test_name_collision_from_different_path() {
        let existing = vec![record(4, "build", "/tmp/build.sh")];
        assert_eq!(
            reason_of(detect_duplicate("/home/u/build.py", &existing)),
            (DuplicateReason::NameInUse, 4)
        );
    }

    #[test]
    fn test_reason_texts() {
        assert_eq!(
            DuplicateReason::PathAlreadyRegistered.to_string(),
            "already registered at this path"
        );
        assert_eq!(DuplicateReason::NameInUse.to_string(), "name already in use");
    }
}
