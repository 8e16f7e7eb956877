//! Result types returned by registry operations

use scriptman_core::{ExError, ScriptRecord};

/// Outcome of removing a script by name
#[derive(Debug, Clone)]
pub struct RemoveOutcome {
    /// The record that was deleted from the registry
    pub record: ScriptRecord,
    /// Whether the record pointed into the managed directory
    pub owned_file: bool,
    /// Failure to delete the owned file; the record is gone regardless
    pub file_warning: Option<ExError>,
}

/// A stale record that could not be deleted during autoremove
#[derive(Debug, Clone)]
pub struct StaleRemovalFailure {
    pub record: ScriptRecord,
    pub error: ExError,
}

/// Outcome of an autoremove pass
///
/// Each stale record is deleted on its own; one failure does not stop the
/// rest of the pass.
#[derive(Debug, Clone, Default)]
pub struct AutoRemoveReport {
    pub removed: Vec<ScriptRecord>,
    pub failed: Vec<StaleRemovalFailure>,
}

impl AutoRemoveReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
