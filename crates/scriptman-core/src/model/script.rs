use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// ScriptRecord - one registered script
///
/// Records are created by the store, which assigns `id` and `registered_at`.
/// Both are immutable afterwards. `name` and `path` are unique across the
/// registry; the store does not enforce this, the registration rules do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptRecord {
    /// Store-assigned identifier, never reused after deletion
    pub id: i64,

    /// Registered name, by default the file name without its extension
    pub name: String,

    /// Path to the script file, exactly as registered
    pub path: String,

    /// Free-form description, may be empty
    pub info: String,

    /// Registration time (millisecond precision)
    pub registered_at: DateTime<Utc>,
}

impl ScriptRecord {
    /// The stored path as a filesystem path
    pub fn script_path(&self) -> &Path {
        Path::new(&self.path)
    }

    /// Check whether the backing file is gone
    ///
    /// Staleness is never persisted; it is recomputed on every call.
    pub fn is_stale(&self) -> bool {
        !self.script_path().exists()
    }
}

/// A record paired with its staleness at listing time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListedScript {
    #[serde(flatten)]
    pub record: ScriptRecord,
    pub stale: bool,
}

impl ListedScript {
    /// Pair a record with a freshly computed staleness flag
    pub fn observe(record: ScriptRecord) -> Self {
        let stale = record.is_stale();
        Self { record, stale }
    }
}
