//! Registry service with boundary logging.
//!
//! `ScriptRegistry` exposes the user-facing operations:
//! - List all scripts with their staleness
//! - Find, add, remove by name
//! - Autoremove stale records
//! - Resolve a name to a runnable path
//!
//! ## Logging Ownership
//!
//! Each public operation owns its lifecycle events:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! The store, rules and filesystem helpers use only `tracing::debug!()`.

#![allow(clippy::result_large_err)]

use crate::fs_ops;
use crate::outcomes::{AutoRemoveReport, RemoveOutcome, StaleRemovalFailure};
use rusqlite::Connection;
use scriptman_core::rules::{detect_duplicate, file_name_of, is_inside_managed_dir};
use scriptman_core::{
    log_op_end, log_op_error, log_op_start, ListedScript, RegistryConfig, ScriptManError,
    ScriptRecord,
};
use scriptman_store::errors::{io_error, Result};
use scriptman_store::{db, ScriptFilter, ScriptRepo};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// The script registry
///
/// Holds only the configuration; the database is opened per operation and
/// closed when the operation returns, on success and error alike.
#[derive(Debug, Clone)]
pub struct ScriptRegistry {
    config: RegistryConfig,
}

impl ScriptRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Open the registry database, creating the managed directory and schema
    /// on first use
    fn open(&self) -> Result<Connection> {
        self.config
            .ensure_dirs()
            .map_err(|e| io_error("create_managed_dir", self.config.managed_dir(), e))?;
        db::initialize(self.config.db_path())
    }

    /// True when `path` names the registry database file
    ///
    /// The database shares the managed directory with copied scripts but is
    /// never a script: it cannot be registered and is not an owned file.
    fn is_registry_database(&self, path: &Path) -> bool {
        let db_path = self.config.db_path();
        path == db_path || fs_ops::same_file(path, db_path)
    }

    /// List every record with its staleness, ordered by id
    ///
    /// ## Errors
    ///
    /// - `Storage`: the database could not be opened or read
    pub fn list_all(&self) -> Result<Vec<ListedScript>> {
        log_op_start!("script_list");
        let start = Instant::now();

        let listed = self.list_all_impl().map_err(|e| {
            log_op_error!(
                "script_list",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "script_list",
            duration_ms = start.elapsed().as_millis() as u64,
            script_count = listed.len() as u64
        );
        Ok(listed)
    }

    fn list_all_impl(&self) -> Result<Vec<ListedScript>> {
        let conn = self.open()?;
        let records = ScriptRepo::query(&conn, None)?;
        Ok(records.into_iter().map(ListedScript::observe).collect())
    }

    /// Exact-name lookup
    ///
    /// An empty name finds nothing.
    ///
    /// ## Errors
    ///
    /// - `Storage`: the database could not be opened or read
    pub fn find(&self, name: &str) -> Result<Option<ScriptRecord>> {
        if name.is_empty() {
            return Ok(None);
        }
        let conn = self.open()?;
        ScriptRepo::find_by_name(&conn, name)
    }

    /// Register a script
    ///
    /// ## Arguments
    ///
    /// - `source_path`: the script file to register
    /// - `info`: free-form description, may be empty
    /// - `copy_into_store`: copy the file into the managed directory and
    ///   register the copy instead of the original
    ///
    /// ## Returns
    ///
    /// The persisted record, including its id and registration time
    ///
    /// ## Errors
    ///
    /// - `InvalidArgument`: `source_path` is not an existing regular file, or
    ///   the registered path would be the registry database
    /// - `DuplicateScript`: path or derived name already registered; carries
    ///   the conflicting record
    /// - `Storage`: copy, database open or insert failed. No record is left
    ///   behind when the copy fails.
    pub fn add(&self, source_path: &Path, info: &str, copy_into_store: bool) -> Result<ScriptRecord> {
        let source_display = source_path.display().to_string();
        log_op_start!(
            "script_add",
            script_path = source_display.as_str(),
            copy = copy_into_store
        );
        let start = Instant::now();

        let record = self
            .add_impl(source_path, info, copy_into_store)
            .map_err(|e| {
                log_op_error!(
                    "script_add",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    script_path = source_display.as_str()
                );
                e
            })?;

        log_op_end!(
            "script_add",
            duration_ms = start.elapsed().as_millis() as u64,
            script_id = record.id,
            script_name = record.name.as_str()
        );
        Ok(record)
    }

    fn add_impl(&self, source_path: &Path, info: &str, copy_into_store: bool) -> Result<ScriptRecord> {
        let source = source_path.to_string_lossy().into_owned();
        if source.trim().is_empty() {
            return Err(ScriptManError::InvalidArgument {
                reason: "script path is empty".to_string(),
            }
            .into());
        }
        if !fs_ops::is_regular_file(source_path) {
            return Err(ScriptManError::ScriptPathMissing { path: source }.into());
        }

        let file_name = file_name_of(source_path)?;
        let candidate_path = if copy_into_store {
            self.config
                .managed_path_for(&file_name)
                .to_string_lossy()
                .into_owned()
        } else {
            source
        };

        let conn = self.open()?;
        if self.is_registry_database(Path::new(&candidate_path)) {
            return Err(ScriptManError::InvalidArgument {
                reason: format!("{} is the registry database", candidate_path),
            }
            .into());
        }

        let existing = ScriptRepo::query(&conn, None)?;
        let name = detect_duplicate(&candidate_path, &existing)?;

        let destination = PathBuf::from(&candidate_path);
        let copied = copy_into_store && !fs_ops::same_file(source_path, &destination);
        if copied {
            fs_ops::copy_script(source_path, &destination)?;
        }

        ScriptRepo::insert(&conn, &name, &candidate_path, info).map_err(|e| {
            if copied {
                if let Err(cleanup) = fs_ops::delete_script(&destination) {
                    tracing::warn!(
                        path = %destination.display(),
                        error = %cleanup,
                        "copied script left behind after failed insert"
                    );
                }
            }
            e
        })
    }

    /// Delete every record whose path no longer exists
    ///
    /// Records are deleted one at a time; a failure on one is recorded in the
    /// report and the pass continues.
    ///
    /// ## Errors
    ///
    /// - `Storage`: the database could not be opened or read
    pub fn auto_remove_stale(&self) -> Result<AutoRemoveReport> {
        log_op_start!("script_autoremove");
        let start = Instant::now();

        let report = self.auto_remove_stale_impl().map_err(|e| {
            log_op_error!(
                "script_autoremove",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "script_autoremove",
            duration_ms = start.elapsed().as_millis() as u64,
            removed_count = report.removed.len() as u64,
            failed_count = report.failed.len() as u64
        );
        Ok(report)
    }

    fn auto_remove_stale_impl(&self) -> Result<AutoRemoveReport> {
        let conn = self.open()?;
        let stale = ScriptRepo::query(&conn, Some(&ScriptFilter::Stale))?;

        let mut report = AutoRemoveReport::default();
        for record in stale {
            match ScriptRepo::delete_where(&conn, &ScriptFilter::Id(record.id)) {
                Ok(_) => report.removed.push(record),
                Err(error) => {
                    tracing::warn!(
                        script_id = record.id,
                        script_name = record.name.as_str(),
                        error = %error,
                        "failed to remove stale script"
                    );
                    report.failed.push(StaleRemovalFailure { record, error });
                }
            }
        }
        Ok(report)
    }

    /// Remove a script by exact name
    ///
    /// When the record's path lies inside the managed directory the file is
    /// deleted as well, unless it is the registry database. A failed file deletion does not restore the record;
    /// it comes back as `RemoveOutcome::file_warning`.
    ///
    /// ## Errors
    ///
    /// - `InvalidArgument`: empty name
    /// - `NotFound`: no record has this name
    /// - `Storage`: the database could not be opened or written
    pub fn remove(&self, name: &str) -> Result<RemoveOutcome> {
        log_op_start!("script_remove", script_name = name);
        let start = Instant::now();

        let outcome = self.remove_impl(name).map_err(|e| {
            log_op_error!(
                "script_remove",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                script_name = name
            );
            e
        })?;

        log_op_end!(
            "script_remove",
            duration_ms = start.elapsed().as_millis() as u64,
            script_id = outcome.record.id,
            owned_file = outcome.owned_file
        );
        Ok(outcome)
    }

    fn remove_impl(&self, name: &str) -> Result<RemoveOutcome> {
        if name.trim().is_empty() {
            return Err(ScriptManError::InvalidArgument {
                reason: "script name is empty".to_string(),
            }
            .into());
        }

        let conn = self.open()?;
        let record = ScriptRepo::find_by_name(&conn, name)?.ok_or_else(|| {
            ScriptManError::ScriptNotFound {
                name: name.to_string(),
            }
        })?;
        ScriptRepo::delete_where(&conn, &ScriptFilter::Id(record.id))?;
        drop(conn);

        let owned_file = is_inside_managed_dir(record.script_path(), self.config.managed_dir())
            && !self.is_registry_database(record.script_path());
        let file_warning = if owned_file && record.script_path().exists() {
            fs_ops::delete_script(record.script_path()).err().map(|e| {
                tracing::warn!(
                    script_name = record.name.as_str(),
                    error = %e,
                    "record removed but managed file could not be deleted"
                );
                e
            })
        } else {
            None
        };

        Ok(RemoveOutcome {
            record,
            owned_file,
            file_warning,
        })
    }

    /// Resolve a name to the path that should be executed
    ///
    /// ## Errors
    ///
    /// - `InvalidArgument`: empty name
    /// - `NotFound`: no record has this name
    /// - `StaleRegistration`: the record exists but its file is missing
    /// - `Storage`: the database could not be opened or read
    pub fn resolve_for_run(&self, name: &str) -> Result<PathBuf> {
        log_op_start!("script_resolve", script_name = name);
        let start = Instant::now();

        let path = self.resolve_for_run_impl(name).map_err(|e| {
            log_op_error!(
                "script_resolve",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                script_name = name
            );
            e
        })?;

        log_op_end!(
            "script_resolve",
            duration_ms = start.elapsed().as_millis() as u64
        );
        Ok(path)
    }

    fn resolve_for_run_impl(&self, name: &str) -> Result<PathBuf> {
        if name.trim().is_empty() {
            return Err(ScriptManError::InvalidArgument {
                reason: "script name is empty".to_string(),
            }
            .into());
        }

        let record = self
            .find(name)?
            .ok_or_else(|| ScriptManError::ScriptNotFound {
                name: name.to_string(),
            })?;

        if record.is_stale() {
            return Err(ScriptManError::StaleRegistration {
                name: record.name,
                path: record.path,
            }
            .into());
        }

        Ok(PathBuf::from(record.path))
    }
}
