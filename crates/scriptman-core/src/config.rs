//! Registry configuration
//!
//! A `RegistryConfig` is built once at process start and handed to the
//! registry service. Nothing reads the managed directory or database location
//! from global state.

use crate::errors::{Result, ScriptManError};
use std::path::{Path, PathBuf};

/// Directory name under the user's home used when nothing overrides it
pub const DEFAULT_DIR_NAME: &str = ".scripts-man";

/// Database file name inside the managed directory
pub const DB_FILE_NAME: &str = ".scripts";

/// Environment variable that overrides the managed directory
pub const HOME_ENV_VAR: &str = "SCRIPTMAN_HOME";

/// Locations used by the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    managed_dir: PathBuf,
    db_path: PathBuf,
}

impl RegistryConfig {
    /// Use `managed_dir` for copied scripts and the database
    pub fn with_managed_dir(managed_dir: impl Into<PathBuf>) -> Self {
        let managed_dir = managed_dir.into();
        let db_path = managed_dir.join(DB_FILE_NAME);
        Self {
            managed_dir,
            db_path,
        }
    }

    /// Resolve the configuration from an optional override
    ///
    /// The override (CLI flag or `SCRIPTMAN_HOME`) wins; otherwise the managed
    /// directory is `~/.scripts-man`.
    ///
    /// # Errors
    /// * `InvalidArgument` - If no override is given and the home directory
    ///   cannot be determined
    pub fn resolve(managed_dir: Option<PathBuf>) -> Result<Self> {
        match managed_dir {
            Some(dir) => Ok(Self::with_managed_dir(dir)),
            None => {
                let home = dirs::home_dir().ok_or_else(|| ScriptManError::InvalidArgument {
                    reason: format!(
                        "cannot determine home directory; set {} or pass --home",
                        HOME_ENV_VAR
                    ),
                })?;
                Ok(Self::with_managed_dir(home.join(DEFAULT_DIR_NAME)))
            }
        }
    }

    pub fn managed_dir(&self) -> &Path {
        &self.managed_dir
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Destination of a script copied into the managed directory
    pub fn managed_path_for(&self, file_name: &str) -> PathBuf {
        self.managed_dir.join(file_name)
    }

    /// Create the managed directory if it does not exist
    ///
    /// # Errors
    /// Returns the underlying I/O error
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.managed_dir)
    }
}
