//! Database connection management
//!
//! Opens, configures and migrates the registry database. Callers hold the
//! returned `Connection` for the length of one operation and drop it.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, io_error, Result};
use crate::migrations::apply_migrations;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// How long a writer waits on a lock held by another process
const BUSY_TIMEOUT: Duration = Duration::from_secs(2);

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Configure a connection for single-writer CLI use
pub fn configure(conn: &Connection) -> Result<()> {
    conn.busy_timeout(BUSY_TIMEOUT).map_err(from_rusqlite)?;
    Ok(())
}

/// Ensure the database at `location` exists with the current schema
///
/// Creates the parent directory when missing, opens the file, configures the
/// connection and applies pending migrations. Safe to call on every start-up.
pub fn initialize<P: AsRef<Path>>(location: P) -> Result<Connection> {
    let location = location.as_ref();
    if let Some(parent) = location.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_error("create_db_dir", parent, e))?;
    }

    let mut conn = open(location)?;
    configure(&conn)?;
    apply_migrations(&mut conn)?;

    tracing::debug!(db_path = %location.display(), "registry database ready");
    Ok(conn)
}
