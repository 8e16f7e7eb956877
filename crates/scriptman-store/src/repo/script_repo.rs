//! SQLite repository implementation
//!
//! Persists ScriptRecords to the `scripts` table

#![allow(clippy::result_large_err)]

use crate::errors::{corrupt_row, empty_filter, from_rusqlite, Result};
use crate::repo::filter::ScriptFilter;
use chrono::{DateTime, Utc};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};
use scriptman_core::ScriptRecord;

/// Raw column values as read from a `scripts` row
struct ScriptRow {
    id: i64,
    name: String,
    path: String,
    info: Option<String>,
    time: Value,
}

/// SQLite repository for script records
pub struct ScriptRepo;

impl ScriptRepo {
    /// Insert a new record
    ///
    /// Assigns the id and the registration time. The time is truncated to
    /// milliseconds before it is stored, so the returned record is identical
    /// to what a later query reads back.
    pub fn insert(conn: &Connection, name: &str, path: &str, info: &str) -> Result<ScriptRecord> {
        let millis = Utc::now().timestamp_millis();
        let registered_at = millis_to_datetime(millis)
            .ok_or_else(|| corrupt_row(0, "clock outside representable range"))?;

        conn.execute(
            "INSERT INTO scripts (name, path, info, time) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![name, path, info, millis],
        )
        .map_err(from_rusqlite)?;

        let record = ScriptRecord {
            id: conn.last_insert_rowid(),
            name: name.to_string(),
            path: path.to_string(),
            info: info.to_string(),
            registered_at,
        };

        tracing::debug!(script_id = record.id, script_name = name, "script row inserted");
        Ok(record)
    }

    /// Query records, ordered by id
    ///
    /// `None` returns every record.
    pub fn query(conn: &Connection, filter: Option<&ScriptFilter>) -> Result<Vec<ScriptRecord>> {
        let (clause, values) = filter.map(ScriptFilter::where_clause).unwrap_or_default();
        let sql = format!(
            "SELECT id, name, path, info, time FROM scripts{} ORDER BY id",
            clause
        );

        let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
        let rows = stmt
            .query_map(params_from_iter(values.iter()), |row| {
                Ok(ScriptRow {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    path: row.get(2)?,
                    info: row.get(3)?,
                    time: row.get(4)?,
                })
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        let mut records = rows
            .into_iter()
            .map(row_to_record)
            .collect::<Result<Vec<_>>>()?;

        if matches!(filter, Some(ScriptFilter::Stale)) {
            records.retain(ScriptRecord::is_stale);
        }

        Ok(records)
    }

    /// Find the record with this exact name
    pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<ScriptRecord>> {
        let mut records = Self::query(conn, Some(&ScriptFilter::Name(name.to_string())))?;
        Ok(if records.is_empty() {
            None
        } else {
            Some(records.swap_remove(0))
        })
    }

    /// Delete every record matching `filter`, returning the number deleted
    ///
    /// # Errors
    /// * `InvalidArgument` - If the filter is empty (blank name or path,
    ///   empty id list). An unscoped delete is never issued.
    pub fn delete_where(conn: &Connection, filter: &ScriptFilter) -> Result<usize> {
        if filter.is_empty() {
            return Err(empty_filter(filter.label()));
        }

        let resolved;
        let effective = match filter {
            ScriptFilter::Stale => {
                let ids: Vec<i64> = Self::query(conn, Some(filter))?
                    .iter()
                    .map(|r| r.id)
                    .collect();
                if ids.is_empty() {
                    return Ok(0);
                }
                resolved = ScriptFilter::Ids(ids);
                &resolved
            }
            other => other,
        };

        let (clause, values) = effective.where_clause();
        let deleted = conn
            .execute(
                &format!("DELETE FROM scripts{}", clause),
                params_from_iter(values.iter()),
            )
            .map_err(from_rusqlite)?;

        tracing::debug!(filter = filter.label(), deleted, "script rows deleted");
        Ok(deleted)
    }
}

fn millis_to_datetime(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

/// Registration times are Unix milliseconds; REAL values are whole seconds
/// with a fraction, as written by older registries.
fn row_to_record(row: ScriptRow) -> Result<ScriptRecord> {
    let registered_at = match row.time {
        Value::Integer(millis) => millis_to_datetime(millis),
        Value::Real(seconds) => millis_to_datetime((seconds * 1000.0).round() as i64),
        _ => None,
    }
    .ok_or_else(|| corrupt_row(row.id, "registration time is not a timestamp"))?;

    Ok(ScriptRecord {
        id: row.id,
        name: row.name,
        path: row.path,
        info: row.info.unwrap_or_default(),
        registered_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations::apply_migrations;

    fn setup() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();
        conn
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let conn = setup();
        let a = ScriptRepo::insert(&conn, "a", "/a.sh", "").unwrap();
        let b = ScriptRepo::insert(&conn, "b", "/b.sh", "").unwrap();
        assert!(b.id > a.id);
    }

    #[test]
    fn test_legacy_real_seconds_are_read() {
        let conn = setup();
        conn.execute(
            "INSERT INTO scripts (name, path, info, time) VALUES ('old', '/old.sh', '', 1700000000.25)",
            [],
        )
        .unwrap();

        let records = ScriptRepo::query(&conn, None).unwrap();
        assert_eq!(records[0].registered_at.timestamp_millis(), 1_700_000_000_250);
    }

    #[test]
    fn test_find_by_name_missing() {
        let conn = setup();
        assert!(ScriptRepo::find_by_name(&conn, "ghost").unwrap().is_none());
    }
}
