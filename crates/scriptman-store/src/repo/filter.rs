//! Typed query filters
//!
//! Every value reaches SQLite as a bound parameter; no filter is ever
//! spliced into SQL text.

use rusqlite::types::Value;

/// Selects records for `ScriptRepo::query` and `ScriptRepo::delete_where`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptFilter {
    Id(i64),
    Ids(Vec<i64>),
    Name(String),
    Path(String),
    /// Records whose path no longer exists; evaluated after the SQL read
    Stale,
}

impl ScriptFilter {
    /// True when the filter selects nothing meaningful
    ///
    /// Such a filter must never reach a DELETE: an empty id list or a blank
    /// name is almost always a caller bug rather than an intent.
    pub fn is_empty(&self) -> bool {
        match self {
            ScriptFilter::Id(_) | ScriptFilter::Stale => false,
            ScriptFilter::Ids(ids) => ids.is_empty(),
            ScriptFilter::Name(name) => name.trim().is_empty(),
            ScriptFilter::Path(path) => path.trim().is_empty(),
        }
    }

    /// Short label used in logs and errors
    pub fn label(&self) -> &'static str {
        match self {
            ScriptFilter::Id(_) => "id",
            ScriptFilter::Ids(_) => "ids",
            ScriptFilter::Name(_) => "name",
            ScriptFilter::Path(_) => "path",
            ScriptFilter::Stale => "stale",
        }
    }

    /// SQL `WHERE` clause (with leading space) and its bound values
    ///
    /// `Stale` has no SQL form and yields an empty clause.
    pub(crate) fn where_clause(&self) -> (String, Vec<Value>) {
        match self {
            ScriptFilter::Id(id) => (" WHERE id = ?1".to_string(), vec![Value::Integer(*id)]),
            ScriptFilter::Ids(ids) => {
                let placeholders = (1..=ids.len())
                    .map(|i| format!("?{}", i))
                    .collect::<Vec<_>>()
                    .join(", ");
                (
                    format!(" WHERE id IN ({})", placeholders),
                    ids.iter().map(|id| Value::Integer(*id)).collect(),
                )
            }
            ScriptFilter::Name(name) => (
                " WHERE name = ?1".to_string(),
                vec![Value::Text(name.clone())],
            ),
            ScriptFilter::Path(path) => (
                " WHERE path = ?1".to_string(),
                vec![Value::Text(path.clone())],
            ),
            ScriptFilter::Stale => (String::new(), Vec::new()),
        }
    }
}
