//! scriptman Store - SQLite persistence for the script registry
//!
//! Provides:
//! - Connection opening and idempotent initialization (`db`)
//! - Embedded, checksummed schema migrations
//! - `ScriptRepo`: insert, typed-filter query, and guarded delete

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::{ScriptFilter, ScriptRepo};
