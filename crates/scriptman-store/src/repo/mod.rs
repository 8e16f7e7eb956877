//! Repository layer for persisting script records to SQLite

pub mod filter;
pub mod script_repo;

pub use filter::ScriptFilter;
pub use script_repo::ScriptRepo;
