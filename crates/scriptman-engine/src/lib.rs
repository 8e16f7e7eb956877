//! scriptman Engine - registry service
//!
//! Coordinates the registration rules in `scriptman-core` with persistence in
//! `scriptman-store` and the filesystem. Each operation opens the database,
//! runs to completion, and releases the connection before returning.

pub mod fs_ops;
pub mod outcomes;
pub mod registry;

pub use outcomes::{AutoRemoveReport, RemoveOutcome, StaleRemovalFailure};
pub use registry::ScriptRegistry;
