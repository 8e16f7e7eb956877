//! scriptman Core - domain model and rules for the personal script registry
//!
//! This crate provides the pieces every other scriptman crate builds on:
//! - `ScriptRecord` and `ListedScript` models
//! - `RegistryConfig`, the explicit configuration object created at start-up
//! - The canonical error facility (`ExError`) and the domain error enum
//! - Pure registration rules (name derivation, duplicate detection,
//!   managed-directory containment)
//! - The structured logging facility and its boundary macros

pub mod config;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

// Re-export commonly used types
pub use config::RegistryConfig;
pub use errors::{ExError, ExErrorKind, Result, ScriptManError};
pub use model::{ListedScript, ScriptRecord};

// Field and event names used by the boundary macros
pub use scriptman_core_types::schema;
