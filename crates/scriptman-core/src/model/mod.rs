//! Registry data model

pub mod script;

pub use script::{ListedScript, ScriptRecord};
