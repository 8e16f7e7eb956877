//! Core types shared across scriptman facilities
//!
//! Holds the canonical field keys and event names used by the structured
//! logging facility and by anything that asserts on emitted events.

pub mod schema;
