//! Structured logging facility for scriptman
//!
//! - Single initialization point via `init(profile)`
//! - Boundary macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use scriptman_core::logging_facility::{init, Profile};
//!
//! init(Profile::Interactive);
//! ```
//!
//! Registry service operations own the boundary events. Lower layers log
//! details with `tracing::debug!` only.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
