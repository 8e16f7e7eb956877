//! Subcommand implementations
//!
//! Each command takes the registry and its parsed arguments and prints its
//! own output; errors go back to `main` for reporting and the exit status.

pub mod add;
pub mod autoremove;
pub mod list;
pub mod remove;
pub mod run;
