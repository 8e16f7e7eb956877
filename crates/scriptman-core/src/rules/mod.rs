//! Registration rules
//!
//! Pure functions over paths and record sets. Nothing in here touches the
//! database; filesystem access is limited to what the rule names say.

pub mod containment;
pub mod duplicates;
pub mod naming;

pub use containment::is_inside_managed_dir;
pub use duplicates::{detect_duplicate, DuplicateReason};
pub use naming::{derive_script_name, file_name_of};
