use crate::errors::{Result, ScriptManError};
use std::path::Path;

/// Derive a script's registry name from its path
///
/// The name is the final path component with its last extension stripped:
/// `/tmp/build.sh` becomes `build`, `tools/pack.tar.gz` becomes `pack.tar`.
/// Dotfiles keep their full name (`.envrc` stays `.envrc`).
///
/// # Errors
/// * `InvalidArgument` - If the path has no file name component (`/`, `..`)
pub fn derive_script_name(path: &Path) -> Result<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| ScriptManError::InvalidArgument {
            reason: format!("cannot derive a script name from {}", path.display()),
        })
}

/// Final path component including its extension
///
/// # Errors
/// * `InvalidArgument` - If the path has no file name component
pub fn file_name_of(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| ScriptManError::InvalidArgument {
            reason: format!("path has no file name: {}", path.display()),
        })
}
