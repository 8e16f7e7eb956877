use std::path::Path;

/// Check whether a registered path lives inside the managed directory
///
/// Only files under the managed directory are owned by the registry; removal
/// deletes them together with their record. The comparison is component-wise
/// and lexical, matching how copied scripts are registered
/// (`<managed_dir>/<file name>`).
pub fn is_inside_managed_dir(path: &Path, managed_dir: &Path) -> bool {
    path != managed_dir && path.starts_with(managed_dir)
}
