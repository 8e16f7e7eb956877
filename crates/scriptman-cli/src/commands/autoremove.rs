//! Autoremove command
//!
//! Usage: scriptman autoremove

use crate::output;
use scriptman_core::{ExError, ListedScript};
use scriptman_engine::ScriptRegistry;

pub fn execute(registry: &ScriptRegistry) -> Result<(), ExError> {
    let report = registry.auto_remove_stale()?;

    if report.removed.is_empty() && report.failed.is_empty() {
        println!("No scripts to remove");
        return Ok(());
    }

    if !report.removed.is_empty() {
        let removed: Vec<ListedScript> = report
            .removed
            .iter()
            .cloned()
            .map(ListedScript::observe)
            .collect();
        output::print_table(&removed);
        println!("Removed {} script(s)", removed.len());
    }

    for failure in &report.failed {
        eprintln!(
            "Warning: could not remove {}: {}",
            failure.record.name, failure.error
        );
    }
    Ok(())
}
