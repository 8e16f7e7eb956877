//! Remove command
//!
//! Usage: scriptman rm <NAME>

use clap::Args;
use scriptman_core::ExError;
use scriptman_engine::ScriptRegistry;

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Name of the script to remove
    pub name: String,
}

pub fn execute(registry: &ScriptRegistry, args: RemoveArgs) -> Result<(), ExError> {
    let outcome = registry.remove(&args.name)?;

    if let Some(warning) = &outcome.file_warning {
        eprintln!(
            "Warning: record removed but {} could not be deleted: {}",
            outcome.record.path, warning
        );
    } else if outcome.owned_file {
        println!("Deleted {}", outcome.record.path);
    }
    println!("Removed {}", outcome.record.name);
    Ok(())
}
