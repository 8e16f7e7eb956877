//! List command
//!
//! Usage: scriptman list [--json] [--stale]

use crate::output;
use clap::Args;
use scriptman_core::ExError;
use scriptman_engine::ScriptRegistry;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print the entries as JSON
    #[arg(long)]
    pub json: bool,

    /// Only show scripts whose file is missing
    #[arg(long)]
    pub stale: bool,
}

pub fn execute(registry: &ScriptRegistry, args: ListArgs) -> Result<(), ExError> {
    let mut listed = registry.list_all()?;
    if args.stale {
        listed.retain(|entry| entry.stale);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&listed)?);
    } else {
        output::print_table(&listed);
    }
    Ok(())
}
