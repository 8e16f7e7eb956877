//! Add command
//!
//! Usage: scriptman add [--cp] [--info <TEXT>] <PATH>

use crate::output;
use clap::Args;
use scriptman_core::{ExError, ListedScript};
use scriptman_engine::ScriptRegistry;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Script file to register
    pub path: PathBuf,

    /// Copy the file into the managed directory and register the copy
    #[arg(long)]
    pub cp: bool,

    /// Free-form description stored with the script
    #[arg(long, default_value = "")]
    pub info: String,
}

pub fn execute(registry: &ScriptRegistry, args: AddArgs) -> Result<(), ExError> {
    let record = registry.add(&args.path, &args.info, args.cp)?;
    output::print_table(&[ListedScript::observe(record)]);
    println!("Script added");
    Ok(())
}
