//! Run command
//!
//! Usage: scriptman run <NAME> [ARGS]...

use clap::Args;
use scriptman_core::{ExError, ExErrorKind};
use scriptman_engine::ScriptRegistry;
use std::process::Command;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Name of the script to run
    pub name: String,

    /// Arguments passed to the script unchanged
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Run the script and return its exit code
pub fn execute(registry: &ScriptRegistry, args: RunArgs) -> Result<i32, ExError> {
    let path = registry.resolve_for_run(&args.name)?;

    tracing::debug!(script_name = args.name.as_str(), path = %path.display(), "spawning sh");
    let status = Command::new("sh")
        .arg(&path)
        .args(&args.args)
        .status()
        .map_err(|e| {
            ExError::new(ExErrorKind::Internal)
                .with_op("run_script")
                .with_name(args.name.as_str())
                .with_path(path.to_string_lossy())
                .with_message(format!("failed to start sh: {}", e))
        })?;

    let code = status.code().unwrap_or(1);
    eprintln!("Exit status: {}", code);
    Ok(code)
}
