//! scriptman CLI
//!
//! Command-line interface for the personal script registry

use clap::{ArgAction, Parser, Subcommand};
use scriptman_core::config::HOME_ENV_VAR;
use scriptman_core::logging_facility::{self, Profile};
use scriptman_core::{ExError, ExErrorKind, RegistryConfig};
use scriptman_engine::ScriptRegistry;
use std::path::PathBuf;

mod commands;
mod output;

#[derive(Debug, Parser)]
#[command(name = "scriptman", version)]
#[command(about = "scriptman - Personal script registry", long_about = None)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
struct Cli {
    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,

    /// Managed directory holding copied scripts and the registry database
    #[arg(long, global = true, env = HOME_ENV_VAR)]
    home: Option<PathBuf>,

    /// Debug-level logging on stderr
    #[arg(long, global = true, conflicts_with = "log_json")]
    verbose: bool,

    /// JSON structured logging on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List all registered scripts
    #[command(short_flag = 'l', visible_alias = "ls")]
    List(commands::list::ListArgs),
    /// Register a script
    Add(commands::add::AddArgs),
    /// Remove a script by name
    #[command(visible_alias = "remove")]
    Rm(commands::remove::RemoveArgs),
    /// Remove every script whose file no longer exists
    Autoremove,
    /// Run a registered script through `sh`
    Run(commands::run::RunArgs),
}

/// Process exit status for a failed command
fn exit_code(err: &ExError) -> i32 {
    match err.kind() {
        ExErrorKind::InvalidArgument => 2,
        ExErrorKind::NotFound => 3,
        ExErrorKind::DuplicateScript => 4,
        ExErrorKind::StaleRegistration => 5,
        ExErrorKind::Storage => 6,
        ExErrorKind::Internal => 1,
    }
}

fn main() {
    let cli = Cli::parse();

    logging_facility::init(if cli.log_json {
        Profile::Production
    } else if cli.verbose {
        Profile::Development
    } else {
        Profile::Interactive
    });

    let result = RegistryConfig::resolve(cli.home)
        .map_err(ExError::from)
        .and_then(|config| {
            let registry = ScriptRegistry::new(config);
            match cli.command {
                Commands::List(args) => commands::list::execute(&registry, args).map(|_| 0),
                Commands::Add(args) => commands::add::execute(&registry, args).map(|_| 0),
                Commands::Rm(args) => commands::remove::execute(&registry, args).map(|_| 0),
                Commands::Autoremove => commands::autoremove::execute(&registry).map(|_| 0),
                Commands::Run(args) => commands::run::execute(&registry, args),
            }
        });

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            output::print_error(&e);
            std::process::exit(exit_code(&e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_short_flag_and_alias() {
        for argv in [["scriptman", "-l"], ["scriptman", "ls"], ["scriptman", "list"]] {
            let cli = Cli::try_parse_from(argv).unwrap();
            assert!(matches!(cli.command, Commands::List(_)));
        }
    }

    #[test]
    fn test_run_forwards_hyphenated_args() {
        let cli = Cli::try_parse_from(["scriptman", "run", "build", "--release", "-j", "4"]).unwrap();
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.name, "build");
                assert_eq!(args.args, vec!["--release", "-j", "4"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_exit_codes_are_distinct_per_kind() {
        let kinds = [
            ExErrorKind::InvalidArgument,
            ExErrorKind::NotFound,
            ExErrorKind::DuplicateScript,
            ExErrorKind::StaleRegistration,
            ExErrorKind::Storage,
        ];
        let mut codes: Vec<i32> = kinds.iter().map(|k| exit_code(&ExError::new(*k))).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes, vec![2, 3, 4, 5, 6]);
    }
}
