//! # formcheck CLI entry point
//!
//! Parses command-line arguments, installs logging and dispatches to the
//! subcommand handlers.
//!
//! Exit codes: `0` valid, `1` invalid data or unknown rules, `2` bad input
//! or configuration.

mod check;
mod config;
mod load;
mod logging;
mod render;
mod rules;
mod validate;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};

use crate::check::CheckArgs;
use crate::validate::ValidateArgs;

/// Exit code for configuration and input errors.
const EXIT_ERROR: u8 = 2;

/// Validate field values against a declarative rule schema.
#[derive(Parser, Debug)]
#[command(name = "formcheck", version, about, long_about = None)]
struct Cli {
    /// More log output. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Configuration file (default: ./formcheck.toml when present).
    #[arg(long, global = true, env = "FORMCHECK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a values file against a schema file.
    Validate(ValidateArgs),

    /// Report rule names in a schema that resolve to no rule.
    Check(CheckArgs),

    /// List the built-in rules and their default messages.
    Rules,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let verbosity = if cli.quiet { -1 } else { i8::try_from(cli.verbose).unwrap_or(i8::MAX) };
    if let Err(e) = logging::init(verbosity) {
        eprintln!("error: {e:#}");
        return ExitCode::from(EXIT_ERROR);
    }

    let result = match cli.command {
        Commands::Validate(args) => validate::run(&args, cli.config.as_deref()).await,
        Commands::Check(args) => check::run(&args),
        Commands::Rules => rules::run(),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_validate() {
        let cli = Cli::try_parse_from([
            "formcheck",
            "validate",
            "--schema",
            "schema.json",
            "--values",
            "values.yaml",
            "--locale",
            "de",
            "--message",
            "required=Needed",
            "--locale-file",
            "de=de.toml",
        ])
        .unwrap();
        let Commands::Validate(args) = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(args.schema, PathBuf::from("schema.json"));
        assert_eq!(args.locale.as_deref(), Some("de"));
        assert_eq!(args.messages, [("required".to_owned(), "Needed".to_owned())]);
        assert_eq!(args.locale_files, [("de".to_owned(), PathBuf::from("de.toml"))]);
        assert!(!args.no_extend);
    }

    #[test]
    fn parse_rejects_malformed_pairs() {
        let err = Cli::try_parse_from([
            "formcheck",
            "validate",
            "--schema",
            "s.json",
            "--values",
            "v.json",
            "--message",
            "no-equals-sign",
        ])
        .unwrap_err();
        assert!(err.to_string().contains("KEY=VALUE"));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["formcheck", "-q", "-v", "rules"]).is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
