//! Command-line interface for fix-quotes
//!
//! Takes exactly one file path. Any other argument shape prints the usage line
//! and exits with status 1.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use fix_quotes::{fix_with, FixOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const USAGE_EXIT_CODE: u8 = 1;

/// Replace escaped double quotes (\") with plain ones in a text file
///
/// A path that starts with `-` is taken as the file unless it names one of the
/// flags below. `--help` and `--version` are always handled by clap, so a file
/// literally named `--help` has to be passed as `./--help` or after `--`.
#[derive(Parser)]
#[command(name = "fix-quotes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Text file to rewrite in place
    #[arg(value_name = "FILE_PATH", allow_hyphen_values = true)]
    file_path: PathBuf,

    /// Write to a temporary file first and rename it over the original
    #[arg(long)]
    atomic: bool,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn usage() -> String {
    format!("Usage: {} <file_path>", Cli::command().get_name())
}

pub fn run() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            println!("{}", usage());
            return Ok(ExitCode::from(USAGE_EXIT_CODE));
        }
    };

    init_tracing(cli.verbose);

    let options = FixOptions::new().atomic(cli.atomic);
    let report = fix_with(&cli.file_path, &options)?;
    tracing::info!(
        path = %report.path.display(),
        replacements = report.replacements,
        changed = report.changed(),
        bytes_before = report.bytes_before,
        bytes_after = report.bytes_after,
        "Fix complete"
    );

    println!("Fixed escaped quotes in {}", cli.file_path.display());
    Ok(ExitCode::SUCCESS)
}

fn init_tracing(verbose: bool) {
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_usage_names_the_binary() {
        assert_eq!(usage(), "Usage: fix-quotes <file_path>");
    }

    #[test]
    fn test_parses_single_path() {
        let cli = Cli::try_parse_from(["fix-quotes", "notes.txt"]).expect("parse");
        assert_eq!(cli.file_path, PathBuf::from("notes.txt"));
        assert!(!cli.atomic);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parses_flags() {
        let cli = Cli::try_parse_from(["fix-quotes", "--atomic", "-v", "notes.txt"]).expect("parse");
        assert!(cli.atomic);
        assert!(cli.verbose);
    }

    #[test]
    fn test_parses_dash_prefixed_path() {
        let cli = Cli::try_parse_from(["fix-quotes", "-n.txt"]).expect("parse");
        assert_eq!(cli.file_path, PathBuf::from("-n.txt"));
    }

    #[test]
    fn test_known_flags_still_parse_before_path() {
        let cli = Cli::try_parse_from(["fix-quotes", "--atomic", "-n.txt"]).expect("parse");
        assert!(cli.atomic);
        assert_eq!(cli.file_path, PathBuf::from("-n.txt"));
    }

    #[test]
    fn test_help_flag_is_not_a_path() {
        let err = Cli::try_parse_from(["fix-quotes", "--help"]).err().expect("should fail");
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_rejects_missing_path() {
        let err = Cli::try_parse_from(["fix-quotes"]).err().expect("should fail");
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_rejects_extra_path() {
        assert!(Cli::try_parse_from(["fix-quotes", "a.txt", "b.txt"]).is_err());
    }
}
