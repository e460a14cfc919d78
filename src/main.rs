//! fix-quotes: replace escaped double quotes in a file, in place
//!
//! Usage: `fix-quotes <file_path>`

use anyhow::Result;
use std::process::ExitCode;

mod cli;

fn main() -> Result<ExitCode> {
    cli::run()
}
