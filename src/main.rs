//! # Module Override CLI
//!
//! This is the binary entry point for the `module-override` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Initialising logging from the global `--log-level` flag.
//! - Executing the appropriate command and reporting top-level errors.
//!
//! All override logic lives in the library crate; the binary is a thin
//! wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
