//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand, which checks an
//! override declaration file without printing any repository specs.
//!
//! ## Checks
//!
//! - **Shape**: the file parses as a declaration document, with no unknown
//!   override kinds or fields.
//! - **Overrides**: every declaration satisfies its invariants (non-empty
//!   URL lists, well-formed integrity strings, non-negative patch strip
//!   counts, and so on).
//! - **Specs**: every archive, git and local path override produces a
//!   `RepoSpec` for its module.
//!
//! This command is read-only. It exits non-zero on the first failure.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use module_override::declaration;
use module_override::resolution;

use super::{DECLARATION_FILE_ENV, DEFAULT_DECLARATION_FILE};

/// Validate an override declaration file
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the override declaration file (.yaml, .yml or .toml).
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_DECLARATION_FILE, env = DECLARATION_FILE_ENV)]
    pub file: PathBuf,
}

/// Execute the `validate` command.
pub fn execute(args: ValidateArgs) -> Result<()> {
    println!("Validating overrides: {}", args.file.display());

    let file = match declaration::from_file(&args.file) {
        Ok(file) => file,
        Err(e) => {
            println!("[ERR] Declaration file could not be parsed: {}", e);
            return Err(anyhow::anyhow!("Declaration parsing failed: {}", e));
        }
    };

    let overrides = match file.into_overrides() {
        Ok(overrides) => overrides,
        Err(e) => {
            println!("[ERR] {}", e);
            return Err(anyhow::anyhow!("Override validation failed: {}", e));
        }
    };

    for (name, declared) in &overrides {
        match resolution::resolve(name, Some(declared)) {
            Ok(resolved) => println!("[OK] {} ({}): {}", name, declared.kind(), resolved.reason()),
            Err(e) => {
                println!("[ERR] {}", e);
                return Err(anyhow::anyhow!("Override validation failed: {}", e));
            }
        }
    }

    println!("\nSummary:");
    println!("   Overrides: {}", overrides.len());
    let non_registry = overrides
        .values()
        .filter(|o| o.resolution_reason().is_non_registry())
        .count();
    println!("   Non-registry: {}", non_registry);
    println!("   Registry: {}", overrides.len() - non_registry);
    println!("[OK] Declaration file is valid");
    Ok(())
}
