//! # Resolve Command Implementation
//!
//! This module implements the `resolve` subcommand. It loads the override
//! declaration file and prints, for each requested module, where its source
//! comes from:
//!
//! - For modules with an archive, git or local path override, the full
//!   `RepoSpec` and the resolution reason.
//! - For modules with a version override or no override at all, the
//!   registry fallback signal.
//!
//! Without module arguments every declared override is resolved. Output is
//! a JSON (default) or YAML map keyed by module name, written to stdout.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use log::info;

use module_override::declaration;
use module_override::resolution::{self, Resolution};

use super::{DECLARATION_FILE_ENV, DEFAULT_DECLARATION_FILE};

/// Output formats for resolved modules
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Resolve modules against their declared overrides
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Path to the override declaration file (.yaml, .yml or .toml).
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_DECLARATION_FILE, env = DECLARATION_FILE_ENV)]
    pub file: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Modules to resolve. Defaults to every module with a declared override.
    #[arg(value_name = "MODULE")]
    pub modules: Vec<String>,
}

/// Execute the `resolve` command.
pub fn execute(args: ResolveArgs) -> Result<()> {
    let overrides = declaration::load_overrides(&args.file)
        .with_context(|| format!("Failed to load overrides from {}", args.file.display()))?;
    info!(
        "loaded {} override(s) from {}",
        overrides.len(),
        args.file.display()
    );

    let resolved: BTreeMap<String, Resolution> = if args.modules.is_empty() {
        resolution::resolve_all(&overrides)?
    } else {
        args.modules
            .iter()
            .map(|name| -> Result<(String, Resolution)> {
                Ok((name.clone(), resolution::resolve(name, overrides.get(name))?))
            })
            .collect::<Result<_>>()?
    };

    let rendered = render(&resolved, args.format)?;
    println!("{}", rendered.trim_end());
    Ok(())
}

fn render(resolved: &BTreeMap<String, Resolution>, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(resolved)?,
        OutputFormat::Yaml => serde_yaml::to_string(resolved)?,
    })
}
