//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Module Override - Resolve module source overrides into repository specs
#[derive(Parser, Debug)]
#[command(name = "module-override")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve modules against their declared overrides
    Resolve(commands::resolve::ResolveArgs),

    /// Validate an override declaration file
    Validate(commands::validate::ValidateArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        match self.command {
            Commands::Resolve(args) => commands::resolve::execute(args),
            Commands::Validate(args) => commands::validate::execute(args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Logs go to stderr so that command output on stdout stays parseable.
/// `RUST_LOG`, when set, takes precedence over `--log-level`.
fn init_logging(level: &str) {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(level).format_timestamp(None);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    // A logger may already be installed when embedded; keep it.
    let _ = builder.try_init();
}
