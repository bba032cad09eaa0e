//! # CLI Command Implementations
//!
//! Each subcommand of `module-override` lives in its own file with:
//! - An `Args` struct deriving `clap::Args`.
//! - An `execute` function that performs the command by calling into the
//!   `module_override` library.

pub mod completions;
pub mod resolve;
pub mod validate;

/// Default declaration file, relative to the working directory.
pub const DEFAULT_DECLARATION_FILE: &str = "overrides.yaml";

/// Environment variable that overrides the declaration file location.
pub const DECLARATION_FILE_ENV: &str = "MODULE_OVERRIDE_FILE";
