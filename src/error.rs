//! # Error Handling
//!
//! This module defines the centralized error type for `module-override`. It
//! uses `thiserror` to build a single `Error` enum whose variants carry enough
//! context to produce an actionable diagnostic.
//!
//! ## Key Components
//!
//! - **`Error`**: All failures the library can report. The override core only
//!   ever raises `Error::Validation`; the remaining variants belong to the
//!   declaration file loader.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Validation errors are raised eagerly, when an override or a `RepoSpec` is
//! constructed. They are never retried: the input is structurally invalid and
//! evaluating it again reproduces the same error.

use thiserror::Error;

/// Main error type for module-override operations
#[derive(Error, Debug)]
pub enum Error {
    /// An override declaration or repository specification violates one of
    /// its invariants.
    ///
    /// `field` names the offending parameter. `module` is filled in once the
    /// caller knows which module the declaration belongs to.
    #[error("Invalid override{}: {field}: {message}", module.as_ref().map(|m| format!(" for module '{}'", m)).unwrap_or_default())]
    Validation {
        module: Option<String>,
        field: String,
        message: String,
    },

    /// A declaration file could not be interpreted.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the declaration
        hint: Option<String>,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A TOML parsing error, wrapped from `toml::de::Error`.
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Builds a validation error for `field` without module context.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Validation {
            module: None,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Attaches the module name to a validation error.
    ///
    /// An already-recorded module name is kept. Other variants pass through
    /// unchanged.
    pub fn for_module(self, name: &str) -> Self {
        match self {
            Error::Validation {
                module: None,
                field,
                message,
            } => Error::Validation {
                module: Some(name.to_string()),
                field,
                message,
            },
            other => other,
        }
    }

    /// Returns true if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
