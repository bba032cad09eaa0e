//! # Module Override Library
//!
//! This library turns user-declared module source overrides into canonical
//! repository specifications that a fetcher can execute. It sits between
//! the declaration front end and the module graph resolver: it validates
//! each override, then either produces a `RepoSpec` for it or tells the
//! resolver to fall back to the registry.
//!
//! ## Quick Example
//!
//! ```
//! use module_override::overrides::{ArchiveOverride, ArchiveParams, ModuleOverride};
//! use module_override::repo_spec::{attr, FetchMechanism};
//! use module_override::resolution::{resolve, ResolutionReason};
//!
//! let archive = ArchiveOverride::new(ArchiveParams {
//!     urls: vec!["https://example.com/a.tar.gz".to_string()],
//!     integrity: "sha256-abc123=".to_string(),
//!     strip_prefix: "a-1.0/".to_string(),
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! let resolution = resolve("foo", Some(&ModuleOverride::from(archive))).unwrap();
//! assert_eq!(resolution.reason(), ResolutionReason::ArchiveOverride);
//!
//! let spec = resolution.repo_spec().unwrap();
//! assert_eq!(spec.mechanism(), FetchMechanism::Archive);
//! assert_eq!(spec.repo_name(), "foo");
//! assert_eq!(spec.string(attr::STRIP_PREFIX), "a-1.0/");
//! ```
//!
//! ## Core Concepts
//!
//! - **Overrides (`overrides`)**: One immutable value type per override kind
//!   (archive, git, local path, single version, multiple version), validated
//!   when constructed.
//! - **Repository specifications (`repo_spec`, `builders`)**: The canonical,
//!   mechanism-tagged description of how to fetch a repository, and the
//!   per-mechanism config structs that validate and build it.
//! - **Resolution (`resolution`)**: The dispatcher that maps a module and its
//!   override to a `RepoSpec` plus a `ResolutionReason`, or to a registry
//!   fallback.
//! - **Declarations (`declaration`)**: Loading overrides from YAML or TOML
//!   files.
//!
//! Nothing here performs I/O except `declaration::from_file`. Override
//! values and specs are immutable, so independent modules can be resolved
//! concurrently (see `resolution::resolve_all`).

pub mod builders;
pub mod declaration;
pub mod error;
pub mod integrity;
pub mod overrides;
pub mod repo_spec;
pub mod resolution;
pub mod validation;

#[cfg(test)]
mod override_proptest;
