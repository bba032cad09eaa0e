//! # Override Resolution
//!
//! Given a module and the override it declared (if any), decide where the
//! module's source comes from:
//!
//! - A **non-registry override** yields its `RepoSpec` together with the
//!   reason it was chosen.
//! - A **registry override**, or no override at all, yields a signal telling
//!   the graph resolver to select a registry version. The signal carries the
//!   reason and, when one was declared, the registry to use.
//!
//! Resolution is pure: it reads only the override value and allocates only
//! its own result. `resolve_all` relies on that to resolve modules in
//! parallel with `rayon`.

use std::collections::BTreeMap;
use std::fmt;

use log::debug;
use rayon::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::overrides::{ModuleOverride, OverrideCapability};
use crate::repo_spec::RepoSpec;
use crate::validation;

/// Why a module resolved to the source it did. Diagnostic only; never
/// affects fetching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolutionReason {
    /// Regular registry resolution, no override involved.
    Registry,
    SingleVersionOverride,
    MultipleVersionOverride,
    ArchiveOverride,
    GitOverride,
    LocalPathOverride,
}

impl ResolutionReason {
    pub const ALL: [ResolutionReason; 6] = [
        ResolutionReason::Registry,
        ResolutionReason::SingleVersionOverride,
        ResolutionReason::MultipleVersionOverride,
        ResolutionReason::ArchiveOverride,
        ResolutionReason::GitOverride,
        ResolutionReason::LocalPathOverride,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResolutionReason::Registry => "REGISTRY",
            ResolutionReason::SingleVersionOverride => "SINGLE_VERSION_OVERRIDE",
            ResolutionReason::MultipleVersionOverride => "MULTIPLE_VERSION_OVERRIDE",
            ResolutionReason::ArchiveOverride => "ARCHIVE_OVERRIDE",
            ResolutionReason::GitOverride => "GIT_OVERRIDE",
            ResolutionReason::LocalPathOverride => "LOCAL_PATH_OVERRIDE",
        }
    }

    /// True when the module's source bypasses the registry.
    pub fn is_non_registry(self) -> bool {
        matches!(
            self,
            ResolutionReason::ArchiveOverride
                | ResolutionReason::GitOverride
                | ResolutionReason::LocalPathOverride
        )
    }
}

impl fmt::Display for ResolutionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The effective source of one module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum Resolution {
    /// Fetch the module as described by `repo_spec`.
    Override {
        repo_spec: RepoSpec,
        reason: ResolutionReason,
    },
    /// Resolve the module from a registry.
    Registry {
        reason: ResolutionReason,
        #[serde(skip_serializing_if = "Option::is_none")]
        registry: Option<String>,
    },
}

impl Resolution {
    pub fn reason(&self) -> ResolutionReason {
        match self {
            Resolution::Override { reason, .. } | Resolution::Registry { reason, .. } => *reason,
        }
    }

    pub fn repo_spec(&self) -> Option<&RepoSpec> {
        match self {
            Resolution::Override { repo_spec, .. } => Some(repo_spec),
            Resolution::Registry { .. } => None,
        }
    }
}

/// Resolves the source of `module_name` given its declared override.
///
/// The module name doubles as the name of the repository the `RepoSpec`
/// describes. Validation errors come back annotated with the module name.
pub fn resolve(module_name: &str, declared: Option<&ModuleOverride>) -> Result<Resolution> {
    validation::module_name(module_name).map_err(|e| e.for_module(module_name))?;

    let Some(declared) = declared else {
        debug!("{}: no override, falling back to registry", module_name);
        return Ok(Resolution::Registry {
            reason: ResolutionReason::Registry,
            registry: None,
        });
    };

    let resolution = match declared.capability() {
        OverrideCapability::NonRegistry(o) => Resolution::Override {
            repo_spec: o
                .repo_spec(module_name)
                .map_err(|e| e.for_module(module_name))?,
            reason: o.resolution_reason(),
        },
        OverrideCapability::Registry(o) => Resolution::Registry {
            reason: o.resolution_reason(),
            registry: o.registry().map(str::to_string),
        },
    };

    debug!(
        "{}: {} override resolved ({})",
        module_name,
        declared.kind(),
        resolution.reason()
    );
    Ok(resolution)
}

/// Resolves every module in `overrides` in parallel.
///
/// Results are keyed by module name. If several modules fail, which error
/// is reported is unspecified.
pub fn resolve_all(
    overrides: &BTreeMap<String, ModuleOverride>,
) -> Result<BTreeMap<String, Resolution>> {
    overrides
        .par_iter()
        .map(|(name, declared)| resolve(name, Some(declared)).map(|r| (name.clone(), r)))
        .collect()
}
