//! # Module Overrides
//!
//! An override replaces registry-based resolution of a module with
//! something the user declared. There are five kinds:
//!
//! - **Non-registry overrides** bypass the registry entirely and produce a
//!   `RepoSpec`: `ArchiveOverride`, `GitOverride` and `LocalPathOverride`.
//!   They implement [`NonRegistryOverride`].
//! - **Registry overrides** only constrain which registry version is
//!   eligible: `SingleVersionOverride` and `MultipleVersionOverride`. They
//!   implement [`RegistryOverride`] and are consumed by the graph resolver.
//!
//! Every override is built from a `*Params` struct (the shape used by
//! declaration files) and validated in `new`, so an invalid declaration is
//! rejected when it is evaluated rather than during resolution. Once built,
//! an override is immutable and compares structurally.

use serde::Deserialize;

use crate::builders::{ArchiveRepoSpecConfig, GitRepoSpecConfig, LocalPathRepoSpecConfig};
use crate::error::Result;
use crate::integrity;
use crate::repo_spec::RepoSpec;
use crate::resolution::ResolutionReason;
use crate::validation;

/// Capability of overrides that bypass the registry.
pub trait NonRegistryOverride: Send + Sync {
    /// Produces the fetch specification for the repository `repo_name`.
    ///
    /// The override's own parameters were validated at construction; only
    /// `repo_name` can make this fail.
    fn repo_spec(&self, repo_name: &str) -> Result<RepoSpec>;

    fn resolution_reason(&self) -> ResolutionReason;
}

/// Capability of overrides that constrain registry resolution.
pub trait RegistryOverride: Send + Sync {
    fn resolution_reason(&self) -> ResolutionReason;

    /// The registry to resolve from, if not the default one.
    fn registry(&self) -> Option<&str>;
}

fn optional(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

// ============================================================================
// Archive override
// ============================================================================

/// Declared parameters of an archive override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArchiveParams {
    pub urls: Vec<String>,
    pub patches: Vec<String>,
    pub patch_cmds: Vec<String>,
    pub integrity: String,
    pub strip_prefix: String,
    pub patch_strip: i64,
}

/// Fetch the module from an archive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArchiveOverride {
    urls: Vec<String>,
    patches: Vec<String>,
    patch_cmds: Vec<String>,
    integrity: String,
    strip_prefix: String,
    patch_strip: i64,
}

impl ArchiveOverride {
    pub fn new(params: ArchiveParams) -> Result<Self> {
        validation::archive_urls(&params.urls)?;
        integrity::validate(&params.integrity)?;
        validation::patches(&params.patches)?;
        validation::patch_cmds(&params.patch_cmds)?;
        let patch_strip = validation::patch_strip(params.patch_strip)?;

        if params.integrity.is_empty() {
            log::warn!(
                "archive override for {} has no integrity; the download will not be verified",
                params.urls[0]
            );
        }

        Ok(Self {
            urls: params.urls,
            patches: params.patches,
            patch_cmds: params.patch_cmds,
            integrity: params.integrity,
            strip_prefix: params.strip_prefix,
            patch_strip,
        })
    }

    /// HTTP(S) or file URLs pointing at the archive.
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Patch labels applied after extraction.
    pub fn patches(&self) -> &[String] {
        &self.patches
    }

    /// Shell commands applied after the label patches.
    pub fn patch_cmds(&self) -> &[String] {
        &self.patch_cmds
    }

    pub fn integrity(&self) -> &str {
        &self.integrity
    }

    pub fn strip_prefix(&self) -> &str {
        &self.strip_prefix
    }

    pub fn patch_strip(&self) -> i64 {
        self.patch_strip
    }
}

impl NonRegistryOverride for ArchiveOverride {
    fn repo_spec(&self, repo_name: &str) -> Result<RepoSpec> {
        ArchiveRepoSpecConfig {
            repo_name: repo_name.to_string(),
            urls: self.urls.clone(),
            integrity: self.integrity.clone(),
            strip_prefix: self.strip_prefix.clone(),
            patches: self.patches.clone(),
            patch_cmds: self.patch_cmds.clone(),
            patch_strip: self.patch_strip,
        }
        .build()
    }

    fn resolution_reason(&self) -> ResolutionReason {
        ResolutionReason::ArchiveOverride
    }
}

// ============================================================================
// Git override
// ============================================================================

/// Declared parameters of a git override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitParams {
    pub remote: String,
    pub commit: String,
    pub patches: Vec<String>,
    pub patch_cmds: Vec<String>,
    pub patch_strip: i64,
    pub init_submodules: bool,
    pub strip_prefix: String,
}

/// Check the module out of a git remote at a fixed commit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GitOverride {
    remote: String,
    commit: String,
    patches: Vec<String>,
    patch_cmds: Vec<String>,
    patch_strip: i64,
    init_submodules: bool,
    strip_prefix: String,
}

impl GitOverride {
    pub fn new(params: GitParams) -> Result<Self> {
        validation::git_remote(&params.remote)?;
        validation::non_blank("commit", &params.commit)?;
        validation::patches(&params.patches)?;
        validation::patch_cmds(&params.patch_cmds)?;
        let patch_strip = validation::patch_strip(params.patch_strip)?;

        Ok(Self {
            remote: params.remote,
            commit: params.commit,
            patches: params.patches,
            patch_cmds: params.patch_cmds,
            patch_strip,
            init_submodules: params.init_submodules,
            strip_prefix: params.strip_prefix,
        })
    }

    pub fn remote(&self) -> &str {
        &self.remote
    }

    pub fn commit(&self) -> &str {
        &self.commit
    }

    pub fn patches(&self) -> &[String] {
        &self.patches
    }

    pub fn patch_cmds(&self) -> &[String] {
        &self.patch_cmds
    }

    pub fn patch_strip(&self) -> i64 {
        self.patch_strip
    }

    pub fn init_submodules(&self) -> bool {
        self.init_submodules
    }

    pub fn strip_prefix(&self) -> &str {
        &self.strip_prefix
    }
}

impl NonRegistryOverride for GitOverride {
    fn repo_spec(&self, repo_name: &str) -> Result<RepoSpec> {
        GitRepoSpecConfig {
            repo_name: repo_name.to_string(),
            remote: self.remote.clone(),
            commit: self.commit.clone(),
            strip_prefix: self.strip_prefix.clone(),
            patches: self.patches.clone(),
            patch_cmds: self.patch_cmds.clone(),
            patch_strip: self.patch_strip,
            init_submodules: self.init_submodules,
        }
        .build()
    }

    fn resolution_reason(&self) -> ResolutionReason {
        ResolutionReason::GitOverride
    }
}

// ============================================================================
// Local path override
// ============================================================================

/// Declared parameters of a local path override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocalPathParams {
    pub path: String,
}

/// Use a local directory as the module's source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalPathOverride {
    path: String,
}

impl LocalPathOverride {
    pub fn new(params: LocalPathParams) -> Result<Self> {
        validation::non_blank("path", &params.path)?;
        Ok(Self { path: params.path })
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl NonRegistryOverride for LocalPathOverride {
    fn repo_spec(&self, repo_name: &str) -> Result<RepoSpec> {
        LocalPathRepoSpecConfig {
            repo_name: repo_name.to_string(),
            path: self.path.clone(),
        }
        .build()
    }

    fn resolution_reason(&self) -> ResolutionReason {
        ResolutionReason::LocalPathOverride
    }
}

// ============================================================================
// Single version override
// ============================================================================

/// Declared parameters of a single version override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SingleVersionParams {
    /// Empty means the version is not pinned.
    pub version: String,
    pub registry: String,
    pub patches: Vec<String>,
    pub patch_cmds: Vec<String>,
    pub patch_strip: i64,
}

/// Pin the module to one registry version and optionally patch it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SingleVersionOverride {
    version: String,
    registry: String,
    patches: Vec<String>,
    patch_cmds: Vec<String>,
    patch_strip: i64,
}

impl SingleVersionOverride {
    pub fn new(params: SingleVersionParams) -> Result<Self> {
        validation::patches(&params.patches)?;
        validation::patch_cmds(&params.patch_cmds)?;
        let patch_strip = validation::patch_strip(params.patch_strip)?;

        Ok(Self {
            version: params.version,
            registry: params.registry,
            patches: params.patches,
            patch_cmds: params.patch_cmds,
            patch_strip,
        })
    }

    /// The pinned version, if any.
    pub fn version(&self) -> Option<&str> {
        optional(&self.version)
    }

    pub fn patches(&self) -> &[String] {
        &self.patches
    }

    pub fn patch_cmds(&self) -> &[String] {
        &self.patch_cmds
    }

    pub fn patch_strip(&self) -> i64 {
        self.patch_strip
    }
}

impl RegistryOverride for SingleVersionOverride {
    fn resolution_reason(&self) -> ResolutionReason {
        ResolutionReason::SingleVersionOverride
    }

    fn registry(&self) -> Option<&str> {
        optional(&self.registry)
    }
}

// ============================================================================
// Multiple version override
// ============================================================================

/// Declared parameters of a multiple version override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MultipleVersionParams {
    pub versions: Vec<String>,
    pub registry: String,
}

/// Allow several registry versions of the module to coexist.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MultipleVersionOverride {
    versions: Vec<String>,
    registry: String,
}

impl MultipleVersionOverride {
    pub fn new(params: MultipleVersionParams) -> Result<Self> {
        validation::versions(&params.versions)?;
        Ok(Self {
            versions: params.versions,
            registry: params.registry,
        })
    }

    pub fn versions(&self) -> &[String] {
        &self.versions
    }
}

impl RegistryOverride for MultipleVersionOverride {
    fn resolution_reason(&self) -> ResolutionReason {
        ResolutionReason::MultipleVersionOverride
    }

    fn registry(&self) -> Option<&str> {
        optional(&self.registry)
    }
}

// ============================================================================
// Any override
// ============================================================================

/// Any override a module may declare.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModuleOverride {
    Archive(ArchiveOverride),
    Git(GitOverride),
    LocalPath(LocalPathOverride),
    SingleVersion(SingleVersionOverride),
    MultipleVersion(MultipleVersionOverride),
}

/// The capability an override exposes to the dispatcher.
pub enum OverrideCapability<'a> {
    NonRegistry(&'a dyn NonRegistryOverride),
    Registry(&'a dyn RegistryOverride),
}

impl ModuleOverride {
    pub fn capability(&self) -> OverrideCapability<'_> {
        match self {
            ModuleOverride::Archive(o) => OverrideCapability::NonRegistry(o),
            ModuleOverride::Git(o) => OverrideCapability::NonRegistry(o),
            ModuleOverride::LocalPath(o) => OverrideCapability::NonRegistry(o),
            ModuleOverride::SingleVersion(o) => OverrideCapability::Registry(o),
            ModuleOverride::MultipleVersion(o) => OverrideCapability::Registry(o),
        }
    }

    /// Short name of the override kind, as used in declaration files.
    pub fn kind(&self) -> &'static str {
        match self {
            ModuleOverride::Archive(_) => "archive",
            ModuleOverride::Git(_) => "git",
            ModuleOverride::LocalPath(_) => "local_path",
            ModuleOverride::SingleVersion(_) => "single_version",
            ModuleOverride::MultipleVersion(_) => "multiple_version",
        }
    }

    pub fn resolution_reason(&self) -> ResolutionReason {
        match self.capability() {
            OverrideCapability::NonRegistry(o) => o.resolution_reason(),
            OverrideCapability::Registry(o) => o.resolution_reason(),
        }
    }
}

impl From<ArchiveOverride> for ModuleOverride {
    fn from(value: ArchiveOverride) -> Self {
        ModuleOverride::Archive(value)
    }
}

impl From<GitOverride> for ModuleOverride {
    fn from(value: GitOverride) -> Self {
        ModuleOverride::Git(value)
    }
}

impl From<LocalPathOverride> for ModuleOverride {
    fn from(value: LocalPathOverride) -> Self {
        ModuleOverride::LocalPath(value)
    }
}

impl From<SingleVersionOverride> for ModuleOverride {
    fn from(value: SingleVersionOverride) -> Self {
        ModuleOverride::SingleVersion(value)
    }
}

impl From<MultipleVersionOverride> for ModuleOverride {
    fn from(value: MultipleVersionOverride) -> Self {
        ModuleOverride::MultipleVersion(value)
    }
}
