//! # RepoSpec Builders
//!
//! One configuration struct per fetch mechanism. Each struct has named,
//! typed fields and a `Default` for every optional one, so callers fill in
//! only what they hold. `build()` runs the mechanism's validation in one
//! place and then assembles the `RepoSpec`.
//!
//! ## Defaults
//!
//! | field          | default |
//! |----------------|---------|
//! | `integrity`    | `""` (no verification) |
//! | `strip_prefix` | `""`    |
//! | `patches`      | `[]`    |
//! | `patch_cmds`   | `[]`    |
//! | `patch_strip`  | `0`     |
//!
//! Every attribute is always present in the produced spec, even when it
//! holds its default, so equal configs yield identical specs.

use std::collections::BTreeMap;

use log::trace;

use crate::error::Result;
use crate::integrity;
use crate::repo_spec::{attr, AttrValue, FetchMechanism, RepoSpec};
use crate::validation;

/// Parameters for an archive-backed repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveRepoSpecConfig {
    pub repo_name: String,
    /// Mirrors of the same archive, tried in order.
    pub urls: Vec<String>,
    pub integrity: String,
    pub strip_prefix: String,
    /// Patch labels, applied in order.
    pub patches: Vec<String>,
    /// Shell commands, applied in order after `patches`.
    pub patch_cmds: Vec<String>,
    pub patch_strip: i64,
}

impl ArchiveRepoSpecConfig {
    /// Checks every field, returning the validated patch strip count.
    pub fn validate(&self) -> Result<i64> {
        validation::repo_name(&self.repo_name)?;
        validation::archive_urls(&self.urls)?;
        integrity::validate(&self.integrity)?;
        validation::patches(&self.patches)?;
        validation::patch_cmds(&self.patch_cmds)?;
        validation::patch_strip(self.patch_strip)
    }

    pub fn build(self) -> Result<RepoSpec> {
        let patch_strip = self.validate()?;

        let mut attributes = BTreeMap::new();
        attributes.insert(attr::NAME.to_string(), AttrValue::from(self.repo_name));
        attributes.insert(attr::URLS.to_string(), AttrValue::from(self.urls));
        attributes.insert(attr::INTEGRITY.to_string(), AttrValue::from(self.integrity));
        attributes.insert(
            attr::STRIP_PREFIX.to_string(),
            AttrValue::from(self.strip_prefix),
        );
        attributes.insert(attr::PATCHES.to_string(), AttrValue::from(self.patches));
        attributes.insert(attr::PATCH_CMDS.to_string(), AttrValue::from(self.patch_cmds));
        attributes.insert(attr::PATCH_STRIP.to_string(), AttrValue::from(patch_strip));

        let spec = RepoSpec::new(FetchMechanism::Archive, attributes);
        trace!("built archive repo spec: {:?}", spec);
        Ok(spec)
    }
}

/// Parameters for a repository checked out from a git remote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitRepoSpecConfig {
    pub repo_name: String,
    pub remote: String,
    pub commit: String,
    pub strip_prefix: String,
    pub patches: Vec<String>,
    pub patch_cmds: Vec<String>,
    pub patch_strip: i64,
    pub init_submodules: bool,
}

impl GitRepoSpecConfig {
    pub fn validate(&self) -> Result<i64> {
        validation::repo_name(&self.repo_name)?;
        validation::git_remote(&self.remote)?;
        validation::non_blank("commit", &self.commit)?;
        validation::patches(&self.patches)?;
        validation::patch_cmds(&self.patch_cmds)?;
        validation::patch_strip(self.patch_strip)
    }

    pub fn build(self) -> Result<RepoSpec> {
        let patch_strip = self.validate()?;

        let mut attributes = BTreeMap::new();
        attributes.insert(attr::NAME.to_string(), AttrValue::from(self.repo_name));
        attributes.insert(attr::REMOTE.to_string(), AttrValue::from(self.remote));
        attributes.insert(attr::COMMIT.to_string(), AttrValue::from(self.commit));
        attributes.insert(
            attr::STRIP_PREFIX.to_string(),
            AttrValue::from(self.strip_prefix),
        );
        attributes.insert(attr::PATCHES.to_string(), AttrValue::from(self.patches));
        attributes.insert(attr::PATCH_CMDS.to_string(), AttrValue::from(self.patch_cmds));
        attributes.insert(attr::PATCH_STRIP.to_string(), AttrValue::from(patch_strip));
        attributes.insert(
            attr::INIT_SUBMODULES.to_string(),
            AttrValue::from(self.init_submodules),
        );

        let spec = RepoSpec::new(FetchMechanism::Git, attributes);
        trace!("built git repo spec: {:?}", spec);
        Ok(spec)
    }
}

/// Parameters for a repository backed by a local directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalPathRepoSpecConfig {
    pub repo_name: String,
    pub path: String,
}

impl LocalPathRepoSpecConfig {
    pub fn validate(&self) -> Result<()> {
        validation::repo_name(&self.repo_name)?;
        validation::non_blank("path", &self.path)
    }

    pub fn build(self) -> Result<RepoSpec> {
        self.validate()?;

        let mut attributes = BTreeMap::new();
        attributes.insert(attr::NAME.to_string(), AttrValue::from(self.repo_name));
        attributes.insert(attr::PATH.to_string(), AttrValue::from(self.path));

        Ok(RepoSpec::new(FetchMechanism::LocalPath, attributes))
    }
}
