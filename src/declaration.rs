//! # Override Declaration Files
//!
//! This module reads the file in which a project declares its module
//! overrides and turns each declaration into a validated `ModuleOverride`.
//!
//! ## Format
//!
//! A YAML (or TOML) document with a single `overrides` table keyed by module
//! name. Each entry names exactly one override kind:
//!
//! ```yaml
//! overrides:
//!   foo:
//!     archive:
//!       urls: ["https://example.com/foo-1.0.tar.gz"]
//!       integrity: sha256-47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=
//!       strip_prefix: foo-1.0/
//!       patches: ["//patches:foo.patch"]
//!       patch_strip: 1
//!   bar:
//!     git:
//!       remote: https://github.com/example/bar.git
//!       commit: 6b7e1f0
//!   baz:
//!     local_path:
//!       path: ../baz
//!   qux:
//!     single_version:
//!       version: 1.2.3
//!   quux:
//!     multiple_version:
//!       versions: ["1.0", "2.0"]
//! ```
//!
//! Optional fields may be omitted; unknown fields are rejected so that typos
//! do not silently drop a parameter. Parsing only checks the shape of the
//! document. Semantic validation happens in `OverrideFile::into_overrides`,
//! which reports the first invalid declaration together with its module.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};
use crate::overrides::{
    ArchiveOverride, ArchiveParams, GitOverride, GitParams, LocalPathOverride, LocalPathParams,
    ModuleOverride, MultipleVersionOverride, MultipleVersionParams, SingleVersionOverride,
    SingleVersionParams,
};
use crate::validation;

/// One module's declared override, before validation.
///
/// Exactly one of the fields must be set; which one names the override kind.
/// A kind written with an empty body counts as set, with every parameter at
/// its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverrideDeclaration {
    #[serde(default, deserialize_with = "present_kind")]
    pub archive: Option<ArchiveParams>,
    #[serde(default, deserialize_with = "present_kind")]
    pub git: Option<GitParams>,
    #[serde(default, deserialize_with = "present_kind")]
    pub local_path: Option<LocalPathParams>,
    #[serde(default, deserialize_with = "present_kind")]
    pub single_version: Option<SingleVersionParams>,
    #[serde(default, deserialize_with = "present_kind")]
    pub multiple_version: Option<MultipleVersionParams>,
}

/// Maps a present override kind to `Some`, even when its body is null.
fn present_kind<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Some(Option::<T>::deserialize(deserializer)?.unwrap_or_default()))
}

impl OverrideDeclaration {
    /// Names of the override kinds set in this declaration.
    pub fn kinds(&self) -> Vec<&'static str> {
        [
            ("archive", self.archive.is_some()),
            ("git", self.git.is_some()),
            ("local_path", self.local_path.is_some()),
            ("single_version", self.single_version.is_some()),
            ("multiple_version", self.multiple_version.is_some()),
        ]
        .into_iter()
        .filter_map(|(kind, set)| set.then_some(kind))
        .collect()
    }

    /// Validates the declaration and builds the override value.
    pub fn into_override(self) -> Result<ModuleOverride> {
        let kinds = self.kinds();
        if kinds.len() > 1 {
            return Err(Error::validation(
                "override",
                format!(
                    "exactly one override kind must be declared, found {}",
                    kinds.join(", ")
                ),
            ));
        }

        let Self {
            archive,
            git,
            local_path,
            single_version,
            multiple_version,
        } = self;

        if let Some(p) = archive {
            return Ok(ArchiveOverride::new(p)?.into());
        }
        if let Some(p) = git {
            return Ok(GitOverride::new(p)?.into());
        }
        if let Some(p) = local_path {
            return Ok(LocalPathOverride::new(p)?.into());
        }
        if let Some(p) = single_version {
            return Ok(SingleVersionOverride::new(p)?.into());
        }
        if let Some(p) = multiple_version {
            return Ok(MultipleVersionOverride::new(p)?.into());
        }

        Err(Error::validation(
            "override",
            "exactly one override kind must be declared, found none",
        ))
    }
}

/// The parsed contents of a declaration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverrideFile {
    #[serde(default)]
    pub overrides: BTreeMap<String, OverrideDeclaration>,
}

impl OverrideFile {
    /// Validates every declaration, keyed by module name.
    pub fn into_overrides(self) -> Result<BTreeMap<String, ModuleOverride>> {
        self.overrides
            .into_iter()
            .map(|(module, declaration)| {
                validation::module_name(&module).map_err(|e| e.for_module(&module))?;
                let value = declaration
                    .into_override()
                    .map_err(|e| e.for_module(&module))?;
                Ok((module, value))
            })
            .collect()
    }
}

/// Parses a YAML declaration document.
pub fn parse(yaml_content: &str) -> Result<OverrideFile> {
    if yaml_content.trim().is_empty() {
        return Ok(OverrideFile::default());
    }
    serde_yaml::from_str(yaml_content).map_err(Error::Yaml)
}

/// Parses a TOML declaration document.
pub fn parse_toml(toml_content: &str) -> Result<OverrideFile> {
    toml::from_str(toml_content).map_err(Error::Toml)
}

/// Reads a declaration file, choosing the format by extension.
///
/// `.toml` files are read as TOML; everything else as YAML.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<OverrideFile> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => parse_toml(&content),
        Some("yaml") | Some("yml") | None => parse(&content),
        Some(other) => Err(Error::ConfigParse {
            message: format!("Unsupported declaration file extension '.{}'", other),
            hint: Some("Use a .yaml, .yml or .toml file".to_string()),
        }),
    }
}

/// Reads and validates a declaration file in one step.
pub fn load_overrides<P: AsRef<Path>>(path: P) -> Result<BTreeMap<String, ModuleOverride>> {
    from_file(path)?.into_overrides()
}
