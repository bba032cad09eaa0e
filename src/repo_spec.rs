//! # Repository Specifications
//!
//! A `RepoSpec` is the canonical, fetcher-facing description of how to
//! materialize a repository: a `FetchMechanism` plus a map of named
//! attributes. It is produced by the builders in `crate::builders` and is
//! never modified afterwards.
//!
//! Attributes live in a `BTreeMap`, so two specs built from equal inputs
//! compare, hash and serialize identically.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// How a repository is materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchMechanism {
    /// Download an archive, verify it, extract it and apply patches.
    Archive,
    /// Check out a commit from a version control remote.
    Git,
    /// Use a directory on the local filesystem as-is.
    LocalPath,
}

impl FetchMechanism {
    pub fn as_str(self) -> &'static str {
        match self {
            FetchMechanism::Archive => "archive",
            FetchMechanism::Git => "git",
            FetchMechanism::LocalPath => "local_path",
        }
    }
}

impl fmt::Display for FetchMechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value of a single `RepoSpec` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Str(String),
    Int(i64),
    Bool(bool),
    /// Ordered list. Order is preserved exactly as declared.
    List(Vec<String>),
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AttrValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(value: Vec<String>) -> Self {
        AttrValue::List(value)
    }
}

/// Attribute names used across mechanisms.
pub mod attr {
    pub const NAME: &str = "name";
    pub const URLS: &str = "urls";
    pub const INTEGRITY: &str = "integrity";
    pub const STRIP_PREFIX: &str = "strip_prefix";
    pub const PATCHES: &str = "patches";
    pub const PATCH_CMDS: &str = "patch_cmds";
    pub const PATCH_STRIP: &str = "patch_strip";
    pub const REMOTE: &str = "remote";
    pub const COMMIT: &str = "commit";
    pub const INIT_SUBMODULES: &str = "init_submodules";
    pub const PATH: &str = "path";
}

/// Canonical description of how to fetch a repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RepoSpec {
    mechanism: FetchMechanism,
    attributes: BTreeMap<String, AttrValue>,
}

impl RepoSpec {
    /// Creates a spec from already-validated attributes. Callers normally go
    /// through one of the builders instead.
    pub fn new(mechanism: FetchMechanism, attributes: BTreeMap<String, AttrValue>) -> Self {
        Self {
            mechanism,
            attributes,
        }
    }

    pub fn mechanism(&self) -> FetchMechanism {
        self.mechanism
    }

    pub fn attributes(&self) -> &BTreeMap<String, AttrValue> {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// The name of the repository this spec materializes.
    pub fn repo_name(&self) -> &str {
        self.attribute(attr::NAME)
            .and_then(AttrValue::as_str)
            .unwrap_or_default()
    }

    /// Convenience accessor for list attributes; missing means empty.
    pub fn list(&self, name: &str) -> &[String] {
        self.attribute(name)
            .and_then(AttrValue::as_list)
            .unwrap_or_default()
    }

    /// Convenience accessor for string attributes; missing means empty.
    pub fn string(&self, name: &str) -> &str {
        self.attribute(name)
            .and_then(AttrValue::as_str)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str) -> RepoSpec {
        let mut attributes = BTreeMap::new();
        attributes.insert(attr::NAME.to_string(), AttrValue::from(name));
        attributes.insert(
            attr::PATCHES.to_string(),
            AttrValue::from(vec!["b".to_string(), "a".to_string()]),
        );
        attributes.insert(attr::PATCH_STRIP.to_string(), AttrValue::from(1i64));
        RepoSpec::new(FetchMechanism::Archive, attributes)
    }

    #[test]
    fn test_accessors() {
        let spec = spec("foo");
        assert_eq!(spec.mechanism(), FetchMechanism::Archive);
        assert_eq!(spec.repo_name(), "foo");
        assert_eq!(spec.list(attr::PATCHES), ["b", "a"]);
        assert_eq!(
            spec.attribute(attr::PATCH_STRIP).and_then(AttrValue::as_int),
            Some(1)
        );
        assert!(spec.list(attr::URLS).is_empty());
        assert_eq!(spec.string(attr::INTEGRITY), "");
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(spec("foo"), spec("foo"));
        assert_ne!(spec("foo"), spec("bar"));

        let mut other = spec("foo");
        other.mechanism = FetchMechanism::Git;
        assert_ne!(spec("foo"), other);
    }

    #[test]
    fn test_serializes_attributes_untagged() {
        let json = serde_json::to_value(spec("foo")).unwrap();
        assert_eq!(json["mechanism"], "archive");
        assert_eq!(json["attributes"]["name"], "foo");
        assert_eq!(json["attributes"]["patch_strip"], 1);
        assert_eq!(json["attributes"]["patches"][0], "b");
    }

    #[test]
    fn test_mechanism_display() {
        assert_eq!(FetchMechanism::LocalPath.to_string(), "local_path");
    }
}
