//! Field validators shared by the override variants and the `RepoSpec`
//! builders.
//!
//! Each helper checks one field and reports failures as
//! `Error::Validation` naming that field.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use crate::error::{Error, Result};

/// URL schemes an archive may be fetched from.
pub const ARCHIVE_URL_SCHEMES: &[&str] = &["http", "https", "file"];

/// URL schemes a git remote may use. scp-style `user@host:path` remotes are
/// accepted separately.
pub const GIT_REMOTE_SCHEMES: &[&str] = &["http", "https", "ssh", "git", "file"];

fn module_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-z]([a-z0-9._-]*[a-z0-9])?$").expect("valid module name regex")
    })
}

fn scp_remote_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._-]+@[A-Za-z0-9.-]+:[^\s]+$").expect("valid scp remote regex")
    })
}

fn repo_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_.~+-]+$").expect("valid repo name regex"))
}

/// Module names start with a lowercase letter, end with a letter or digit,
/// and otherwise use `[a-z0-9._-]`.
pub fn module_name(name: &str) -> Result<()> {
    if module_name_pattern().is_match(name) {
        Ok(())
    } else {
        Err(Error::validation(
            "module",
            format!("invalid module name '{}'", name),
        ))
    }
}

pub fn repo_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::validation("repo_name", "must not be empty"));
    }
    if !repo_name_pattern().is_match(name) {
        return Err(Error::validation(
            "repo_name",
            format!("invalid repository name '{}'", name),
        ));
    }
    Ok(())
}

/// Requires `value` to contain something other than whitespace.
pub fn non_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(Error::validation(field, "must not be empty"))
    } else {
        Ok(())
    }
}

/// Archive URLs: at least one, each an absolute `http`, `https` or `file` URL.
pub fn archive_urls(urls: &[String]) -> Result<()> {
    if urls.is_empty() {
        return Err(Error::validation(
            "urls",
            "at least one URL is required, got an empty list",
        ));
    }
    for (idx, raw) in urls.iter().enumerate() {
        let parsed = Url::parse(raw).map_err(|e| {
            Error::validation("urls", format!("entry {} ('{}') is not a URL: {}", idx, raw, e))
        })?;
        if !ARCHIVE_URL_SCHEMES.iter().any(|s| *s == parsed.scheme()) {
            return Err(Error::validation(
                "urls",
                format!(
                    "entry {} ('{}') has unsupported scheme '{}'",
                    idx,
                    raw,
                    parsed.scheme()
                ),
            ));
        }
    }
    Ok(())
}

/// Git remotes: a URL with one of `GIT_REMOTE_SCHEMES`, or scp-style
/// `user@host:path`.
pub fn git_remote(remote: &str) -> Result<()> {
    non_blank("remote", remote)?;
    if scp_remote_pattern().is_match(remote) {
        return Ok(());
    }
    let parsed = Url::parse(remote).map_err(|e| {
        Error::validation(
            "remote",
            format!("'{}' is neither a URL nor user@host:path: {}", remote, e),
        )
    })?;
    if !GIT_REMOTE_SCHEMES.iter().any(|s| *s == parsed.scheme()) {
        return Err(Error::validation(
            "remote",
            format!("'{}' has unsupported scheme '{}'", remote, parsed.scheme()),
        ));
    }
    Ok(())
}

/// Checks a declared patch strip count. Any non-negative value is returned
/// unchanged.
pub fn patch_strip(value: i64) -> Result<i64> {
    if value < 0 {
        return Err(Error::validation(
            "patch_strip",
            format!("must be a non-negative integer, got {}", value),
        ));
    }
    Ok(value)
}

/// Patch labels are applied in order; each must be a non-empty label
/// without whitespace.
pub fn patches(labels: &[String]) -> Result<()> {
    for (idx, label) in labels.iter().enumerate() {
        if label.is_empty() || label.chars().any(char::is_whitespace) {
            return Err(Error::validation(
                "patches",
                format!("entry {} ('{}') is not a well-formed label", idx, label),
            ));
        }
    }
    Ok(())
}

pub fn patch_cmds(cmds: &[String]) -> Result<()> {
    for (idx, cmd) in cmds.iter().enumerate() {
        if cmd.trim().is_empty() {
            return Err(Error::validation(
                "patch_cmds",
                format!("entry {} is empty", idx),
            ));
        }
    }
    Ok(())
}

/// Versions for a multiple-version override: at least one, none blank,
/// no duplicates.
pub fn versions(versions: &[String]) -> Result<()> {
    if versions.is_empty() {
        return Err(Error::validation(
            "versions",
            "at least one version is required",
        ));
    }
    let mut seen = HashSet::new();
    for version in versions {
        non_blank("versions", version)?;
        if !seen.insert(version.as_str()) {
            return Err(Error::validation(
                "versions",
                format!("version '{}' is listed more than once", version),
            ));
        }
    }
    Ok(())
}
