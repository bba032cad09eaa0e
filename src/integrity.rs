//! # Subresource Integrity Strings
//!
//! Archive overrides may pin the downloaded content with an integrity string
//! in subresource-integrity form: `<algorithm>-<base64 digest>`, for example
//! `sha256-47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=`.
//!
//! Only the shape is checked here. Whether the digest matches the fetched
//! bytes is the fetcher's concern.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Hash algorithms accepted in an integrity string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// The algorithm prefix as it appears in an integrity string.
    pub fn as_str(self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "sha1" => Some(HashAlgorithm::Sha1),
            "sha256" => Some(HashAlgorithm::Sha256),
            "sha384" => Some(HashAlgorithm::Sha384),
            "sha512" => Some(HashAlgorithm::Sha512),
            _ => None,
        }
    }
}

/// A parsed integrity string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Integrity {
    algorithm: HashAlgorithm,
    digest: String,
}

fn digest_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9+/]+={0,2}$").expect("valid digest regex"))
}

impl Integrity {
    /// Parses `<algorithm>-<base64 digest>`.
    pub fn parse(value: &str) -> Result<Self> {
        let (prefix, digest) = value.split_once('-').ok_or_else(|| {
            Error::validation(
                "integrity",
                format!("'{}' is not of the form <algorithm>-<base64 digest>", value),
            )
        })?;

        let algorithm = HashAlgorithm::from_prefix(prefix).ok_or_else(|| {
            Error::validation(
                "integrity",
                format!(
                    "unsupported algorithm '{}' (expected sha1, sha256, sha384 or sha512)",
                    prefix
                ),
            )
        })?;

        if !digest_pattern().is_match(digest) {
            return Err(Error::validation(
                "integrity",
                format!("digest '{}' is not base64", digest),
            ));
        }

        Ok(Self {
            algorithm,
            digest: digest.to_string(),
        })
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// The base64 digest, padding included.
    pub fn digest(&self) -> &str {
        &self.digest
    }
}

impl fmt::Display for Integrity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.algorithm.as_str(), self.digest)
    }
}

/// Checks an optional integrity string. Empty means no verification was
/// requested and is accepted.
pub fn validate(value: &str) -> Result<()> {
    if value.is_empty() {
        return Ok(());
    }
    Integrity::parse(value).map(|_| ())
}
