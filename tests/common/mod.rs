//! Shared test utilities for integration and E2E tests.
//!
//! Add `mod common;` to a test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! let fixture = TestFixture::new().with_declarations(declarations::ARCHIVE_WITH_INTEGRITY);
//! fixture.command().arg("resolve").assert().success();
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::declarations;
    pub use super::TestFixture;
}

/// Declaration documents used across tests.
#[allow(dead_code)]
pub mod declarations {
    /// Archive override with integrity and strip prefix for module `foo`.
    pub const ARCHIVE_WITH_INTEGRITY: &str = r#"
overrides:
  foo:
    archive:
      urls: ["https://example.com/a.tar.gz"]
      patches: []
      patch_cmds: []
      integrity: sha256-abc123=
      strip_prefix: a-1.0/
      patch_strip: 0
"#;

    /// Archive override with an empty URL list.
    pub const EMPTY_URLS: &str = r#"
overrides:
  foo:
    archive:
      urls: []
      integrity: sha256-abc123=
"#;

    /// File-scheme archive with a label patch and a shell patch command.
    pub const FILE_URL_WITH_PATCHES: &str = r#"
overrides:
  foo:
    archive:
      urls: ["file:///local/a.zip"]
      patches: ["//patches:fix.patch"]
      patch_cmds: ["sed -i s/x/y/ file"]
      integrity: ""
      strip_prefix: ""
      patch_strip: 1
"#;

    /// One override of every kind.
    pub const ALL_KINDS: &str = r#"
overrides:
  foo:
    archive:
      urls: ["https://example.com/a.tar.gz"]
  bar:
    git:
      remote: https://github.com/example/bar.git
      commit: 6b7e1f0c
  baz:
    local_path:
      path: ../baz
  qux:
    single_version:
      version: "1.2.3"
  quux:
    multiple_version:
      versions: ["1.0", "2.0"]
"#;

    /// Negative patch strip count.
    pub const NEGATIVE_PATCH_STRIP: &str = r#"
overrides:
  foo:
    archive:
      urls: ["https://example.com/a.tar.gz"]
      patch_strip: -1
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "overrides: [unclosed";
}

/// A temporary directory holding an `overrides.yaml` declaration file.
#[allow(dead_code)]
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write `overrides.yaml` with the given content.
    pub fn with_declarations(self, content: &str) -> Self {
        self.with_file("overrides.yaml", content)
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn declarations_path(&self) -> PathBuf {
        self.temp_dir.path().join("overrides.yaml")
    }

    /// A command for the binary, run inside the fixture directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("module-override");
        cmd.current_dir(self.path())
            .env_remove("MODULE_OVERRIDE_FILE")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
