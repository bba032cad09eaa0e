//! Snapshot tests for CLI output using insta.
//!
//! To update snapshots after intentional changes:
//! ```bash
//! cargo insta test --accept
//! ```

mod common;

use common::prelude::*;

#[test]
fn test_resolve_file_url_with_patches_json_snapshot() {
    let fixture = TestFixture::new().with_declarations(declarations::FILE_URL_WITH_PATCHES);
    let output = fixture
        .command()
        .args(["resolve", "foo"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    insta::assert_snapshot!("resolve_file_url_with_patches_json", stdout.trim_end());
}
