//! End-to-end tests for the `validate` command.

mod common;

use common::prelude::*;

#[test]
fn test_validate_valid_declarations() {
    let fixture = TestFixture::new().with_declarations(declarations::ALL_KINDS);
    fixture
        .command()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("[OK] foo (archive): ARCHIVE_OVERRIDE"))
        .stdout(predicate::str::contains("[OK] bar (git): GIT_OVERRIDE"))
        .stdout(predicate::str::contains("Overrides: 5"))
        .stdout(predicate::str::contains("Non-registry: 3"))
        .stdout(predicate::str::contains("Registry: 2"));
}

#[test]
fn test_validate_with_explicit_file() {
    let fixture = TestFixture::new().with_file("custom.yml", declarations::FILE_URL_WITH_PATCHES);
    fixture
        .command()
        .args(["validate", "--file", "custom.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Declaration file is valid"));
}

#[test]
fn test_validate_empty_urls() {
    let fixture = TestFixture::new().with_declarations(declarations::EMPTY_URLS);
    fixture
        .command()
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("[ERR]"))
        .stdout(predicate::str::contains("urls"));
}

#[test]
fn test_validate_negative_patch_strip() {
    let fixture = TestFixture::new().with_declarations(declarations::NEGATIVE_PATCH_STRIP);
    fixture
        .command()
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("patch_strip"));
}

#[test]
fn test_validate_malformed_integrity() {
    let fixture = TestFixture::new().with_declarations(
        r#"
overrides:
  foo:
    archive:
      urls: ["https://example.com/a.tar.gz"]
      integrity: md5-abc
"#,
    );
    fixture
        .command()
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("unsupported algorithm 'md5'"));
}

#[test]
fn test_validate_invalid_yaml() {
    let fixture = TestFixture::new().with_declarations(declarations::INVALID_YAML);
    fixture
        .command()
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("could not be parsed"));
}

#[test]
fn test_validate_unknown_field() {
    let fixture = TestFixture::new().with_declarations(
        r#"
overrides:
  foo:
    local_path:
      path: ../foo
      recursive: true
"#,
    );
    fixture.command().arg("validate").assert().failure();
}
