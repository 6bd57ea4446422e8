//! Integration tests for output determinism

use crate::integration::test_utils::{config_with, fixture, write_fixture};
use archmd::api::compile;
use tempfile::TempDir;

/// Same filesystem, same config: byte-identical output
#[test]
fn test_same_filesystem_same_output() {
    let project = fixture(&[
        ("", Some("# Root\n")),
        ("b", Some("# B\n")),
        ("a/x", Some("# X\n")),
        ("a/y", None),
    ]);
    let config = config_with("Stable", true);

    let first = compile(project.path(), &config).unwrap();
    let second = compile(project.path(), &config).unwrap();
    assert_eq!(first, second);
}

/// Creation order does not leak into output order
#[test]
fn test_creation_order_irrelevant() {
    let entries_forward = [
        ("alpha", Some("# Alpha\n")),
        ("beta/one", Some("# One\n")),
        ("gamma", Some("# Gamma\n")),
    ];
    let mut entries_reverse = entries_forward;
    entries_reverse.reverse();

    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    write_fixture(first.path(), &entries_forward);
    write_fixture(second.path(), &entries_reverse);

    let config = config_with("T", false);
    assert_eq!(
        compile(first.path(), &config).unwrap(),
        compile(second.path(), &config).unwrap()
    );
}

/// Adding documentation changes the output; adding bare directories does not
#[test]
fn test_only_documented_changes_affect_output() {
    let project = fixture(&[("core", Some("# Core\n"))]);
    let config = config_with("T", false);
    let before = compile(project.path(), &config).unwrap();

    std::fs::create_dir_all(project.path().join("build").join("cache")).unwrap();
    assert_eq!(compile(project.path(), &config).unwrap(), before);

    write_fixture(project.path(), &[("api", Some("# Api\n"))]);
    let after = compile(project.path(), &config).unwrap();
    assert_ne!(after, before);
    assert!(after.find("## Api").unwrap() < after.find("## Core").unwrap());
}
