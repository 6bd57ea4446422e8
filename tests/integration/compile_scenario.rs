//! End-to-end compile of the reference project layout

use crate::integration::test_utils::{config_with, example_project, fixture, headings};
use archmd::api::compile;

#[test]
fn test_example_without_root() {
    let project = example_project();
    let out = compile(project.path(), &config_with("My Project", false)).unwrap();

    assert_eq!(
        out,
        "# My Project\n\n## Core Module\n\n[core/README.md](core/README.md)\n"
    );
    assert!(!out.contains("empty"));
}

#[test]
fn test_example_with_root() {
    let project = example_project();
    let out = compile(project.path(), &config_with("My Project", true)).unwrap();

    assert_eq!(
        out,
        "# My Project\n\n# Proj Overview\n\n[README.md](README.md)\n\n## Core Module\n\n[core/README.md](core/README.md)\n"
    );
}

#[test]
fn test_root_toggle_adds_only_root_section() {
    let project = fixture(&[
        ("", Some("# Root\n")),
        ("a", Some("# A\n")),
        ("a/inner", Some("# Inner\n")),
        ("b/deep", Some("no heading here\n")),
    ]);

    let without = compile(project.path(), &config_with("T", false)).unwrap();
    let with = compile(project.path(), &config_with("T", true)).unwrap();

    let root_block = "\n# Root\n\n[README.md](README.md)\n";
    let banner = "# T\n";
    assert!(with.starts_with(&format!("{}{}", banner, root_block)));
    assert_eq!(
        with.replacen(root_block, "", 1),
        without,
        "everything except the root block must be unchanged"
    );
    assert_eq!(headings(&with).len(), headings(&without).len() + 1);
}

#[test]
fn test_root_only_tree_renders_banner() {
    let project = fixture(&[("", Some("# Only Root\n")), ("bare", None)]);
    let out = compile(project.path(), &config_with("Banner", false)).unwrap();
    assert_eq!(out, "# Banner\n");
}

#[test]
fn test_title_fallback_uses_directory_name() {
    let project = fixture(&[("storage", Some("Plain text without a heading.\n"))]);
    let out = compile(project.path(), &config_with("T", false)).unwrap();
    assert!(out.contains("\n## storage\n"));
    assert!(out.contains("[storage/README.md](storage/README.md)"));
}

#[test]
fn test_empty_marker_file_uses_directory_name() {
    let project = fixture(&[("blank", Some(""))]);
    let out = compile(project.path(), &config_with("T", false)).unwrap();
    assert!(out.contains("\n## blank\n"));
}

#[test]
fn test_custom_marker_name() {
    let project = fixture(&[("a", None), ("b", Some("# B via README\n"))]);
    std::fs::write(project.path().join("a").join("DOCS.md"), "# A Docs\n").unwrap();

    let mut config = config_with("T", false);
    config.compile.marker = "DOCS.md".to_string();
    let out = compile(project.path(), &config).unwrap();

    assert!(out.contains("## A Docs"));
    assert!(out.contains("[a/DOCS.md](a/DOCS.md)"));
    assert!(!out.contains("B via README"));
}

#[test]
fn test_table_of_contents_lists_sections() {
    let project = fixture(&[("api", Some("# API\n")), ("api/v1", Some("# Version 1\n"))]);
    let mut config = config_with("T", false);
    config.render.table_of_contents = true;

    let out = compile(project.path(), &config).unwrap();
    assert!(out.starts_with("# T\n\n- [API](#api)\n  - [Version 1](#api-v1)\n"));
    assert!(out.contains("<a name=\"api-v1\"></a>"));
}

#[test]
fn test_inline_content_carries_readme_bodies() {
    let project = fixture(&[
        ("", Some("# Proj Overview\n\nTop level notes.\n")),
        (
            "core",
            Some("# Core Module\n\nCore internals explained.\n\n## Details\n\n```sh\n# build\n```\n"),
        ),
        ("core/io", Some("# IO\n")),
    ]);
    let mut config = config_with("My Project", true);
    config.render.inline_content = true;

    let out = compile(project.path(), &config).unwrap();
    assert_eq!(
        out,
        "# My Project\n\n# Proj Overview\n\n[README.md](README.md)\n\nTop level notes.\n\n\
         ## Core Module\n\n[core/README.md](core/README.md)\n\nCore internals explained.\n\n\
         ### Details\n\n```sh\n# build\n```\n\n\
         ### IO\n\n[core/io/README.md](core/io/README.md)\n"
    );
}

#[test]
fn test_missing_root_is_reported() {
    let project = fixture(&[]);
    let err = compile(&project.path().join("gone"), &config_with("T", false)).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_root_that_is_a_file_is_reported() {
    let project = fixture(&[]);
    let file = project.path().join("README.md");
    std::fs::write(&file, "# File\n").unwrap();
    let err = compile(&file, &config_with("T", false)).unwrap_err();
    assert!(err.to_string().contains("not a directory"));
}
