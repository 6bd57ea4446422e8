//! Integration tests for layered configuration feeding the compiler

use crate::integration::test_utils::{fixture, ENV_MUTEX};
use archmd::api::compile;
use archmd::config::ConfigLoader;
use std::fs;

#[test]
fn test_workspace_config_drives_compile() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let project = fixture(&[("core", Some("# Core\n")), (".config", Some("# Dot\n"))]);
    let xdg = project.path().join(".xdg");
    fs::create_dir_all(&xdg).unwrap();
    let saved = std::env::var_os("XDG_CONFIG_HOME");
    std::env::set_var("XDG_CONFIG_HOME", &xdg);

    fs::write(
        ConfigLoader::workspace_config_path(project.path()),
        r#"
[compile]
title = "Configured"
include_root = true

[walker]
skip_hidden = false
"#,
    )
    .unwrap();

    let result = ConfigLoader::load(project.path());
    match saved {
        Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
        None => std::env::remove_var("XDG_CONFIG_HOME"),
    }
    let config = result.unwrap();

    let out = compile(project.path(), &config).unwrap();
    assert!(out.starts_with("# Configured\n"));
    // Root has no marker: grouping heading without a link
    assert!(out.contains("\n## Dot\n"));
    assert!(out.contains("\n## Core\n"));
    assert!(!out.contains("[README.md]"));
}

#[test]
fn test_explicit_config_file() {
    let project = fixture(&[("a", Some("# A\n"))]);
    let config_path = project.path().join("custom.toml");
    fs::write(
        &config_path,
        "[compile]\ntitle = \"Explicit\"\n\n[render]\ntable_of_contents = true\n",
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_path).unwrap();
    let out = compile(project.path(), &config).unwrap();
    assert!(out.starts_with("# Explicit\n\n- [A](#a)\n"));
}
