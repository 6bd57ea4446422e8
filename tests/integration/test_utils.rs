//! Shared test utilities for integration tests
//!
//! Builds project fixtures from a compact description so each test states
//! only the directories and marker files it cares about.

use archmd::config::ArchConfig;
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

/// Serializes tests that touch process environment variables
pub static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Create a fixture: each entry is `(relative path, Some(readme) | None)`.
/// `None` creates a bare directory.
pub fn fixture(entries: &[(&str, Option<&str>)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    write_fixture(temp_dir.path(), entries);
    temp_dir
}

pub fn write_fixture(root: &Path, entries: &[(&str, Option<&str>)]) {
    for (relative, readme) in entries {
        let dir = if relative.is_empty() {
            root.to_path_buf()
        } else {
            root.join(relative)
        };
        fs::create_dir_all(&dir).unwrap();
        if let Some(content) = readme {
            fs::write(dir.join("README.md"), content).unwrap();
        }
    }
}

/// The `proj/` example: documented root, documented `core/`, empty `empty/`
pub fn example_project() -> TempDir {
    fixture(&[
        ("", Some("# Proj Overview\n\nTop level notes.\n")),
        ("core", Some("# Core Module\n\nCore internals.\n")),
        ("empty", None),
    ])
}

/// Default config with a given title and root policy
pub fn config_with(title: &str, include_root: bool) -> ArchConfig {
    let mut config = ArchConfig::default();
    config.compile.title = title.to_string();
    config.compile.include_root = include_root;
    config
}

/// Heading lines (`#`...) of a rendered document, in order
pub fn headings(document: &str) -> Vec<String> {
    document
        .lines()
        .filter(|line| line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
