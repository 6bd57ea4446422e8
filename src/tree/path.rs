//! Path helpers for link targets, anchors and display names

use std::path::{Component, Path};
use unicode_normalization::UnicodeNormalization;

/// Build the link target for a marker file below `relative`.
///
/// Components are joined with `/` regardless of platform and the result is
/// normalized to NFC, so the same tree renders identical links everywhere.
/// An empty `relative` (the scan root) yields the bare marker name.
pub fn link_path(relative: &Path, marker: &str) -> String {
    let mut parts: Vec<String> = normal_components(relative);
    parts.push(marker.to_string());
    normalize_path_string(&parts.join("/"))
}

/// In-document anchor name for a relative directory path (`a/b` -> `a-b`)
pub fn anchor_name(relative: &Path) -> String {
    normalize_path_string(&normal_components(relative).join("-"))
}

/// Relative path rendered with `/` separators; `.` for the scan root
pub fn display_relative(relative: &Path) -> String {
    let parts = normal_components(relative);
    if parts.is_empty() {
        ".".to_string()
    } else {
        normalize_path_string(&parts.join("/"))
    }
}

/// Base name of a directory with any separators stripped.
///
/// Falls back to the canonical path's base name when `path` has none
/// (`.` or `..`), and finally to the lossy display of the path itself.
pub fn display_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .or_else(|| {
            dunce::canonicalize(path)
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        })
        .unwrap_or_else(|| path.to_string_lossy().to_string());

    normalize_path_string(name.trim_matches(|c| c == '/' || c == '\\'))
}

/// Normalize a path string to NFC and drop trailing separators
pub fn normalize_path_string(path: &str) -> String {
    let mut result: String = path.nfc().collect();
    if result.len() > 1 {
        while result.ends_with('/') || result.ends_with('\\') {
            result.pop();
        }
    }
    result
}

fn normal_components(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().to_string()),
            _ => None,
        })
        .collect()
}
