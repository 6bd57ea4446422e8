//! Property-based tests for determinism and tree-shape guarantees

use archmd::api::compile;
use archmd::config::ArchConfig;
use archmd::render::{RenderOptions, TreeRenderer};
use archmd::tree::builder::TreeBuilder;
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use tempfile::TempDir;

/// Generated layout: relative directory paths, and whether each has a README
fn layout() -> impl Strategy<Value = Vec<(Vec<String>, bool)>> {
    proptest::collection::vec(
        (
            proptest::collection::vec("[a-dA-D]{1,3}", 1..4),
            any::<bool>(),
        ),
        0..12,
    )
}

fn materialize(entries: &[(Vec<String>, bool)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (parts, documented) in entries {
        let dir = parts.iter().fold(temp_dir.path().to_path_buf(), |p, c| p.join(c));
        fs::create_dir_all(&dir).unwrap();
        if *documented {
            fs::write(dir.join("README.md"), format!("# {}\n", parts.join(" "))).unwrap();
        }
    }
    temp_dir
}

fn case_insensitive_fs(root: &std::path::Path) -> bool {
    fs::create_dir_all(root.join("probe")).unwrap();
    let insensitive = root.join("PROBE").exists();
    fs::remove_dir(root.join("probe")).unwrap();
    insensitive
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Two compiles over an unchanged tree are byte-identical
    #[test]
    fn compile_is_deterministic(entries in layout(), include_root in any::<bool>()) {
        let project = materialize(&entries);
        let mut config = ArchConfig::default();
        config.compile.include_root = include_root;

        let first = compile(project.path(), &config).unwrap();
        let second = compile(project.path(), &config).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Every non-root node has a marker or a child; siblings are sorted;
    /// depth grows by exactly one per level
    #[test]
    fn tree_shape_invariants(entries in layout()) {
        let project = materialize(&entries);
        prop_assume!(!case_insensitive_fs(project.path()));

        let tree = TreeBuilder::new(project.path().to_path_buf()).build().unwrap();
        prop_assert_eq!(tree.root.depth, 0);

        for node in tree.iter() {
            if node.depth > 0 {
                prop_assert!(node.has_marker || !node.children.is_empty());
            }
            let names: Vec<_> = node.children.iter().map(|c| c.path.clone()).collect();
            let mut sorted = names.clone();
            sorted.sort();
            prop_assert_eq!(names, sorted);
            for child in &node.children {
                prop_assert_eq!(child.depth, node.depth + 1);
            }
        }

        let documented: BTreeSet<_> = entries
            .iter()
            .filter(|(_, d)| *d)
            .map(|(parts, _)| parts.join("/"))
            .collect();
        let linked: BTreeSet<_> = tree
            .iter()
            .filter(|n| n.has_marker && n.depth > 0)
            .map(|n| n.path.to_string_lossy().replace('\\', "/"))
            .collect();
        prop_assert_eq!(documented, linked);
    }

    /// Toggling the root adds exactly one heading
    #[test]
    fn root_toggle_adds_one_heading(entries in layout()) {
        let project = materialize(&entries);
        let tree = TreeBuilder::new(project.path().to_path_buf()).build().unwrap();

        let count = |include_root: bool| {
            let renderer = TreeRenderer::new(RenderOptions {
                include_root,
                ..RenderOptions::default()
            });
            renderer
                .render(&tree)
                .lines()
                .filter(|l| l.starts_with('#'))
                .count()
        };
        prop_assert_eq!(count(true), count(false) + 1);
    }
}
