//! Documentation tree data model

use crate::tree::path;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One qualifying directory in the documentation tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentNode {
    /// Directory location relative to the scan root (empty for the root)
    pub path: PathBuf,
    /// Display title: the marker's heading, or the directory name
    pub title: String,
    /// Whether this directory itself holds a marker file
    pub has_marker: bool,
    /// Qualifying subdirectories, ordered by name
    pub children: Vec<DocumentNode>,
    /// Nesting level, 0 at the scan root
    pub depth: usize,
    /// Marker text below the title heading; only kept when inline content
    /// is requested
    #[serde(skip)]
    pub body: Option<String>,
}

impl DocumentNode {
    /// Whether the node belongs in the tree: it has a marker, or a
    /// descendant does.
    pub fn qualifies(&self) -> bool {
        self.has_marker || !self.children.is_empty()
    }

    /// Marker link for this node, if it has one
    pub fn link(&self, marker: &str) -> Option<String> {
        self.has_marker.then(|| path::link_path(&self.path, marker))
    }

    /// Assign depths top-down, starting from `depth` at this node
    pub fn assign_depths(&mut self, depth: usize) {
        self.depth = depth;
        for child in &mut self.children {
            child.assign_depths(depth + 1);
        }
    }

    /// Number of nodes in this subtree, including this one
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(DocumentNode::count).sum::<usize>()
    }

    /// Pre-order traversal of this subtree
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    /// Find a node by its relative path
    pub fn find(&self, relative: &Path) -> Option<&DocumentNode> {
        self.iter().find(|node| node.path == relative)
    }
}

/// Pre-order iterator over a node and its descendants
pub struct PreOrder<'a> {
    stack: Vec<&'a DocumentNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a DocumentNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// A compiled documentation tree and the directory it was scanned from
#[derive(Debug, Clone, Serialize)]
pub struct DocumentTree {
    /// Scan root as supplied by the caller
    pub scan_root: PathBuf,
    /// Root node; always present, depth 0
    pub root: DocumentNode,
}

impl DocumentTree {
    /// Total node count, root included
    pub fn len(&self) -> usize {
        self.root.count()
    }

    /// True when nothing but the root is present
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Nodes in pre-order, root first
    pub fn iter(&self) -> PreOrder<'_> {
        self.root.iter()
    }
}
