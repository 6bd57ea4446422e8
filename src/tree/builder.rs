//! Tree builder for constructing the pruned documentation tree

use crate::error::TreeError;
use crate::tree::node::{DocumentNode, DocumentTree};
use crate::tree::title;
use crate::tree::walker::{DirDescriptor, Walker, WalkerConfig};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

/// Default marker file name
pub const DEFAULT_MARKER: &str = "README.md";

/// A directory whose children are still being resolved
struct PendingNode {
    depth: usize,
    node: DocumentNode,
}

/// Tree builder for constructing documentation trees
pub struct TreeBuilder {
    root: PathBuf,
    marker: String,
    walker_config: Option<WalkerConfig>,
    inline_content: bool,
}

impl TreeBuilder {
    /// Create a new tree builder for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            marker: DEFAULT_MARKER.to_string(),
            walker_config: None,
            inline_content: false,
        }
    }

    /// Use a different marker file name
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Set walker config (ignore patterns, etc.). When set, the walker uses this config
    /// instead of the default.
    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = Some(config);
        self
    }

    /// Keep each marker's body on its node for inline rendering
    pub fn with_inline_content(mut self, inline_content: bool) -> Self {
        self.inline_content = inline_content;
        self
    }

    /// Build the pruned documentation tree
    ///
    /// Directories arrive from the walker in pre-order. Each one is held on a
    /// stack until every descendant has been seen; only then is it known
    /// whether it qualifies, and it is folded into its parent or dropped.
    /// Depths are assigned afterwards in a separate top-down pass.
    #[instrument(skip(self), fields(root = %self.root.display(), marker = %self.marker))]
    pub fn build(&self) -> Result<DocumentTree, TreeError> {
        let start = Instant::now();
        info!("Starting tree build");

        let walker = match &self.walker_config {
            Some(config) => Walker::with_config(self.root.clone(), &self.marker, config.clone()),
            None => Walker::new(self.root.clone(), &self.marker),
        };
        let walk = walker.walk().map_err(|e| {
            error!("Filesystem walk failed: {}", e);
            e
        })?;

        let mut stack: Vec<PendingNode> = Vec::new();
        let mut visited = 0usize;

        for dir in walk {
            visited += 1;
            while stack.last().is_some_and(|top| top.depth >= dir.depth) {
                Self::settle(&mut stack);
            }
            stack.push(self.pending(&dir));
        }

        while stack.len() > 1 {
            Self::settle(&mut stack);
        }

        // The root is always kept, qualifying or not
        let mut root = stack
            .pop()
            .map(|pending| pending.node)
            .ok_or_else(|| TreeError::NotADirectory(self.root.clone()))?;
        root.assign_depths(0);

        let tree = DocumentTree {
            scan_root: self.root.clone(),
            root,
        };

        info!(
            directories = visited,
            node_count = tree.len(),
            duration_ms = start.elapsed().as_millis(),
            "Tree build completed"
        );

        Ok(tree)
    }

    /// Pop the top pending directory and attach it to its parent if it qualifies
    fn settle(stack: &mut Vec<PendingNode>) {
        let Some(done) = stack.pop() else {
            return;
        };
        let Some(parent) = stack.last_mut() else {
            // Nothing above it: put it back, it is the root
            stack.push(done);
            return;
        };

        if done.node.qualifies() {
            parent.node.children.push(done.node);
        } else {
            debug!(path = %done.node.path.display(), "Pruned directory without documentation");
        }
    }

    fn pending(&self, dir: &DirDescriptor) -> PendingNode {
        let (title, body) = if dir.has_marker {
            self.read_marker(dir)
        } else {
            (title::fallback_title(&dir.name), None)
        };

        PendingNode {
            depth: dir.depth,
            node: DocumentNode {
                path: dir.relative.clone(),
                title,
                has_marker: dir.has_marker,
                children: Vec::new(),
                depth: dir.depth,
                body,
            },
        }
    }

    /// Read a marker file and extract its title (and body, when inlining)
    #[instrument(skip(self, dir), fields(path = %dir.path.display()))]
    fn read_marker(&self, dir: &DirDescriptor) -> (String, Option<String>) {
        let marker_path = dir.marker_path(&self.marker);
        let read = std::fs::read(&marker_path);
        self.resolve_marker(dir, &marker_path, read)
    }

    fn resolve_marker(
        &self,
        dir: &DirDescriptor,
        marker_path: &Path,
        read: io::Result<Vec<u8>>,
    ) -> (String, Option<String>) {
        let content = match read {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                warn!(
                    file = %marker_path.display(),
                    error = %e,
                    "Failed to read marker file, using directory name"
                );
                return (title::fallback_title(&dir.name), None);
            }
        };

        let heading = title::find_heading(&content);
        let title = match &heading {
            Some(heading) => {
                if !heading.leading {
                    warn!(
                        file = %marker_path.display(),
                        line = heading.line + 1,
                        "Marker file does not start with a top level heading. Output structure may be malformed."
                    );
                }
                heading.text.clone()
            }
            None => {
                warn!(
                    file = %marker_path.display(),
                    "Marker file has no top level heading, using directory name"
                );
                title::fallback_title(&dir.name)
            }
        };

        let body = self
            .inline_content
            .then(|| title::marker_body(&content, heading.as_ref()));
        (title, body)
    }
}
