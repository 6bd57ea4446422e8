//! Filesystem walker for discovering documented directories
//!
//! The walker yields one [`DirDescriptor`] per directory, lazily and in
//! depth-first pre-order, with siblings sorted by name. Each descriptor lists
//! the directory's immediate subdirectories and whether the marker file is
//! present directly inside it.

use crate::error::TreeError;
use crate::tree::path;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// One directory visited by the walker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirDescriptor {
    /// Path as reachable from the process (scan root joined with `relative`)
    pub path: PathBuf,
    /// Path relative to the scan root; empty for the root itself
    pub relative: PathBuf,
    /// Distance from the scan root (0 for the root)
    pub depth: usize,
    /// Directory base name
    pub name: String,
    /// Names of traversable immediate subdirectories, ascending
    pub subdirs: Vec<String>,
    /// Whether the marker file exists directly inside this directory
    pub has_marker: bool,
}

impl DirDescriptor {
    /// Location of the marker file inside this directory
    pub fn marker_path(&self, marker: &str) -> PathBuf {
        self.path.join(marker)
    }
}

/// Filesystem walker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false)
    #[serde(default)]
    pub follow_symlinks: bool,
    /// Skip directories whose name starts with `.` (default: true)
    #[serde(default = "default_true")]
    pub skip_hidden: bool,
    /// Directory names that are never traversed
    #[serde(default = "default_ignore_patterns")]
    pub ignore_patterns: Vec<String>,
    /// Maximum depth to traverse (None = unlimited)
    #[serde(default)]
    pub max_depth: Option<usize>,
}

fn default_true() -> bool {
    true
}

fn default_ignore_patterns() -> Vec<String> {
    vec![
        ".git".to_string(),
        "target".to_string(),
        "node_modules".to_string(),
        ".cargo".to_string(),
    ]
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            skip_hidden: default_true(),
            ignore_patterns: default_ignore_patterns(),
            max_depth: None,
        }
    }
}

impl WalkerConfig {
    /// Whether a directory name is excluded from traversal
    pub fn excludes(&self, name: &str) -> bool {
        (self.skip_hidden && name.starts_with('.'))
            || self.ignore_patterns.iter().any(|pattern| pattern == name)
    }
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    marker: String,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root and marker file name
    pub fn new(root: PathBuf, marker: impl Into<String>) -> Self {
        Self {
            root,
            marker: marker.into(),
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, marker: impl Into<String>, config: WalkerConfig) -> Self {
        Self {
            root,
            marker: marker.into(),
            config,
        }
    }

    /// Root this walker was created for
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Start a walk over the subtree.
    ///
    /// Fails only when the root does not exist or is not a directory. The
    /// returned sequence is lazy; calling `walk` again restarts it from the
    /// root.
    pub fn walk(&self) -> Result<DirWalk<'_>, TreeError> {
        let metadata = fs::metadata(&self.root).map_err(|source| TreeError::RootNotFound {
            path: self.root.clone(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(TreeError::NotADirectory(self.root.clone()));
        }

        let inner = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX))
            .sort_by_file_name()
            .into_iter();

        Ok(DirWalk {
            walker: self,
            inner,
        })
    }

    /// Describe a single directory: its subdirectories and marker presence.
    ///
    /// Unreadable directories are reported as empty and marker-less.
    fn describe(&self, entry: &DirEntry) -> DirDescriptor {
        let dir_path = entry.path().to_path_buf();
        let depth = entry.depth();
        let relative = dir_path
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let name = if depth == 0 {
            path::display_name(&dir_path)
        } else {
            entry.file_name().to_string_lossy().to_string()
        };

        let at_max_depth = self.config.max_depth.is_some_and(|max| depth >= max);
        let (subdirs, has_marker) = match self.list_directory(&dir_path, at_max_depth) {
            Ok(listing) => listing,
            Err(e) => {
                warn!(
                    path = %dir_path.display(),
                    error = %e,
                    "Unreadable directory treated as empty"
                );
                (Vec::new(), false)
            }
        };

        debug!(
            path = %dir_path.display(),
            depth,
            subdirs = subdirs.len(),
            has_marker,
            "Visited directory"
        );

        DirDescriptor {
            path: dir_path,
            relative,
            depth,
            name,
            subdirs,
            has_marker,
        }
    }

    fn list_directory(
        &self,
        dir_path: &Path,
        at_max_depth: bool,
    ) -> Result<(Vec<String>, bool), std::io::Error> {
        let mut subdirs = Vec::new();
        let mut has_marker = false;

        for entry in fs::read_dir(dir_path)? {
            let entry = entry?;
            let file_name = entry.file_name().to_string_lossy().to_string();
            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(_) => continue,
            };

            // A symlinked marker counts when it resolves to a regular file
            if file_name == self.marker
                && fs::metadata(entry.path())
                    .map(|m| m.is_file())
                    .unwrap_or(false)
            {
                has_marker = true;
                continue;
            }

            let is_dir = if file_type.is_symlink() {
                self.config.follow_symlinks
                    && fs::metadata(entry.path())
                        .map(|m| m.is_dir())
                        .unwrap_or(false)
            } else {
                file_type.is_dir()
            };

            if is_dir && !at_max_depth && !self.config.excludes(&file_name) {
                subdirs.push(file_name);
            }
        }

        subdirs.sort();
        Ok((subdirs, has_marker))
    }
}

/// Lazy pre-order sequence of directory descriptors
pub struct DirWalk<'a> {
    walker: &'a Walker,
    inner: walkdir::IntoIter,
}

impl Iterator for DirWalk<'_> {
    type Item = DirDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    // Errors surface after the directory itself was yielded;
                    // its descriptor already records it as empty.
                    debug!(error = %e, "Skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            if entry.depth() > 0 {
                let name = entry.file_name().to_string_lossy();
                if self.walker.config.excludes(&name) {
                    self.inner.skip_current_dir();
                    continue;
                }
            }

            return Some(self.walker.describe(&entry));
        }
    }
}
