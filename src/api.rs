//! Compile API
//!
//! Single entry point used by the CLI: build the documentation tree for a
//! scan root and render it with an immutable configuration.

use crate::config::ArchConfig;
use crate::error::ApiError;
use crate::render::TreeRenderer;
use crate::tree::builder::TreeBuilder;
use crate::tree::node::DocumentTree;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Documentation compiler bound to one scan root
pub struct DocCompiler {
    root: PathBuf,
    config: ArchConfig,
}

impl DocCompiler {
    /// Create a compiler; the configuration is validated up front
    pub fn new(root: PathBuf, config: ArchConfig) -> Result<Self, ApiError> {
        config.validate().map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                messages.join("\n")
            ))
        })?;
        Ok(Self { root, config })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &ArchConfig {
        &self.config
    }

    /// Build the pruned documentation tree
    pub fn build_tree(&self) -> Result<DocumentTree, ApiError> {
        let tree = TreeBuilder::new(self.root.clone())
            .with_marker(&self.config.compile.marker)
            .with_walker_config(self.config.walker.clone())
            .with_inline_content(self.config.render.inline_content)
            .build()?;
        Ok(tree)
    }

    /// Render an already built tree
    pub fn render(&self, tree: &DocumentTree) -> String {
        TreeRenderer::new(self.config.render_options()).render(tree)
    }

    /// Build and render in one step
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn compile(&self) -> Result<String, ApiError> {
        let tree = self.build_tree()?;
        let document = self.render(&tree);
        info!(
            nodes = tree.len(),
            bytes = document.len(),
            "Compiled documentation overview"
        );
        Ok(document)
    }
}

/// Compile the overview for `root` with `config`
pub fn compile(root: &Path, config: &ArchConfig) -> Result<String, ApiError> {
    DocCompiler::new(root.to_path_buf(), config.clone())?.compile()
}
