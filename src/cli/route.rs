//! CLI route: run context that merges flags into config and dispatches.

use crate::api::DocCompiler;
use crate::cli::parse::{Cli, ListFormat};
use crate::cli::presentation::{format_node_table, format_nodes_json};
use crate::config::{ArchConfig, ConfigLoader};
use crate::error::ApiError;
use std::path::PathBuf;
use tracing::{debug, info};

/// What a run produced
#[derive(Debug, PartialEq, Eq)]
pub enum RunOutput {
    /// Text for standard output
    Stdout(String),
    /// Document written to a file
    Written { path: PathBuf, sections: usize },
}

/// Runtime context for CLI execution: scan root plus the effective config.
pub struct RunContext {
    root: PathBuf,
    config: ArchConfig,
}

impl RunContext {
    /// Load configuration for the CLI's root and apply flag overrides
    pub fn new(cli: &Cli) -> Result<Self, ApiError> {
        let mut config = match cli.config {
            Some(ref cfg_path) => ConfigLoader::load_from_file(cfg_path)?,
            None => ConfigLoader::load(&cli.path)?,
        };
        apply_overrides(&mut config, cli);
        debug!(root = %cli.path.display(), "Run context initialized");

        Ok(Self {
            root: cli.path.clone(),
            config,
        })
    }

    /// Build a context from an already resolved configuration
    pub fn with_config(root: PathBuf, config: ArchConfig) -> Self {
        Self { root, config }
    }

    pub fn config(&self) -> &ArchConfig {
        &self.config
    }

    /// Execute the run described by the CLI flags
    pub fn execute(&self, cli: &Cli) -> Result<RunOutput, ApiError> {
        if cli.print_config {
            return self.config.to_toml().map(RunOutput::Stdout);
        }

        let compiler = DocCompiler::new(self.root.clone(), self.config.clone())?;

        if cli.list {
            let tree = compiler.build_tree()?;
            let marker = &self.config.compile.marker;
            let listing = match cli.format {
                ListFormat::Text => format_node_table(&tree, marker),
                ListFormat::Json => format_nodes_json(&tree, marker)?,
            };
            return Ok(RunOutput::Stdout(listing));
        }

        let tree = compiler.build_tree()?;
        let document = compiler.render(&tree);

        match self.config.compile.out {
            Some(ref out) => {
                if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        ApiError::OutputError(format!("{}: {}", parent.display(), e))
                    })?;
                }
                std::fs::write(out, &document)
                    .map_err(|e| ApiError::OutputError(format!("{}: {}", out.display(), e)))?;
                let sections = tree
                    .iter()
                    .filter(|n| self.config.compile.include_root || n.depth > 0)
                    .count();
                info!(path = %out.display(), sections, "Wrote overview");
                Ok(RunOutput::Written {
                    path: out.clone(),
                    sections,
                })
            }
            None => Ok(RunOutput::Stdout(document)),
        }
    }
}

/// Apply CLI flags on top of the loaded configuration (flags win)
pub fn apply_overrides(config: &mut ArchConfig, cli: &Cli) {
    if let Some(ref readme) = cli.readme {
        config.compile.marker = readme.clone();
    }
    if cli.include_root {
        config.compile.include_root = true;
    }
    if let Some(ref title) = cli.title {
        config.compile.title = title.clone();
    }
    if let Some(ref out) = cli.out {
        config.compile.out = Some(out.clone());
    }
    if cli.toc {
        config.render.table_of_contents = true;
    }
    if cli.inline {
        config.render.inline_content = true;
    }
    if let Some(depth) = cli.max_heading_depth {
        config.render.max_heading_depth = depth;
    }
    if cli.include_hidden {
        config.walker.skip_hidden = false;
    }
    for name in &cli.ignore {
        if !config.walker.ignore_patterns.contains(name) {
            config.walker.ignore_patterns.push(name.clone());
        }
    }
    if cli.max_depth.is_some() {
        config.walker.max_depth = cli.max_depth;
    }
}
