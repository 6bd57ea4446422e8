//! Configuration System
//!
//! Layered configuration for the compiler: built-in defaults, then the global
//! config file, then the workspace `archmd.toml`, then `ARCHMD__*` environment
//! variables. CLI flags are applied on top by the caller.

use crate::logging::LoggingConfig;
use crate::render::{RenderOptions, DEFAULT_TITLE, MAX_HEADING_LEVEL};
use crate::tree::builder::DEFAULT_MARKER;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use crate::tree::walker::WalkerConfig;
pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArchConfig {
    /// What to compile and how the banner reads
    #[serde(default)]
    pub compile: CompileConfig,

    /// Directory traversal rules
    #[serde(default)]
    pub walker: WalkerConfig,

    /// Output layout
    #[serde(default)]
    pub render: RenderConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Compile inputs shared by the builder and renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompileConfig {
    /// Marker file name that marks a directory as documented
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Emit the scan root's own section
    #[serde(default)]
    pub include_root: bool,

    /// Banner heading of the generated document
    #[serde(default = "default_title")]
    pub title: String,

    /// Output file; stdout when unset
    #[serde(default)]
    pub out: Option<PathBuf>,
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            include_root: false,
            title: default_title(),
            out: None,
        }
    }
}

/// Output layout settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Deepest heading level emitted (1-6)
    #[serde(default = "default_max_heading_depth")]
    pub max_heading_depth: usize,

    /// Emit a table of contents after the banner
    #[serde(default)]
    pub table_of_contents: bool,

    /// Copy each marker's body into the overview
    #[serde(default)]
    pub inline_content: bool,
}

fn default_max_heading_depth() -> usize {
    MAX_HEADING_LEVEL
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_heading_depth: default_max_heading_depth(),
            table_of_contents: false,
            inline_content: false,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Compile(String),
    Render(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Compile(msg) => write!(f, "compile: {}", msg),
            ValidationError::Render(msg) => write!(f, "render: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl CompileConfig {
    /// Validate compile settings
    pub fn validate(&self) -> Result<(), String> {
        if self.marker.trim().is_empty() {
            return Err("Marker file name cannot be empty".to_string());
        }
        if self.marker.contains('/') || self.marker.contains('\\') {
            return Err(format!(
                "Marker file name must not contain a path separator: {}",
                self.marker
            ));
        }
        Ok(())
    }
}

impl RenderConfig {
    /// Validate render settings
    pub fn validate(&self) -> Result<(), String> {
        if self.max_heading_depth == 0 {
            return Err("max_heading_depth must be at least 1".to_string());
        }
        Ok(())
    }
}

impl ArchConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.compile.validate() {
            errors.push(ValidationError::Compile(e));
        }
        if let Err(e) = self.render.validate() {
            errors.push(ValidationError::Render(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Renderer options derived from this configuration
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            title: self.compile.title.clone(),
            include_root: self.compile.include_root,
            marker: self.compile.marker.clone(),
            max_heading_depth: self.render.max_heading_depth,
            table_of_contents: self.render.table_of_contents,
            inline_content: self.render.inline_content,
        }
    }

    /// Effective configuration rendered as TOML
    pub fn to_toml(&self) -> Result<String, crate::error::ApiError> {
        toml::to_string_pretty(self)
            .map_err(|e| crate::error::ApiError::ConfigError(format!("Failed to serialize config: {}", e)))
    }
}
