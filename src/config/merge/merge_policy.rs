//! Merge rules: defaults, override order, conflict handling.

use crate::render::{DEFAULT_TITLE, MAX_HEADING_LEVEL};
use crate::tree::builder::DEFAULT_MARKER;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Later sources replace whole values; lists such as
/// `walker.ignore_patterns` are never concatenated across layers.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("compile.marker", DEFAULT_MARKER)?
        .set_default("compile.include_root", false)?
        .set_default("compile.title", DEFAULT_TITLE)?
        .set_default("render.max_heading_depth", MAX_HEADING_LEVEL as i64)?
        .set_default("render.table_of_contents", false)?
        .set_default("render.inline_content", false)
}
