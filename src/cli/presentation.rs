//! CLI presentation: text and json formatters for listings and summaries.

use crate::error::ApiError;
use crate::tree::node::DocumentTree;
use crate::tree::path;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;

/// One row of a documentation listing
#[derive(Debug, Serialize)]
struct NodeRow {
    path: String,
    title: String,
    depth: usize,
    link: Option<String>,
}

fn rows(tree: &DocumentTree, marker: &str) -> Vec<NodeRow> {
    tree.iter()
        .map(|node| NodeRow {
            path: path::display_relative(&node.path),
            title: node.title.clone(),
            depth: node.depth,
            link: node.link(marker),
        })
        .collect()
}

/// Format discovered nodes as a table, indented by depth
pub fn format_node_table(tree: &DocumentTree, marker: &str) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Path", "Title", "Marker"]);
    for row in rows(tree, marker) {
        let indent = "  ".repeat(row.depth);
        table.add_row(vec![
            format!("{}{}", indent, row.path),
            row.title,
            row.link.unwrap_or_else(|| "-".to_string()),
        ]);
    }
    format!("{}", table)
}

/// Format discovered nodes as a JSON array in pre-order
pub fn format_nodes_json(tree: &DocumentTree, marker: &str) -> Result<String, ApiError> {
    serde_json::to_string_pretty(&rows(tree, marker))
        .map_err(|e| ApiError::OutputError(format!("Failed to serialize listing: {}", e)))
}

/// One-line summary printed to stderr after writing an output file
pub fn format_write_summary(out: &Path, sections: usize) -> String {
    format!(
        "{} {} ({} section{})",
        "Wrote".green().bold(),
        out.display(),
        sections,
        if sections == 1 { "" } else { "s" }
    )
}
