//! Tree renderer: serializes a documentation tree into one markdown document

use crate::tree::builder::DEFAULT_MARKER;
use crate::tree::node::{DocumentNode, DocumentTree};
use crate::tree::{path, title};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Deepest heading level markdown supports
pub const MAX_HEADING_LEVEL: usize = 6;

/// Default banner title
pub const DEFAULT_TITLE: &str = "Project Root";

/// Rendering options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Banner heading text
    pub title: String,
    /// Emit the root node's own section
    pub include_root: bool,
    /// Marker file name used for link targets
    pub marker: String,
    /// Heading levels deeper than this are clamped
    pub max_heading_depth: usize,
    /// Emit a table of contents with in-document anchors
    pub table_of_contents: bool,
    /// Copy each marker's body below its heading
    pub inline_content: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            include_root: false,
            marker: DEFAULT_MARKER.to_string(),
            max_heading_depth: MAX_HEADING_LEVEL,
            table_of_contents: false,
            inline_content: false,
        }
    }
}

/// Serializes documentation trees
pub struct TreeRenderer {
    options: RenderOptions,
}

impl TreeRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Markdown heading level for a node at `depth`.
    ///
    /// Level is `depth + 1` so children render one level below their parent,
    /// and the root (when included) shares level 1 with the banner.
    pub fn heading_level(&self, depth: usize) -> usize {
        (depth + 1).min(self.max_level())
    }

    fn max_level(&self) -> usize {
        self.options.max_heading_depth.clamp(1, MAX_HEADING_LEVEL)
    }

    /// Render the whole document
    pub fn render(&self, tree: &DocumentTree) -> String {
        let mut out = format!("# {}\n", self.options.title);

        let nodes = self.visible_nodes(tree);
        let anchors = unique_anchors(&nodes);

        if self.options.table_of_contents && nodes.iter().any(|n| n.depth > 0) {
            out.push('\n');
            for (node, anchor) in nodes.iter().zip(&anchors) {
                if node.depth == 0 {
                    continue;
                }
                out.push_str(&format!(
                    "{}- [{}](#{})\n",
                    "  ".repeat(node.depth - 1),
                    escape_link_text(&node.title),
                    anchor
                ));
            }
        }

        for (node, anchor) in nodes.iter().zip(&anchors) {
            self.render_node(&mut out, node, anchor);
        }

        out
    }

    fn visible_nodes<'a>(&self, tree: &'a DocumentTree) -> Vec<&'a DocumentNode> {
        tree.iter()
            .filter(|node| self.options.include_root || node.depth > 0)
            .collect()
    }

    fn render_node(&self, out: &mut String, node: &DocumentNode, anchor: &str) {
        if self.options.table_of_contents && node.depth > 0 {
            out.push_str(&format!("\n<a name=\"{}\"></a>\n", anchor));
        }

        let level = self.heading_level(node.depth);
        out.push_str(&format!("\n{} {}\n", "#".repeat(level), node.title));

        if let Some(link) = node.link(&self.options.marker) {
            out.push_str(&format!("\n[{}]({})\n", link, link_destination(&link)));
        }

        if self.options.inline_content {
            if let Some(body) = node.body.as_deref().filter(|b| !b.is_empty()) {
                let body = title::shift_headings(body, level - 1, self.max_level());
                out.push_str(&format!("\n{}\n", body));
            }
        }
    }
}

/// Anchor per node, in order. Nodes whose path maps to an anchor already
/// taken (`a-b` after `a/b`) get the first free numeric suffix. The root
/// has no anchor.
fn unique_anchors(nodes: &[&DocumentNode]) -> Vec<String> {
    let mut taken = HashSet::new();
    nodes
        .iter()
        .map(|node| {
            if node.depth == 0 {
                return String::new();
            }
            let base = path::anchor_name(&node.path);
            let mut anchor = base.clone();
            let mut suffix = 1;
            while !taken.insert(anchor.clone()) {
                anchor = format!("{}-{}", base, suffix);
                suffix += 1;
            }
            anchor
        })
        .collect()
}

/// Escape brackets so a title cannot close the link text early
fn escape_link_text(text: &str) -> String {
    text.replace('[', "\\[").replace(']', "\\]")
}

/// Wrap destinations containing whitespace in angle brackets
fn link_destination(link: &str) -> String {
    if link.chars().any(char::is_whitespace) {
        format!("<{}>", link)
    } else {
        link.to_string()
    }
}
