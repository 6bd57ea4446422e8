//! CLI domain: parse, route, output, and presentation only.
//! Compilation itself lives in the library; the route table only wires config to it.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::{exit_code, map_error};
pub use parse::{Cli, ListFormat};
pub use presentation::{format_node_table, format_nodes_json, format_write_summary};
pub use route::{RunContext, RunOutput};
