//! CLI parse: clap types for archmd. No behavior; definitions only.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// archmd - compile per-directory READMEs into one architecture overview
#[derive(Parser, Debug)]
#[command(name = "archmd")]
#[command(about = "Compile per-directory README files into a single architecture overview")]
pub struct Cli {
    /// Input directory
    pub path: PathBuf,

    /// Readme file name
    #[arg(long)]
    pub readme: Option<String>,

    /// Include root readme in output
    #[arg(long)]
    pub include_root: bool,

    /// Output file path. Outputs to stdout if omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Output file title
    #[arg(long)]
    pub title: Option<String>,

    /// Emit a table of contents after the title
    #[arg(long)]
    pub toc: bool,

    /// Copy each README's body into the output below its heading
    #[arg(long)]
    pub inline: bool,

    /// Deepest heading level to emit (1-6)
    #[arg(long)]
    pub max_heading_depth: Option<usize>,

    /// Traverse directories whose name starts with '.'
    #[arg(long)]
    pub include_hidden: bool,

    /// Additional directory names to skip (repeatable)
    #[arg(long = "ignore", value_name = "NAME")]
    pub ignore: Vec<String>,

    /// Maximum directory depth to traverse
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// List discovered documentation instead of compiling it
    #[arg(long)]
    pub list: bool,

    /// Listing format
    #[arg(long, value_enum, default_value_t = ListFormat::Text)]
    pub format: ListFormat,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Output format for `--list`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Text,
    Json,
}
