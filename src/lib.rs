//! archmd: Documentation Tree Compiler
//!
//! Discovers per-directory documentation files (by default `README.md`)
//! across a project and compiles them into one overview document whose
//! headings mirror the folder structure.
//!
//! ```no_run
//! use archmd::config::ArchConfig;
//! use std::path::Path;
//!
//! let overview = archmd::api::compile(Path::new("."), &ArchConfig::default())?;
//! println!("{}", overview);
//! # Ok::<(), archmd::error::ApiError>(())
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod tree;
