//! Documentation Tree
//!
//! Mirrors the scanned directory hierarchy, keeping only directories that
//! hold a marker file or have a descendant that does.

pub mod builder;
pub mod node;
pub mod path;
pub mod title;
pub mod walker;
