//! Property-based tests for the documentation tree compiler

mod determinism;
mod title_extraction;
