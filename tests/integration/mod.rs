//! Integration tests for the documentation tree compiler

mod compile_scenario;
mod config_integration;
mod test_utils;
mod tree_determinism;
