//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    format!("error: {}", e)
}

/// Process exit status for a failed run.
///
/// A missing or non-directory root gets its own status so scripts can tell
/// it apart from configuration and output failures.
pub fn exit_code(e: &ApiError) -> i32 {
    match e {
        ApiError::Tree(tree_err) if tree_err.is_root_not_found() => 2,
        _ => 1,
    }
}
