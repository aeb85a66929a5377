//! Result types for group operations
//!
//! This module contains the result types returned by execution operations,
//! providing a centralized location for output structures.

/// Result of invoking turbo for a group of packages.
///
/// A nonzero exit from a successfully launched child is a normal outcome
/// carrying `success = false`, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Whether the underlying process exited with code 0.
    pub success: bool,
    /// The child's exit code. 1 when the process could not be started at
    /// all, 0 when it terminated without reporting a code.
    pub exit_code: i32,
    /// The fully assembled command line, for diagnostics only.
    pub command: String,
}
