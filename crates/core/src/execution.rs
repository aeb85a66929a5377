//! Turbo execution module
//!
//! This module handles turbo command assembly and child process launching
//! with consistent exit status reporting.

pub mod command;
pub mod runner;

pub use command::{ExecutionOptions, TurboCommand};
pub use runner::execute_turbo;
