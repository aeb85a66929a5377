//! Turbo Group Core Library
//!
//! This is the core library for the `tg` tool. It lets a monorepo define
//! named groups of packages in a small config file and run a single turbo
//! task across all packages in a group by translating the group into a set
//! of `--filter` arguments for the turbo executable.
//!
//! ## Architecture
//!
//! - [`group_manager`] - High-level group running interface
//! - [`execution`] - Turbo command assembly and process launching
//! - [`loader`] - Config file resolution and reading
//! - [`configs`] - Groups file parsing
//! - [`results`] - Result types for group operations
//! - [`types`] - Common error types and type aliases
//!
//! ## Usage
//!
//! The primary entry point is the [`GroupManager`]:
//!
//! ```rust,no_run
//! use turbo_group_core::{ExecutionOptions, GroupManager};
//!
//! # async fn example() -> turbo_group_core::TurboGroupResult<()> {
//! let manager = GroupManager::new(ExecutionOptions::default());
//! let result = manager.run_group("backend", "build").await?;
//! # Ok(())
//! # }
//! ```

pub mod configs;
pub mod execution;
pub mod group_manager;
pub mod loader;
pub mod results;
pub mod types;

// Re-export the main types for easier usage
pub use configs::groups::{parse_groups_config, GroupConfig, GroupsFileConfig};
pub use execution::command::{ExecutionOptions, TurboCommand, DEFAULT_CONFIG_FILE};
pub use group_manager::GroupManager;
pub use results::ExecutionResult;
pub use types::{TurboGroupError, TurboGroupResult};
