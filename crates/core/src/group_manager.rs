//! High-level group running interface
//!
//! This module provides the [`GroupManager`] which composes group loading and
//! turbo execution into the two public operations: run a task for a named
//! group, and list the known groups.
//!
//! The manager holds only its options. The group table is loaded fresh on
//! every call and discarded when the call completes; nothing is cached across
//! invocations.
//!
//! ## Example
//!
//! ```rust,no_run
//! use turbo_group_core::execution::command::ExecutionOptions;
//! use turbo_group_core::group_manager::GroupManager;
//!
//! # async fn example() -> turbo_group_core::types::TurboGroupResult<()> {
//! let manager = GroupManager::new(ExecutionOptions::default());
//!
//! let groups = manager.list_groups()?;
//! let result = manager.run_group("backend", "build").await?;
//! # Ok(())
//! # }
//! ```

use std::env;
use std::path::PathBuf;

use crate::configs::groups::GroupsFileConfig;
use crate::execution::command::ExecutionOptions;
use crate::execution::runner::execute_turbo;
use crate::loader::load_groups;
use crate::results::ExecutionResult;
use crate::types::{TurboGroupError, TurboGroupResult};

/// Facade over group loading and turbo execution
pub struct GroupManager {
    options: ExecutionOptions,
}

impl GroupManager {
    pub fn new(options: ExecutionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExecutionOptions {
        &self.options
    }

    /// Load the group table fresh from the config file.
    ///
    /// A read-only introspection operation with no process side effects.
    pub fn list_groups(&self) -> TurboGroupResult<GroupsFileConfig> {
        load_groups(&self.options.config_file, &self.base_dir()?)
    }

    /// Run `task` for every package filter in the named group.
    ///
    /// Fails with [`TurboGroupError::GroupNotFound`] if the group is absent
    /// from the table; the error message enumerates the known group names.
    pub async fn run_group(
        &self,
        group_name: &str,
        task: &str,
    ) -> TurboGroupResult<ExecutionResult> {
        let groups = self.list_groups()?;

        let Some(group) = groups.get(group_name) else {
            return Err(TurboGroupError::GroupNotFound {
                group: group_name.to_string(),
                config_file: self.options.config_file.display().to_string(),
                available: available_names(&groups),
            });
        };

        Ok(execute_turbo(task, &group.filters, &self.options).await)
    }

    /// The base directory for config resolution: the configured working
    /// directory, or the process's current one. Resolved once per call.
    fn base_dir(&self) -> TurboGroupResult<PathBuf> {
        match &self.options.cwd {
            Some(dir) => Ok(dir.clone()),
            None => Ok(env::current_dir()?),
        }
    }
}

fn available_names(groups: &GroupsFileConfig) -> String {
    if groups.is_empty() {
        "(none)".to_string()
    } else {
        groups.names().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn manager_for(dir: &Path) -> GroupManager {
        GroupManager::new(ExecutionOptions {
            cwd: Some(dir.to_path_buf()),
            ..ExecutionOptions::default()
        })
    }

    #[test]
    fn test_list_groups_loads_the_table() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            temp_dir.path().join("turbo-groups.yaml"),
            "dev:\n  - @scope/app\nbackend:\n  - @scope/api\n",
        )
        .unwrap();

        let groups = manager_for(temp_dir.path()).list_groups().unwrap();

        assert_eq!(groups.names(), vec!["dev", "backend"]);
    }

    #[tokio::test]
    async fn test_run_group_unknown_name_lists_available_groups() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            temp_dir.path().join("turbo-groups.yaml"),
            "dev:\n  - @scope/app\nbackend:\n  - @scope/api\n",
        )
        .unwrap();

        let error = manager_for(temp_dir.path())
            .run_group("missing", "build")
            .await
            .unwrap_err();

        match &error {
            TurboGroupError::GroupNotFound { group, available, .. } => {
                assert_eq!(group, "missing");
                assert_eq!(available, "dev, backend");
            }
            other => panic!("expected GroupNotFound, got {:?}", other),
        }
        assert!(error.to_string().contains("Available groups: dev, backend"));
    }

    #[tokio::test]
    async fn test_run_group_against_empty_table_reports_none() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("turbo-groups.yaml"), "# no groups yet\n").unwrap();

        let error = manager_for(temp_dir.path())
            .run_group("dev", "build")
            .await
            .unwrap_err();

        assert!(
            error.to_string().contains("Available groups: (none)"),
            "an empty table should report an explicit (none) marker"
        );
    }

    #[tokio::test]
    async fn test_run_group_missing_config_propagates_not_found() {
        let temp_dir = tempfile::tempdir().unwrap();

        let error = manager_for(temp_dir.path())
            .run_group("dev", "build")
            .await
            .unwrap_err();

        assert!(matches!(error, TurboGroupError::ConfigNotFound(_)));
    }
}
