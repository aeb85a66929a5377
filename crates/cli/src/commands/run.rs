use anyhow::Result;
use turbo_group_core::GroupManager;

/// Run `task` for the named group and map the outcome to a process exit code.
///
/// A nonzero exit from turbo itself is relayed as-is; only loading errors
/// (missing config, unknown group) bubble up as errors.
pub async fn execute(manager: &GroupManager, group: &str, task: &str) -> Result<i32> {
    let result = manager.run_group(group, task).await?;

    Ok(if result.success { 0 } else { result.exit_code })
}
