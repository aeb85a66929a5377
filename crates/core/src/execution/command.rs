//! Turbo command assembly
//!
//! Argument construction is deterministic and order-sensitive: `run`, the
//! behavioral flags, the task, one `--filter` pair per package filter, then
//! any pass-through flags verbatim.

use std::path::PathBuf;

/// Name of the external turbo executable.
pub const TURBO_BIN: &str = "turbo";

/// Default groups file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "turbo-groups.yaml";

/// Options for loading groups and invoking turbo.
#[derive(Debug, Clone)]
pub struct ExecutionOptions {
    /// Path to the groups config file.
    pub config_file: PathBuf,
    /// Pass `--parallel` so turbo runs matched packages concurrently.
    pub parallel: bool,
    /// Pass `--continue` so turbo keeps executing other packages after one
    /// fails.
    pub continue_on_failure: bool,
    /// Additional turbo flags, appended verbatim after the filters.
    pub extra_flags: Vec<String>,
    /// Base directory for config resolution and the spawned process.
    /// `None` means the process's current working directory.
    pub cwd: Option<PathBuf>,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
            parallel: true,
            continue_on_failure: true,
            extra_flags: Vec::new(),
            cwd: None,
        }
    }
}

/// An assembled turbo invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurboCommand {
    pub args: Vec<String>,
}

impl TurboCommand {
    /// Build the argument vector for running `task` across `filters`.
    pub fn build(task: &str, filters: &[String], options: &ExecutionOptions) -> Self {
        let mut args = vec!["run".to_string()];

        if options.parallel {
            args.push("--parallel".to_string());
        }
        if options.continue_on_failure {
            args.push("--continue".to_string());
        }

        args.push(task.to_string());

        // Each filter gets its own flag/value pair; they are never merged.
        for filter in filters {
            args.push("--filter".to_string());
            args.push(filter.clone());
        }

        args.extend(options.extra_flags.iter().cloned());

        Self { args }
    }

    /// Space-joined diagnostic form, e.g. `turbo run --parallel build`.
    /// Not intended for re-parsing.
    pub fn command_line(&self) -> String {
        format!("{} {}", TURBO_BIN, self.args.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_assembles_full_argument_sequence() {
        let options = ExecutionOptions {
            extra_flags: vec!["--force".to_string()],
            ..ExecutionOptions::default()
        };

        let command = TurboCommand::build("build", &filters(&["@scope/a", "@scope/b"]), &options);

        assert_eq!(
            command.args,
            vec![
                "run",
                "--parallel",
                "--continue",
                "build",
                "--filter",
                "@scope/a",
                "--filter",
                "@scope/b",
                "--force",
            ]
        );
    }

    #[test]
    fn test_omits_behavioral_flags_when_disabled() {
        let options = ExecutionOptions {
            parallel: false,
            continue_on_failure: false,
            ..ExecutionOptions::default()
        };

        let command = TurboCommand::build("build", &filters(&["@scope/a"]), &options);

        assert_eq!(command.args, vec!["run", "build", "--filter", "@scope/a"]);
    }

    #[test]
    fn test_no_filters_yields_bare_task_invocation() {
        let command = TurboCommand::build("dev", &[], &ExecutionOptions::default());

        assert_eq!(command.args, vec!["run", "--parallel", "--continue", "dev"]);
    }

    #[test]
    fn test_filter_order_is_preserved() {
        let command = TurboCommand::build(
            "test",
            &filters(&["@scope/b", "@scope/a", "@scope/b"]),
            &ExecutionOptions::default(),
        );

        let pairs: Vec<&String> = command
            .args
            .iter()
            .skip_while(|a| *a != "--filter")
            .collect();
        assert_eq!(
            pairs,
            vec!["--filter", "@scope/b", "--filter", "@scope/a", "--filter", "@scope/b"]
        );
    }

    #[test]
    fn test_command_line_rendering() {
        let command = TurboCommand::build("build", &filters(&["@scope/a"]), &ExecutionOptions::default());

        assert_eq!(
            command.command_line(),
            "turbo run --parallel --continue build --filter @scope/a"
        );
    }
}
