//! Turbo process launching
//!
//! Spawns the turbo executable with inherited standard streams and relays its
//! exit status. The user sees turbo's own output live; this layer only prints
//! the command line before launch. Launch failures never surface as errors;
//! they are folded into the returned [`ExecutionResult`].

use std::path::Path;

use colored::*;
use tokio::process::Command;

use crate::execution::command::{ExecutionOptions, TurboCommand, TURBO_BIN};
use crate::results::ExecutionResult;

/// Run `task` through turbo for the given package filters.
///
/// Waits for the child to exit, with no timeout. Exactly one outcome is
/// produced per call: the child's exit status, or a launch-failure result
/// with exit code 1.
pub async fn execute_turbo(
    task: &str,
    filters: &[String],
    options: &ExecutionOptions,
) -> ExecutionResult {
    let command = TurboCommand::build(task, filters, options);
    let command_line = command.command_line();

    println!("> {}", command_line.cyan());

    run_process(TURBO_BIN, &command.args, options.cwd.as_deref(), command_line).await
}

/// Launch `program` and wait for it to terminate.
async fn run_process(
    program: &str,
    args: &[String],
    cwd: Option<&Path>,
    command_line: String,
) -> ExecutionResult {
    let mut command = spawn_command(program);
    command.args(args);
    if let Some(dir) = cwd {
        command.current_dir(dir);
    }

    match command.status().await {
        Ok(status) => ExecutionResult {
            success: status.code() == Some(0),
            // Termination without a numeric code (e.g. by signal) is not
            // treated as a failure of this layer.
            exit_code: status.code().unwrap_or(0),
            command: command_line,
        },
        Err(error) => {
            eprintln!(
                "{}",
                format!("Failed to execute {} task: {}", program, error).red()
            );
            ExecutionResult {
                success: false,
                exit_code: 1,
                command: command_line,
            }
        }
    }
}

/// On Windows executable resolution happens in the shell, so the invocation
/// goes through `cmd /C`; elsewhere the program is spawned directly.
fn spawn_command(program: &str) -> Command {
    if cfg!(windows) {
        let mut command = Command::new("cmd");
        command.arg("/C").arg(program);
        command
    } else {
        Command::new(program)
    }
}
