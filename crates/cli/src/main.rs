use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use turbo_group_core::{ExecutionOptions, GroupManager, DEFAULT_CONFIG_FILE};

mod commands;

/// tg - Run turbo tasks across named groups of packages
#[derive(Parser)]
#[command(name = "tg")]
#[command(about = "Run a turbo task for a named group of packages")]
#[command(version)]
struct Cli {
    /// Path to the groups config file (resolved against --cwd)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Working directory for config resolution and the turbo process
    /// (defaults to the current directory)
    #[arg(long)]
    cwd: Option<PathBuf>,

    /// Do not pass --parallel to turbo
    #[arg(long)]
    no_parallel: bool,

    /// Do not pass --continue to turbo
    #[arg(long)]
    no_continue: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the groups defined in the config file
    List,
    // tg <group> <task> [turbo-flags...]
    #[command(external_subcommand)]
    Run(Vec<String>),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    let mut options = ExecutionOptions {
        config_file: cli.config,
        parallel: !cli.no_parallel,
        continue_on_failure: !cli.no_continue,
        extra_flags: Vec::new(),
        cwd: cli.cwd,
    };

    match cli.command {
        Commands::List => {
            let manager = GroupManager::new(options);
            match commands::list::execute(&manager) {
                Ok(()) => ExitCode::SUCCESS,
                Err(error) => report_error(error),
            }
        }
        Commands::Run(mut args) => {
            if args.len() < 2 {
                print_usage();
                return ExitCode::from(1);
            }

            let task = args.remove(1);
            let group = args.remove(0);
            options.extra_flags = args;

            let manager = GroupManager::new(options);
            match commands::run::execute(&manager, &group, &task).await {
                Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
                Err(error) => report_error(error),
            }
        }
    }
}

fn report_error(error: anyhow::Error) -> ExitCode {
    eprintln!("Error: {}", error);
    ExitCode::from(1)
}

fn print_usage() {
    eprintln!("Usage: tg <group> <task> [turbo-flags...]");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  tg dev dev");
    eprintln!("  tg backend test --force");
    eprintln!();
    eprintln!("List available groups:");
    eprintln!("  tg list");
}
