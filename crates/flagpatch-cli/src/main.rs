//! flagpatch CLI
//!
//! Toggles test feature-flag defines in a header so the next native build
//! compiles the test binary.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use context::{Overrides, PatchContext};
use error::Result;
use flagpatch_core::Direction;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let cwd = std::env::current_dir()?;
    let overrides = Overrides {
        config: cli.config,
        header: cli.header,
        flags: cli.flags,
    };
    let ctx = PatchContext::resolve(&cwd, &overrides)?;

    let command = cli.command.unwrap_or(Commands::Enable {
        dry_run: false,
        json: false,
    });
    execute_command(&ctx, command)
}

/// Install a stderr subscriber when `-v` is given or `RUST_LOG` is set.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        EnvFilter::from_default_env()
    } else {
        return;
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
    if installed.is_ok() {
        tracing::debug!("Verbose mode enabled");
    }
}

fn execute_command(ctx: &PatchContext, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Enable { dry_run, json } => {
            commands::run_toggle(ctx, Direction::Enable, dry_run, json)
        }
        Commands::Disable { dry_run, json } => {
            commands::run_toggle(ctx, Direction::Disable, dry_run, json)
        }
        Commands::Status { json } => commands::run_status(ctx, json),
    }
}
