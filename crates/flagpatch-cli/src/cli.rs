//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// flagpatch - Toggle test feature flags in a C/C++ header
///
/// Rewrites commented-out `#define` lines (by default `TESTENABLE` and
/// `TESTS` in ../include/tester.h) so the next build compiles the test
/// binary.
#[derive(Parser, Debug)]
#[command(name = "flagpatch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (.toml, .json, .yaml); defaults to ./flagpatch.toml if present
    #[arg(short, long, global = true, env = "FLAGPATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Header file to patch, overriding the config
    #[arg(long, global = true)]
    pub header: Option<PathBuf>,

    /// Flag to toggle (repeatable), overriding the config
    #[arg(short = 'f', long = "flag", global = true)]
    pub flags: Vec<String>,

    /// The command to run (defaults to `enable`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Uncomment the flag defines
    ///
    /// Examples:
    ///   flagpatch                          # enable TESTENABLE and TESTS
    ///   flagpatch enable --dry-run         # show the diff only
    ///   flagpatch --header include/tester.h -f DEBUG enable
    Enable {
        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Comment the flag defines back out
    Disable {
        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show whether each flag is enabled
    Status {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
