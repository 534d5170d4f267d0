//! Command-line interface for gomod-tree.
//!
//! # Available Commands
//!
//! - `tree` - indented dependency tree plus the list of modules missing locally
//! - `graph` - deduplicated index graph as JSON
//!
//! # Global Options
//!
//! - `--module-path` - project directory (default: current directory)
//! - `--gopath` - module cache root (default: `$GOPATH`, then `~/go`)
//! - `--verbose` / `--quiet` - log verbosity on stderr
//!
//! ```bash
//! gomod-tree tree
//! gomod-tree --module-path ../service graph --max-depth 2
//! GOPATH=/opt/go gomod-tree -v tree
//! ```

mod common;
mod graph;
mod tree;


pub use common::{CommandContext, WalkArgs, run_walk};
pub use graph::GraphCommand;
pub use tree::TreeCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use tracing_subscriber::EnvFilter;

use crate::constants::GOPATH_ENV;

/// Runtime configuration derived from global flags.
///
/// Kept separate from [`Cli`] so tests can build one without parsing
/// arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Filter directive for the stderr logger. `RUST_LOG` wins when set.
    pub log_level: String,
}

impl CliConfig {
    /// Install the global `tracing` subscriber.
    ///
    /// Logs go to stderr so that stdout stays machine-readable. Calling this
    /// more than once is harmless.
    pub fn init_logging(&self) {
        let filter = match std::env::var("RUST_LOG") {
            Ok(_) => EnvFilter::from_default_env(),
            Err(_) => EnvFilter::new(&self.log_level),
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init();
    }
}

/// Main CLI application structure for gomod-tree.
#[derive(Parser, Debug)]
#[command(
    name = "gomod-tree",
    about = "Show the dependency tree of a Go module using only the local module cache",
    version,
    long_about = "gomod-tree reads go.mod files from the project and from the local module cache \
                  (GOPATH) to display transitive dependencies without building or downloading anything."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the module to scan, absolute, relative, or '~'-prefixed
    #[arg(short = 'm', long, global = true, default_value = ".")]
    module_path: String,

    /// Module cache root; defaults to $GOPATH, then ~/go
    #[arg(long, global = true, env = GOPATH_ENV, value_name = "PATH")]
    gopath: Option<OsString>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the dependency tree as indented text
    Tree(TreeCommand),

    /// Print the dependency graph as JSON
    Graph(GraphCommand),
}

impl Cli {
    /// Build the [`CliConfig`] implied by the global flags.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "gomod_tree=debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };

        CliConfig {
            log_level: log_level.to_string(),
        }
    }

    fn context(&self) -> CommandContext {
        CommandContext {
            module_path: self.module_path.clone(),
            gopath: self.gopath.clone(),
        }
    }

    /// Initialise logging and run the selected command.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config)
    }

    /// Run with an explicit configuration.
    pub fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();
        let ctx = self.context();

        match self.command {
            Commands::Tree(cmd) => cmd.execute(&ctx),
            Commands::Graph(cmd) => cmd.execute(&ctx),
        }
    }
}
