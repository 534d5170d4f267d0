//! gomod-tree CLI entry point
//!
//! Parses arguments, runs the selected command, and turns failures into a
//! colored message with a suggestion. Commands:
//! - `tree` - indented dependency tree
//! - `graph` - JSON dependency graph

use anyhow::Result;
use clap::Parser;
use gomod_tree::cli;
use gomod_tree::core::user_friendly_error;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
