//! Display the dependency tree as indented text.
//!
//! Every module reachable from the project's `go.mod` is printed under its
//! requirer, two spaces deeper per level. A module already expanded elsewhere
//! is not expanded again. Modules that are not present in the local cache are
//! listed separately at the end.
//!
//! # Examples
//!
//! ```bash
//! gomod-tree tree
//! gomod-tree --module-path ~/src/app tree --max-depth 2
//! ```
//!
//! # Output Format
//!
//! ```text
//! --------------------
//! Direct dependencies:
//! --------------------
//! github.com/acme/app
//!   github.com/pkg/errors v0.9.1
//!   golang.org/x/mod v0.14.0
//!     golang.org/x/sys v0.15.0
//!
//! -----------------------------------------------------
//! Transient (not local / not compiled in) dependencies:
//! -----------------------------------------------------
//! golang.org/x/tools v0.13.0
//! ```

use anyhow::Result;
use clap::Args;
use std::io::Write;

use super::common::{CommandContext, WalkArgs, run_walk};
use crate::config::WalkConfig;
use crate::render::TreeWriter;

/// Command to print the indented dependency tree.
#[derive(Args, Debug)]
pub struct TreeCommand {
    #[command(flatten)]
    walk: WalkArgs,
}

impl TreeCommand {
    /// Parsed walk options.
    pub fn walk_args(&self) -> &WalkArgs {
        &self.walk
    }

    /// Execute against stdout.
    pub fn execute(self, ctx: &CommandContext) -> Result<()> {
        let config = ctx.walk_config(&self.walk)?;
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        Self::run(&config, &mut out)
    }

    /// Walk and write the tree to `out`.
    pub fn run(config: &WalkConfig, out: &mut impl Write) -> Result<()> {
        let (writer, _) = run_walk(config, TreeWriter::new())?;
        writer.flush(out)?;
        Ok(())
    }
}
