//! Emit the dependency graph as a JSON document.
//!
//! Every distinct `"name version"` gets one integer index. `packages` maps
//! each expanded module to the indices of its requirements, `indexes` maps
//! indices back to identities, and `unknown` lists modules missing from the
//! local cache.
//!
//! ```bash
//! gomod-tree graph > deps.json
//! gomod-tree graph --max-depth 1 | jq '.indexes'
//! ```

use anyhow::Result;
use clap::Args;
use std::io::Write;

use super::common::{CommandContext, WalkArgs, run_walk};
use crate::config::WalkConfig;
use crate::render::GraphAccumulator;

/// Command to print the index graph as JSON.
#[derive(Args, Debug)]
pub struct GraphCommand {
    #[command(flatten)]
    walk: WalkArgs,
}

impl GraphCommand {
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

    /// Walk and write the JSON document to `out`.
    pub fn run(config: &WalkConfig, out: &mut impl Write) -> Result<()> {
        let (graph, _) = run_walk(config, GraphAccumulator::new())?;
        graph.flush(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DepthLimit;
    use crate::render::GraphDocument;
    use crate::test_utils::GoPathFixture;

    #[test]
    fn test_run_writes_json() {
        let fixture = GoPathFixture::new().unwrap();
        fixture.write_project("example.com/app", &[("example.com/a", "v1.0.0")]).unwrap();
        fixture.add_cached_module("example.com/a", "v1.0.0", &[]).unwrap();
        let config = WalkConfig::new(fixture.project_dir(), fixture.root(), DepthLimit::Unlimited);

        let mut out = Vec::new();
        GraphCommand::run(&config, &mut out).unwrap();
        let doc: GraphDocument = serde_json::from_slice(&out).unwrap();

        assert_eq!(doc.indexes, vec!["example.com/a v1.0.0"]);
        assert_eq!(doc.packages["example.com/app"], vec![0]);
        assert!(doc.unknown.is_empty());
    }
}
