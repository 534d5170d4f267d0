//! Plumbing shared by the `tree` and `graph` commands.

use anyhow::{Context, Result};
use clap::Args;
use std::ffi::OsString;

use crate::config::{WalkConfig, looks_like_cache_root, resolve_cache_root};
use crate::constants::UNLIMITED_DEPTH_FLAG;
use crate::core::DepthLimit;
use crate::manifest::read_root;
use crate::resolver::{WalkStrategy, WalkSummary, Walker};
use crate::utils::resolve_from_current_dir;

/// Options accepted by every walking command.
#[derive(Args, Debug, Clone)]
pub struct WalkArgs {
    /// Maximum recursion level to scan
    ///
    /// -1 walks the whole graph; otherwise an integer greater than 0.
    #[arg(
        short = 'd',
        long,
        default_value_t = UNLIMITED_DEPTH_FLAG,
        allow_negative_numbers = true,
        value_name = "N"
    )]
    pub max_depth: i64,
}

impl WalkArgs {
    /// Validate and convert the depth flag.
    pub fn depth(&self) -> Result<DepthLimit> {
        Ok(DepthLimit::from_flag(self.max_depth)?)
    }
}

/// Global inputs handed down from [`Cli`](super::Cli).
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    /// Raw `--module-path` value.
    pub module_path: String,
    /// `--gopath` / `GOPATH` value, if any.
    pub gopath: Option<OsString>,
}

impl CommandContext {
    /// Resolve everything a walk needs.
    pub fn walk_config(&self, args: &WalkArgs) -> Result<WalkConfig> {
        let depth = args.depth()?;
        let project_dir = resolve_from_current_dir(&self.module_path)?;
        let cache_root = resolve_cache_root(self.gopath.as_deref())?;

        if !looks_like_cache_root(&cache_root) {
            tracing::warn!(
                "{} has no src/ or pkg/mod/ directory; dependencies will be reported as not local",
                cache_root.display()
            );
        }

        Ok(WalkConfig::new(project_dir, cache_root, depth))
    }
}

/// Read the root manifest and walk the graph with `strategy`.
///
/// Only failures reading the project's own `go.mod` are returned.
pub fn run_walk<S: WalkStrategy>(config: &WalkConfig, strategy: S) -> Result<(S, WalkSummary)> {
    let root = read_root(&config.project_dir).with_context(|| {
        format!("Failed to read the root module in {}", config.project_dir.display())
    })?;

    let locator = config.locator();
    let mut walker = Walker::new(&locator, strategy);
    walker.walk_root(&root, config.depth);
    let (strategy, summary) = walker.finish();

    tracing::info!(
        "walked {} modules from {}: {} located, {} not local, {} requirements",
        summary.visited,
        root.identity,
        summary.located,
        summary.unknown,
        summary.edges
    );

    Ok((strategy, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ModTreeError;
    use crate::render::GraphAccumulator;
    use crate::test_utils::GoPathFixture;

    #[test]
    fn test_depth_validation() {
        let args = WalkArgs {
            max_depth: 0,
        };
        let err = args.depth().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ModTreeError>(),
            Some(ModTreeError::InvalidDepth {
                value: 0
            })
        ));

        let args = WalkArgs {
            max_depth: UNLIMITED_DEPTH_FLAG,
        };
        assert_eq!(args.depth().unwrap(), DepthLimit::Unlimited);
    }

    #[test]
    fn test_run_walk_missing_manifest_is_fatal() {
        let fixture = GoPathFixture::new().unwrap();
        let config = WalkConfig::new(fixture.project_dir(), fixture.root(), DepthLimit::Unlimited);
        let err = run_walk(&config, GraphAccumulator::new()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ModTreeError>(),
            Some(ModTreeError::ManifestNotFound { .. })
        ));
    }

    #[test]
    fn test_run_walk_summary() {
        let fixture = GoPathFixture::new().unwrap();
        fixture.write_project("example.com/app", &[("example.com/a", "v1.0.0")]).unwrap();
        fixture.add_cached_module("example.com/a", "v1.0.0", &[]).unwrap();
        let config = WalkConfig::new(fixture.project_dir(), fixture.root(), DepthLimit::Unlimited);

        let (_, summary) = run_walk(&config, GraphAccumulator::new()).unwrap();
        assert_eq!(summary.located, 2);
        assert_eq!(summary.unknown, 0);
    }
}
