//! Depth-first expansion of the requirement graph.

use std::collections::HashSet;

use crate::cache::{CacheLocator, Lookup};
use crate::constants::MAX_WALK_DEPTH;
use crate::core::{DepthLimit, ModuleIdentity};
use crate::manifest::{GoMod, Requirement, RootModule};

/// Receives the walker's observations and turns them into output state.
///
/// One strategy instance lives for one walk. Callbacks arrive in traversal
/// order.
pub trait WalkStrategy {
    /// A node was reached but not expanded: the depth budget is spent, or the
    /// structural nesting guard was hit.
    fn on_leaf(&mut self, identity: &ModuleIdentity, level: usize);

    /// A node was located (or is the root) and is about to be expanded.
    fn on_found(&mut self, identity: &ModuleIdentity, level: usize);

    /// A node could not be located under any cache layout.
    fn on_unknown(&mut self, identity: &ModuleIdentity);

    /// `from` declares a requirement on `to`. Called before `to` is expanded.
    fn on_edge(&mut self, from: &ModuleIdentity, to: &ModuleIdentity);
}

/// Counters collected during a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Identities marked visited, the root included.
    pub visited: usize,
    /// Identities located in the cache, the root included.
    pub located: usize,
    /// Identities that could not be located.
    pub unknown: usize,
    /// Requirement edges seen.
    pub edges: usize,
    /// Deepest level reached (root = 0).
    pub max_level: usize,
}

/// Walks the requirement graph from a root module.
///
/// For every node the checks run in a fixed order:
///
/// 1. depth budget spent → leaf, stop (the node is not marked visited)
/// 2. already visited → stop
/// 3. mark visited, look it up in the cache; not found → unknown, stop
/// 4. read its `go.mod`; unreadable → stop with the node still recorded found
/// 5. for each requirement: edge, then recurse one level down
pub struct Walker<'a, S: WalkStrategy> {
    locator: &'a CacheLocator,
    strategy: S,
    visited: HashSet<String>,
    summary: WalkSummary,
}

impl<'a, S: WalkStrategy> Walker<'a, S> {
    /// Create a walker with fresh state.
    pub fn new(locator: &'a CacheLocator, strategy: S) -> Self {
        Self {
            locator,
            strategy,
            visited: HashSet::new(),
            summary: WalkSummary::default(),
        }
    }

    /// Walk from the project's root module.
    ///
    /// The root's requirements come from the already-parsed project manifest;
    /// the root itself is never looked up in the cache.
    pub fn walk_root(&mut self, root: &RootModule, depth: DepthLimit) {
        let identity = &root.identity;
        if depth.is_exhausted() {
            self.strategy.on_leaf(identity, 0);
            return;
        }

        self.visited.insert(identity.key());
        self.summary.visited += 1;
        self.summary.located += 1;
        self.strategy.on_found(identity, 0);
        self.expand_requirements(identity, &root.manifest.requires, 0, depth);
    }

    /// Expand a single identity as though it were required at `level`.
    pub fn expand(&mut self, identity: &ModuleIdentity, level: usize, remaining: DepthLimit) {
        self.summary.max_level = self.summary.max_level.max(level);

        if remaining.is_exhausted() {
            self.strategy.on_leaf(identity, level);
            return;
        }

        if level >= MAX_WALK_DEPTH {
            tracing::warn!(
                "stopping at {} after {} nested levels; treating it as a leaf",
                identity,
                MAX_WALK_DEPTH
            );
            self.strategy.on_leaf(identity, level);
            return;
        }

        if !self.visited.insert(identity.key()) {
            tracing::trace!("{} already visited", identity);
            return;
        }
        self.summary.visited += 1;

        let dir = match self.locator.locate(identity) {
            Lookup::Located {
                path,
                layout,
            } => {
                tracing::debug!("located {} at {} ({})", identity, path.display(), layout);
                path
            }
            Lookup::NotFound => {
                tracing::debug!("{} not found in {}", identity, self.locator.root().display());
                self.summary.unknown += 1;
                self.strategy.on_unknown(identity);
                return;
            }
        };

        self.summary.located += 1;
        self.strategy.on_found(identity, level);

        let manifest = match GoMod::load(&dir) {
            Ok(manifest) => manifest,
            Err(e) => {
                tracing::debug!("not expanding {}: {}", identity, e);
                return;
            }
        };

        self.expand_requirements(identity, &manifest.requires, level, remaining);
    }

    fn expand_requirements(
        &mut self,
        from: &ModuleIdentity,
        requires: &[Requirement],
        level: usize,
        remaining: DepthLimit,
    ) {
        let next = remaining.descend();
        for requirement in requires {
            let to = requirement.identity();
            self.summary.edges += 1;
            self.strategy.on_edge(from, &to);
            self.expand(&to, level + 1, next);
        }
    }

    /// Counters so far.
    pub fn summary(&self) -> WalkSummary {
        self.summary
    }

    /// Whether `identity` has been marked visited.
    pub fn is_visited(&self, identity: &ModuleIdentity) -> bool {
        self.visited.contains(&identity.key())
    }

    /// Finish the walk and hand back the strategy.
    pub fn finish(self) -> (S, WalkSummary) {
        (self.strategy, self.summary)
    }
}
