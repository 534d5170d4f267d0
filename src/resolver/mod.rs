//! Transitive dependency resolution from `go.mod` files on disk.
//!
//! The resolver performs a single depth-first walk starting at the project's
//! root module. Each requirement is looked up in the local module cache with
//! [`CacheLocator`](crate::cache::CacheLocator); when found, its own `go.mod` is
//! read and the walk continues into its requirements.
//!
//! # Output strategies
//!
//! The walk itself produces nothing. What gets recorded is decided by a
//! [`WalkStrategy`]:
//!
//! - [`GraphAccumulator`](crate::render::GraphAccumulator) builds the
//!   deduplicated index graph
//! - [`TreeWriter`](crate::render::TreeWriter) writes the indented tree
//!
//! # Guarantees
//!
//! - Each identity (exact `"name version"` string) is expanded at most once,
//!   so cyclic and diamond-shaped graphs terminate.
//! - Requirements are visited in declaration order.
//! - Missing cache entries and unreadable transitive manifests never abort the
//!   walk; they truncate that branch only.
//!
//! # Example
//!
//! ```rust,no_run
//! use gomod_tree::cache::CacheLocator;
//! use gomod_tree::core::DepthLimit;
//! use gomod_tree::manifest::read_root;
//! use gomod_tree::render::GraphAccumulator;
//! use gomod_tree::resolver::Walker;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let root = read_root(Path::new("/work/project"))?;
//! let locator = CacheLocator::new("/home/dev/go");
//! let mut walker = Walker::new(&locator, GraphAccumulator::new());
//! walker.walk_root(&root, DepthLimit::Unlimited);
//! let (graph, _summary) = walker.finish();
//! println!("{}", graph.to_json()?);
//! # Ok(())
//! # }
//! ```

pub mod walker;

pub use walker::{WalkStrategy, WalkSummary, Walker};
