//! gomod-tree - transitive dependency viewer for Go modules
//!
//! Reads a project's `go.mod` and follows every `require` through the local
//! module cache (`GOPATH`), printing either an indented tree or a deduplicated
//! JSON graph. Nothing is compiled and nothing is downloaded: a dependency that
//! is not already present on disk is reported as not local.
//!
//! # Architecture Overview
//!
//! - A project directory yields a root module ([`manifest::read_root`])
//! - Each requirement is looked up in the cache ([`cache::CacheLocator`])
//! - A single depth-first walker ([`resolver::Walker`]) visits every identity once
//! - Output strategies ([`render::TreeWriter`], [`render::GraphAccumulator`])
//!   observe the walk and produce the final document
//!
//! # Core Modules
//!
//! - [`cache`] - module cache layouts and case escaping
//! - [`cli`] - command-line interface
//! - [`config`] - cache root resolution and walk configuration
//! - [`core`] - error types and module identities
//! - [`manifest`] - `go.mod` parsing
//! - [`render`] - tree and graph output
//! - [`resolver`] - the graph walker
//! - [`utils`] - path handling
//! - [`version`] - semver extraction from version tokens
//!
//! # Example
//!
//! ```rust,no_run
//! use gomod_tree::config::WalkConfig;
//! use gomod_tree::core::DepthLimit;
//! use gomod_tree::manifest::read_root;
//! use gomod_tree::render::GraphAccumulator;
//! use gomod_tree::resolver::Walker;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = WalkConfig::new("/work/app", "/home/dev/go", DepthLimit::Unlimited);
//! let root = read_root(&config.project_dir)?;
//! let locator = config.locator();
//!
//! let mut walker = Walker::new(&locator, GraphAccumulator::new());
//! walker.walk_root(&root, config.depth);
//! let (graph, _summary) = walker.finish();
//! println!("{}", graph.to_json()?);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod manifest;
pub mod render;
pub mod resolver;
pub mod utils;
pub mod version;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
