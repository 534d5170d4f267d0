//! Output strategies for the dependency walk.
//!
//! Both types implement [`WalkStrategy`](crate::resolver::WalkStrategy) and
//! are driven by the same [`Walker`](crate::resolver::Walker):
//!
//! - [`GraphAccumulator`] - a deduplicated graph where every identity gets one
//!   integer index, serialized as JSON (`packages`, `indexes`, `unknown`)
//! - [`TreeWriter`] - an indented tree in traversal order, followed by a flat
//!   list of modules missing from the cache

pub mod graph;
pub mod tree;

pub use graph::{GraphAccumulator, GraphDocument};
pub use tree::TreeWriter;
