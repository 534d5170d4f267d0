//! Deduplicated index graph output.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::io::Write;

use crate::core::{ModTreeError, ModuleIdentity};
use crate::resolver::WalkStrategy;

/// The serialized graph.
///
/// ```json
/// {
///   "packages": { "example.com/app": [0, 1] },
///   "indexes": ["example.com/a v1.0.0", "example.com/b v1.2.0"],
///   "unknown": ["example.com/b v1.2.0"]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Requirer identity → ascending dependency indices.
    pub packages: BTreeMap<String, Vec<usize>>,
    /// Index → identity string.
    pub indexes: Vec<String>,
    /// Identities never located in the cache, first-seen order.
    pub unknown: Vec<String>,
}

impl GraphDocument {
    /// Identity string for an index.
    pub fn identity_at(&self, index: usize) -> Option<&str> {
        self.indexes.get(index).map(String::as_str)
    }

    /// Index assigned to an identity string.
    pub fn index_of(&self, identity: &str) -> Option<usize> {
        self.indexes.iter().position(|s| s == identity)
    }

    /// Dependency identity strings of a requirer, in index order.
    pub fn dependencies_of(&self, requirer: &str) -> Option<Vec<&str>> {
        self.packages
            .get(requirer)
            .map(|deps| deps.iter().filter_map(|&i| self.identity_at(i)).collect())
    }
}

/// Builds a [`GraphDocument`] from walk callbacks.
///
/// Indices are assigned the first time an identity is the target of an edge,
/// so the index table doubles as the node list in discovery order.
#[derive(Debug, Default)]
pub struct GraphAccumulator {
    packages: HashMap<String, BTreeSet<usize>>,
    index_of: HashMap<String, usize>,
    indexes: Vec<String>,
    unknown: Vec<String>,
    unknown_seen: HashSet<String>,
}

impl GraphAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    fn index_for(&mut self, key: String) -> usize {
        if let Some(&index) = self.index_of.get(&key) {
            return index;
        }
        let index = self.indexes.len();
        self.indexes.push(key.clone());
        self.index_of.insert(key, index);
        index
    }

    /// Freeze the accumulated state into a document.
    ///
    /// Requirers that ended up with no edges are kept with an empty list and
    /// reported as a warning, since that usually means their `go.mod` could not
    /// be read.
    pub fn into_document(self) -> GraphDocument {
        let mut packages = BTreeMap::new();
        for (requirer, deps) in self.packages {
            packages.insert(requirer, deps.into_iter().collect::<Vec<_>>());
        }

        for (requirer, deps) in &packages {
            if deps.is_empty() {
                tracing::warn!("no dependencies found for package {}", requirer);
            }
        }

        GraphDocument {
            packages,
            indexes: self.indexes,
            unknown: self.unknown,
        }
    }

    /// Render the document as pretty-printed JSON.
    pub fn to_json(self) -> Result<String, ModTreeError> {
        Ok(serde_json::to_string_pretty(&self.into_document())?)
    }

    /// Write the pretty-printed JSON document followed by a newline.
    pub fn flush(self, writer: &mut impl Write) -> Result<(), ModTreeError> {
        let json = self.to_json()?;
        writeln!(writer, "{json}")?;
        Ok(())
    }
}

impl WalkStrategy for GraphAccumulator {
    fn on_leaf(&mut self, _identity: &ModuleIdentity, _level: usize) {
        // The requirer's edge already references it.
    }

    fn on_found(&mut self, identity: &ModuleIdentity, _level: usize) {
        self.packages.entry(identity.key()).or_default();
    }

    fn on_unknown(&mut self, identity: &ModuleIdentity) {
        let key = identity.key();
        if self.unknown_seen.insert(key.clone()) {
            self.unknown.push(key);
        }
    }

    fn on_edge(&mut self, from: &ModuleIdentity, to: &ModuleIdentity) {
        let index = self.index_for(to.key());
        self.packages.entry(from.key()).or_default().insert(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DepthLimit;
    use crate::manifest::read_root;
    use crate::resolver::Walker;
    use crate::test_utils::GoPathFixture;

    fn graph(fixture: &GoPathFixture, depth: DepthLimit) -> GraphDocument {
        let root = read_root(fixture.project_dir()).unwrap();
        let locator = fixture.locator();
        let mut walker = Walker::new(&locator, GraphAccumulator::new());
        walker.walk_root(&root, depth);
        walker.finish().0.into_document()
    }

    #[test]
    fn test_index_assigned_once_in_first_seen_order() {
        let mut acc = GraphAccumulator::new();
        let a = ModuleIdentity::root("a");
        let b = ModuleIdentity::new("b", "v1.0.0");
        let c = ModuleIdentity::new("c", "v1.0.0");

        acc.on_found(&a, 0);
        acc.on_edge(&a, &c);
        acc.on_edge(&a, &b);
        acc.on_edge(&b, &c);

        let doc = acc.into_document();
        assert_eq!(doc.indexes, vec!["c v1.0.0", "b v1.0.0"]);
        assert_eq!(doc.packages["a"], vec![0, 1]);
        assert_eq!(doc.packages["b v1.0.0"], vec![0]);
    }

    #[test]
    fn test_package_indices_sorted_ascending() {
        let mut acc = GraphAccumulator::new();
        let a = ModuleIdentity::root("a");
        let x = ModuleIdentity::root("x");
        acc.on_edge(&x, &ModuleIdentity::new("first", "v1.0.0"));
        acc.on_edge(&x, &ModuleIdentity::new("second", "v1.0.0"));
        acc.on_edge(&a, &ModuleIdentity::new("second", "v1.0.0"));
        acc.on_edge(&a, &ModuleIdentity::new("first", "v1.0.0"));

        let doc = acc.into_document();
        assert_eq!(doc.packages["a"], vec![0, 1]);
    }

    #[test]
    fn test_diamond_shares_one_index() {
        let fixture = GoPathFixture::new().unwrap();
        fixture
            .write_project("example.com/a", &[("example.com/b", "v1.0.0"), ("example.com/c", "v1.0.0")])
            .unwrap();
        fixture.add_cached_module("example.com/b", "v1.0.0", &[("example.com/d", "v1.0.0")]).unwrap();
        fixture.add_cached_module("example.com/c", "v1.0.0", &[("example.com/d", "v1.0.0")]).unwrap();
        fixture.add_cached_module("example.com/d", "v1.0.0", &[]).unwrap();

        let doc = graph(&fixture, DepthLimit::Unlimited);
        let d = doc.index_of("example.com/d v1.0.0").unwrap();
        assert_eq!(doc.indexes.iter().filter(|s| s.as_str() == "example.com/d v1.0.0").count(), 1);
        assert_eq!(doc.packages["example.com/b v1.0.0"], vec![d]);
        assert_eq!(doc.packages["example.com/c v1.0.0"], vec![d]);
        assert_eq!(doc.packages["example.com/d v1.0.0"], Vec::<usize>::new());
    }

    #[test]
    fn test_depth_bound_keeps_edge_but_not_children() {
        let fixture = GoPathFixture::new().unwrap();
        fixture.write_project("example.com/a", &[("example.com/b", "v1.0.0")]).unwrap();
        fixture.add_cached_module("example.com/b", "v1.0.0", &[("example.com/c", "v1.0.0")]).unwrap();
        fixture.add_cached_module("example.com/c", "v1.0.0", &[]).unwrap();

        let doc = graph(&fixture, DepthLimit::Remaining(1));
        assert_eq!(doc.dependencies_of("example.com/a").unwrap(), vec!["example.com/b v1.0.0"]);
        assert!(!doc.packages.contains_key("example.com/b v1.0.0"));
        assert!(doc.index_of("example.com/c v1.0.0").is_none());
    }

    #[test]
    fn test_unknown_listed_once() {
        let fixture = GoPathFixture::new().unwrap();
        fixture
            .write_project(
                "example.com/app",
                &[("example.com/b", "v1.0.0"), ("example.com/c", "v1.0.0"), ("example.com/gone", "v1.0.0")],
            )
            .unwrap();
        fixture.add_cached_module("example.com/b", "v1.0.0", &[("example.com/gone", "v1.0.0")]).unwrap();
        fixture.add_cached_module("example.com/c", "v1.0.0", &[("example.com/gone", "v1.0.0")]).unwrap();

        let doc = graph(&fixture, DepthLimit::Unlimited);
        assert_eq!(doc.unknown, vec!["example.com/gone v1.0.0"]);
        let gone = doc.index_of("example.com/gone v1.0.0").unwrap();
        assert!(doc.packages["example.com/b v1.0.0"].contains(&gone));
        assert!(doc.packages["example.com/c v1.0.0"].contains(&gone));
    }

    #[test]
    fn test_cycle_graph() {
        let fixture = GoPathFixture::new().unwrap();
        fixture.write_project("example.com/app", &[("example.com/a", "v1.0.0")]).unwrap();
        fixture.add_cached_module("example.com/a", "v1.0.0", &[("example.com/b", "v1.0.0")]).unwrap();
        fixture.add_cached_module("example.com/b", "v1.0.0", &[("example.com/a", "v1.0.0")]).unwrap();

        let doc = graph(&fixture, DepthLimit::Unlimited);
        assert_eq!(doc.indexes, vec!["example.com/a v1.0.0", "example.com/b v1.0.0"]);
        assert_eq!(doc.packages["example.com/a v1.0.0"], vec![1]);
        assert_eq!(doc.packages["example.com/b v1.0.0"], vec![0]);
    }

    #[test]
    fn test_json_shape() {
        let mut acc = GraphAccumulator::new();
        let root = ModuleIdentity::root("example.com/app");
        acc.on_found(&root, 0);
        acc.on_edge(&root, &ModuleIdentity::new("example.com/x", "v1.0.0"));
        acc.on_unknown(&ModuleIdentity::new("example.com/x", "v1.0.0"));

        let json = acc.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["packages"]["example.com/app"], serde_json::json!([0]));
        assert_eq!(value["indexes"], serde_json::json!(["example.com/x v1.0.0"]));
        assert_eq!(value["unknown"], serde_json::json!(["example.com/x v1.0.0"]));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_module_without_manifest_has_empty_entry() {
        let fixture = GoPathFixture::new().unwrap();
        fixture.write_project("example.com/app", &[("example.com/nomod", "v1.0.0")]).unwrap();
        fixture.add_cached_module_without_manifest("example.com/nomod", "v1.0.0").unwrap();

        let doc = graph(&fixture, DepthLimit::Unlimited);
        assert_eq!(doc.packages.get("example.com/nomod v1.0.0"), Some(&Vec::new()));
        assert!(doc.unknown.is_empty());
    }
}
