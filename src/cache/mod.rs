//! Locating module source trees in the local Go module cache.
//!
//! Nothing here ever writes, downloads or creates a directory. Given a
//! dependency identity, [`CacheLocator::locate`] probes a fixed list of
//! candidate directories under the cache root and reports the first one that
//! exists.
//!
//! # Layouts
//!
//! Tried in this order:
//!
//! 1. [`CacheLayout::Source`] - legacy GOPATH checkout: `<root>/src/<name>`
//! 2. [`CacheLayout::ModuleSemver`] - module cache keyed by the clean semver
//!    extracted from the declared version: `<root>/pkg/mod/<name>@<semver>`
//! 3. [`CacheLayout::ModuleVerbatim`] - module cache keyed by the whole declared
//!    version: `<root>/pkg/mod/<name>@<version>`
//!
//! Module paths are case-escaped first, since the cache stores
//! `github.com/Foo/bar` as `github.com/!foo/bar`.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::ModuleIdentity;
use crate::version::extract_semver;

/// Marker written before every escaped uppercase letter.
pub const CASE_ESCAPE_MARKER: char = '!';

/// Which candidate layout a module was found under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheLayout {
    /// `<root>/src/<name>`
    Source,
    /// `<root>/pkg/mod/<name>@<semver>`
    ModuleSemver,
    /// `<root>/pkg/mod/<name>@<version>`
    ModuleVerbatim,
}

impl fmt::Display for CacheLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheLayout::Source => write!(f, "src"),
            CacheLayout::ModuleSemver => write!(f, "pkg/mod (semver)"),
            CacheLayout::ModuleVerbatim => write!(f, "pkg/mod (verbatim)"),
        }
    }
}

/// Outcome of a cache lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The module directory exists.
    Located {
        /// Directory holding the module's sources (and its `go.mod`).
        path: PathBuf,
        /// Layout the directory was found under.
        layout: CacheLayout,
    },
    /// No candidate directory exists.
    NotFound,
}

impl Lookup {
    /// Whether the module was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Located { .. })
    }

    /// The located directory, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Lookup::Located {
                path,
                ..
            } => Some(path),
            Lookup::NotFound => None,
        }
    }
}

/// Maps module identities onto directories under a cache root.
#[derive(Debug, Clone)]
pub struct CacheLocator {
    root: PathBuf,
}

impl CacheLocator {
    /// Create a locator for the given cache root (a `GOPATH` directory).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
        }
    }

    /// The cache root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Candidate directories for `identity`, in priority order.
    ///
    /// When the version contains no `vMAJOR.MINOR.PATCH` substring, the
    /// semver candidate ends in a bare `@`; it is still listed so that the
    /// probe order stays fixed.
    pub fn candidates(&self, identity: &ModuleIdentity) -> Vec<(CacheLayout, PathBuf)> {
        let name = escape_case(&identity.name);
        let version = escape_case(&identity.version);
        let semver = extract_semver(&version);
        let module_dir = self.root.join("pkg").join("mod");

        vec![
            (CacheLayout::Source, self.root.join("src").join(&name)),
            (CacheLayout::ModuleSemver, module_dir.join(format!("{name}@{semver}"))),
            (CacheLayout::ModuleVerbatim, module_dir.join(format!("{name}@{version}"))),
        ]
    }

    /// Find the first existing candidate directory.
    pub fn locate(&self, identity: &ModuleIdentity) -> Lookup {
        for (layout, path) in self.candidates(identity) {
            tracing::trace!("probing {} for {} ({})", path.display(), identity, layout);
            if probe(&path) {
                return Lookup::Located {
                    path,
                    layout,
                };
            }
        }
        Lookup::NotFound
    }

    /// Parse a raw `"name version"` / `"name@version"` string and locate it.
    pub fn locate_raw(&self, raw: &str) -> Lookup {
        self.locate(&ModuleIdentity::parse(raw))
    }
}

/// A path counts as present unless the filesystem says it does not exist.
///
/// Other stat errors (permissions, loops) are treated as present so the walk
/// reaches the manifest read and truncates there instead.
fn probe(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(_) => true,
        Err(e) => e.kind() != std::io::ErrorKind::NotFound,
    }
}

/// Escape uppercase letters the way the Go module cache does.
///
/// ```
/// use gomod_tree::cache::escape_case;
///
/// assert_eq!(escape_case("github.com/Foo/bar"), "github.com/!foo/bar");
/// assert_eq!(escape_case("github.com/BurntSushi/toml"), "github.com/!burnt!sushi/toml");
/// ```
pub fn escape_case(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_uppercase() {
            escaped.push(CASE_ESCAPE_MARKER);
            escaped.extend(c.to_lowercase());
        } else {
            escaped.push(c);
        }
    }
    escaped
}
