//! Module identities and the walk's depth budget.

use std::fmt;

use crate::core::ModTreeError;

/// A `(name, version)` pair keying one node of the dependency walk.
///
/// The version is the raw token declared in the requirer's `go.mod` and is
/// empty for the root module. Two identities are the same node only when both
/// strings match exactly; `v1.2.3` and `v1.2.3+incompatible` are different
/// nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleIdentity {
    /// Module path, e.g. `github.com/pkg/errors`.
    pub name: String,
    /// Declared version token, empty for the root.
    pub version: String,
}

impl ModuleIdentity {
    /// Create an identity from a module path and a declared version.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Create the identity of a root module, which carries no version.
    pub fn root(name: impl Into<String>) -> Self {
        Self::new(name, "")
    }

    /// Parse a raw identity string.
    ///
    /// Accepts `name@version`, `name version` and a bare `name`. Only the
    /// first whitespace-separated token may carry the `@`; later tokens such
    /// as a trailing `// indirect` are ignored.
    ///
    /// ```
    /// use gomod_tree::core::ModuleIdentity;
    ///
    /// let id = ModuleIdentity::parse("golang.org/x/mod v0.14.0 // indirect");
    /// assert_eq!(id.name, "golang.org/x/mod");
    /// assert_eq!(id.version, "v0.14.0");
    ///
    /// let id = ModuleIdentity::parse("golang.org/x/mod@v0.14.0");
    /// assert_eq!(id.version, "v0.14.0");
    /// ```
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.split_whitespace();
        let first = parts.next().unwrap_or_default();
        if let Some((name, version)) = first.split_once('@') {
            return Self::new(name, version);
        }

        let version = parts.next().unwrap_or_default();
        Self::new(first, version)
    }

    /// Whether this identity has no version, as the root module does.
    pub fn is_unversioned(&self) -> bool {
        self.version.is_empty()
    }

    /// The `"name version"` form used as visited-set key and output label.
    pub fn key(&self) -> String {
        if self.version.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.version)
        }
    }
}

impl fmt::Display for ModuleIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.version.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.name, self.version)
        }
    }
}

/// Remaining depth budget for the walk.
///
/// Unlimited is its own variant so that counting down can never land on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthLimit {
    /// Walk the full graph.
    #[default]
    Unlimited,
    /// Expand at most this many more levels.
    Remaining(usize),
}

impl DepthLimit {
    /// Convert the command-line spelling (`-1` or a positive integer).
    pub fn from_flag(value: i64) -> Result<Self, ModTreeError> {
        match value {
            -1 => Ok(Self::Unlimited),
            v if v >= 1 => usize::try_from(v)
                .map(Self::Remaining)
                .map_err(|_| ModTreeError::InvalidDepth {
                    value,
                }),
            _ => Err(ModTreeError::InvalidDepth {
                value,
            }),
        }
    }

    /// True once the budget has run out.
    pub const fn is_exhausted(self) -> bool {
        matches!(self, Self::Remaining(0))
    }

    /// The budget for the next level down.
    #[must_use]
    pub const fn descend(self) -> Self {
        match self {
            Self::Unlimited => Self::Unlimited,
            Self::Remaining(n) => Self::Remaining(n.saturating_sub(1)),
        }
    }
}
