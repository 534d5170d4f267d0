//! Run configuration.
//!
//! Everything the walk needs from the environment is gathered here once, at
//! startup, into a [`WalkConfig`]. Nothing below the CLI reads environment
//! variables.
//!
//! # Cache root priority
//!
//! 1. `--gopath` flag, or the `GOPATH` environment variable (clap reads both
//!    into the same argument)
//! 2. `~/go`, the Go toolchain's default
//!
//! A `GOPATH` holding a path list uses its first non-empty entry, which is
//! where the toolchain keeps `pkg/mod`.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::cache::CacheLocator;
use crate::constants::DEFAULT_GOPATH_DIR;
use crate::core::{DepthLimit, ModTreeError};

/// Inputs for one run of the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkConfig {
    /// Absolute project directory holding the root `go.mod`.
    pub project_dir: PathBuf,
    /// Module cache root (a `GOPATH` directory).
    pub cache_root: PathBuf,
    /// Depth budget.
    pub depth: DepthLimit,
}

impl WalkConfig {
    /// Create a config from already-resolved values.
    pub fn new(project_dir: impl Into<PathBuf>, cache_root: impl Into<PathBuf>, depth: DepthLimit) -> Self {
        Self {
            project_dir: project_dir.into(),
            cache_root: cache_root.into(),
            depth,
        }
    }

    /// A locator over this config's cache root.
    pub fn locator(&self) -> CacheLocator {
        CacheLocator::new(&self.cache_root)
    }
}

/// Determine the module cache root.
///
/// `explicit` is the `--gopath` / `GOPATH` value when one was given.
///
/// # Errors
///
/// [`ModTreeError::CacheRootUnavailable`] when no usable value is given and
/// the home directory cannot be determined.
pub fn resolve_cache_root(explicit: Option<&OsStr>) -> Result<PathBuf, ModTreeError> {
    if let Some(first) = explicit.and_then(first_path_entry) {
        tracing::debug!("using module cache root {}", first.display());
        return Ok(first);
    }

    let home = dirs::home_dir().ok_or_else(|| ModTreeError::CacheRootUnavailable {
        reason: "GOPATH is not set and the home directory is unknown".to_string(),
    })?;
    let root = home.join(DEFAULT_GOPATH_DIR);
    tracing::debug!("GOPATH not set, defaulting to {}", root.display());
    Ok(root)
}

fn first_path_entry(value: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(value).find(|p| !p.as_os_str().is_empty())
}

/// Whether `root` looks like a module cache (has `src` or `pkg/mod`).
///
/// Only used for diagnostics; a missing cache is not an error, every
/// dependency simply ends up unknown.
pub fn looks_like_cache_root(root: &Path) -> bool {
    root.join("src").is_dir() || root.join("pkg").join("mod").is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_root_wins() {
        let root = resolve_cache_root(Some(OsStr::new("/opt/gopath"))).unwrap();
        assert_eq!(root, PathBuf::from("/opt/gopath"));
    }

    #[cfg(unix)]
    #[test]
    fn test_path_list_uses_first_entry() {
        let root = resolve_cache_root(Some(OsStr::new("/first:/second"))).unwrap();
        assert_eq!(root, PathBuf::from("/first"));

        let root = resolve_cache_root(Some(OsStr::new(":/second"))).unwrap();
        assert_eq!(root, PathBuf::from("/second"));
    }

    #[test]
    fn test_empty_value_falls_back_to_home() {
        if let Some(home) = dirs::home_dir() {
            let root = resolve_cache_root(Some(OsStr::new(""))).unwrap();
            assert_eq!(root, home.join("go"));
        }
    }

    #[test]
    fn test_looks_like_cache_root() {
        let temp = TempDir::new().unwrap();
        assert!(!looks_like_cache_root(temp.path()));
        std::fs::create_dir_all(temp.path().join("pkg/mod")).unwrap();
        assert!(looks_like_cache_root(temp.path()));
    }

    #[test]
    fn test_walk_config_locator() {
        let config = WalkConfig::new("/work/app", "/opt/gopath", DepthLimit::Remaining(2));
        assert_eq!(config.locator().root(), Path::new("/opt/gopath"));
    }
}
