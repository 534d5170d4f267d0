//! Turning the user-supplied module path into an absolute project directory.

use std::path::{Component, Path, PathBuf};

use crate::core::ModTreeError;

/// Resolve a `--module-path` value against the current directory.
///
/// - `.` (the default) is the current directory
/// - `~` and `$VAR` references are expanded
/// - other relative paths are joined onto `cwd`
///
/// The result is lexically normalized (`.` and `..` removed) but not
/// canonicalized, so symlinked checkouts keep the path the user typed.
pub fn resolve_project_dir(raw: &str, cwd: &Path) -> Result<PathBuf, ModTreeError> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "." {
        return Ok(normalize_path(cwd));
    }

    let expanded = shellexpand::full(raw).map_err(|e| ModTreeError::ProjectRootUnresolved {
        path: raw.to_string(),
        reason: e.to_string(),
    })?;

    let path = PathBuf::from(expanded.as_ref());
    if path.is_absolute() {
        Ok(normalize_path(&path))
    } else {
        Ok(normalize_path(&cwd.join(path)))
    }
}

/// Resolve against the process's current directory.
pub fn resolve_from_current_dir(raw: &str) -> Result<PathBuf, ModTreeError> {
    let cwd = std::env::current_dir().map_err(|e| ModTreeError::ProjectRootUnresolved {
        path: raw.to_string(),
        reason: format!("cannot read the current directory: {e}"),
    })?;
    resolve_project_dir(raw, &cwd)
}

/// Remove `.` and `..` components without touching the filesystem.
///
/// ```
/// use gomod_tree::utils::paths::normalize_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(normalize_path(Path::new("/foo/./bar/../baz")), PathBuf::from("/foo/baz"));
/// ```
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(components.last(), Some(Component::Normal(_))) {
                    components.pop();
                } else if !matches!(components.last(), Some(Component::RootDir)) {
                    components.push(component);
                }
            }
            c => components.push(c),
        }
    }

    components.iter().collect()
}
