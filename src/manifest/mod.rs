//! Reading `go.mod` manifests.
//!
//! A manifest yields two things for the walk: the declaring module's path and
//! its ordered list of requirements. The same reader is used for the project
//! root (where failures are fatal) and for every dependency found in the
//! module cache (where the walker absorbs failures).
//!
//! # Example
//!
//! ```rust,no_run
//! use gomod_tree::manifest::GoMod;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), gomod_tree::core::ModTreeError> {
//! let gomod = GoMod::load(Path::new("/work/project"))?;
//! for req in &gomod.requires {
//!     println!("{} {}", req.path, req.version);
//! }
//! # Ok(())
//! # }
//! ```

pub mod parser;

use std::path::{Path, PathBuf};

use crate::core::{ModTreeError, ModuleIdentity};

pub use parser::ParseError;

/// File name of a Go module manifest.
pub const MANIFEST_FILE: &str = "go.mod";

/// A parsed `go.mod`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoMod {
    /// Declared module path from the `module` directive.
    pub module: String,
    /// Requirements in declaration order.
    pub requires: Vec<Requirement>,
}

/// One `require` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Required module path.
    pub path: String,
    /// Declared version token, verbatim.
    pub version: String,
    /// Whether the line carried a `// indirect` marker.
    pub indirect: bool,
    /// Raw trailing comment text, if any.
    pub comment: Option<String>,
}

impl Requirement {
    /// Identity of the required module.
    pub fn identity(&self) -> ModuleIdentity {
        ModuleIdentity::new(&self.path, &self.version)
    }
}

impl GoMod {
    /// Path of the manifest inside a module directory.
    pub fn manifest_path(dir: &Path) -> PathBuf {
        dir.join(MANIFEST_FILE)
    }

    /// Parse manifest source text. `file` is only used in error messages.
    pub fn parse(file: &Path, content: &str) -> Result<Self, ModTreeError> {
        parser::parse(content).map_err(|e| ModTreeError::ManifestParseError {
            file: file.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Load and parse `<dir>/go.mod`.
    ///
    /// # Errors
    ///
    /// - [`ModTreeError::ManifestNotFound`] if the file does not exist
    /// - [`ModTreeError::IoError`] if it exists but cannot be read
    /// - [`ModTreeError::ManifestParseError`] if the content is malformed
    pub fn load(dir: &Path) -> Result<Self, ModTreeError> {
        let path = Self::manifest_path(dir);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ModTreeError::ManifestNotFound {
                    path: path.display().to_string(),
                });
            }
            Err(e) => return Err(ModTreeError::IoError(e)),
        };
        Self::parse(&path, &content)
    }
}

/// The root module of a project: its identity plus its parsed manifest.
#[derive(Debug, Clone)]
pub struct RootModule {
    /// Identity used as the first node of the walk.
    pub identity: ModuleIdentity,
    /// The project's manifest.
    pub manifest: GoMod,
}

/// Read the project's own manifest and derive the root identity.
///
/// # Errors
///
/// Any error from [`GoMod::load`]; all are fatal for the run.
pub fn read_root(project_dir: &Path) -> Result<RootModule, ModTreeError> {
    let manifest = GoMod::load(project_dir)?;
    let name = root_module_name(project_dir, &manifest.module);
    tracing::debug!("root module of {} is {}", project_dir.display(), name);

    Ok(RootModule {
        identity: ModuleIdentity::root(name),
        manifest,
    })
}

/// Derive the root module's name from its directory and declared path.
///
/// A project checked out at `$GOPATH/src/<module>/sub` whose manifest declares
/// `<module>` is named `<module>/sub`. When the declared path does not appear
/// in the directory path at all, it is used as is.
pub fn root_module_name(project_dir: &Path, declared: &str) -> String {
    let dir = project_dir.to_string_lossy().replace('\\', "/");
    let dir = dir.trim_end_matches('/');

    if dir.ends_with(declared) {
        return declared.to_string();
    }

    match dir.find(declared) {
        Some(pos) => format!("{declared}{}", &dir[pos + declared.len()..]),
        None => declared.to_string(),
    }
}
