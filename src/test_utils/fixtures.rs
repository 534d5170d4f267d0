//! On-disk GOPATH fixtures.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::cache::{CacheLocator, escape_case};
use crate::manifest::MANIFEST_FILE;

/// Render a `go.mod` with a single require block.
pub fn go_mod_content(module: &str, requires: &[(&str, &str)]) -> String {
    let mut content = format!("module {module}\n\ngo 1.21\n");
    if !requires.is_empty() {
        content.push_str("\nrequire (\n");
        for (path, version) in requires {
            content.push_str(&format!("\t{path} {version}\n"));
        }
        content.push_str(")\n");
    }
    content
}

/// A temporary directory holding a GOPATH and a project checkout.
///
/// ```text
/// <tmp>/gopath/src/...
/// <tmp>/gopath/pkg/mod/...
/// <tmp>/project/go.mod
/// ```
pub struct GoPathFixture {
    _temp: TempDir,
    gopath: PathBuf,
    project: PathBuf,
}

impl GoPathFixture {
    /// Create empty `gopath` and `project` directories.
    pub fn new() -> Result<Self> {
        let temp = TempDir::new().context("creating fixture directory")?;
        let gopath = temp.path().join("gopath");
        let project = temp.path().join("project");
        std::fs::create_dir_all(gopath.join("pkg").join("mod"))?;
        std::fs::create_dir_all(&project)?;

        Ok(Self {
            _temp: temp,
            gopath,
            project,
        })
    }

    /// The GOPATH root.
    pub fn root(&self) -> &Path {
        &self.gopath
    }

    /// The project directory.
    pub fn project_dir(&self) -> &Path {
        &self.project
    }

    /// A locator over this fixture's GOPATH.
    pub fn locator(&self) -> CacheLocator {
        CacheLocator::new(&self.gopath)
    }

    /// Write the project's own `go.mod`.
    pub fn write_project(&self, module: &str, requires: &[(&str, &str)]) -> Result<()> {
        self.write_project_raw(&go_mod_content(module, requires))
    }

    /// Write the project's `go.mod` verbatim.
    pub fn write_project_raw(&self, content: &str) -> Result<()> {
        std::fs::write(self.project.join(MANIFEST_FILE), content)
            .with_context(|| format!("writing {}", self.project.display()))
    }

    /// Add a module under the legacy `src/` layout.
    pub fn add_src_module(&self, name: &str, requires: &[(&str, &str)]) -> Result<PathBuf> {
        let dir = self.gopath.join("src").join(escape_case(name));
        write_module(&dir, &go_mod_content(name, requires))?;
        Ok(dir)
    }

    /// Add a module under `pkg/mod/<name>@<version>`.
    pub fn add_cached_module(
        &self,
        name: &str,
        version: &str,
        requires: &[(&str, &str)],
    ) -> Result<PathBuf> {
        self.add_cached_module_raw(name, version, &go_mod_content(name, requires))
    }

    /// Add a module under `pkg/mod/<name>@<version>` with a verbatim `go.mod`.
    pub fn add_cached_module_raw(&self, name: &str, version: &str, content: &str) -> Result<PathBuf> {
        let dir = self.cached_module_dir(name, version);
        write_module(&dir, content)?;
        Ok(dir)
    }

    /// Add a module directory with no `go.mod` in it.
    pub fn add_cached_module_without_manifest(&self, name: &str, version: &str) -> Result<PathBuf> {
        let dir = self.cached_module_dir(name, version);
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    fn cached_module_dir(&self, name: &str, version: &str) -> PathBuf {
        self.gopath
            .join("pkg")
            .join("mod")
            .join(format!("{}@{}", escape_case(name), escape_case(version)))
    }
}

fn write_module(dir: &Path, content: &str) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    std::fs::write(dir.join(MANIFEST_FILE), content)
        .with_context(|| format!("writing go.mod in {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::GoMod;

    #[test]
    fn test_go_mod_content_round_trips_through_parser() {
        let content = go_mod_content("example.com/app", &[("example.com/a", "v1.0.0")]);
        let gomod = GoMod::parse(Path::new("go.mod"), &content).unwrap();
        assert_eq!(gomod.module, "example.com/app");
        assert_eq!(gomod.requires[0].path, "example.com/a");
    }

    #[test]
    fn test_layout() {
        let fixture = GoPathFixture::new().unwrap();
        let dir = fixture.add_cached_module("github.com/Foo/bar", "v1.0.0", &[]).unwrap();
        assert!(dir.ends_with("pkg/mod/github.com/!foo/bar@v1.0.0"));
        assert!(dir.join("go.mod").is_file());
    }
}
