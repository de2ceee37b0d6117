//! Standard paths used by the Forge scaffolding tools
//!
//! The tools ship inside the engine checkout: the binaries live in a
//! tools directory directly under the project root, with the template
//! bodies in a `templates/` directory next to them.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Locations the generators resolve against
#[derive(Debug, Clone)]
pub struct Paths {
    /// Directory the running tool lives in
    pub tools: PathBuf,
    /// Template bodies (`<tools>/templates`)
    pub templates: PathBuf,
    /// Project root the Resource generator resolves relative output
    /// paths against (`<tools>/..`)
    pub project_root: PathBuf,
}

impl Paths {
    /// Discover paths for the running tool.
    ///
    /// `FORGE_TOOLS_DIR` overrides the tools directory; otherwise it is
    /// the directory containing the current executable.
    pub fn discover() -> Result<Self> {
        let tools = match std::env::var_os("FORGE_TOOLS_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => {
                let exe = std::env::current_exe().context("Failed to locate current executable")?;
                exe.parent()
                    .ok_or_else(|| anyhow::anyhow!("Executable has no parent directory"))?
                    .to_path_buf()
            }
        };

        Self::from_tools_dir(&tools)
    }

    /// Build paths from an explicit tools directory.
    pub fn from_tools_dir(tools: &Path) -> Result<Self> {
        let templates = tools.join("templates");

        let project_root = tools
            .parent()
            .ok_or_else(|| {
                anyhow::anyhow!("Tools directory has no parent: {}", tools.display())
            })?
            .to_path_buf();

        Ok(Self {
            tools: tools.to_path_buf(),
            templates,
            project_root,
        })
    }
}

/// Resolve a possibly-relative path against the current working directory.
pub fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()
            .context("Failed to read current directory")?
            .join(path))
    }
}
