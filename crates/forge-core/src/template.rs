//! Template body loading
//!
//! Each generator works from a fixed pair of template files: a source
//! body and a header body sharing a stem. Both are read fully before
//! any output is written, so a missing template aborts the run with
//! nothing on disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// A source/header pair of template bodies
#[derive(Debug, Clone)]
pub struct TemplatePair {
    /// The `.cpp` body
    pub source: String,
    /// The `.hpp` body
    pub header: String,
}

impl TemplatePair {
    /// Load `<dir>/<stem>.cpp` and `<dir>/<stem>.hpp`.
    pub fn load(dir: &Path, stem: &str) -> Result<Self> {
        let source_path = dir.join(format!("{}.cpp", stem));
        let source = fs::read_to_string(&source_path)
            .with_context(|| format!("Failed to read template: {}", source_path.display()))?;
        debug!(path = %source_path.display(), "loaded source template");

        let header_path = dir.join(format!("{}.hpp", stem));
        let header = fs::read_to_string(&header_path)
            .with_context(|| format!("Failed to read template: {}", header_path.display()))?;
        debug!(path = %header_path.display(), "loaded header template");

        Ok(Self { source, header })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_pair() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Widget.cpp"), "source body").unwrap();
        fs::write(dir.path().join("Widget.hpp"), "header body").unwrap();

        let pair = TemplatePair::load(dir.path(), "Widget").unwrap();
        assert_eq!(pair.source, "source body");
        assert_eq!(pair.header, "header body");
    }

    #[test]
    fn test_load_missing_source_fails() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Widget.hpp"), "header body").unwrap();

        let err = TemplatePair::load(dir.path(), "Widget").unwrap_err();
        assert!(err.to_string().contains("Widget.cpp"));
    }

    #[test]
    fn test_load_missing_header_fails() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Widget.cpp"), "source body").unwrap();

        let err = TemplatePair::load(dir.path(), "Widget").unwrap_err();
        assert!(err.to_string().contains("Widget.hpp"));
    }
}
