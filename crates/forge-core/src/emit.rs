//! Writing the generated pair
//!
//! Output files are named after the class alone. The destination tree is
//! created on demand and existing files are overwritten silently. The
//! two writes are independent: the source file is committed before the
//! header write starts.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// Paths of the two files written by a generator run
#[derive(Debug, Clone)]
pub struct GeneratedPair {
    pub source_path: PathBuf,
    pub header_path: PathBuf,
}

impl GeneratedPair {
    /// The stdout contract: the two bare file names, newline separated.
    pub fn file_names(&self) -> String {
        format!(
            "{}\n{}",
            self.source_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            self.header_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        )
    }
}

/// Write `<Class>.cpp` and `<Class>.hpp` into `dest`, creating the
/// directory tree first.
pub fn emit(dest: &Path, class_name: &str, source: &str, header: &str) -> Result<GeneratedPair> {
    fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create destination: {}", dest.display()))?;

    let source_path = dest.join(format!("{}.cpp", class_name));
    fs::write(&source_path, source)
        .with_context(|| format!("Failed to write: {}", source_path.display()))?;
    debug!(path = %source_path.display(), "wrote source file");

    let header_path = dest.join(format!("{}.hpp", class_name));
    fs::write(&header_path, header)
        .with_context(|| format!("Failed to write: {}", header_path.display()))?;
    debug!(path = %header_path.display(), "wrote header file");

    Ok(GeneratedPair {
        source_path,
        header_path,
    })
}
