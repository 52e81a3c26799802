//! FileSystem trait definition

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Abstraction over the file reads the extractor needs.
///
/// Route-definition documents referenced from a template are read through
/// this trait so that resolution can be exercised without touching disk.
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a file
    fn is_file(&self, path: &Path) -> bool;

    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Resolve `path` against an optional base directory.
    ///
    /// Absolute paths are returned unchanged.
    fn resolve(&self, base: Option<&Path>, path: &str) -> PathBuf {
        let candidate = Path::new(path);
        match base {
            Some(base) if candidate.is_relative() => base.join(candidate),
            _ => candidate.to_path_buf(),
        }
    }
}
