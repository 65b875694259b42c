use anyhow::Result;
use std::path::{Path, PathBuf};

pub trait FileSystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Recursively lists every non-directory entry below `root`, in a stable
    /// traversal order. Callers are expected to check `exists` first; walking
    /// a missing root is an error, not an empty result.
    fn walk(&self, root: &Path) -> Result<Vec<PathBuf>>;
}
