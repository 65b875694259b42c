use super::FileSystem;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).context(format!("Failed to read file {:?}", path))
    }

    fn walk(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.context(format!("Failed to walk directory {:?}", root))?;
            if !entry.file_type().is_dir() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        let base = dir.path();

        fs::create_dir_all(base.join("subdir/nested")).unwrap();
        fs::File::create(base.join("top.txt"))
            .unwrap()
            .write_all(b"top")
            .unwrap();
        fs::File::create(base.join("subdir/mid.txt"))
            .unwrap()
            .write_all(b"mid")
            .unwrap();
        fs::File::create(base.join("subdir/nested/deep.txt"))
            .unwrap()
            .write_all(b"deep")
            .unwrap();

        dir
    }

    #[test]
    fn test_exists_and_kinds() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        assert!(fs.exists(temp.path()));
        assert!(fs.is_dir(&temp.path().join("subdir")));
        assert!(fs.is_file(&temp.path().join("top.txt")));
        assert!(!fs.exists(&temp.path().join("nonexistent")));
    }

    #[test]
    fn test_read_to_string() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let content = fs.read_to_string(&temp.path().join("top.txt")).unwrap();
        assert_eq!(content, "top");
        assert!(fs.read_to_string(&temp.path().join("missing.txt")).is_err());
    }

    #[test]
    fn test_walk_lists_files_at_every_depth() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let files = fs.walk(temp.path()).unwrap();
        assert_eq!(files.len(), 3);
        assert!(files.contains(&temp.path().join("top.txt")));
        assert!(files.contains(&temp.path().join("subdir/mid.txt")));
        assert!(files.contains(&temp.path().join("subdir/nested/deep.txt")));
    }

    #[test]
    fn test_walk_order_is_stable() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        let first = fs.walk(temp.path()).unwrap();
        let second = fs.walk(temp.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_walk_missing_root_is_an_error() {
        let temp = create_test_dir();
        let fs = RealFileSystem::new();

        assert!(fs.walk(&temp.path().join("nonexistent")).is_err());
    }
}
