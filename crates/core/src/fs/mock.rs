use super::FileSystem;
use anyhow::{anyhow, Result};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MockKind {
    File,
    Directory,
}

#[derive(Debug, Clone)]
struct MockEntry {
    content: Option<String>,
    kind: MockKind,
}

/// In-memory filesystem for tests. Relative paths are resolved against a
/// fixed mock root; parent directories are created implicitly.
pub struct MockFileSystem {
    files: RwLock<HashMap<PathBuf, MockEntry>>,
    failing_walks: RwLock<HashSet<PathBuf>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(HashMap::new()),
            failing_walks: RwLock::new(HashSet::new()),
            root: PathBuf::from("/mock"),
        }
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = self.normalize_path(path.as_ref());
        let mut files = self.files.write().unwrap();

        if let Some(parent) = path.parent() {
            Self::ensure_parents(&mut files, parent);
        }

        files.insert(
            path,
            MockEntry {
                content: Some(content.to_string()),
                kind: MockKind::File,
            },
        );
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        let mut files = self.files.write().unwrap();
        Self::ensure_parents(&mut files, &path);
    }

    /// Makes any subsequent `walk` rooted at `path` fail, simulating an I/O
    /// fault in the middle of an existing tree.
    pub fn fail_walks_under(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        self.failing_walks.write().unwrap().insert(path);
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn ensure_parents(files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            files.entry(current.clone()).or_insert(MockEntry {
                content: None,
                kind: MockKind::Directory,
            });
        }
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.files.read().unwrap().contains_key(&path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.files
            .read()
            .unwrap()
            .get(&path)
            .map(|e| e.kind == MockKind::Directory)
            .unwrap_or(false)
    }

    fn is_file(&self, path: &Path) -> bool {
        let path = self.normalize_path(path);
        self.files
            .read()
            .unwrap()
            .get(&path)
            .map(|e| e.kind == MockKind::File)
            .unwrap_or(false)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let path = self.normalize_path(path);
        self.files
            .read()
            .unwrap()
            .get(&path)
            .and_then(|e| e.content.clone())
            .ok_or_else(|| anyhow!("No such file: {:?}", path))
    }

    fn walk(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let root = self.normalize_path(root);

        if self
            .failing_walks
            .read()
            .unwrap()
            .iter()
            .any(|failing| root.starts_with(failing))
        {
            return Err(anyhow!("Injected walk failure under {:?}", root));
        }

        let files = self.files.read().unwrap();
        if !files.contains_key(&root) {
            return Err(anyhow!("No such directory: {:?}", root));
        }

        let mut result: Vec<PathBuf> = files
            .iter()
            .filter(|(path, entry)| entry.kind == MockKind::File && path.starts_with(&root))
            .map(|(path, _)| path.clone())
            .collect();
        result.sort();
        Ok(result)
    }
}
