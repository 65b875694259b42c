use pedigree_core::{FileSystem, ProjectParseError};
use std::path::{Path, PathBuf};
use tracing::debug;

const JAVA_EXTENSION: &str = "java";

/// Recursively lists every `.java` file below `root`, in the filesystem's
/// stable traversal order.
///
/// A missing root is an empty result, not an error — absent source roots are
/// routine (a POM-packaging module has none). An I/O failure while walking a
/// root that does exist is fatal.
pub fn list_java_sources(
    fs: &dyn FileSystem,
    root: &Path,
) -> Result<Vec<PathBuf>, ProjectParseError> {
    if !fs.exists(root) {
        debug!(root = %root.display(), "Source root does not exist; skipping");
        return Ok(Vec::new());
    }

    let files = fs
        .walk(root)
        .map_err(|source| ProjectParseError::FileSystemWalk {
            path: root.to_path_buf(),
            source,
        })?;

    Ok(files
        .into_iter()
        .filter(|f| f.extension().and_then(|e| e.to_str()) == Some(JAVA_EXTENSION))
        .collect())
}

/// Paths known to hold processor-generated output. Retained from the
/// generated-root enumeration and used only as a membership test during
/// tagging, never enumerated a second time.
#[derive(Debug, Clone, Default)]
pub struct GeneratedRootSet {
    roots: Vec<PathBuf>,
}

impl GeneratedRootSet {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// True when `path` equals a member or lies below one.
    pub fn contains(&self, path: &Path) -> bool {
        self.roots.iter().any(|root| path.starts_with(root))
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pedigree_core::MockFileSystem;

    #[test]
    fn test_missing_root_yields_empty() {
        let fs = MockFileSystem::new();
        let sources = list_java_sources(&fs, Path::new("/repo/src/main/java")).unwrap();
        assert!(sources.is_empty());
    }

    #[test]
    fn test_lists_matching_files_at_any_depth() {
        let fs = MockFileSystem::new();
        fs.add_file("/repo/src/main/java/A.java", "class A {}");
        fs.add_file("/repo/src/main/java/org/acme/B.java", "class B {}");
        fs.add_file("/repo/src/main/java/org/acme/deep/C.java", "class C {}");
        fs.add_file("/repo/src/main/java/README.md", "docs");
        fs.add_file("/repo/src/main/java/org/notes.txt", "notes");

        let sources = list_java_sources(&fs, Path::new("/repo/src/main/java")).unwrap();
        assert_eq!(sources.len(), 3);
        assert!(sources
            .iter()
            .all(|p| p.extension().and_then(|e| e.to_str()) == Some("java")));
    }

    #[test]
    fn test_walk_failure_on_existing_tree_is_fatal() {
        let fs = MockFileSystem::new();
        fs.add_file("/repo/src/main/java/A.java", "class A {}");
        fs.fail_walks_under("/repo/src/main/java");

        match list_java_sources(&fs, Path::new("/repo/src/main/java")) {
            Err(ProjectParseError::FileSystemWalk { path, .. }) => {
                assert_eq!(path, PathBuf::from("/repo/src/main/java"))
            }
            other => panic!("expected FileSystemWalk, got {:?}", other),
        }
    }

    #[test]
    fn test_generated_root_membership() {
        let generated = GeneratedRootSet::new(vec![
            PathBuf::from("/repo/target/generated-sources/Gen.java"),
            PathBuf::from("/repo/target/generated-sources/annotations"),
        ]);

        // Equal to a member.
        assert!(generated.contains(Path::new("/repo/target/generated-sources/Gen.java")));
        // Nested below a member.
        assert!(generated.contains(Path::new(
            "/repo/target/generated-sources/annotations/org/acme/Stub.java"
        )));
        // Outside every member.
        assert!(!generated.contains(Path::new("/repo/src/main/java/A.java")));
    }
}
