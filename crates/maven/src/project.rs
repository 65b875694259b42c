use pedigree_core::ProjectParseError;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// Read-only view of one node of the live build-tool project model.
///
/// This crate never constructs these itself; the host's plugin layer builds
/// the tree from its in-memory session and hands it over per invocation.
/// `pom_file` is `None` for ancestors resolved from a repository rather than
/// from disk — the candidate walk stops at the first such ancestor.
#[derive(Debug, Clone, Default)]
pub struct MavenProjectNode {
    pub pom_file: Option<PathBuf>,
    pub name: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    /// Declared build properties, e.g. `maven.compiler.source`.
    pub properties: HashMap<String, String>,
    pub build: BuildDirectories,
    /// Resolved compile classpath; `None` means upstream dependency
    /// resolution failed and any demand for it is fatal.
    pub compile_classpath: Option<Vec<PathBuf>>,
    pub test_classpath: Option<Vec<PathBuf>>,
    /// Modules collected for this reactor, in discovery order. May include
    /// the project itself; candidate resolution filters it back out.
    pub collected_projects: Vec<MavenProjectNode>,
    pub parent: Option<Box<MavenProjectNode>>,
}

#[derive(Debug, Clone, Default)]
pub struct BuildDirectories {
    /// The build output directory (annotation processors emit generated
    /// sources below it).
    pub directory: PathBuf,
    pub source_directory: PathBuf,
    pub test_source_directory: PathBuf,
}

impl MavenProjectNode {
    pub fn compile_classpath(&self) -> Result<Vec<PathBuf>, ProjectParseError> {
        Self::demand_classpath(&self.compile_classpath, "compile")
    }

    pub fn test_classpath(&self) -> Result<Vec<PathBuf>, ProjectParseError> {
        Self::demand_classpath(&self.test_classpath, "test")
    }

    fn demand_classpath(
        entries: &Option<Vec<PathBuf>>,
        scope: &str,
    ) -> Result<Vec<PathBuf>, ProjectParseError> {
        let entries = entries
            .as_ref()
            .ok_or_else(|| ProjectParseError::DependencyResolution {
                scope: scope.to_string(),
            })?;

        // Deduplicate while preserving resolution order.
        let mut seen = HashSet::new();
        Ok(entries
            .iter()
            .filter(|p| seen.insert((*p).clone()))
            .cloned()
            .collect())
    }

    pub fn compiler_levels(&self) -> CompilerLevels {
        CompilerLevels::from_properties(&self.properties)
    }
}

/// Explicit compiler source/target overrides, resolved from the project's
/// build properties once instead of looked up ad hoc.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilerLevels {
    pub source: Option<String>,
    pub target: Option<String>,
}

impl CompilerLevels {
    pub fn from_properties(properties: &HashMap<String, String>) -> Self {
        Self {
            source: properties.get("maven.compiler.source").cloned(),
            target: properties.get("maven.compiler.target").cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classpath_demand_fails_when_unresolved() {
        let node = MavenProjectNode {
            compile_classpath: None,
            ..MavenProjectNode::default()
        };

        match node.compile_classpath() {
            Err(ProjectParseError::DependencyResolution { scope }) => {
                assert_eq!(scope, "compile")
            }
            other => panic!("expected DependencyResolution, got {:?}", other),
        }
    }

    #[test]
    fn test_classpath_deduplicates_preserving_order() {
        let node = MavenProjectNode {
            compile_classpath: Some(vec![
                PathBuf::from("/repo/b.jar"),
                PathBuf::from("/repo/a.jar"),
                PathBuf::from("/repo/b.jar"),
            ]),
            ..MavenProjectNode::default()
        };

        assert_eq!(
            node.compile_classpath().unwrap(),
            vec![PathBuf::from("/repo/b.jar"), PathBuf::from("/repo/a.jar")]
        );
    }

    #[test]
    fn test_compiler_levels_from_properties() {
        let mut properties = HashMap::new();
        properties.insert("maven.compiler.source".to_string(), "11".to_string());

        let levels = CompilerLevels::from_properties(&properties);
        assert_eq!(levels.source.as_deref(), Some("11"));
        assert_eq!(levels.target, None);
    }
}
