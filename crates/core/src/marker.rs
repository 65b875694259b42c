//! Provenance markers attached to resolved models and source units.
//!
//! A marker records one fact about where a unit came from or under which
//! build context it was produced. A unit carries at most one marker of each
//! kind; insertion is first-writer-wins.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerKind {
    BuildTool,
    JavaVersion,
    JavaProject,
    JavaSourceSet,
    Generated,
    Vcs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildToolKind {
    Maven,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProvenanceMarker {
    /// Identity and version of the build tool the project was compiled under.
    BuildTool { tool: BuildToolKind, version: String },
    /// Language runtime the build ran on, plus the effective compiler levels.
    JavaVersion {
        runtime_version: String,
        vendor: String,
        source_compatibility: String,
        target_compatibility: String,
    },
    /// Coordinates and display name of the owning project.
    JavaProject {
        project_name: String,
        group_id: String,
        artifact_id: String,
        version: String,
    },
    /// Named source-set membership and the classpath it was compiled against.
    JavaSourceSet {
        name: String,
        classpath: Vec<PathBuf>,
    },
    /// The unit was emitted by code generation rather than authored by hand.
    Generated,
    /// Opaque version-control provenance produced by an external probe.
    Vcs { origin: String },
}

impl ProvenanceMarker {
    pub fn kind(&self) -> MarkerKind {
        match self {
            ProvenanceMarker::BuildTool { .. } => MarkerKind::BuildTool,
            ProvenanceMarker::JavaVersion { .. } => MarkerKind::JavaVersion,
            ProvenanceMarker::JavaProject { .. } => MarkerKind::JavaProject,
            ProvenanceMarker::JavaSourceSet { .. } => MarkerKind::JavaSourceSet,
            ProvenanceMarker::Generated => MarkerKind::Generated,
            ProvenanceMarker::Vcs { .. } => MarkerKind::Vcs,
        }
    }
}

/// Insertion-ordered collection of markers, at most one per kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Markers {
    entries: Vec<ProvenanceMarker>,
}

impl Markers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `marker` unless a marker of the same kind is already present.
    /// Returns whether the marker was inserted; an existing entry is never
    /// replaced.
    pub fn insert_if_absent(&mut self, marker: ProvenanceMarker) -> bool {
        if self.contains(marker.kind()) {
            return false;
        }
        self.entries.push(marker);
        true
    }

    pub fn contains(&self, kind: MarkerKind) -> bool {
        self.entries.iter().any(|m| m.kind() == kind)
    }

    pub fn get(&self, kind: MarkerKind) -> Option<&ProvenanceMarker> {
        self.entries.iter().find(|m| m.kind() == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProvenanceMarker> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_tool(version: &str) -> ProvenanceMarker {
        ProvenanceMarker::BuildTool {
            tool: BuildToolKind::Maven,
            version: version.to_string(),
        }
    }

    #[test]
    fn test_first_writer_wins() {
        let mut markers = Markers::new();

        assert!(markers.insert_if_absent(build_tool("3.9.0")));
        assert!(!markers.insert_if_absent(build_tool("3.8.1")));

        assert_eq!(markers.len(), 1);
        match markers.get(MarkerKind::BuildTool) {
            Some(ProvenanceMarker::BuildTool { version, .. }) => assert_eq!(version, "3.9.0"),
            other => panic!("unexpected marker: {:?}", other),
        }
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut markers = Markers::new();
        markers.insert_if_absent(ProvenanceMarker::Generated);
        markers.insert_if_absent(build_tool("3.9.0"));
        markers.insert_if_absent(ProvenanceMarker::Vcs {
            origin: "git".to_string(),
        });

        let kinds: Vec<MarkerKind> = markers.iter().map(|m| m.kind()).collect();
        assert_eq!(
            kinds,
            vec![MarkerKind::Generated, MarkerKind::BuildTool, MarkerKind::Vcs]
        );
    }

    #[test]
    fn test_distinct_kinds_coexist() {
        let mut markers = Markers::new();
        markers.insert_if_absent(build_tool("3.9.0"));
        markers.insert_if_absent(ProvenanceMarker::Generated);

        assert!(markers.contains(MarkerKind::BuildTool));
        assert!(markers.contains(MarkerKind::Generated));
        assert!(!markers.contains(MarkerKind::Vcs));
        assert_eq!(markers.len(), 2);
    }
}
