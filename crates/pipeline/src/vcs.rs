use pedigree_core::ProvenanceMarker;
use std::path::Path;

/// Opaque version-control provenance collaborator. Probed once per run
/// against the invocation base directory; `None` means the directory is not
/// under version control and no marker is attached.
pub trait VcsProbe: Send + Sync {
    fn probe(&self, project_dir: &Path) -> Option<ProvenanceMarker>;
}

/// Probe for hosts without version-control integration.
pub struct NoVcs;

impl VcsProbe for NoVcs {
    fn probe(&self, _project_dir: &Path) -> Option<ProvenanceMarker> {
        None
    }
}
