use crate::sources::GeneratedRootSet;
use pedigree_core::{ProvenanceMarker, SourceUnit};
use std::path::Path;

/// Attaches provenance to one source unit: the project-level markers in
/// order, the source-set membership when one applies, and the generated
/// flag when the unit's path (resolved against `base_dir`) lies inside a
/// generated root.
///
/// Every insertion is first-writer-wins; tagging an already-tagged unit is
/// a no-op per marker kind.
pub fn add_provenance(
    unit: &mut SourceUnit,
    base_dir: &Path,
    provenance: &[ProvenanceMarker],
    source_set: Option<&ProvenanceMarker>,
    generated_roots: &GeneratedRootSet,
) {
    for marker in provenance {
        unit.markers.insert_if_absent(marker.clone());
    }

    if let Some(source_set) = source_set {
        unit.markers.insert_if_absent(source_set.clone());
    }

    if generated_roots.contains(&base_dir.join(&unit.source_path)) {
        unit.markers.insert_if_absent(ProvenanceMarker::Generated);
    }
}
