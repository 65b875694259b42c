use crate::project::MavenProjectNode;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Gathers every descriptor file relevant to resolving `project`: its own
/// POM, each collected module's POM (excluding the project itself, in
/// discovery order), then the ancestor chain until the first ancestor with
/// no backing file.
///
/// The result is deduplicated and order-stable. It intentionally encodes no
/// parent/child structure — the external descriptor parser reconstructs the
/// graph from descriptor content, this walk only guarantees the files are
/// all on the parse list.
pub fn resolve_candidates(project: &MavenProjectNode) -> Vec<PathBuf> {
    fn push(path: &PathBuf, poms: &mut Vec<PathBuf>, seen: &mut HashSet<PathBuf>) {
        if seen.insert(path.clone()) {
            poms.push(path.clone());
        }
    }

    let mut seen = HashSet::new();
    let mut poms = Vec::new();

    if let Some(pom) = &project.pom_file {
        push(pom, &mut poms, &mut seen);
    }

    for collected in &project.collected_projects {
        if collected.pom_file == project.pom_file {
            continue;
        }
        if let Some(pom) = &collected.pom_file {
            push(pom, &mut poms, &mut seen);
        }
    }

    let mut ancestor_guard = HashSet::new();
    if let Some(pom) = &project.pom_file {
        ancestor_guard.insert(pom.clone());
    }
    let mut parent = project.parent.as_deref();
    while let Some(ancestor) = parent {
        let Some(pom) = &ancestor.pom_file else {
            // Root of the on-disk chain; anything above came from a repository.
            break;
        };
        if !ancestor_guard.insert(pom.clone()) {
            // A malformed model would otherwise walk this chain forever.
            warn!(
                pom = %pom.display(),
                "Ancestor chain revisited a descriptor; stopping the parent walk"
            );
            break;
        }
        push(pom, &mut poms, &mut seen);
        parent = ancestor.parent.as_deref();
    }

    debug!(count = poms.len(), "Resolved descriptor candidates");
    poms
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(pom: &str) -> MavenProjectNode {
        MavenProjectNode {
            pom_file: Some(PathBuf::from(pom)),
            ..MavenProjectNode::default()
        }
    }

    #[test]
    fn test_lone_project_yields_single_candidate() {
        let project = node("/repo/pom.xml");

        assert_eq!(
            resolve_candidates(&project),
            vec![PathBuf::from("/repo/pom.xml")]
        );
    }

    #[test]
    fn test_children_and_ancestors_counted_once_each() {
        let mut project = node("/repo/app/pom.xml");
        project.collected_projects = vec![
            node("/repo/app/pom.xml"), // the reactor includes the project itself
            node("/repo/app/web/pom.xml"),
            node("/repo/app/db/pom.xml"),
        ];
        let mut parent = node("/repo/pom.xml");
        parent.parent = Some(Box::new(node("/org/parent/pom.xml")));
        project.parent = Some(Box::new(parent));

        let poms = resolve_candidates(&project);

        // 1 self + 2 children + 2 ancestors, self exactly once.
        assert_eq!(poms.len(), 5);
        assert_eq!(poms[0], PathBuf::from("/repo/app/pom.xml"));
        assert_eq!(
            poms.iter()
                .filter(|p| **p == PathBuf::from("/repo/app/pom.xml"))
                .count(),
            1
        );
    }

    #[test]
    fn test_ancestor_walk_stops_at_fileless_parent() {
        let mut project = node("/repo/pom.xml");
        let mut resolved_parent = MavenProjectNode::default(); // no backing file
        resolved_parent.parent = Some(Box::new(node("/never/reached/pom.xml")));
        project.parent = Some(Box::new(resolved_parent));

        assert_eq!(
            resolve_candidates(&project),
            vec![PathBuf::from("/repo/pom.xml")]
        );
    }

    #[test]
    fn test_parent_cycle_terminates() {
        let mut project = node("/repo/a/pom.xml");
        let mut first = node("/repo/b/pom.xml");
        let mut second = node("/repo/c/pom.xml");
        // Malformed chain: c's parent claims b's descriptor again.
        second.parent = Some(Box::new(node("/repo/b/pom.xml")));
        first.parent = Some(Box::new(second));
        project.parent = Some(Box::new(first));

        let poms = resolve_candidates(&project);
        assert_eq!(
            poms,
            vec![
                PathBuf::from("/repo/a/pom.xml"),
                PathBuf::from("/repo/b/pom.xml"),
                PathBuf::from("/repo/c/pom.xml"),
            ]
        );
    }

    #[test]
    fn test_duplicate_child_descriptors_deduplicated() {
        let mut project = node("/repo/pom.xml");
        project.collected_projects = vec![node("/repo/web/pom.xml"), node("/repo/web/pom.xml")];

        assert_eq!(
            resolve_candidates(&project),
            vec![
                PathBuf::from("/repo/pom.xml"),
                PathBuf::from("/repo/web/pom.xml"),
            ]
        );
    }
}
