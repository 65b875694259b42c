use crate::config::ParserOptions;
use crate::java::JavaSourceParser;
use crate::sources::{list_java_sources, GeneratedRootSet};
use crate::tagger::add_provenance;
use crate::vcs::VcsProbe;
use pedigree_core::marker::BuildToolKind;
use pedigree_core::{FileSystem, PlatformInfo, ProjectParseError, ProvenanceMarker, SourceUnit};
use pedigree_maven::{
    initialize_pom_cache, load_settings, resolve_candidates, DescriptorParser, DescriptorRequest,
    ExecutionContext, MavenDocument, MavenProjectNode,
};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

const SETTINGS_RELATIVE_PATH: &str = ".m2/settings.xml";
const MAVEN_CONFIG_RELATIVE_PATH: &str = ".mvn/maven.config";

/// Resolves one Maven project for downstream analysis: its merged descriptor
/// model and its enumerated, provenance-tagged source units.
///
/// One parser serves one invocation. Each run is sequential — settings, then
/// cache, then the descriptor graph, then the main and test source sets,
/// then a final VCS pass — and degrades on optional capability (caching,
/// user settings) while failing atomically on anything that would make the
/// result incomplete.
pub struct MavenProjectParser<'a> {
    project: &'a MavenProjectNode,
    options: ParserOptions,
    fs: Arc<dyn FileSystem>,
    vcs: Box<dyn VcsProbe>,
    user_home: Option<PathBuf>,
    project_provenance: Vec<ProvenanceMarker>,
}

impl<'a> MavenProjectParser<'a> {
    pub fn new(
        project: &'a MavenProjectNode,
        options: ParserOptions,
        fs: Arc<dyn FileSystem>,
        platform: &dyn PlatformInfo,
        vcs: Box<dyn VcsProbe>,
    ) -> Self {
        let runtime_version = platform.java_runtime_version();
        let levels = project.compiler_levels();
        let source_compatibility = levels.source.unwrap_or_else(|| runtime_version.clone());
        let target_compatibility = levels.target.unwrap_or_else(|| runtime_version.clone());

        let project_provenance = vec![
            ProvenanceMarker::BuildTool {
                tool: BuildToolKind::Maven,
                version: platform.maven_version(),
            },
            ProvenanceMarker::JavaVersion {
                runtime_version,
                vendor: platform.java_vendor(),
                source_compatibility,
                target_compatibility,
            },
            ProvenanceMarker::JavaProject {
                project_name: project.name.clone(),
                group_id: project.group_id.clone(),
                artifact_id: project.artifact_id.clone(),
                version: project.version.clone(),
            },
        ];

        Self {
            project,
            options,
            fs,
            vcs,
            user_home: platform.user_home(),
            project_provenance,
        }
    }

    /// Markers describing the project-level build context, computed once at
    /// construction and attached to every produced artifact.
    pub fn project_provenance(&self) -> &[ProvenanceMarker] {
        &self.project_provenance
    }

    /// Resolves the merged project model: candidate descriptors across the
    /// module and ancestor graph, cache-backed batch parsing with the user's
    /// active profiles, and project-level provenance on the result.
    pub fn parse_maven(
        &self,
        base_dir: &Path,
        descriptor_parser: &mut dyn DescriptorParser,
        ctx: &mut ExecutionContext,
    ) -> Result<MavenDocument, ProjectParseError> {
        let poms = resolve_candidates(self.project);

        let cache = initialize_pom_cache(
            self.options.pom_cache_enabled,
            self.options.pom_cache_directory.as_deref(),
            self.user_home.as_deref(),
        );

        if let Some(home) = &self.user_home {
            load_settings(self.fs.as_ref(), &home.join(SETTINGS_RELATIVE_PATH), ctx);
        }

        let maven_config =
            Some(base_dir.join(MAVEN_CONFIG_RELATIVE_PATH)).filter(|p| self.fs.is_file(p));

        let request = DescriptorRequest {
            poms,
            base_dir: base_dir.to_path_buf(),
            maven_config,
            active_profiles: ctx.active_profiles().to_vec(),
            cache: cache.as_ref(),
        };

        let mut documents = descriptor_parser
            .parse_poms(&request, ctx)
            .map_err(|source| ProjectParseError::ParserFailure {
                phase: "descriptor",
                source,
            })?;

        if documents.is_empty() {
            return Err(ProjectParseError::ParseAggregation {
                detail: format!(
                    "no merged model produced for {}:{}",
                    self.project.group_id, self.project.artifact_id
                ),
            });
        }
        let mut document = documents.swap_remove(0);

        for marker in &self.project_provenance {
            document.markers.insert_if_absent(marker.clone());
        }
        Ok(document)
    }

    /// Enumerates, parses and tags the project's sources.
    ///
    /// Main parse input is the generated enumeration followed by the main
    /// source root; the generated enumeration is retained to classify units.
    /// A path enumerated for both source sets is parsed once, as main, and
    /// reported as a configuration warning. Fatal failures abort the whole
    /// listing; no partial unit sequence is ever returned.
    pub fn list_source_files(
        &self,
        base_dir: &Path,
        java_parser: &mut dyn JavaSourceParser,
        ctx: &mut ExecutionContext,
    ) -> Result<Vec<SourceUnit>, ProjectParseError> {
        let build = &self.project.build;

        // Some annotation processors emit generated sources below the build
        // output directory.
        let generated_paths = list_java_sources(self.fs.as_ref(), &build.directory)?;
        let main_paths = list_java_sources(self.fs.as_ref(), &build.source_directory)?;

        let mut seen = HashSet::new();
        let main_inputs: Vec<PathBuf> = generated_paths
            .iter()
            .chain(main_paths.iter())
            .filter(|p| {
                let fresh = seen.insert((*p).clone());
                if !fresh {
                    debug!(path = %p.display(), "Path enumerated twice within the main set");
                }
                fresh
            })
            .cloned()
            .collect();
        let generated_roots = GeneratedRootSet::new(generated_paths);

        info!(files = main_inputs.len(), "Parsing Java main files");
        let compile_classpath = self.project.compile_classpath()?;
        let main_units = java_parser
            .parse(&main_inputs, &compile_classpath, base_dir, ctx)
            .map_err(|source| ProjectParseError::ParserFailure {
                phase: "main source",
                source,
            })?;

        let main_set = ProvenanceMarker::JavaSourceSet {
            name: "main".to_string(),
            classpath: compile_classpath,
        };
        let mut source_files = Vec::new();
        for mut unit in main_units {
            add_provenance(
                &mut unit,
                base_dir,
                &self.project_provenance,
                Some(&main_set),
                &generated_roots,
            );
            source_files.push(unit);
        }

        let test_classpath = self.project.test_classpath()?;
        let test_inputs: Vec<PathBuf> = list_java_sources(self.fs.as_ref(), &build.test_source_directory)?
            .into_iter()
            .filter(|p| {
                let fresh = seen.insert(p.clone());
                if !fresh {
                    warn!(
                        path = %p.display(),
                        "Path is enumerated by both source sets; keeping the main unit"
                    );
                }
                fresh
            })
            .collect();

        info!(files = test_inputs.len(), "Parsing Java test files");
        let test_units = java_parser
            .parse(&test_inputs, &test_classpath, base_dir, ctx)
            .map_err(|source| ProjectParseError::ParserFailure {
                phase: "test source",
                source,
            })?;

        let test_set = ProvenanceMarker::JavaSourceSet {
            name: "test".to_string(),
            classpath: test_classpath,
        };
        for mut unit in test_units {
            add_provenance(
                &mut unit,
                base_dir,
                &self.project_provenance,
                Some(&test_set),
                &generated_roots,
            );
            source_files.push(unit);
        }

        if let Some(vcs_marker) = self.vcs.probe(base_dir) {
            for unit in &mut source_files {
                unit.markers.insert_if_absent(vcs_marker.clone());
            }
        }

        info!(units = source_files.len(), "Source listing complete");
        Ok(source_files)
    }
}
