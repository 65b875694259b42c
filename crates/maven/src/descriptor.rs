use crate::cache::PomCache;
use crate::context::ExecutionContext;
use anyhow::Result;
use pedigree_core::Markers;
use std::path::PathBuf;

/// Merged project model produced by the external descriptor parser.
///
/// The model's content is the parser's business; this core only attaches
/// project-level provenance to it before returning it to the caller.
#[derive(Debug, Clone, Default)]
pub struct MavenDocument {
    pub source_path: PathBuf,
    pub markers: Markers,
}

/// One batch descriptor-resolution request: every candidate POM on disk,
/// the invocation base directory, per-run resolution input, and the cache
/// the parser should read and write through.
pub struct DescriptorRequest<'a> {
    pub poms: Vec<PathBuf>,
    pub base_dir: PathBuf,
    /// `.mvn/maven.config` under the base directory, when present.
    pub maven_config: Option<PathBuf>,
    pub active_profiles: Vec<String>,
    pub cache: &'a dyn PomCache,
}

/// Batch "parse(paths) → merged model" contract, implemented outside this
/// core. Returning an empty batch for a required input is a fatal
/// aggregation failure at the call site.
pub trait DescriptorParser {
    fn parse_poms(
        &mut self,
        request: &DescriptorRequest<'_>,
        ctx: &mut ExecutionContext,
    ) -> Result<Vec<MavenDocument>>;
}
