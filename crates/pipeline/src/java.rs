use anyhow::Result;
use pedigree_core::SourceUnit;
use pedigree_maven::ExecutionContext;
use std::path::{Path, PathBuf};

/// Batch "parse(paths, classpath) → units" contract, implemented outside
/// this core by the source-language parser.
///
/// Units come back with paths relative to `base_dir` and no markers;
/// provenance attachment is this core's job. Parser tuning (style sets,
/// warning suppression) belongs to the implementation's construction, not
/// to this contract.
pub trait JavaSourceParser {
    fn parse(
        &mut self,
        paths: &[PathBuf],
        classpath: &[PathBuf],
        base_dir: &Path,
        ctx: &mut ExecutionContext,
    ) -> Result<Vec<SourceUnit>>;
}
