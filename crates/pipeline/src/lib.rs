//! The invocation-facing half of pedigree: source enumeration, provenance
//! tagging, the external source-parser contract, and the composed
//! `MavenProjectParser` that drives one sequential run from settings
//! resolution through final VCS tagging.

pub mod config;
pub mod java;
pub mod project_parser;
pub mod sources;
pub mod tagger;
pub mod vcs;

pub use config::ParserOptions;
pub use java::JavaSourceParser;
pub use project_parser::MavenProjectParser;
pub use sources::{list_java_sources, GeneratedRootSet};
pub use tagger::add_provenance;
pub use vcs::{NoVcs, VcsProbe};
