//! The Maven-facing half of pedigree: a read-only view of the live project
//! model, descriptor-candidate resolution across the module/ancestor graph,
//! the POM cache with its fallback policy, and user-settings resolution.

pub mod cache;
pub mod context;
pub mod descriptor;
pub mod graph;
pub mod project;
pub mod settings;

pub use cache::{initialize_pom_cache, DiskPomCache, InMemoryPomCache, NoopPomCache, PomCache};
pub use context::ExecutionContext;
pub use descriptor::{DescriptorParser, DescriptorRequest, MavenDocument};
pub use graph::resolve_candidates;
pub use project::{BuildDirectories, CompilerLevels, MavenProjectNode};
pub use settings::{load_settings, MavenSettings};
