use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures of a project-resolution or source-listing run.
///
/// Non-fatal conditions (missing or malformed user settings, descriptor-cache
/// construction faults, absent source roots) never surface here; they are
/// logged and degraded at the point of discovery.
#[derive(Debug, Error)]
pub enum ProjectParseError {
    #[error("failed to walk source tree {path:?}: {source}")]
    FileSystemWalk {
        path: PathBuf,
        source: anyhow::Error,
    },

    #[error("{scope} classpath has not been resolved for this project")]
    DependencyResolution { scope: String },

    #[error("descriptor parser produced no merged model: {detail}")]
    ParseAggregation { detail: String },

    #[error("{phase} parser failed: {source}")]
    ParserFailure {
        phase: &'static str,
        source: anyhow::Error,
    },
}
