use crate::marker::Markers;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A parsed source artifact plus its attached provenance markers.
///
/// Units are created by the external source parser with `source_path`
/// relative to the invocation's base directory; this crate only ever adds
/// markers before handing the unit to the downstream consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceUnit {
    pub source_path: PathBuf,
    pub content: String,
    #[serde(default)]
    pub markers: Markers,
}

impl SourceUnit {
    pub fn new(source_path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            content: content.into(),
            markers: Markers::new(),
        }
    }
}
