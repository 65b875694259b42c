use std::env;
use std::path::PathBuf;

const DEFAULT_POM_CACHE_ENABLED: bool = true;

/// Per-invocation knobs for the composed parser.
#[derive(Debug, Clone)]
pub struct ParserOptions {
    pub pom_cache_enabled: bool,
    /// Explicit cache root; `None` means the conventional directory under
    /// the user's home.
    pub pom_cache_directory: Option<PathBuf>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            pom_cache_enabled: DEFAULT_POM_CACHE_ENABLED,
            pom_cache_directory: None,
        }
    }
}

impl ParserOptions {
    pub fn from_env() -> Self {
        let pom_cache_enabled = env::var("PEDIGREE_POM_CACHE")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(DEFAULT_POM_CACHE_ENABLED);

        let pom_cache_directory = env::var("PEDIGREE_POM_CACHE_DIR").ok().map(PathBuf::from);

        Self {
            pom_cache_enabled,
            pom_cache_directory,
        }
    }
}
