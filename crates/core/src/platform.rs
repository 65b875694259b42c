//! Platform facts consumed during provenance construction.
//!
//! Injected rather than read ambiently so tests can pin every value.

use std::env;
use std::path::PathBuf;

const DEFAULT_JAVA_RUNTIME_VERSION: &str = "17";
const DEFAULT_JAVA_VENDOR: &str = "unknown";
const DEFAULT_MAVEN_VERSION: &str = "unknown";

pub trait PlatformInfo: Send + Sync {
    /// Version string of the language runtime the build runs on. Also the
    /// default for source/target compatibility when the project declares
    /// no explicit compiler levels.
    fn java_runtime_version(&self) -> String;

    fn java_vendor(&self) -> String;

    /// Version of the build tool driving this invocation.
    fn maven_version(&self) -> String;

    /// The invoking user's home directory, when one can be determined.
    fn user_home(&self) -> Option<PathBuf>;
}

/// Reads platform facts from the process environment, with conservative
/// fallbacks when a variable is unset.
pub struct SystemPlatform;

impl SystemPlatform {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformInfo for SystemPlatform {
    fn java_runtime_version(&self) -> String {
        env::var("JAVA_RUNTIME_VERSION")
            .unwrap_or_else(|_| DEFAULT_JAVA_RUNTIME_VERSION.to_string())
    }

    fn java_vendor(&self) -> String {
        env::var("JAVA_VENDOR").unwrap_or_else(|_| DEFAULT_JAVA_VENDOR.to_string())
    }

    fn maven_version(&self) -> String {
        env::var("MAVEN_VERSION").unwrap_or_else(|_| DEFAULT_MAVEN_VERSION.to_string())
    }

    fn user_home(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

/// Fixed platform facts for deterministic tests.
#[derive(Debug, Clone)]
pub struct StaticPlatform {
    pub java_runtime_version: String,
    pub java_vendor: String,
    pub maven_version: String,
    pub user_home: Option<PathBuf>,
}

impl Default for StaticPlatform {
    fn default() -> Self {
        Self {
            java_runtime_version: "17.0.2".to_string(),
            java_vendor: "Testing".to_string(),
            maven_version: "3.9.9".to_string(),
            user_home: None,
        }
    }
}

impl PlatformInfo for StaticPlatform {
    fn java_runtime_version(&self) -> String {
        self.java_runtime_version.clone()
    }

    fn java_vendor(&self) -> String {
        self.java_vendor.clone()
    }

    fn maven_version(&self) -> String {
        self.maven_version.clone()
    }

    fn user_home(&self) -> Option<PathBuf> {
        self.user_home.clone()
    }
}
