pub mod error;
pub mod fs;
pub mod marker;
pub mod platform;
pub mod source;

pub use error::ProjectParseError;
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use marker::{MarkerKind, Markers, ProvenanceMarker};
pub use platform::{PlatformInfo, StaticPlatform, SystemPlatform};
pub use source::SourceUnit;
