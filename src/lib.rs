pub mod boundary;
pub mod config;
pub mod domain;
pub mod error;
pub mod resolution;
pub mod source;
pub mod ui;
pub mod workflow;

pub use domain::{PreReleaseKind, TagSnapshot, Version, VersionBump};
pub use error::{ReleaseError, Result};
pub use resolution::{resolve, ResolutionResult};
pub use workflow::{resolve_from_source, run};
