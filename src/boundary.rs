use std::fmt;

use crate::domain::Version;

/// Non-fatal findings about the tag history, reported next to a resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag exists but cannot be parsed as a release version
    UnparsableTag { tag: String, reason: String },
    /// The computed next stable version is already tagged
    StableAlreadyTagged { version: Version },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Ignoring tag '{}': {}", tag, reason)
            }
            BoundaryWarning::StableAlreadyTagged { version } => {
                write!(
                    f,
                    "Tag '{}' already exists; the latest release may be stale",
                    version
                )
            }
        }
    }
}
