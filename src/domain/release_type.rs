use std::fmt;
use std::str::FromStr;

use crate::error::ReleaseError;

/// Version bump type requested for the next stable release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl VersionBump {
    /// Canonical lower-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
        }
    }
}

impl FromStr for VersionBump {
    type Err = ReleaseError;

    /// Accepts "patch", "minor", "major" and the abbreviations "p", "m", "M".
    ///
    /// Matching is case sensitive: "m" is minor, "M" is major.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "patch" | "p" => Ok(VersionBump::Patch),
            "minor" | "m" => Ok(VersionBump::Minor),
            "major" | "M" => Ok(VersionBump::Major),
            other => Err(ReleaseError::invalid_release_type(other)),
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
