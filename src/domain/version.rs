use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::error::{self, ReleaseError};

use super::prerelease::{PreRelease, PreReleaseKind};
use super::release_type::VersionBump;

/// Reasons a tag is not a release version
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParseError {
    #[error("{0}")]
    Semver(String),

    #[error("build metadata is not allowed: '{0}'")]
    BuildMetadata(String),

    #[error("unknown pre-release label: '{0}'")]
    UnknownPreRelease(String),

    #[error("pre-release '{0}' has no sequence number")]
    MissingPreReleaseNumber(String),

    #[error("invalid pre-release sequence number in '{0}'")]
    InvalidPreReleaseNumber(String),
}

impl From<semver::Error> for VersionParseError {
    fn from(err: semver::Error) -> Self {
        VersionParseError::Semver(err.to_string())
    }
}

/// Release version as it appears in tags: `v1.2.3`, `v1.2.3-beta.4`, `v1.2.3-rc.1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Option<PreRelease>,
}

impl Version {
    /// Create a new stable version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: None,
        }
    }

    /// Parse version from a tag string (e.g., "v1.2.3-rc.1")
    ///
    /// At most one leading `v` is accepted. The numeric core is validated by
    /// `semver`, so leading zeros and non-numeric components are rejected.
    pub fn parse(tag: &str) -> Result<Self, VersionParseError> {
        let clean_tag = tag.strip_prefix('v').unwrap_or(tag);
        let parsed = semver::Version::parse(clean_tag)?;

        if !parsed.build.is_empty() {
            return Err(VersionParseError::BuildMetadata(parsed.build.to_string()));
        }

        let pre = if parsed.pre.is_empty() {
            None
        } else {
            Some(PreRelease::parse(parsed.pre.as_str())?)
        };

        Ok(Version {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
            pre,
        })
    }

    /// Bump version according to bump type
    ///
    /// The result is always a stable version. Fails with `VersionOverflow`
    /// when the bumped component is already `u64::MAX`.
    pub fn bump(&self, bump_type: VersionBump) -> error::Result<Self> {
        let overflow =
            || ReleaseError::version_overflow(format!("{} bump", bump_type), self.to_string());

        let next = match bump_type {
            VersionBump::Major => {
                Version::new(self.major.checked_add(1).ok_or_else(overflow)?, 0, 0)
            }
            VersionBump::Minor => {
                Version::new(self.major, self.minor.checked_add(1).ok_or_else(overflow)?, 0)
            }
            VersionBump::Patch => Version::new(
                self.major,
                self.minor,
                self.patch.checked_add(1).ok_or_else(overflow)?,
            ),
        };
        Ok(next)
    }

    /// Drop any pre-release qualifier
    pub fn stable(&self) -> Self {
        Version::new(self.major, self.minor, self.patch)
    }

    /// Same major.minor.patch with the given pre-release qualifier
    pub fn with_prerelease(&self, kind: PreReleaseKind, number: u64) -> Self {
        Version {
            pre: Some(PreRelease::new(kind, number)),
            ..self.stable()
        }
    }

    pub fn is_stable(&self) -> bool {
        self.pre.is_none()
    }

    /// True when both versions share major.minor.patch
    pub fn same_core(&self, other: &Version) -> bool {
        self.major == other.major && self.minor == other.minor && self.patch == other.patch
    }

    /// Rendering without the leading `v` (e.g. "1.2.3" or "1.2.3-rc.1")
    pub fn stripped(&self) -> String {
        let mut s = format!("{}.{}.{}", self.major, self.minor, self.patch);
        if let Some(pre) = &self.pre {
            s.push('-');
            s.push_str(&pre.to_string());
        }
        s
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.stripped())
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
