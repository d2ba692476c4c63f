//! Pre-release qualifiers for release tags
//!
//! Only two qualifiers exist in a release pipeline: `beta.N` and `rc.N`.
//! Each is counted independently per major.minor.patch line.

use std::fmt;
use std::str::FromStr;

use super::version::VersionParseError;

/// Pre-release identifier type (beta or release candidate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreReleaseKind {
    /// Beta pre-release
    Beta,
    /// Release candidate
    ReleaseCandidate,
}

impl PreReleaseKind {
    /// Label used in tags ("beta" or "rc")
    pub fn label(&self) -> &'static str {
        match self {
            PreReleaseKind::Beta => "beta",
            PreReleaseKind::ReleaseCandidate => "rc",
        }
    }
}

impl FromStr for PreReleaseKind {
    type Err = VersionParseError;

    /// Labels are matched exactly; "Beta" or "RC" are not release labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beta" => Ok(PreReleaseKind::Beta),
            "rc" => Ok(PreReleaseKind::ReleaseCandidate),
            other => Err(VersionParseError::UnknownPreRelease(other.to_string())),
        }
    }
}

impl fmt::Display for PreReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pre-release qualifier with its sequence number
///
/// # Examples
/// - "beta.1" -> PreRelease { kind: Beta, number: 1 }
/// - "rc.3" -> PreRelease { kind: ReleaseCandidate, number: 3 }
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreRelease {
    pub kind: PreReleaseKind,
    pub number: u64,
}

impl PreRelease {
    /// Create a new pre-release qualifier
    pub fn new(kind: PreReleaseKind, number: u64) -> Self {
        PreRelease { kind, number }
    }

    /// Parse a qualifier such as "beta.2" or "rc.10"
    ///
    /// The numeric suffix is mandatory and must be the last identifier.
    pub fn parse(s: &str) -> Result<Self, VersionParseError> {
        let (label, number) = s
            .split_once('.')
            .ok_or_else(|| VersionParseError::MissingPreReleaseNumber(s.to_string()))?;

        let kind = label.parse::<PreReleaseKind>()?;

        if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(VersionParseError::InvalidPreReleaseNumber(s.to_string()));
        }
        let number = number
            .parse::<u64>()
            .map_err(|_| VersionParseError::InvalidPreReleaseNumber(s.to_string()))?;

        Ok(PreRelease { kind, number })
    }
}

impl FromStr for PreRelease {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PreRelease::parse(s)
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.kind, self.number)
    }
}
