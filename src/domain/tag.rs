use crate::boundary::BoundaryWarning;
use crate::error::{ReleaseError, Result};

use super::prerelease::PreReleaseKind;
use super::version::Version;

/// Unordered tag history of a repository at resolution time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSnapshot {
    tags: Vec<String>,
}

impl TagSnapshot {
    /// Create a snapshot from raw tag names
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TagSnapshot {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Raw tag names, in the order they were supplied
    pub fn names(&self) -> &[String] {
        &self.tags
    }

    /// Tags that parse as release versions; malformed ones are skipped
    pub fn versions(&self) -> impl Iterator<Item = Version> + '_ {
        self.tags.iter().filter_map(|tag| Version::parse(tag).ok())
    }

    /// Tags that do not parse, with the reason each was skipped
    pub fn rejected(&self) -> Vec<BoundaryWarning> {
        self.tags
            .iter()
            .filter_map(|tag| {
                Version::parse(tag)
                    .err()
                    .map(|err| BoundaryWarning::UnparsableTag {
                        tag: tag.clone(),
                        reason: err.to_string(),
                    })
            })
            .collect()
    }

    /// Whether the exact version is already tagged
    pub fn contains_version(&self, version: &Version) -> bool {
        self.versions().any(|v| v == *version)
    }

    /// Next free pre-release sequence number for `target`'s major.minor.patch
    ///
    /// Returns one past the highest existing number for that (version, kind)
    /// pair, or 1 when none exists. Gaps in the history are never refilled.
    /// Fails with `VersionOverflow` when the highest number is `u64::MAX`.
    pub fn next_prerelease_number(&self, target: &Version, kind: PreReleaseKind) -> Result<u64> {
        let highest = self
            .versions()
            .filter(|v| v.same_core(target))
            .filter_map(|v| v.pre)
            .filter(|pre| pre.kind == kind)
            .map(|pre| pre.number)
            .max();

        match highest {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or_else(|| {
                ReleaseError::version_overflow(
                    format!("{} counter", kind),
                    target.with_prerelease(kind, max).to_string(),
                )
            }),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for TagSnapshot {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        TagSnapshot::new(iter)
    }
}
