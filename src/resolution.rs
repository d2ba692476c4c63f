//! Next-version resolution
//!
//! Combines the domain rules into one pure operation: given the latest
//! published release, the requested bump and the tag history, compute the
//! next stable version, its release branch and the next free beta and rc
//! identifiers.

use serde::Serialize;
use tracing::{debug, info};

use crate::boundary::BoundaryWarning;
use crate::domain::{release_branch_name, PreReleaseKind, TagSnapshot, Version, VersionBump};
use crate::error::{ReleaseError, Result};

/// Everything a release pipeline needs to cut the next release
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionResult {
    pub next_stable_version: Version,
    /// Next stable version without the leading `v`
    pub next_stable_version_stripped: String,
    pub next_release_branch: String,
    pub next_beta_version: Version,
    pub next_rc_version: Version,
}

impl ResolutionResult {
    /// Render as a TOML document
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

/// Resolve the next versions from raw inputs
///
/// The bump input is validated before anything else. The latest release must
/// parse; malformed tags in `tags` are skipped.
pub fn resolve(
    latest_release_tag: &str,
    bump_input: &str,
    tags: &TagSnapshot,
) -> Result<ResolutionResult> {
    let bump: VersionBump = bump_input.parse()?;
    let latest = parse_latest_release(latest_release_tag)?;
    resolve_version(&latest, bump, tags)
}

/// Parse the caller-supplied latest release, which must be a valid version
pub fn parse_latest_release(tag: &str) -> Result<Version> {
    Version::parse(tag).map_err(|e| ReleaseError::unparsable_latest_release(tag, e.to_string()))
}

/// Resolve from an already parsed latest release and bump type
///
/// Fails with `VersionOverflow` when the bumped component or a pre-release
/// counter is already at `u64::MAX`.
pub fn resolve_version(
    latest: &Version,
    bump: VersionBump,
    tags: &TagSnapshot,
) -> Result<ResolutionResult> {
    for warning in tags.rejected() {
        debug!(%warning, "skipping tag");
    }

    let next_stable_version = latest.bump(bump)?;
    let next_release_branch = release_branch_name(&next_stable_version);

    let beta = tags.next_prerelease_number(&next_stable_version, PreReleaseKind::Beta)?;
    let rc = tags.next_prerelease_number(&next_stable_version, PreReleaseKind::ReleaseCandidate)?;
    debug!(version = %next_stable_version, beta, rc, "next pre-release numbers");

    let result = ResolutionResult {
        next_stable_version,
        next_stable_version_stripped: next_stable_version.stripped(),
        next_release_branch,
        next_beta_version: next_stable_version.with_prerelease(PreReleaseKind::Beta, beta),
        next_rc_version: next_stable_version
            .with_prerelease(PreReleaseKind::ReleaseCandidate, rc),
    };

    info!(
        latest = %latest,
        %bump,
        next = %result.next_stable_version,
        branch = %result.next_release_branch,
        beta = %result.next_beta_version,
        rc = %result.next_rc_version,
        "resolved next release"
    );

    Ok(result)
}

/// Non-fatal findings worth reporting alongside a result
pub fn resolution_warnings(
    result: &ResolutionResult,
    tags: &TagSnapshot,
) -> Vec<BoundaryWarning> {
    let mut warnings = tags.rejected();
    if tags.contains_version(&result.next_stable_version) {
        warnings.push(BoundaryWarning::StableAlreadyTagged {
            version: result.next_stable_version,
        });
    }
    warnings
}
