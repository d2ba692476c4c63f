//! Resolution workflow over a release source
//!
//! Separates fetching release metadata from the pure computation in
//! [crate::resolution]. Callers that already hold the inputs should call
//! [crate::resolution::resolve] directly.

use tracing::debug;

use crate::config::Config;
use crate::domain::VersionBump;
use crate::error::Result;
use crate::resolution::{parse_latest_release, resolve_version, ResolutionResult};
use crate::source::ReleaseSource;

/// Resolve the next release using metadata from `source`
///
/// The bump input is validated before the source is queried. Source errors
/// are propagated unchanged.
pub fn resolve_from_source<S: ReleaseSource + ?Sized>(
    source: &S,
    bump_input: &str,
) -> Result<ResolutionResult> {
    let bump: VersionBump = bump_input.parse()?;

    let latest_tag = source.latest_release()?;
    let latest = parse_latest_release(&latest_tag)?;
    let tags = source.tag_snapshot()?;
    debug!(latest = %latest, tags = tags.len(), "fetched release metadata");

    resolve_version(&latest, bump, &tags)
}

/// Build the configured source and resolve the next release
pub fn run(config: &Config, bump_input: &str) -> Result<ResolutionResult> {
    let _: VersionBump = bump_input.parse()?;
    let source = config.release_source()?;
    resolve_from_source(source.as_ref(), bump_input)
}
