use super::version::Version;

/// Prefix shared by all release branches
pub const RELEASE_BRANCH_PREFIX: &str = "release/";

/// Release branch for a version's major.minor line (e.g. "release/v1.2")
///
/// Patches land on the existing branch, so the patch component is omitted.
pub fn release_branch_name(version: &Version) -> String {
    format!("{}v{}.{}", RELEASE_BRANCH_PREFIX, version.major, version.minor)
}
