//! Domain logic - pure version rules independent of where tags come from

pub mod branch;
pub mod prerelease;
pub mod release_type;
pub mod tag;
pub mod version;

pub use branch::release_branch_name;
pub use prerelease::{PreRelease, PreReleaseKind};
pub use release_type::VersionBump;
pub use tag::TagSnapshot;
pub use version::{Version, VersionParseError};
