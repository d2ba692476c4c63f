//! Release metadata sources
//!
//! Resolution itself is pure; the latest published release and the tag
//! history come from a [ReleaseSource]. Implementations:
//!
//! - [snapshot::SnapshotFile]: a TOML snapshot written by an earlier CI step
//! - [repository::GitTagSource]: tag names from a local git repository
//! - [mock::MockSource]: in-memory source for tests
//!
//! No implementation talks to the network or creates tags.

pub mod mock;
pub mod repository;
pub mod snapshot;

pub use mock::MockSource;
pub use repository::GitTagSource;
pub use snapshot::SnapshotFile;

use crate::domain::TagSnapshot;
use crate::error::Result;

/// Provider of the "latest published release" and "full tag list"
///
/// All implementors must be `Send + Sync` so one source can serve
/// concurrent resolutions.
pub trait ReleaseSource: Send + Sync {
    /// Tag name of the most recently published stable release
    ///
    /// Returns [crate::error::ReleaseError::MissingRepositoryContext] when the
    /// source has no notion of a latest release.
    fn latest_release(&self) -> Result<String>;

    /// Every tag currently present, in no particular order
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Tag list wrapped as a snapshot
    fn tag_snapshot(&self) -> Result<TagSnapshot> {
        Ok(TagSnapshot::new(self.list_tags()?))
    }
}
