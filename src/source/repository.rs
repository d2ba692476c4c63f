use std::path::Path;
use std::sync::Mutex;

use git2::Repository as Git2Repo;
use tracing::debug;

use crate::error::{ReleaseError, Result};
use crate::source::ReleaseSource;

/// Tag names read from a local git repository
///
/// Git has no notion of a published release, so the latest release is
/// supplied by the caller alongside the repository.
pub struct GitTagSource {
    repo: Mutex<Git2Repo>,
    latest_release: Option<String>,
}

impl GitTagSource {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;
        Ok(Self::from_git2(repo))
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        GitTagSource {
            repo: Mutex::new(repo),
            latest_release: None,
        }
    }

    /// Set the latest published release tag
    pub fn with_latest_release(mut self, tag: impl Into<String>) -> Self {
        self.latest_release = Some(tag.into());
        self
    }
}

impl ReleaseSource for GitTagSource {
    fn latest_release(&self) -> Result<String> {
        self.latest_release.clone().ok_or_else(|| {
            ReleaseError::missing_context(
                "a git repository does not record the latest published release; \
                 set source.latest_release or RELEASE_VERSIONS_LATEST",
            )
        })
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        let repo = self
            .repo
            .lock()
            .map_err(|_| ReleaseError::source_unavailable("git repository lock poisoned"))?;
        let tags = repo.tag_names(None)?;
        let tags: Vec<String> = tags.iter().flatten().map(|s| s.to_string()).collect();
        debug!(count = tags.len(), "listed repository tags");
        Ok(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repo_with_tags(tags: &[&str]) -> (TempDir, Git2Repo) {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repo::init(dir.path()).unwrap();
        {
            let sig = git2::Signature::now("Release Bot", "release@example.com").unwrap();
            let tree_id = repo.index().unwrap().write_tree().unwrap();
            let tree = repo.find_tree(tree_id).unwrap();
            let oid = repo
                .commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
                .unwrap();
            let object = repo.find_object(oid, None).unwrap();
            for tag in tags {
                repo.tag_lightweight(tag, &object, false).unwrap();
            }
        }
        (dir, repo)
    }

    #[test]
    fn test_lists_tags() {
        let (_dir, repo) = repo_with_tags(&["v1.0.0", "v1.1.0-beta.1", "vv1.1.0-rc.1"]);
        let source = GitTagSource::from_git2(repo);

        let mut tags = source.list_tags().unwrap();
        tags.sort();
        assert_eq!(tags, vec!["v1.0.0", "v1.1.0-beta.1", "vv1.1.0-rc.1"]);
    }

    #[test]
    fn test_open_discovers_repository() {
        let (dir, _repo) = repo_with_tags(&["v0.1.0"]);
        let source = GitTagSource::open(dir.path()).unwrap();
        assert_eq!(source.list_tags().unwrap(), vec!["v0.1.0"]);
    }

    #[test]
    fn test_latest_release_must_be_supplied() {
        let (_dir, repo) = repo_with_tags(&[]);
        let source = GitTagSource::from_git2(repo);
        assert!(matches!(
            source.latest_release(),
            Err(ReleaseError::MissingRepositoryContext(_))
        ));

        let source = source.with_latest_release("v1.0.0");
        assert_eq!(source.latest_release().unwrap(), "v1.0.0");
    }

    #[test]
    fn test_poisoned_lock_is_a_source_failure() {
        let (_dir, repo) = repo_with_tags(&["v1.0.0"]);
        let source = GitTagSource::from_git2(repo);

        std::thread::scope(|scope| {
            let handle = scope.spawn(|| {
                let _guard = source.repo.lock().unwrap();
                panic!("tag listing interrupted");
            });
            assert!(handle.join().is_err());
        });

        let err = source.list_tags().unwrap_err();
        assert!(matches!(err, ReleaseError::SourceUnavailable(_)));
        assert!(!matches!(err, ReleaseError::Config(_)));
    }

    #[test]
    fn test_open_outside_repository_fails() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            GitTagSource::open(dir.path()),
            Err(ReleaseError::Git(_))
        ));
    }
}
