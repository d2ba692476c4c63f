use crate::error::{ReleaseError, Result};
use crate::source::ReleaseSource;

/// Mock source for testing without a repository
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    latest_release: Option<String>,
    tags: Vec<String>,
}

impl MockSource {
    /// Create a new empty mock source
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the latest published release
    pub fn with_latest_release(mut self, tag: impl Into<String>) -> Self {
        self.latest_release = Some(tag.into());
        self
    }

    /// Add a tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Add several tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }
}

impl ReleaseSource for MockSource {
    fn latest_release(&self) -> Result<String> {
        self.latest_release
            .clone()
            .ok_or_else(|| ReleaseError::missing_context("mock source has no latest release"))
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_without_latest_release() {
        let source = MockSource::new();
        assert!(matches!(
            source.latest_release(),
            Err(ReleaseError::MissingRepositoryContext(_))
        ));
    }

    #[test]
    fn test_mock_tags() {
        let mut source = MockSource::new().with_tags(["v1.0.0"]);
        source.add_tag("v1.1.0-beta.1");
        assert_eq!(source.list_tags().unwrap(), vec!["v1.0.0", "v1.1.0-beta.1"]);
        assert_eq!(source.tag_snapshot().unwrap().len(), 2);
    }
}
