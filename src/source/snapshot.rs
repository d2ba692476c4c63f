use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ReleaseError, Result};
use crate::source::ReleaseSource;

/// Release metadata captured by an earlier pipeline step
///
/// ```toml
/// latest_release = "v2.0.0"
/// tags = ["v2.0.0", "v2.1.0-beta.1"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SnapshotFile {
    #[serde(default)]
    pub latest_release: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl SnapshotFile {
    /// Parse a snapshot from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a snapshot file from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

impl ReleaseSource for SnapshotFile {
    fn latest_release(&self) -> Result<String> {
        self.latest_release
            .clone()
            .ok_or_else(|| ReleaseError::missing_context("snapshot has no latest_release"))
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }
}
