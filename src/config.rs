use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReleaseError, Result};
use crate::source::{GitTagSource, ReleaseSource, SnapshotFile};

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "release-versions.toml";

/// Overrides `source.snapshot`
pub const ENV_SNAPSHOT: &str = "RELEASE_VERSIONS_SNAPSHOT";
/// Overrides `source.repository`
pub const ENV_REPOSITORY: &str = "RELEASE_VERSIONS_REPOSITORY";
/// Overrides `source.latest_release`
pub const ENV_LATEST: &str = "RELEASE_VERSIONS_LATEST";

/// Represents the complete configuration for release-versions.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
}

/// Where release metadata comes from.
///
/// A snapshot file takes precedence over a repository. `latest_release`
/// overrides whatever the chosen source reports.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct SourceConfig {
    #[serde(default)]
    pub snapshot: Option<PathBuf>,

    #[serde(default)]
    pub repository: Option<PathBuf>,

    #[serde(default)]
    pub latest_release: Option<String>,
}

impl Config {
    /// Apply `RELEASE_VERSIONS_*` environment overrides
    pub fn apply_env_overrides(&mut self) {
        if let Some(snapshot) = non_empty_env(ENV_SNAPSHOT) {
            self.source.snapshot = Some(PathBuf::from(snapshot));
        }
        if let Some(repository) = non_empty_env(ENV_REPOSITORY) {
            self.source.repository = Some(PathBuf::from(repository));
        }
        if let Some(latest) = non_empty_env(ENV_LATEST) {
            self.source.latest_release = Some(latest);
        }
    }

    /// Build the configured release source
    ///
    /// # Returns
    /// * `Err(MissingRepositoryContext)` - If neither a snapshot nor a repository is configured
    pub fn release_source(&self) -> Result<Box<dyn ReleaseSource>> {
        let latest = self.source.latest_release.clone();

        if let Some(path) = &self.source.snapshot {
            let mut snapshot = SnapshotFile::load(path)?;
            if latest.is_some() {
                snapshot.latest_release = latest;
            }
            return Ok(Box::new(snapshot));
        }

        if let Some(path) = &self.source.repository {
            let mut source = GitTagSource::open(path)?;
            if let Some(tag) = latest {
                source = source.with_latest_release(tag);
            }
            return Ok(Box::new(source));
        }

        Err(ReleaseError::missing_context(format!(
            "no release source configured; set source.snapshot or source.repository \
             (or {} / {})",
            ENV_SNAPSHOT, ENV_REPOSITORY
        )))
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release-versions.toml` in current directory
/// 3. `release-versions.toml` in user config directory
/// 4. Default configuration if no file found
///
/// Environment overrides are applied afterwards in every case.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);

    let config_str = if let Some(path) = config_path {
        Some(fs::read_to_string(path)?)
    } else if local.exists() {
        Some(fs::read_to_string(local)?)
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Some(fs::read_to_string(config_path)?)
        } else {
            None
        }
    } else {
        None
    };

    let mut config: Config = match config_str {
        Some(content) => toml::from_str(&content)?,
        None => Config::default(),
    };
    config.apply_env_overrides();
    Ok(config)
}
