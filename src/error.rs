use thiserror::Error;

/// Unified error type for version resolution
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("invalid release type: \"{0}\"")]
    InvalidReleaseType(String),

    #[error("latest release '{tag}' is not a valid version: {reason}")]
    UnparsableLatestRelease { tag: String, reason: String },

    #[error("{stage} overflows for '{input}'")]
    VersionOverflow { stage: String, input: String },

    #[error("Missing repository context: {0}")]
    MissingRepositoryContext(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Release source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Cannot render TOML: {0}")]
    TomlRender(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-versions
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create an invalid release type error carrying the input verbatim
    pub fn invalid_release_type(input: impl Into<String>) -> Self {
        ReleaseError::InvalidReleaseType(input.into())
    }

    /// Create an unparsable latest release error
    pub fn unparsable_latest_release(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        ReleaseError::UnparsableLatestRelease {
            tag: tag.into(),
            reason: reason.into(),
        }
    }

    /// Create an overflow error for a computation stage and its input
    pub fn version_overflow(stage: impl Into<String>, input: impl Into<String>) -> Self {
        ReleaseError::VersionOverflow {
            stage: stage.into(),
            input: input.into(),
        }
    }

    /// Create a missing repository context error
    pub fn missing_context(msg: impl Into<String>) -> Self {
        ReleaseError::MissingRepositoryContext(msg.into())
    }

    /// Create a source failure error
    pub fn source_unavailable(msg: impl Into<String>) -> Self {
        ReleaseError::SourceUnavailable(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }
}
