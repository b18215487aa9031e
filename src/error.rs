use thiserror::Error;

/// Unified error type for scope-tag operations
#[derive(Error, Debug)]
pub enum ScopeTagError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Branch error: {0}")]
    Branch(String),

    #[error("Tag listing failed: {0}")]
    TagList(String),

    #[error("Cannot resolve commit for tag '{tag}': {reason}")]
    TagCommit { tag: String, reason: String },

    #[error("No stable (non pre-release) version tags found for scope '{scope}'")]
    NoStableVersion { scope: String },

    #[error("Invalid decorated version '{text}': {reason}")]
    Decoration { text: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in scope-tag
pub type Result<T> = std::result::Result<T, ScopeTagError>;

impl ScopeTagError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ScopeTagError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ScopeTagError::Version(msg.into())
    }

    /// Create a branch error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        ScopeTagError::Branch(msg.into())
    }

    /// Create a tag listing error with context
    pub fn tag_list(msg: impl Into<String>) -> Self {
        ScopeTagError::TagList(msg.into())
    }

    pub fn tag_commit(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        ScopeTagError::TagCommit {
            tag: tag.into(),
            reason: reason.into(),
        }
    }

    pub fn decoration(text: impl Into<String>, reason: impl Into<String>) -> Self {
        ScopeTagError::Decoration {
            text: text.into(),
            reason: reason.into(),
        }
    }
}
