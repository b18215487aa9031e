use std::fmt;

/// Non-fatal conditions met while resolving a scope's version.
///
/// These are returned to the caller alongside the resolution instead of
/// being printed, so the resolver stays a pure function of its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipEvent {
    /// The head commit carries no conventional-commit scope
    NoCommitScope { commit_hash: String },
    /// Tag name does not follow `<scope>-v<version>`
    TagPatternMismatch { tag: String },
    /// Tag belongs to a different scope
    ScopeMismatch { tag: String, tag_scope: String },
    /// Tag's version text cannot be parsed as a version
    UnparsableVersion { tag: String, reason: String },
    /// Pre-release version passed over while looking for the stable maximum
    PrereleaseSkipped { tag: String, version: String },
}

impl fmt::Display for SkipEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipEvent::NoCommitScope { commit_hash } => {
                let short_hash = if commit_hash.len() > 7 {
                    &commit_hash[..7]
                } else {
                    commit_hash.as_str()
                };
                write!(f, "Commit {} has no scope, no tag planned", short_hash)
            }
            SkipEvent::TagPatternMismatch { tag } => {
                write!(f, "Skipping tag '{}': not a <scope>-v<version> tag", tag)
            }
            SkipEvent::ScopeMismatch { tag, tag_scope } => {
                write!(f, "Skipping tag '{}': belongs to scope '{}'", tag, tag_scope)
            }
            SkipEvent::UnparsableVersion { tag, reason } => {
                write!(f, "Skipping non version tag '{}': {}", tag, reason)
            }
            SkipEvent::PrereleaseSkipped { tag, version } => {
                write!(f, "Skipping pre-release tag '{}' ({})", tag, version)
            }
        }
    }
}
