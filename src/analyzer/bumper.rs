use crate::domain::{ParsedCommit, PreReleaseSpec, Version, VersionBump};
use crate::error::{Result, ScopeTagError};
use chrono::{DateTime, Utc};

impl VersionBump {
    /// Choose the increment for a classified commit.
    ///
    /// Priority order, first match wins:
    /// - **Major**: the header carries the `!` breaking marker
    /// - **Minor**: the type is `feat`
    /// - **Patch**: anything else
    pub fn for_commit(commit: &ParsedCommit) -> Self {
        if commit.is_breaking_change {
            VersionBump::Major
        } else if commit.r#type == "feat" {
            VersionBump::Minor
        } else {
            VersionBump::Patch
        }
    }
}

/// Optional suffixes layered on top of the bumped version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecorationConfig {
    pub pre_release: PreReleaseSpec,
    pub build_metadata: Option<String>,
}

/// Apply the pre-release label, then the build metadata, to a bumped version.
///
/// Each step re-parses the rendered text; a result that is not a valid
/// semantic version fails with [ScopeTagError::Decoration].
pub fn decorate(version: &Version, config: &DecorationConfig, now: DateTime<Utc>) -> Result<Version> {
    let mut decorated = version.clone();

    let label = config.pre_release.label(now).map_err(|e| {
        ScopeTagError::decoration(
            config.pre_release.timestamp_layout.clone().unwrap_or_default(),
            e.to_string(),
        )
    })?;
    if let Some(label) = label {
        decorated = decorated.with_prerelease(&label).map_err(|e| {
            ScopeTagError::decoration(format!("{}-{}", decorated, label), e.to_string())
        })?;
    }

    if let Some(metadata) = config.build_metadata.as_deref() {
        decorated = decorated.with_build_metadata(metadata).map_err(|e| {
            ScopeTagError::decoration(format!("{}+{}", decorated, metadata), e.to_string())
        })?;
    }

    Ok(decorated)
}
