use crate::error::{Result, ScopeTagError};
use semver::{BuildMetadata, Prerelease};
use std::cmp::Ordering;
use std::fmt;

/// Semantic version representation
///
/// Wraps [`semver::Version`] but orders and compares by semver precedence only:
/// build metadata never takes part in equality or ordering.
#[derive(Debug, Clone)]
pub struct Version {
    inner: semver::Version,
}

impl Version {
    /// Create a new stable version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            inner: semver::Version::new(major, minor, patch),
        }
    }

    /// Parse a version from the numeric part of a tag (e.g., "1.2.3-rc.1+build.5").
    ///
    /// Accepts an optional `v`/`V` prefix and one to three numeric core
    /// components; missing minor or patch components default to zero.
    /// Pre-release and build identifiers must be valid semver identifiers.
    pub fn parse(text: &str) -> Result<Self> {
        let unprefixed = text
            .strip_prefix('v')
            .or_else(|| text.strip_prefix('V'))
            .unwrap_or(text);

        let (rest, build) = match unprefixed.split_once('+') {
            Some((rest, build)) => (rest, Some(build)),
            None => (unprefixed, None),
        };
        let (core, pre) = match rest.split_once('-') {
            Some((core, pre)) => (core, Some(pre)),
            None => (rest, None),
        };

        let [major, minor, patch] = parse_core(core).ok_or_else(|| {
            ScopeTagError::version(format!(
                "Invalid version format: '{}' - expected X[.Y[.Z]]",
                text
            ))
        })?;

        let mut inner = semver::Version::new(major, minor, patch);
        if let Some(pre) = pre {
            inner.pre = parse_identifiers(pre, Prerelease::new).map_err(|e| {
                ScopeTagError::version(format!("Invalid pre-release in '{}': {}", text, e))
            })?;
        }
        if let Some(build) = build {
            inner.build = parse_identifiers(build, BuildMetadata::new).map_err(|e| {
                ScopeTagError::version(format!("Invalid build metadata in '{}': {}", text, e))
            })?;
        }

        Ok(Version { inner })
    }

    pub fn major(&self) -> u64 {
        self.inner.major
    }

    pub fn minor(&self) -> u64 {
        self.inner.minor
    }

    pub fn patch(&self) -> u64 {
        self.inner.patch
    }

    pub fn pre(&self) -> &Prerelease {
        &self.inner.pre
    }

    pub fn build(&self) -> &BuildMetadata {
        &self.inner.build
    }

    /// A stable version carries no pre-release identifiers
    pub fn is_stable(&self) -> bool {
        self.inner.pre.is_empty()
    }

    pub fn as_semver(&self) -> &semver::Version {
        &self.inner
    }

    /// Bump version according to bump type, dropping pre-release and build metadata
    ///
    /// Fails when the incremented component would overflow `u64`.
    pub fn bump(&self, bump_type: VersionBump) -> Result<Self> {
        let incremented = |component: u64| {
            component.checked_add(1).ok_or_else(|| {
                ScopeTagError::version(format!("Cannot apply {} bump to {}: overflow", bump_type, self))
            })
        };
        Ok(match bump_type {
            VersionBump::Major => Version::new(incremented(self.major())?, 0, 0),
            VersionBump::Minor => Version::new(self.major(), incremented(self.minor())?, 0),
            VersionBump::Patch => {
                Version::new(self.major(), self.minor(), incremented(self.patch())?)
            }
        })
    }

    /// Append `-<label>` and re-parse the result
    pub fn with_prerelease(&self, label: &str) -> Result<Self> {
        Version::parse(&format!("{}-{}", self, label))
    }

    /// Append `+<metadata>` and re-parse the result
    pub fn with_build_metadata(&self, metadata: &str) -> Result<Self> {
        Version::parse(&format!("{}+{}", self, metadata))
    }

    fn precedence(&self) -> (u64, u64, u64, &Prerelease) {
        (
            self.inner.major,
            self.inner.minor,
            self.inner.patch,
            &self.inner.pre,
        )
    }
}

fn parse_core(core: &str) -> Option<[u64; 3]> {
    let mut parts = [0u64; 3];
    let mut count = 0;
    for segment in core.split('.') {
        if count == parts.len()
            || segment.is_empty()
            || !segment.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        parts[count] = segment.parse().ok()?;
        count += 1;
    }
    Some(parts)
}

// semver accepts an empty identifier list; a dangling `-` or `+` is still malformed here.
fn parse_identifiers<T>(
    text: &str,
    parse: fn(&str) -> std::result::Result<T, semver::Error>,
) -> std::result::Result<T, String> {
    if text.is_empty() {
        return Err("empty identifier".to_string());
    }
    parse(text).map_err(|e| e.to_string())
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.precedence() == other.precedence()
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.precedence().cmp(&other.precedence())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionBump::Major => write!(f, "major"),
            VersionBump::Minor => write!(f, "minor"),
            VersionBump::Patch => write!(f, "patch"),
        }
    }
}
