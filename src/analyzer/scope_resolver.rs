use crate::diagnostics::SkipEvent;
use crate::domain::{ScopedTag, Version};
use crate::error::{Result, ScopeTagError};
use crate::git::{CommitInfo, Repository};
use tracing::debug;

/// A same-scope tag whose version parsed, with the commit it names
#[derive(Debug, Clone, PartialEq)]
pub struct TagCandidate {
    pub tag: String,
    pub version: Version,
    pub commit: CommitInfo,
}

/// Scan tag names and keep the ones that belong to `scope` and carry a version.
///
/// Tags that don't follow `<scope>-v<version>`, belong to another scope, or
/// have unparsable version text are recorded in `skipped` and ignored. A tag
/// that passes those filters but whose commit cannot be resolved aborts the
/// scan.
pub fn collect_candidates<R: Repository>(
    repo: &R,
    scope: &str,
    tag_names: &[String],
    skipped: &mut Vec<SkipEvent>,
) -> Result<Vec<TagCandidate>> {
    let mut candidates = Vec::new();

    for name in tag_names {
        let Some(tag) = ScopedTag::parse(name) else {
            skipped.push(SkipEvent::TagPatternMismatch { tag: name.clone() });
            continue;
        };

        if tag.scope != scope {
            skipped.push(SkipEvent::ScopeMismatch {
                tag: tag.name,
                tag_scope: tag.scope,
            });
            continue;
        }

        let version = match Version::parse(&tag.version_text) {
            Ok(version) => version,
            Err(e) => {
                debug!(tag = %tag.name, error = %e, "skipping non version tag");
                skipped.push(SkipEvent::UnparsableVersion {
                    tag: tag.name,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let commit = repo.get_tag_commit(&tag.name)?;
        candidates.push(TagCandidate {
            tag: tag.name,
            version,
            commit,
        });
    }

    debug!(scope, count = candidates.len(), "collected scope tags");
    Ok(candidates)
}

/// Pick the highest stable version among same-scope candidates.
///
/// Candidates are ordered by version precedence, highest first; equal
/// precedence falls back to tag name so the pick is deterministic. Every
/// pre-release ranked above the chosen version is recorded in `skipped`.
pub fn select_current(
    scope: &str,
    mut candidates: Vec<TagCandidate>,
    skipped: &mut Vec<SkipEvent>,
) -> Result<TagCandidate> {
    candidates.sort_by(|a, b| b.version.cmp(&a.version).then_with(|| a.tag.cmp(&b.tag)));

    for candidate in candidates {
        if candidate.version.is_stable() {
            debug!(
                tag = %candidate.tag,
                version = %candidate.version,
                commit = %candidate.commit.short_hash(),
                "selected current version"
            );
            return Ok(candidate);
        }
        debug!(tag = %candidate.tag, "skipping pre-release tag version");
        skipped.push(SkipEvent::PrereleaseSkipped {
            version: candidate.version.to_string(),
            tag: candidate.tag,
        });
    }

    Err(ScopeTagError::NoStableVersion {
        scope: scope.to_string(),
    })
}
