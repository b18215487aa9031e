use crate::analyzer::bumper::{decorate, DecorationConfig};
use crate::analyzer::scope_resolver::{collect_candidates, select_current};
use crate::diagnostics::SkipEvent;
use crate::domain::{ParsedCommit, ScopedTag, Version, VersionBump};
use crate::error::Result;
use crate::git::{CommitInfo, Repository};
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};

/// Source of "now" for pre-release timestamps
pub type Clock = Box<dyn Fn() -> DateTime<Utc>>;

/// The version decision for a scope
#[derive(Debug, Clone, PartialEq)]
pub struct VersionPlan {
    pub scope: String,
    pub current_version: Version,
    /// Name of the tag `current_version` was read from
    pub current_tag: String,
    /// Commit the current tag points to
    pub current_commit: CommitInfo,
    pub bump: VersionBump,
    pub new_version: Version,
}

impl VersionPlan {
    /// Tag name for the new version (e.g., "svc-v1.2.0")
    pub fn new_tag_name(&self) -> String {
        ScopedTag::format(&self.scope, &self.new_version.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Head commit has no scope; nothing to tag
    NoScope,
    Planned(VersionPlan),
}

/// Result of one resolution run
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub branch: String,
    /// Branch head, the commit a new tag would be applied to
    pub head: CommitInfo,
    pub commit: ParsedCommit,
    pub outcome: Outcome,
    /// Tags and versions passed over during the run
    pub skipped: Vec<SkipEvent>,
}

impl Resolution {
    pub fn plan(&self) -> Option<&VersionPlan> {
        match &self.outcome {
            Outcome::Planned(plan) => Some(plan),
            Outcome::NoScope => None,
        }
    }

    pub fn new_version(&self) -> Option<&Version> {
        self.plan().map(|plan| &plan.new_version)
    }
}

/// Computes the next scoped version from the head commit of a branch
pub struct ScopeResolver {
    decoration: DecorationConfig,
    clock: Clock,
}

impl ScopeResolver {
    pub fn new(decoration: DecorationConfig) -> Self {
        ScopeResolver {
            decoration,
            clock: Box::new(Utc::now),
        }
    }

    /// Replace the wall clock used for pre-release timestamps
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Resolve the next version for the scope named by the branch head commit.
    ///
    /// 1. Classify the head commit message; no scope means no tag.
    /// 2. Collect the scope's tags and pick the highest stable version.
    /// 3. Bump it per the commit classification and apply decorations.
    ///
    /// Any repository failure, a scope without stable tags, or an invalid
    /// decorated version aborts the run; nothing partial is returned.
    #[instrument(skip(self, repo))]
    pub fn resolve<R: Repository>(&self, repo: &R, branch: &str) -> Result<Resolution> {
        let head_oid = repo.get_branch_head_oid(branch)?;
        let head = repo.get_commit(head_oid)?;
        let commit = ParsedCommit::parse(&head.message);
        let mut skipped = Vec::new();

        let Some(scope) = commit.scope.clone() else {
            info!(commit = %head.short_hash(), "head commit has no scope, skipping new version");
            skipped.push(SkipEvent::NoCommitScope {
                commit_hash: head.oid.to_string(),
            });
            return Ok(Resolution {
                branch: branch.to_string(),
                head,
                commit,
                outcome: Outcome::NoScope,
                skipped,
            });
        };
        debug!(
            scope = %scope,
            commit_type = %commit.r#type,
            breaking = commit.is_breaking_change,
            "classified head commit"
        );

        let tag_names = repo.list_tags()?;
        let candidates = collect_candidates(repo, &scope, &tag_names, &mut skipped)?;
        let current = select_current(&scope, candidates, &mut skipped)?;

        let bump = VersionBump::for_commit(&commit);
        let new_version = decorate(
            &current.version.bump(bump)?,
            &self.decoration,
            (self.clock)(),
        )?;
        info!(
            scope = %scope,
            current = %current.version,
            new = %new_version,
            %bump,
            "resolved next version"
        );

        Ok(Resolution {
            branch: branch.to_string(),
            head,
            commit,
            outcome: Outcome::Planned(VersionPlan {
                scope,
                current_version: current.version,
                current_tag: current.tag,
                current_commit: current.commit,
                bump,
                new_version,
            }),
            skipped,
        })
    }
}

impl Default for ScopeResolver {
    fn default() -> Self {
        Self::new(DecorationConfig::default())
    }
}
