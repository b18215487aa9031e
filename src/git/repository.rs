use crate::error::{Result, ScopeTagError};
use crate::git::CommitInfo;
use git2::{Commit, Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

fn commit_info(commit: &Commit<'_>) -> CommitInfo {
    CommitInfo {
        oid: commit.id(),
        message: String::from_utf8_lossy(commit.message_bytes()).into_owned(),
        author: commit.author().name().unwrap_or("unknown").to_string(),
    }
}

impl super::Repository for Git2Repository {
    fn get_branch_head_oid(&self, branch_name: &str) -> Result<Oid> {
        let branch = self
            .repo
            .find_branch(branch_name, git2::BranchType::Local)
            .map_err(|e| {
                ScopeTagError::branch(format!("Cannot find branch '{}': {}", branch_name, e))
            })?;

        let commit = branch.get().peel_to_commit().map_err(|e| {
            ScopeTagError::branch(format!("Branch '{}' has no commit: {}", branch_name, e))
        })?;

        Ok(commit.id())
    }

    fn get_commit(&self, oid: Oid) -> Result<CommitInfo> {
        let commit = self.repo.find_commit(oid)?;
        Ok(commit_info(&commit))
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self
            .repo
            .tag_names(None)
            .map_err(|e| ScopeTagError::tag_list(e.to_string()))?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn get_tag_commit(&self, tag_name: &str) -> Result<CommitInfo> {
        let reference_name = format!("refs/tags/{}", tag_name);

        let commit = self
            .repo
            .find_reference(&reference_name)
            .and_then(|reference| reference.peel_to_commit())
            .map_err(|e| ScopeTagError::tag_commit(tag_name, e.message()))?;

        Ok(commit_info(&commit))
    }
}
