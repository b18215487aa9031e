use crate::error::{Result, ScopeTagError};
use crate::git::{CommitInfo, Repository};
use git2::Oid;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    commits: HashMap<Oid, CommitInfo>,
    tags: HashMap<String, Oid>,
    branch_heads: HashMap<String, Oid>,
    fail_tag_listing: bool,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: HashMap::new(),
            tags: HashMap::new(),
            branch_heads: HashMap::new(),
            fail_tag_listing: false,
        }
    }

    /// Add a commit to the mock repository
    pub fn add_commit(&mut self, info: CommitInfo) {
        self.commits.insert(info.oid, info);
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.insert(name.into(), oid);
    }

    /// Set a branch head
    pub fn set_branch_head(&mut self, branch: impl Into<String>, oid: Oid) {
        self.branch_heads.insert(branch.into(), oid);
    }

    /// Make `list_tags` fail as if the tag refs were unreadable
    pub fn fail_tag_listing(&mut self) {
        self.fail_tag_listing = true;
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn get_branch_head_oid(&self, branch_name: &str) -> Result<Oid> {
        self.branch_heads
            .get(branch_name)
            .copied()
            .ok_or_else(|| ScopeTagError::branch(format!("Branch not found: {}", branch_name)))
    }

    fn get_commit(&self, oid: Oid) -> Result<CommitInfo> {
        self.commits
            .get(&oid)
            .cloned()
            .ok_or_else(|| git2::Error::from_str(&format!("commit {} not found", oid)).into())
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        if self.fail_tag_listing {
            return Err(ScopeTagError::tag_list("refs/tags is unreadable"));
        }
        Ok(self.tags.keys().cloned().collect())
    }

    fn get_tag_commit(&self, tag_name: &str) -> Result<CommitInfo> {
        let oid = self
            .tags
            .get(tag_name)
            .ok_or_else(|| ScopeTagError::tag_commit(tag_name, "tag not found"))?;

        self.commits
            .get(oid)
            .cloned()
            .ok_or_else(|| ScopeTagError::tag_commit(tag_name, format!("commit {} not found", oid)))
    }
}
