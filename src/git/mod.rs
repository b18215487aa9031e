//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only Git
//! queries the resolver needs, allowing for a real repository backed by
//! `git2` and a mock implementation for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! Nothing here mutates repository state: no tags are created, nothing is
//! fetched or pushed.
//!
//! # Usage
//!
//! ```rust
//! # use scope_tag::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let head_oid = repo.get_branch_head_oid("main")?;
//! let head = repo.get_commit(head_oid)?;
//! println!("{}: {}", head.short_hash(), head.message);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// Commit information for analysis
#[derive(Debug, Clone, PartialEq)]
pub struct CommitInfo {
    /// The commit object ID
    pub oid: Oid,
    /// The full commit message
    pub message: String,
    /// The commit author
    pub author: String,
}

impl CommitInfo {
    pub fn new(oid: Oid, message: impl Into<String>, author: impl Into<String>) -> Self {
        CommitInfo {
            oid,
            message: message.into(),
            author: author.into(),
        }
    }

    /// Seven character abbreviation of the commit hash
    pub fn short_hash(&self) -> String {
        let mut hash = self.oid.to_string();
        hash.truncate(7);
        hash
    }
}

/// Read-only git queries used by the scope resolver
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map
/// underlying failures to the resolver's error kinds:
///
/// - unresolvable branch: [ScopeTagError::Branch](crate::error::ScopeTagError::Branch)
/// - tag enumeration failure: [ScopeTagError::TagList](crate::error::ScopeTagError::TagList)
/// - unresolvable tag commit: [ScopeTagError::TagCommit](crate::error::ScopeTagError::TagCommit)
///
/// ## Implementations
///
/// - [Git2Repository](repository::Git2Repository): Real Git implementation using the `git2` crate
/// - [MockRepository](mock::MockRepository): Test implementation for mocking Git operations
pub trait Repository {
    /// Get the OID of a branch's HEAD
    ///
    /// # Arguments
    /// * `branch_name` - The name of a local branch (e.g., "main")
    ///
    /// # Returns
    /// * `Ok(Oid)` - Object ID of the branch's HEAD commit
    /// * `Err` - If the branch doesn't exist or has no target
    fn get_branch_head_oid(&self, branch_name: &str) -> Result<Oid>;

    /// Look up a commit by OID
    fn get_commit(&self, oid: Oid) -> Result<CommitInfo>;

    /// Get all tag names in the repository
    ///
    /// Callers must not rely on any particular order.
    ///
    /// # Example
    /// ```rust
    /// # use scope_tag::git::Repository;
    /// # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
    /// for tag in repo.list_tags()? {
    ///     println!("Tag: {}", tag);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Resolve the commit a tag points to
    ///
    /// Annotated tags are peeled to the commit they reference.
    ///
    /// # Arguments
    /// * `tag_name` - Name of the tag (e.g., "svc-v1.0.0")
    ///
    /// # Returns
    /// * `Ok(CommitInfo)` - The tagged commit
    /// * `Err` - If the tag is missing or does not lead to a commit
    fn get_tag_commit(&self, tag_name: &str) -> Result<CommitInfo>;
}
