//! Domain logic - pure rules over commit messages, tag names and versions

pub mod commit;
pub mod prerelease;
pub mod tag;
pub mod version;

pub use commit::ParsedCommit;
pub use prerelease::PreReleaseSpec;
pub use tag::ScopedTag;
pub use version::{Version, VersionBump};
