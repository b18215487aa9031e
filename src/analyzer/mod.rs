//! Resolution pipeline: scan scope tags, pick the current version, bump it

pub mod bumper;
pub mod resolver;
pub mod scope_resolver;

pub use bumper::{decorate, DecorationConfig};
pub use resolver::{Clock, Outcome, Resolution, ScopeResolver, VersionPlan};
pub use scope_resolver::{collect_candidates, select_current, TagCandidate};
