pub mod analyzer;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;

pub use analyzer::{Outcome, Resolution, ScopeResolver, VersionPlan};
pub use error::{Result, ScopeTagError};
