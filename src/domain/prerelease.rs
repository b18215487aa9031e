//! Pre-release decoration for computed versions
//!
//! A pre-release label is built from an optional name and an optional
//! timestamp, e.g. `rc.20240102150405`, `rc`, or `1704207845`.
//! See semver.org: https://semver.org/#spec-item-9

use crate::error::{Result, ScopeTagError};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

/// Timestamp layout that renders Unix seconds instead of a strftime pattern
pub const EPOCH_LAYOUT: &str = "epoch";

/// Shorthand layout for a compact UTC date-time (`%Y%m%d%H%M%S`)
pub const DATETIME_LAYOUT: &str = "datetime";

const DATETIME_FORMAT: &str = "%Y%m%d%H%M%S";

/// Pre-release name and timestamp layout configured for a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreReleaseSpec {
    pub name: Option<String>,
    /// A chrono strftime pattern (e.g. `%Y.%m.%d`), [`DATETIME_LAYOUT`] or [`EPOCH_LAYOUT`]
    pub timestamp_layout: Option<String>,
}

impl PreReleaseSpec {
    pub fn new(name: Option<String>, timestamp_layout: Option<String>) -> Self {
        PreReleaseSpec {
            name: name.filter(|n| !n.is_empty()),
            timestamp_layout: timestamp_layout.filter(|l| !l.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.timestamp_layout.is_none()
    }

    /// Build the label to append after `-`, or `None` when nothing is configured
    ///
    /// # Examples
    /// ```ignore
    /// let spec = PreReleaseSpec::new(Some("rc".into()), Some("%Y%m%d".into()));
    /// assert_eq!(spec.label(now)?, Some("rc.20240102".to_string()));
    /// ```
    pub fn label(&self, now: DateTime<Utc>) -> Result<Option<String>> {
        let timestamp = self
            .timestamp_layout
            .as_deref()
            .map(|layout| render_timestamp(layout, now))
            .transpose()?;

        Ok(match (self.name.as_deref(), timestamp) {
            (Some(name), Some(ts)) => Some(format!("{}.{}", name, ts)),
            (Some(name), None) => Some(name.to_string()),
            (None, Some(ts)) => Some(ts),
            (None, None) => None,
        })
    }
}

/// Check that a timestamp layout is usable before any version is computed
pub fn validate_layout(layout: &str) -> Result<()> {
    if layout == EPOCH_LAYOUT {
        return Ok(());
    }
    if StrftimeItems::new(strftime_pattern(layout)).any(|item| matches!(item, Item::Error)) {
        return Err(ScopeTagError::config(format!(
            "Invalid pre-release timestamp layout: '{}'",
            layout
        )));
    }
    Ok(())
}

/// Render `now` (UTC) with a strftime layout, or as Unix seconds for [`EPOCH_LAYOUT`]
pub fn render_timestamp(layout: &str, now: DateTime<Utc>) -> Result<String> {
    if layout == EPOCH_LAYOUT {
        return Ok(now.timestamp().to_string());
    }
    validate_layout(layout)?;
    let items: Vec<Item> = StrftimeItems::new(strftime_pattern(layout)).collect();
    Ok(now.format_with_items(items.iter()).to_string())
}

fn strftime_pattern(layout: &str) -> &str {
    if layout == DATETIME_LAYOUT {
        DATETIME_FORMAT
    } else {
        layout
    }
}
