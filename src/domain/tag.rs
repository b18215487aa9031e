/// A tag name split into its scope prefix and version text
///
/// Tags follow the `<scope>-v<version>` convention (the `v` is optional),
/// e.g. `account-v1.0.0` or `billing-2.1.0-rc.1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedTag {
    pub name: String,
    pub scope: String,
    pub version_text: String,
}

impl ScopedTag {
    /// Split a tag name into scope and version text.
    ///
    /// The scope capture is greedy: it runs up to the LAST `-` that is followed
    /// by an optional `v` and a digit. `a-b-v1.0.0` therefore has scope `a-b`,
    /// and `svc-v1.0.0-rc-2` has scope `svc-v1.0.0-rc` with version text `2`.
    ///
    /// Returns `None` when no such dash exists.
    pub fn parse(name: &str) -> Option<Self> {
        name.rmatch_indices('-').find_map(|(dash, _)| {
            let remainder = &name[dash + 1..];
            let version_text = remainder.strip_prefix('v').unwrap_or(remainder);
            version_text
                .starts_with(|c: char| c.is_ascii_digit())
                .then(|| ScopedTag {
                    name: name.to_string(),
                    scope: name[..dash].to_string(),
                    version_text: version_text.to_string(),
                })
        })
    }

    /// Render a tag name for a scope and version (e.g., "svc", "1.2.0" -> "svc-v1.2.0")
    pub fn format(scope: &str, version: &str) -> String {
        format!("{}-v{}", scope, version)
    }
}
