/// Parsed representation of a conventional commit header
///
/// The grammar is deliberately tolerant: `<type>(<scope>)?(!)?: <subject>`,
/// anchored at the start of the message with leading whitespace skipped.
/// A message that does not even start with a type parses to the empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommit {
    pub r#type: String,
    pub scope: Option<String>,
    pub is_breaking_change: bool,
    /// Everything from the `:` to the end of the first line, colon included
    pub subject: String,
}

impl ParsedCommit {
    /// Parse a commit message header.
    ///
    /// Supports formats:
    /// - type(scope)!: subject
    /// - type(scope): subject
    /// - type!: subject
    /// - type: subject
    /// - type(  (unclosed scope group, tolerated)
    pub fn parse(message: &str) -> Self {
        let header = message.trim_start_matches(|c: char| c.is_ascii_whitespace());

        let type_len = header
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();
        if type_len == 0 {
            return ParsedCommit::default();
        }
        let (r#type, mut rest) = header.split_at(type_len);

        // The raw scope capture spans the paren group and the breaking marker.
        let group_len = scope_group(rest).len();
        let is_breaking_change = rest[group_len..].starts_with('!');
        let scope_len = group_len + usize::from(is_breaking_change);
        let raw_scope = &rest[..scope_len];
        rest = &rest[scope_len..];

        let subject = if rest.starts_with(':') {
            rest.split('\n').next().unwrap_or_default()
        } else {
            ""
        };

        ParsedCommit {
            r#type: r#type.to_string(),
            scope: effective_scope(raw_scope),
            is_breaking_change,
            subject: subject.to_string(),
        }
    }

    /// Subject text without the leading colon and surrounding whitespace
    pub fn description(&self) -> &str {
        self.subject.trim_start_matches(':').trim()
    }
}

/// Match `\([^()\r\n]*\)` or, failing that, a lone `(`.
fn scope_group(text: &str) -> &str {
    let Some(inner) = text.strip_prefix('(') else {
        return "";
    };
    match inner.find(&['(', ')', '\r', '\n'][..]) {
        Some(end) if inner.as_bytes()[end] == b')' => &text[..end + 2],
        _ => &text[..1],
    }
}

/// Text after the first `(`, cut at the first `)` when there is one.
fn effective_scope(raw: &str) -> Option<String> {
    let (_, after) = raw.split_once('(')?;
    let scope = after.split_once(')').map_or(after, |(before, _)| before);
    (!scope.is_empty()).then(|| scope.to_string())
}
