//! Conventional-commit classification
//!
//! Turns a raw commit message into a [`Commit`]. Classification never fails:
//! a header outside the `type(scope): description` grammar becomes an
//! `unknown` commit whose description is the whole header.

use crate::domain::{Commit, CommitKind};
use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// Type word and separator whitespace are ASCII-only.
static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_]+)(\([^)]+\))?!?[\t\n\f\r ]*:[\t\n\f\r ]*(.+)$")
        .expect("header pattern is valid")
});

static BREAKING_FOOTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)BREAKING[- ]CHANGE:").expect("footer pattern is valid"));

/// Fields extracted from a commit header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    pub kind: CommitKind,
    pub scope: String,
    pub description: String,
}

/// Parse a single header line (already trimmed)
pub fn parse_header(header: &str) -> ParsedHeader {
    match HEADER_PATTERN.captures(header) {
        Some(captures) => {
            let word = captures
                .get(1)
                .map(|m| m.as_str().to_lowercase())
                .unwrap_or_default();
            let scope = captures
                .get(2)
                .map(|m| {
                    m.as_str()
                        .trim_start_matches('(')
                        .trim_end_matches(')')
                        .to_string()
                })
                .unwrap_or_default();
            let description = captures
                .get(3)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();

            ParsedHeader {
                kind: CommitKind::from_word(&word),
                scope,
                description,
            }
        }
        None => ParsedHeader {
            kind: CommitKind::default(),
            scope: String::new(),
            description: header.to_string(),
        },
    }
}

/// Breaking-change detection over a full message.
///
/// A `BREAKING CHANGE:` / `BREAKING-CHANGE:` footer anywhere (any case), or a
/// `!` anywhere in the header. The `!` check is not tied to the
/// `type(scope)!:` position, so `fix: handle it!` counts as breaking.
pub fn is_breaking(message: &str, header: &str) -> bool {
    BREAKING_FOOTER.is_match(message) || header.contains('!')
}

/// Classify a raw commit message
pub fn parse_commit(
    message: &str,
    hash: &str,
    author: &str,
    timestamp: DateTime<Utc>,
) -> Commit {
    let mut lines = message.split('\n');
    let header = lines.next().unwrap_or_default().trim();
    let body = lines.collect::<Vec<_>>().join("\n");

    let ParsedHeader {
        kind,
        scope,
        description,
    } = parse_header(header);
    let breaking = is_breaking(message, header);

    debug!(
        hash = %hash,
        kind = %kind,
        scope = %scope,
        breaking,
        "Classified commit"
    );

    Commit {
        hash: hash.to_string(),
        message: message.to_string(),
        kind,
        scope,
        description,
        body,
        breaking,
        author: author.to_string(),
        timestamp,
    }
}
