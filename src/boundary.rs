use crate::domain::commit::short_hash;
use std::fmt;

/// Non-fatal findings about a calculation.
/// These are reported to the caller, which decides whether they matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// No new commits since the latest tag
    NoNewCommits { current_version: String },
    /// Commits whose header did not follow the conventional grammar
    MalformedCommits { count: usize, strict: bool },
    /// Well-formed header with a type outside the known set
    UnrecognizedType { hash: String, word: String },
}

impl Diagnostic {
    /// True when a caller running in strict mode should fail
    pub fn is_strict_violation(&self) -> bool {
        matches!(self, Diagnostic::MalformedCommits { strict: true, .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NoNewCommits { current_version } => {
                write!(f, "No new commits since {}", current_version)
            }
            Diagnostic::MalformedCommits { count, strict } => {
                let mode = if *strict { " in strict mode" } else { "" };
                write!(f, "{} malformed commits found{}", count, mode)
            }
            Diagnostic::UnrecognizedType { hash, word } => {
                write!(f, "Commit {} uses unrecognized type '{}'", short_hash(hash), word)
            }
        }
    }
}
