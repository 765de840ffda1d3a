use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

/// Conventional commit types recognised by the bump calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    Feat,
    Fix,
    Refactor,
    Perf,
    Docs,
    Style,
    Test,
    Chore,
    Unknown,
}

impl CommitType {
    /// All types, in the order reports list them
    pub const ALL: [CommitType; 9] = [
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Perf,
        CommitType::Refactor,
        CommitType::Docs,
        CommitType::Style,
        CommitType::Test,
        CommitType::Chore,
        CommitType::Unknown,
    ];

    /// Map a lower-cased type word to one of the eight named types
    ///
    /// `"unknown"` is not a name a commit can claim, so it yields `None`.
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "feat" => Some(CommitType::Feat),
            "fix" => Some(CommitType::Fix),
            "refactor" => Some(CommitType::Refactor),
            "perf" => Some(CommitType::Perf),
            "docs" => Some(CommitType::Docs),
            "style" => Some(CommitType::Style),
            "test" => Some(CommitType::Test),
            "chore" => Some(CommitType::Chore),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Test => "test",
            CommitType::Chore => "chore",
            CommitType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of a classified commit as written in its header
///
/// `Other` keeps the literal word of a well-formed header whose type is not
/// one of the named types (e.g. `build`, `ci`). It behaves as
/// [`CommitType::Unknown`] everywhere except diagnostics and serialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CommitKind {
    Named(CommitType),
    Other(String),
}

impl CommitKind {
    /// Build a kind from a lower-cased header word
    pub fn from_word(word: &str) -> Self {
        match CommitType::from_word(word) {
            Some(commit_type) => CommitKind::Named(commit_type),
            None => CommitKind::Other(word.to_string()),
        }
    }

    /// Collapse to the closed enumeration used for bump decisions
    pub fn commit_type(&self) -> CommitType {
        match self {
            CommitKind::Named(commit_type) => *commit_type,
            CommitKind::Other(_) => CommitType::Unknown,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CommitKind::Named(commit_type) => commit_type.as_str(),
            CommitKind::Other(word) => word,
        }
    }
}

impl Default for CommitKind {
    fn default() -> Self {
        CommitKind::Named(CommitType::Unknown)
    }
}

impl fmt::Display for CommitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CommitKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A commit after conventional-commit classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commit {
    pub hash: String,
    /// Full raw message, header included
    pub message: String,
    #[serde(rename = "type")]
    pub kind: CommitKind,
    pub scope: String,
    pub description: String,
    pub body: String,
    pub breaking: bool,
    pub author: String,
    pub timestamp: DateTime<Utc>,
}

impl Commit {
    pub fn commit_type(&self) -> CommitType {
        self.kind.commit_type()
    }

    /// True when the header did not follow the conventional grammar
    pub fn is_malformed(&self) -> bool {
        self.kind == CommitKind::Named(CommitType::Unknown)
    }

    /// First eight characters of the hash, or the whole hash if shorter
    pub fn short_hash(&self) -> &str {
        short_hash(&self.hash)
    }
}

/// First eight characters of `hash`, or all of it if shorter
pub fn short_hash(hash: &str) -> &str {
    match hash.char_indices().nth(8) {
        Some((idx, _)) => &hash[..idx],
        None => hash,
    }
}
