//! Collaborator interfaces for commit and tag sources
//!
//! The engine never talks to a repository itself. Whatever lists tags and
//! walks history implements [`VersionSource`] and [`CommitSource`]; the
//! [`Workflow`](crate::workflow::Workflow) consumes them.
//!
//! - [mock::MockRepository]: an in-memory implementation for tests and
//!   callers that already hold commit data
//!
//! ```rust
//! # use nextver::git::{CommitSource, VersionSource};
//! # fn example<R: VersionSource + CommitSource>(repo: &R) -> nextver::Result<()> {
//! let tag = repo.latest_tag()?;
//! let commits = repo.commits_since(&tag)?;
//! # Ok(())
//! # }
//! ```

pub mod mock;

pub use mock::MockRepository;

use crate::error::Result;
use chrono::{DateTime, Utc};

/// Tag reported by a [`VersionSource`] when the repository has none
pub const NO_TAG: &str = "0.0.0";

/// Commit as delivered by a source, before classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommit {
    pub hash: String,
    pub author: String,
    /// Commit time in seconds since the Unix epoch
    pub timestamp: i64,
    /// First line of the message
    pub header: String,
    /// Everything after the first line, possibly empty
    pub body: String,
}

impl RawCommit {
    pub fn new(
        hash: impl Into<String>,
        author: impl Into<String>,
        timestamp: i64,
        header: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        RawCommit {
            hash: hash.into(),
            author: author.into(),
            timestamp,
            header: header.into(),
            body: body.into(),
        }
    }

    /// Full message: the header, then the body on the following lines
    pub fn message(&self) -> String {
        if self.body.is_empty() {
            self.header.clone()
        } else {
            format!("{}\n{}", self.header, self.body)
        }
    }

    /// Commit time; out-of-range values fall back to the epoch
    pub fn time(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.timestamp, 0).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}

/// Supplies the most recent release tag
pub trait VersionSource {
    /// Latest version tag, or [`NO_TAG`] when there is none
    ///
    /// Failures are reported as [`NextverError::Source`](crate::error::NextverError::Source).
    fn latest_tag(&self) -> Result<String>;
}

/// Supplies the commits made after a tag, oldest first
pub trait CommitSource {
    /// Commits reachable from HEAD but not from `since`
    ///
    /// When `since` is [`NO_TAG`] the whole history is returned.
    fn commits_since(&self, since: &str) -> Result<Vec<RawCommit>>;
}
