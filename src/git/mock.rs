use crate::error::{NextverError, Result};
use crate::git::{CommitSource, RawCommit, VersionSource, NO_TAG};

/// In-memory repository: an ordered history with tags pointing into it
#[derive(Debug, Clone, Default)]
pub struct MockRepository {
    commits: Vec<RawCommit>,
    tags: Vec<(String, usize)>,
    failure: Option<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a commit to the history
    pub fn add_commit(&mut self, commit: RawCommit) {
        self.commits.push(commit);
    }

    /// Tag the most recent commit
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push((name.into(), self.commits.len()));
    }

    /// Make every subsequent call fail with `message`
    pub fn fail_with(&mut self, message: impl Into<String>) {
        self.failure = Some(message.into());
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(message) => Err(NextverError::from_source(message.clone())),
            None => Ok(()),
        }
    }
}

impl VersionSource for MockRepository {
    fn latest_tag(&self) -> Result<String> {
        self.check()?;
        Ok(self
            .tags
            .last()
            .map(|(name, _)| name.clone())
            .unwrap_or_else(|| NO_TAG.to_string()))
    }
}

impl CommitSource for MockRepository {
    fn commits_since(&self, since: &str) -> Result<Vec<RawCommit>> {
        self.check()?;
        if since == NO_TAG {
            return Ok(self.commits.clone());
        }

        let position = self
            .tags
            .iter()
            .rev()
            .find(|(name, _)| name == since)
            .map(|(_, position)| *position)
            .ok_or_else(|| NextverError::from_source(format!("unknown revision '{}'", since)))?;

        Ok(self.commits[position..].to_vec())
    }
}
