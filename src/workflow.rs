//! Analysis workflow
//!
//! Composes the version codec, the classifier and the bump calculator. The
//! workflow performs no I/O of its own: commit data either arrives as
//! [`RawCommit`]s or is pulled from a source implementing the traits in
//! [`crate::git`], whose errors are returned unchanged.

use serde::Serialize;
use tracing::{info, warn};

use crate::analyzer::VersionAnalyzer;
use crate::boundary::Diagnostic;
use crate::config::Config;
use crate::conventional::parse_commit;
use crate::domain::{
    Analysis, BumpType, Commit, CommitKind, CommitType, PreRelease, TagPattern, Version,
};
use crate::error::Result;
use crate::git::{CommitSource, RawCommit, VersionSource, NO_TAG};

/// Everything known about one version calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    pub current_version: Version,
    pub next_version: Version,
    pub bump_type: BumpType,
    pub commits: Vec<Commit>,
    pub commits_since: usize,
    pub analysis: Analysis,
}

impl CalculationResult {
    /// Release tag for the next version
    pub fn next_tag(&self, pattern: &TagPattern) -> String {
        pattern.format(&self.next_version)
    }

    /// Next version published on a pre-release channel
    pub fn pre_release_version(&self, pre_release: &PreRelease) -> Version {
        pre_release.apply(&self.next_version)
    }

    /// Commits grouped by type, in report order, skipping empty groups
    pub fn commits_by_type(&self) -> Vec<(CommitType, Vec<&Commit>)> {
        CommitType::ALL
            .iter()
            .filter_map(|commit_type| {
                let group: Vec<&Commit> = self
                    .commits
                    .iter()
                    .filter(|commit| commit.commit_type() == *commit_type)
                    .collect();
                (!group.is_empty()).then_some((*commit_type, group))
            })
            .collect()
    }

    /// Non-fatal findings a caller may want to surface
    pub fn diagnostics(&self, strict: bool) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if self.commits_since == 0 {
            diagnostics.push(Diagnostic::NoNewCommits {
                current_version: self.current_version.to_string(),
            });
        }

        if self.analysis.malformed > 0 {
            diagnostics.push(Diagnostic::MalformedCommits {
                count: self.analysis.malformed,
                strict,
            });
        }

        for commit in &self.commits {
            if let CommitKind::Other(word) = &commit.kind {
                diagnostics.push(Diagnostic::UnrecognizedType {
                    hash: commit.hash.clone(),
                    word: word.clone(),
                });
            }
        }

        diagnostics
    }
}

/// Runs a full version calculation
#[derive(Debug, Clone, Default)]
pub struct Workflow {
    config: Config,
    analyzer: VersionAnalyzer,
}

impl Workflow {
    pub fn new(config: Config) -> Self {
        let analyzer = VersionAnalyzer::new(config.analysis.clone());
        Workflow { config, analyzer }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Calculate the next version from a version string and raw commits
    ///
    /// Fails when `current_version` is not a valid version or its bumped
    /// component would overflow.
    pub fn calculate(
        &self,
        current_version: &str,
        raw_commits: &[RawCommit],
    ) -> Result<CalculationResult> {
        let current = Version::parse(current_version)?;
        self.calculate_from(current, raw_commits)
    }

    fn calculate_from(
        &self,
        current: Version,
        raw_commits: &[RawCommit],
    ) -> Result<CalculationResult> {
        let commits: Vec<Commit> = raw_commits
            .iter()
            .map(|raw| parse_commit(&raw.message(), &raw.hash, &raw.author, raw.time()))
            .collect();

        let decision = self.analyzer.calculate(&current, &commits)?;

        Ok(CalculationResult {
            current_version: current,
            next_version: decision.next_version,
            bump_type: decision.bump_type,
            commits_since: commits.len(),
            commits,
            analysis: decision.analysis,
        })
    }

    /// Fetch the latest tag and the commits since it from `source`, then calculate
    pub fn run<S>(&self, source: &S) -> Result<CalculationResult>
    where
        S: VersionSource + CommitSource,
    {
        let tag = source.latest_tag()?;
        let current = self.resolve_tag(&tag)?;
        let raw_commits = source.commits_since(&tag)?;
        let result = self.calculate_from(current, &raw_commits)?;

        info!(
            tag = %tag,
            current = %result.current_version,
            next = %result.next_version,
            bump = %result.bump_type,
            commits = result.commits_since,
            "Version calculation complete"
        );
        for diagnostic in result.diagnostics(self.analyzer.strict()) {
            warn!("{}", diagnostic);
        }

        Ok(result)
    }

    /// Version for a tag: the configured seed when there is no tag, the
    /// pattern's inner version when the tag follows the pattern, and the tag
    /// parsed as-is otherwise
    fn resolve_tag(&self, tag: &str) -> Result<Version> {
        if tag == NO_TAG {
            return Version::parse(&self.config.release.initial_version);
        }
        let pattern = self.config.release.tag_pattern()?;
        match pattern.extract(tag) {
            Some(version) => Ok(version),
            None => Version::parse(tag),
        }
    }
}
