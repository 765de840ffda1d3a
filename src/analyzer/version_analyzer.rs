use crate::config::AnalysisConfig;
use crate::domain::{Analysis, BumpType, Category, Commit, CommitType, Version};
use crate::error::Result;
use tracing::debug;

/// Outcome of a bump calculation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpDecision {
    pub next_version: Version,
    pub bump_type: BumpType,
    pub analysis: Analysis,
}

/// Analyzes classified commits to determine the version bump
#[derive(Debug, Clone, Default)]
pub struct VersionAnalyzer {
    config: AnalysisConfig,
}

impl VersionAnalyzer {
    /// Create a new version analyzer
    pub fn new(config: AnalysisConfig) -> Self {
        VersionAnalyzer { config }
    }

    pub fn strict(&self) -> bool {
        self.config.strict
    }

    /// Severity and counter for a single commit.
    ///
    /// Breaking wins over type; unknown commits only bump under strict mode.
    pub fn classify(&self, commit: &Commit) -> (BumpType, Category) {
        if commit.breaking {
            return (BumpType::Major, Category::Breaking);
        }

        match commit.commit_type() {
            CommitType::Feat => (BumpType::Minor, Category::Feature),
            CommitType::Fix | CommitType::Perf => (BumpType::Patch, Category::Fix),
            CommitType::Unknown if self.config.strict => (BumpType::Patch, Category::Malformed),
            CommitType::Unknown => (BumpType::None, Category::Malformed),
            CommitType::Refactor
            | CommitType::Docs
            | CommitType::Style
            | CommitType::Test
            | CommitType::Chore => (BumpType::None, Category::Other),
        }
    }

    /// Bump type and counters for `commits`, independent of their order
    pub fn analyze(&self, commits: &[Commit]) -> (BumpType, Analysis) {
        commits
            .iter()
            .map(|commit| {
                let (severity, category) = self.classify(commit);
                let mut analysis = Analysis::default();
                analysis.record(category);
                (severity, analysis)
            })
            .fold(
                (BumpType::None, Analysis::default()),
                |(bump, analysis), (severity, counted)| {
                    (bump.max(severity), analysis.merge(counted))
                },
            )
    }

    /// Compute the next version from `current` and the commits since it
    ///
    /// Fails only when the bumped component of `current` would overflow.
    pub fn calculate(&self, current: &Version, commits: &[Commit]) -> Result<BumpDecision> {
        let (bump_type, analysis) = self.analyze(commits);
        let next_version = current.bump(bump_type)?;

        debug!(
            current = %current,
            next = %next_version,
            bump = %bump_type,
            strict = self.config.strict,
            commits = commits.len(),
            "Calculated version bump"
        );

        Ok(BumpDecision {
            next_version,
            bump_type,
            analysis,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conventional::parse_commit;
    use chrono::{DateTime, Utc};

    fn commits(messages: &[&str]) -> Vec<Commit> {
        messages
            .iter()
            .enumerate()
            .map(|(i, message)| {
                parse_commit(
                    message,
                    &format!("{:040x}", i),
                    "Test Author",
                    DateTime::<Utc>::UNIX_EPOCH,
                )
            })
            .collect()
    }

    fn lenient() -> VersionAnalyzer {
        VersionAnalyzer::new(AnalysisConfig { strict: false })
    }

    fn strict() -> VersionAnalyzer {
        VersionAnalyzer::new(AnalysisConfig { strict: true })
    }

    #[test]
    fn test_analyze_major() {
        let decision = lenient().calculate(
            &Version::new(1, 4, 2),
            &commits(&["feat: new feature", "fix(api)!: breaking change"]),
        ).unwrap();

        assert_eq!(decision.bump_type, BumpType::Major);
        assert_eq!(decision.next_version, Version::new(2, 0, 0));
        assert_eq!(decision.analysis.breaking_changes, 1);
        assert_eq!(decision.analysis.features, 1);
        assert_eq!(decision.analysis.fixes, 0);
    }

    #[test]
    fn test_analyze_minor() {
        let decision = lenient().calculate(
            &Version::new(1, 0, 0),
            &commits(&["feat: new feature", "fix: bug fix"]),
        ).unwrap();

        assert_eq!(decision.bump_type, BumpType::Minor);
        assert_eq!(decision.next_version, Version::new(1, 1, 0));
        assert_eq!(
            decision.analysis,
            Analysis {
                features: 1,
                fixes: 1,
                ..Analysis::default()
            }
        );
    }

    #[test]
    fn test_analyze_patch_from_perf() {
        let decision = lenient()
            .calculate(&Version::new(0, 3, 9), &commits(&["perf: cache results"]))
            .unwrap();
        assert_eq!(decision.bump_type, BumpType::Patch);
        assert_eq!(decision.next_version, Version::new(0, 3, 10));
        assert_eq!(decision.analysis.fixes, 1);
    }

    #[test]
    fn test_analyze_refactor_is_other() {
        let decision = lenient().calculate(
            &Version::new(1, 2, 3),
            &commits(&[
                "refactor: code cleanup",
                "docs: readme",
                "style: fmt",
                "test: more",
                "chore: deps",
            ]),
        ).unwrap();

        assert_eq!(decision.bump_type, BumpType::None);
        assert_eq!(decision.next_version, Version::new(1, 2, 3));
        assert_eq!(decision.analysis.other, 5);
    }

    #[test]
    fn test_analyze_empty() {
        let decision = lenient().calculate(&Version::new(0, 1, 0), &[]).unwrap();
        assert_eq!(decision.bump_type, BumpType::None);
        assert_eq!(decision.next_version, Version::new(0, 1, 0));
        assert_eq!(decision.analysis, Analysis::default());
    }

    #[test]
    fn test_analyze_non_conventional_lenient() {
        let decision = lenient().calculate(
            &Version::new(1, 0, 0),
            &commits(&["Updated stuff", "Fixed things"]),
        ).unwrap();
        assert_eq!(decision.bump_type, BumpType::None);
        assert_eq!(decision.analysis.malformed, 2);
    }

    #[test]
    fn test_analyze_non_conventional_strict() {
        let decision = strict()
            .calculate(&Version::new(1, 0, 0), &commits(&["Updated stuff"]))
            .unwrap();
        assert_eq!(decision.bump_type, BumpType::Patch);
        assert_eq!(decision.next_version, Version::new(1, 0, 1));
        assert_eq!(decision.analysis.malformed, 1);
    }

    #[test]
    fn test_analyze_unrecognised_type_counts_as_malformed() {
        let decision = strict().calculate(
            &Version::new(1, 0, 0),
            &commits(&["ci: tweak pipeline", "build(deps): bump"]),
        ).unwrap();
        assert_eq!(decision.bump_type, BumpType::Patch);
        assert_eq!(decision.analysis.malformed, 2);
        assert_eq!(decision.analysis.other, 0);
    }

    #[test]
    fn test_strict_does_not_raise_above_patch() {
        let decision = strict().calculate(
            &Version::new(1, 0, 0),
            &commits(&["random words", "feat: thing"]),
        ).unwrap();
        assert_eq!(decision.bump_type, BumpType::Minor);
    }

    #[test]
    fn test_analyze_breaking_change_via_footer() {
        let decision = lenient().calculate(
            &Version::new(3, 1, 4),
            &commits(&["fix: rename API field\n\nBREAKING CHANGE: field changed from X to Y"]),
        ).unwrap();
        assert_eq!(decision.bump_type, BumpType::Major);
        assert_eq!(decision.analysis.breaking_changes, 1);
        assert_eq!(decision.analysis.fixes, 0);
    }

    #[test]
    fn test_breaking_malformed_commit_is_not_counted_malformed() {
        let decision = lenient()
            .calculate(&Version::new(1, 0, 0), &commits(&["Ship it!"]))
            .unwrap();
        assert_eq!(decision.bump_type, BumpType::Major);
        assert_eq!(decision.analysis.breaking_changes, 1);
        assert_eq!(decision.analysis.malformed, 0);
    }

    #[test]
    fn test_calculate_overflow_is_an_error() {
        let current = Version::new(u64::MAX, 0, 0);
        let err = lenient()
            .calculate(&current, &commits(&["feat!: drop legacy api"]))
            .unwrap_err();
        assert!(matches!(err, crate::error::NextverError::MalformedVersion(_)));

        let unchanged = lenient()
            .calculate(&current, &commits(&["docs: notes"]))
            .unwrap();
        assert_eq!(unchanged.next_version, current);
    }

    #[test]
    fn test_calculate_clears_pre_release_and_build() {
        let current = Version::new(2, 0, 0)
            .with_pre_release("rc.1")
            .with_build("sha.1");
        for messages in [vec![], vec!["docs: x"], vec!["fix: y"], vec!["feat: z"]] {
            let decision = lenient().calculate(&current, &commits(&messages)).unwrap();
            assert!(decision.next_version.pre_release.is_empty());
            assert!(decision.next_version.build.is_empty());
        }
    }

    #[test]
    fn test_analyze_many_commits() {
        let decision = lenient().calculate(
            &Version::new(1, 0, 0),
            &commits(&[
                "chore: bump deps",
                "docs: add faq",
                "style: format code",
                "test: add unit tests",
                "refactor: extract module",
                "fix: edge case handling",
                "feat: new search feature",
                "wip",
            ]),
        ).unwrap();
        assert_eq!(decision.bump_type, BumpType::Minor);
        assert_eq!(
            decision.analysis,
            Analysis {
                breaking_changes: 0,
                features: 1,
                fixes: 1,
                other: 5,
                malformed: 1,
            }
        );
        assert_eq!(decision.analysis.total(), 8);
    }
}
