use crate::domain::version::Version;
use crate::error::{NextverError, Result};

const PLACEHOLDER: &str = "{version}";

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPattern {
    pattern: String,
}

impl TagPattern {
    /// Create a tag pattern; it must contain the `{version}` placeholder
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if !pattern.contains(PLACEHOLDER) {
            return Err(NextverError::config(format!(
                "tag pattern '{}' must contain the {} placeholder",
                pattern, PLACEHOLDER
            )));
        }
        Ok(TagPattern { pattern })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Format a version according to the pattern
    /// Example: pattern="v{version}", version=1.2.3 -> "v1.2.3"
    pub fn format(&self, version: &Version) -> String {
        self.pattern.replace(PLACEHOLDER, &version.to_string())
    }

    /// Recover the version from a tag produced by this pattern
    ///
    /// Returns `None` when the tag does not carry the pattern's fixed prefix
    /// and suffix or the middle is not a valid version.
    pub fn extract(&self, tag: &str) -> Option<Version> {
        let (prefix, suffix) = self.pattern.split_once(PLACEHOLDER)?;
        let middle = tag.strip_prefix(prefix)?.strip_suffix(suffix)?;
        Version::parse(middle).ok()
    }
}

impl Default for TagPattern {
    fn default() -> Self {
        TagPattern {
            pattern: "v{version}".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_requires_placeholder() {
        assert!(TagPattern::new("release").is_err());
        assert!(TagPattern::new("release-{version}").is_ok());
    }

    #[test]
    fn test_pattern_format() {
        let pattern = TagPattern::default();
        assert_eq!(pattern.format(&Version::new(1, 2, 3)), "v1.2.3");
    }

    #[test]
    fn test_pattern_format_with_suffix() {
        let pattern = TagPattern::new("release-{version}-final").unwrap();
        assert_eq!(
            pattern.format(&Version::new(1, 2, 3)),
            "release-1.2.3-final"
        );
    }

    #[test]
    fn test_pattern_extract() {
        let pattern = TagPattern::new("release-{version}").unwrap();
        assert_eq!(
            pattern.extract("release-2.0.1"),
            Some(Version::new(2, 0, 1))
        );
        assert_eq!(pattern.extract("v2.0.1"), None);
        assert_eq!(pattern.extract("release-two"), None);
    }
}
