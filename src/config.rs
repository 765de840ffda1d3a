use crate::domain::{TagPattern, Version};
use crate::error::{NextverError, Result};
use serde::{Deserialize, Serialize};

/// Complete configuration for nextver.
///
/// Callers read the TOML text themselves and hand it to [`Config::from_toml_str`].
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub release: ReleaseConfig,
}

/// Settings for commit analysis.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct AnalysisConfig {
    /// Let non-conventional commits force a patch bump
    #[serde(default)]
    pub strict: bool,
}

/// Returns the default release tag pattern.
fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

/// Returns the version assumed when the repository has no tags.
fn default_initial_version() -> String {
    "0.0.0".to_string()
}

/// Settings for naming and seeding releases.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    #[serde(default = "default_initial_version")]
    pub initial_version: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            tag_pattern: default_tag_pattern(),
            initial_version: default_initial_version(),
        }
    }
}

impl ReleaseConfig {
    pub fn tag_pattern(&self) -> Result<TagPattern> {
        TagPattern::new(self.tag_pattern.as_str())
    }
}

impl Config {
    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text).map_err(|e| NextverError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the tag pattern and initial version are usable
    pub fn validate(&self) -> Result<()> {
        self.release.tag_pattern()?;
        Version::parse(&self.release.initial_version).map_err(|e| {
            NextverError::config(format!(
                "initial_version '{}' is not a version: {}",
                self.release.initial_version, e
            ))
        })?;
        Ok(())
    }
}
