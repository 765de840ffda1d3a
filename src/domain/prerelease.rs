//! Pre-release channels for builds cut ahead of a release
//!
//! A channel renders as `beta` or, when a pipeline identifier is attached,
//! `beta.<id>`. Identifiers are restricted to ASCII alphanumerics so the
//! rendered version always parses back unchanged.

use crate::domain::version::Version;
use crate::error::{NextverError, Result};
use std::fmt;
use std::str::FromStr;

/// Pre-release channel name (alpha, beta, rc, or custom)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreReleaseType {
    Alpha,
    Beta,
    ReleaseCandidate,
    Custom(String),
}

impl PreReleaseType {
    /// Accepts "alpha", "a", "beta", "b", "rc", or any other ASCII alphanumeric word
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl FromStr for PreReleaseType {
    type Err = NextverError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "alpha" | "a" => Ok(PreReleaseType::Alpha),
            "beta" | "b" => Ok(PreReleaseType::Beta),
            "rc" => Ok(PreReleaseType::ReleaseCandidate),
            other => {
                if is_identifier(other) {
                    Ok(PreReleaseType::Custom(other.to_string()))
                } else {
                    Err(NextverError::config(format!(
                        "invalid pre-release channel: '{}'",
                        s
                    )))
                }
            }
        }
    }
}

impl fmt::Display for PreReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreReleaseType::Alpha => write!(f, "alpha"),
            PreReleaseType::Beta => write!(f, "beta"),
            PreReleaseType::ReleaseCandidate => write!(f, "rc"),
            PreReleaseType::Custom(s) => write!(f, "{}", s),
        }
    }
}

/// Pre-release channel with an optional pipeline identifier
///
/// # Examples
/// - "beta" -> PreRelease { identifier: Beta, pipeline_id: None }
/// - "beta.1842" -> PreRelease { identifier: Beta, pipeline_id: Some("1842") }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreRelease {
    pub identifier: PreReleaseType,
    pub pipeline_id: Option<String>,
}

impl PreRelease {
    pub fn new(identifier: PreReleaseType, pipeline_id: Option<String>) -> Self {
        PreRelease {
            identifier,
            pipeline_id,
        }
    }

    /// Beta channel tagged with a CI pipeline identifier, or plain `beta` when
    /// the identifier is empty
    pub fn beta(pipeline_id: &str) -> Result<Self> {
        let pipeline_id = if pipeline_id.is_empty() {
            None
        } else if is_identifier(pipeline_id) {
            Some(pipeline_id.to_string())
        } else {
            return Err(NextverError::config(format!(
                "invalid pipeline identifier: '{}'",
                pipeline_id
            )));
        };
        Ok(PreRelease::new(PreReleaseType::Beta, pipeline_id))
    }

    /// Parse "beta", "beta.1842", "rc.2" or "custom.x7"
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(NextverError::config("empty pre-release identifier"));
        }

        let (channel, pipeline_id) = match s.split_once('.') {
            Some((channel, id)) => (channel, Some(id)),
            None => (s, None),
        };

        let identifier = PreReleaseType::parse(channel)?;
        let pipeline_id = match pipeline_id {
            Some(id) if is_identifier(id) => Some(id.to_string()),
            Some(id) => {
                return Err(NextverError::config(format!(
                    "invalid pipeline identifier: '{}'",
                    id
                )))
            }
            None => None,
        };

        Ok(PreRelease {
            identifier,
            pipeline_id,
        })
    }

    /// Return `version` carrying this pre-release and no build metadata
    pub fn apply(&self, version: &Version) -> Version {
        Version::new(version.major, version.minor, version.patch).with_pre_release(self.to_string())
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier)?;
        if let Some(id) = &self.pipeline_id {
            write!(f, ".{}", id)?;
        }
        Ok(())
    }
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}
