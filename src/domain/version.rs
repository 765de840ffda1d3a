use crate::error::{NextverError, Result};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Semantic version representation
///
/// `pre_release` and `build` are empty when absent. Equality is structural
/// over all five fields; use [`Version::precedence_cmp`] to compare releases.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: String,
    pub build: String,
}

impl Version {
    /// Create a new release version with no pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: String::new(),
            build: String::new(),
        }
    }

    /// Attach a pre-release identifier
    pub fn with_pre_release(mut self, pre_release: impl Into<String>) -> Self {
        self.pre_release = pre_release.into();
        self
    }

    /// Attach build metadata
    pub fn with_build(mut self, build: impl Into<String>) -> Self {
        self.build = build.into();
        self
    }

    /// Parse a version string such as `v1.2.3-rc.1+build.5`.
    ///
    /// A single leading `v` is stripped. The remainder is split into at most
    /// three segments on `.`; the third segment carries the patch number and
    /// any pre-release/build suffix. The build marker is only honoured when it
    /// follows the pre-release marker, so `1.2.3+build-pre` is rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let clean = text.strip_prefix('v').unwrap_or(text);

        let parts: Vec<&str> = clean.splitn(3, '.').collect();
        if parts.len() < 3 {
            return Err(NextverError::malformed_version(format!(
                "invalid version format: '{}' - expected MAJOR.MINOR.PATCH",
                text
            )));
        }

        let major = parse_number(parts[0], "major")?;
        let minor = parse_number(parts[1], "minor")?;

        let patch_part = parts[2];
        let (patch_str, pre_release, build) = match patch_part.find('-') {
            Some(dash) => {
                let remaining = &patch_part[dash + 1..];
                let (pre_release, build) = if patch_part.contains('+') {
                    match remaining.split_once('+') {
                        Some((pre, build)) => (pre, build),
                        None => (remaining, ""),
                    }
                } else {
                    (remaining, "")
                };
                (&patch_part[..dash], pre_release, build)
            }
            None => match patch_part.split_once('+') {
                Some((patch, build)) => (patch, "", build),
                None => (patch_part, "", ""),
            },
        };

        let patch = parse_number(patch_str, "patch")?;

        Ok(Version {
            major,
            minor,
            patch,
            pre_release: pre_release.to_string(),
            build: build.to_string(),
        })
    }

    /// Compare release precedence, looking only at the numeric triple
    pub fn precedence_cmp(&self, other: &Version) -> Ordering {
        (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch))
    }

    /// Advance the version according to `bump_type`.
    ///
    /// Pre-release and build metadata are always dropped, including for
    /// [`BumpType::None`]. Fails when the bumped component is already at
    /// `u64::MAX`.
    pub fn bump(&self, bump_type: BumpType) -> Result<Self> {
        let next = match bump_type {
            BumpType::Major => Version::new(increment(self.major, "major", self)?, 0, 0),
            BumpType::Minor => Version::new(self.major, increment(self.minor, "minor", self)?, 0),
            BumpType::Patch => {
                Version::new(self.major, self.minor, increment(self.patch, "patch", self)?)
            }
            BumpType::None => Version::new(self.major, self.minor, self.patch),
        };
        Ok(next)
    }
}

fn increment(value: u64, component: &str, version: &Version) -> Result<u64> {
    value.checked_add(1).ok_or_else(|| {
        NextverError::malformed_version(format!(
            "cannot bump {} version of '{}': component overflows",
            component, version
        ))
    })
}

fn parse_number(segment: &str, component: &str) -> Result<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NextverError::malformed_version(format!(
            "invalid {} version: '{}'",
            component, segment
        )));
    }
    segment.parse::<u64>().map_err(|e| {
        NextverError::malformed_version(format!(
            "invalid {} version: '{}' ({})",
            component, segment, e
        ))
    })
}

impl FromStr for Version {
    type Err = NextverError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Magnitude of a version advance, ordered `None < Patch < Minor < Major`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpType {
    #[default]
    None,
    Patch,
    Minor,
    Major,
}

impl BumpType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpType::None => "none",
            BumpType::Patch => "patch",
            BumpType::Minor => "minor",
            BumpType::Major => "major",
        }
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
