//! Unions of version constraints (`1.0..!2.0|!1.5|3.0`)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use tracing::debug;

use crate::version::constraint::Constraint;
use crate::version::error::{FormatError, UnsupportedIntersection};
use crate::version::implementation_version::ImplementationVersion;
use crate::version::range_part::VersionRangePart;

/// A pipe-separated list of [`VersionRangePart`]s matching their union
///
/// An empty list places no restriction at all. A range that can match nothing
/// is represented by [`VersionRange::none`] instead, so the two never mix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct VersionRange {
    parts: Vec<VersionRangePart>,
}

impl VersionRange {
    pub fn new(parts: Vec<VersionRangePart>) -> Self {
        Self { parts }
    }

    /// A range matching no version at all (`0..!0`)
    pub fn none() -> Self {
        let zero = ImplementationVersion::zero();
        Self {
            parts: vec![VersionRangePart::Range {
                not_before: Some(zero.clone()),
                before: Some(zero),
            }],
        }
    }

    /// Parse `value`, logging and discarding any error
    pub fn try_parse(value: &str) -> Option<Self> {
        value
            .parse()
            .inspect_err(|e| debug!("Failed to parse version range '{}': {}", value, e))
            .ok()
    }

    pub fn parts(&self) -> &[VersionRangePart] {
        &self.parts
    }

    /// Whether this range places no restriction on versions
    pub fn is_unrestricted(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn matches(&self, version: &ImplementationVersion) -> bool {
        self.is_unrestricted() || self.parts.iter().any(|part| part.matches(version))
    }

    /// Restrict this range to the versions also matched by `other`
    pub fn intersect(&self, other: &VersionRange) -> Result<VersionRange, UnsupportedIntersection> {
        if self.is_unrestricted() {
            return Ok(other.clone());
        }

        let mut parts: Vec<VersionRangePart> = Vec::new();
        for part in &self.parts {
            for intersection in part.intersect(other)? {
                if !parts.contains(&intersection) {
                    parts.push(intersection);
                }
            }
        }

        if parts.is_empty() {
            debug!("Intersection of '{}' and '{}' matches nothing", self, other);
            return Ok(Self::none());
        }

        Ok(Self { parts })
    }
}

impl From<ImplementationVersion> for VersionRange {
    fn from(version: ImplementationVersion) -> Self {
        Self {
            parts: vec![VersionRangePart::Exact(version)],
        }
    }
}

impl From<Constraint> for VersionRange {
    fn from(constraint: Constraint) -> Self {
        Self {
            parts: vec![VersionRangePart::Range {
                not_before: constraint.not_before,
                before: constraint.before,
            }],
        }
    }
}

impl FromStr for VersionRange {
    type Err = FormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let parts = value
            .split('|')
            .map(|part| part.trim().parse::<VersionRangePart>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { parts })
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

impl Serialize for VersionRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VersionRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}
