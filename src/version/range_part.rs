//! Single segments of a version range (`1.0`, `!1.1`, `1.0..!2.0`)

use std::fmt;
use std::str::FromStr;

use crate::version::error::{FormatError, UnsupportedIntersection};
use crate::version::implementation_version::ImplementationVersion;
use crate::version::range::VersionRange;

/// One match condition of a [`VersionRange`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VersionRangePart {
    /// Matches exactly one version
    Exact(ImplementationVersion),
    /// Matches `not_before <= v < before`; a missing bound is unbounded
    Range {
        not_before: Option<ImplementationVersion>,
        before: Option<ImplementationVersion>,
    },
    /// Matches every version except one
    Exclude(ImplementationVersion),
}

impl VersionRangePart {
    pub fn matches(&self, version: &ImplementationVersion) -> bool {
        match self {
            VersionRangePart::Exact(exact) => exact == version,
            VersionRangePart::Range { not_before, before } => {
                not_before.as_ref().is_none_or(|lower| version >= lower)
                    && before.as_ref().is_none_or(|upper| version < upper)
            }
            VersionRangePart::Exclude(excluded) => excluded != version,
        }
    }

    /// Intersect this part with every part of `other`
    ///
    /// Returns the (possibly empty) list of parts whose union matches exactly
    /// the versions matched by both `self` and `other`.
    pub fn intersect(
        &self,
        other: &VersionRange,
    ) -> Result<Vec<VersionRangePart>, UnsupportedIntersection> {
        if other.is_unrestricted() {
            return Ok(vec![self.clone()]);
        }

        match self {
            VersionRangePart::Exact(version) => Ok(if other.matches(version) {
                vec![self.clone()]
            } else {
                Vec::new()
            }),
            VersionRangePart::Range { .. } | VersionRangePart::Exclude(_) => {
                let mut parts = Vec::new();
                for part in other.parts() {
                    if let Some(intersection) = self.intersect_part(part)? {
                        parts.push(intersection);
                    }
                }
                Ok(parts)
            }
        }
    }

    fn intersect_part(
        &self,
        other: &VersionRangePart,
    ) -> Result<Option<VersionRangePart>, UnsupportedIntersection> {
        use VersionRangePart::*;

        let intersection = match (self, other) {
            (Exact(version), _) | (_, Exact(version)) => {
                (self.matches(version) && other.matches(version)).then(|| Exact(version.clone()))
            }
            (
                Range {
                    not_before: left_lower,
                    before: left_upper,
                },
                Range {
                    not_before: right_lower,
                    before: right_upper,
                },
            ) => {
                let not_before = max_lower(left_lower, right_lower);
                let before = min_upper(left_upper, right_upper);
                let non_empty = match (&not_before, &before) {
                    (Some(lower), Some(upper)) => lower < upper,
                    _ => true,
                };
                non_empty.then_some(Range { not_before, before })
            }
            (Range { .. }, Exclude(excluded)) if !self.matches_inside(excluded) => {
                Some(self.clone())
            }
            (Exclude(excluded), Range { .. }) if !other.matches_inside(excluded) => {
                Some(other.clone())
            }
            (Exclude(left), Exclude(right)) if left == right => Some(self.clone()),
            _ => {
                return Err(UnsupportedIntersection {
                    left: self.to_string(),
                    right: other.to_string(),
                });
            }
        };

        Ok(intersection)
    }

    /// Whether a range part contains `version`; only meaningful for `Range`
    fn matches_inside(&self, version: &ImplementationVersion) -> bool {
        matches!(self, VersionRangePart::Range { .. }) && self.matches(version)
    }
}

fn max_lower(
    left: &Option<ImplementationVersion>,
    right: &Option<ImplementationVersion>,
) -> Option<ImplementationVersion> {
    match (left, right) {
        (Some(left), Some(right)) => Some(left.max(right).clone()),
        (bound, None) | (None, bound) => bound.clone(),
    }
}

fn min_upper(
    left: &Option<ImplementationVersion>,
    right: &Option<ImplementationVersion>,
) -> Option<ImplementationVersion> {
    match (left, right) {
        (Some(left), Some(right)) => Some(left.min(right).clone()),
        (bound, None) | (None, bound) => bound.clone(),
    }
}

impl FromStr for VersionRangePart {
    type Err = FormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if let Some((start, end)) = value.split_once("..") {
            let not_before = match start.trim() {
                "" => None,
                start => Some(start.parse::<ImplementationVersion>()?),
            };
            let before = match end.trim() {
                "" => None,
                end => match end.strip_prefix('!') {
                    Some(upper) => Some(upper.parse::<ImplementationVersion>()?),
                    None => return Err(FormatError::MissingExclusiveMarker(value.to_string())),
                },
            };
            Ok(VersionRangePart::Range { not_before, before })
        } else if let Some(excluded) = value.strip_prefix('!') {
            Ok(VersionRangePart::Exclude(excluded.parse()?))
        } else {
            Ok(VersionRangePart::Exact(value.parse()?))
        }
    }
}

impl fmt::Display for VersionRangePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionRangePart::Exact(version) => write!(f, "{version}"),
            VersionRangePart::Range { not_before, before } => {
                if let Some(lower) = not_before {
                    write!(f, "{lower}")?;
                }
                f.write_str("..")?;
                if let Some(upper) = before {
                    write!(f, "!{upper}")?;
                }
                Ok(())
            }
            VersionRangePart::Exclude(version) => write!(f, "!{version}"),
        }
    }
}
