//! Version bounds attached to dependencies and restrictions

use serde::{Deserialize, Serialize};

use crate::version::error::UnsupportedIntersection;
use crate::version::implementation_version::ImplementationVersion;
use crate::version::range::VersionRange;

/// A `not-before`/`before` pair restricting the versions of an interface
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Constraint {
    /// Inclusive lower bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_before: Option<ImplementationVersion>,
    /// Exclusive upper bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<ImplementationVersion>,
}

impl Constraint {
    pub fn new(
        not_before: Option<ImplementationVersion>,
        before: Option<ImplementationVersion>,
    ) -> Self {
        Self { not_before, before }
    }
}

/// Restricts the versions of an interface independently of any dependency on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restriction {
    pub interface: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versions: Option<VersionRange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,
}

impl Restriction {
    pub fn new(interface: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            versions: None,
            constraints: Vec::new(),
        }
    }

    /// The range allowed by `versions` and every constraint combined
    pub fn effective_versions(&self) -> Result<VersionRange, UnsupportedIntersection> {
        self.constraints.iter().try_fold(
            self.versions.clone().unwrap_or_default(),
            |range, constraint| range.intersect(&VersionRange::from(constraint.clone())),
        )
    }
}
