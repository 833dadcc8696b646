//! What a user asks to run: an interface plus version restrictions

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::version::{ImplementationVersion, Restriction, UnsupportedIntersection, VersionRange};

/// Command-line flag carrying an extra restriction
pub const VERSION_FOR_FLAG: &str = "--version-for";

/// A top-level interface to run together with per-interface version restrictions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirements {
    pub interface_uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub extra_restrictions: IndexMap<String, VersionRange>,
}

impl Requirements {
    pub fn new(interface_uri: impl Into<String>) -> Self {
        Self {
            interface_uri: interface_uri.into(),
            command: None,
            extra_restrictions: IndexMap::new(),
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Restrict `interface_uri` to `range`, intersecting with any earlier restriction
    pub fn add_restriction(
        &mut self,
        interface_uri: impl Into<String>,
        range: VersionRange,
    ) -> Result<(), UnsupportedIntersection> {
        let interface_uri = interface_uri.into();
        let combined = match self.extra_restrictions.get(&interface_uri) {
            Some(existing) => existing.intersect(&range)?,
            None => range,
        };

        debug!("Restricting {} to '{}'", interface_uri, combined);
        self.extra_restrictions.insert(interface_uri, combined);
        Ok(())
    }

    pub fn restriction_for(&self, interface_uri: &str) -> Option<&VersionRange> {
        self.extra_restrictions.get(interface_uri)
    }

    /// Whether `version` of `interface_uri` satisfies the extra restrictions
    pub fn allows(&self, interface_uri: &str, version: &ImplementationVersion) -> bool {
        self.restriction_for(interface_uri)
            .is_none_or(|range| range.matches(version))
    }

    /// The extra restrictions as standalone [`Restriction`]s
    pub fn restrictions(&self) -> Vec<Restriction> {
        self.extra_restrictions
            .iter()
            .map(|(interface, range)| Restriction {
                interface: interface.clone(),
                versions: Some(range.clone()),
                constraints: Vec::new(),
            })
            .collect()
    }

    /// `--version-for URI RANGE` triples reproducing the extra restrictions
    pub fn version_for_args(&self) -> Vec<String> {
        self.extra_restrictions
            .iter()
            .flat_map(|(interface, range)| {
                [
                    VERSION_FOR_FLAG.to_string(),
                    interface.clone(),
                    range.to_string(),
                ]
            })
            .collect()
    }
}
