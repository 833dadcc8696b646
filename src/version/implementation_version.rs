//! Implementation versions as used in feeds (`1.2-pre3-post`)

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use tracing::debug;

use crate::version::dotted_list::VersionDottedList;
use crate::version::error::FormatError;
use crate::version::part::VersionPart;

static TEMPLATE_VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^{}]*\}").expect("template variable pattern is valid"));

/// The version of a single implementation
///
/// A version is a dotted list followed by any number of hyphen-separated
/// [`VersionPart`]s. Feed templates may instead carry a verbatim string with
/// `{...}` placeholders, which is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImplementationVersion {
    repr: Repr,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Repr {
    Structured {
        first_part: VersionDottedList,
        additional_parts: Vec<VersionPart>,
    },
    Verbatim(String),
}

impl ImplementationVersion {
    /// Build a version from its components
    ///
    /// The leading dotted list must not be empty, otherwise the version could
    /// not be written back as a parseable string.
    pub fn new(
        first_part: VersionDottedList,
        additional_parts: Vec<VersionPart>,
    ) -> Result<Self, FormatError> {
        if first_part.is_empty() {
            return Err(FormatError::Empty);
        }
        Ok(Self::structured(first_part, additional_parts))
    }

    /// Build a template version kept verbatim; it must contain a `{...}` placeholder
    pub fn template(value: impl Into<String>) -> Result<Self, FormatError> {
        let value = value.into();
        if !TEMPLATE_VARIABLE.is_match(&value) {
            return Err(FormatError::MissingTemplateVariable(value));
        }
        Ok(Self {
            repr: Repr::Verbatim(value),
        })
    }

    /// The version `0`
    pub(crate) fn zero() -> Self {
        Self::structured(VersionDottedList::zero(), Vec::new())
    }

    fn structured(first_part: VersionDottedList, additional_parts: Vec<VersionPart>) -> Self {
        Self {
            repr: Repr::Structured {
                first_part,
                additional_parts,
            },
        }
    }

    /// Parse `value`, logging and discarding any error
    pub fn try_parse(value: &str) -> Option<Self> {
        value
            .parse()
            .inspect_err(|e| debug!("Failed to parse version '{}': {}", value, e))
            .ok()
    }

    /// Whether the version is a template string carried verbatim
    pub fn contains_template_variables(&self) -> bool {
        matches!(self.repr, Repr::Verbatim(_))
    }

    /// The leading dotted list, `None` for templates
    pub fn first_part(&self) -> Option<&VersionDottedList> {
        match &self.repr {
            Repr::Structured { first_part, .. } => Some(first_part),
            Repr::Verbatim(_) => None,
        }
    }

    /// The hyphen-separated parts after the leading dotted list
    pub fn additional_parts(&self) -> &[VersionPart] {
        match &self.repr {
            Repr::Structured {
                additional_parts, ..
            } => additional_parts,
            Repr::Verbatim(_) => &[],
        }
    }
}

impl FromStr for ImplementationVersion {
    type Err = FormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Err(FormatError::Empty);
        }

        if TEMPLATE_VARIABLE.is_match(value) {
            return Self::template(value);
        }

        let mut segments = value.split('-');
        let first = segments.next().unwrap_or_default();
        if !VersionDottedList::is_valid(first) {
            return Err(FormatError::MissingDottedList(value.to_string()));
        }

        Ok(Self::structured(
            first.parse::<VersionDottedList>()?,
            segments
                .map(VersionPart::from_str)
                .collect::<Result<Vec<_>, _>>()?,
        ))
    }
}

impl Ord for ImplementationVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.repr, &other.repr) {
            (
                Repr::Structured {
                    first_part: left_first,
                    additional_parts: left_parts,
                },
                Repr::Structured {
                    first_part: right_first,
                    additional_parts: right_parts,
                },
            ) => left_first.cmp(right_first).then_with(|| {
                let upper_bound = left_parts.len().max(right_parts.len());
                (0..upper_bound)
                    .map(|i| VersionPart::cmp_slots(left_parts.get(i), right_parts.get(i)))
                    .find(|ordering| ordering.is_ne())
                    .unwrap_or(Ordering::Equal)
            }),
            // Templates carry no version semantics; keep them apart from real versions
            (Repr::Verbatim(left), Repr::Verbatim(right)) => left.cmp(right),
            (Repr::Verbatim(_), Repr::Structured { .. }) => Ordering::Less,
            (Repr::Structured { .. }, Repr::Verbatim(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for ImplementationVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ImplementationVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Structured {
                first_part,
                additional_parts,
            } => {
                write!(f, "{first_part}")?;
                for part in additional_parts {
                    write!(f, "-{part}")?;
                }
                Ok(())
            }
            Repr::Verbatim(value) => f.write_str(value),
        }
    }
}

impl Serialize for ImplementationVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ImplementationVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}
