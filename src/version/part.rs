//! Hyphen-separated suffix parts of a version (`pre2`, `rc1`, `post`, `3.1`)

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::version::dotted_list::VersionDottedList;
use crate::version::error::FormatError;

/// Optional tag at the start of a version part
///
/// Variants are declared in sort order: pre-releases and release candidates
/// sort below an untagged part, post-releases above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VersionModifier {
    Pre,
    RC,
    None,
    Post,
}

impl VersionModifier {
    /// Prefixes checked in this order when parsing
    const PREFIXED: [VersionModifier; 3] =
        [VersionModifier::Pre, VersionModifier::RC, VersionModifier::Post];

    pub fn as_str(&self) -> &'static str {
        match self {
            VersionModifier::Pre => "pre",
            VersionModifier::RC => "rc",
            VersionModifier::None => "",
            VersionModifier::Post => "post",
        }
    }
}

/// A modifier followed by a possibly empty dotted list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionPart {
    modifier: VersionModifier,
    dotted_list: VersionDottedList,
}

impl VersionPart {
    pub fn new(modifier: VersionModifier, dotted_list: VersionDottedList) -> Self {
        Self {
            modifier,
            dotted_list,
        }
    }

    pub fn modifier(&self) -> VersionModifier {
        self.modifier
    }

    pub fn dotted_list(&self) -> &VersionDottedList {
        &self.dotted_list
    }

    /// Compare two slots of an additional-parts sequence
    ///
    /// A missing slot acts as an untagged part whose dotted list sorts below
    /// every dotted list, including the empty one. Hence `1.0-pre < 1.0 < 1.0- < 1.0-0`.
    pub(crate) fn cmp_slots(left: Option<&VersionPart>, right: Option<&VersionPart>) -> Ordering {
        match (left, right) {
            (Some(left), Some(right)) => left.cmp(right),
            (None, None) => Ordering::Equal,
            (None, Some(right)) => VersionModifier::None
                .cmp(&right.modifier)
                .then(Ordering::Less),
            (Some(left), None) => left
                .modifier
                .cmp(&VersionModifier::None)
                .then(Ordering::Greater),
        }
    }
}

impl FromStr for VersionPart {
    type Err = FormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (modifier, rest) = VersionModifier::PREFIXED
            .iter()
            .find_map(|modifier| {
                value
                    .strip_prefix(modifier.as_str())
                    .map(|rest| (*modifier, rest))
            })
            .unwrap_or((VersionModifier::None, value));

        let dotted_list = if rest.is_empty() {
            VersionDottedList::default()
        } else if VersionDottedList::is_valid(rest) {
            rest.parse()?
        } else {
            return Err(FormatError::DottedList(rest.to_string()));
        };

        Ok(Self {
            modifier,
            dotted_list,
        })
    }
}

impl Ord for VersionPart {
    fn cmp(&self, other: &Self) -> Ordering {
        self.modifier
            .cmp(&other.modifier)
            .then_with(|| self.dotted_list.cmp(&other.dotted_list))
    }
}

impl PartialOrd for VersionPart {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for VersionPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.modifier.as_str(), self.dotted_list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn part(value: &str) -> VersionPart {
        value.parse().unwrap()
    }

    #[rstest]
    #[case("pre2", VersionModifier::Pre, "2")]
    #[case("rc1.5", VersionModifier::RC, "1.5")]
    #[case("post", VersionModifier::Post, "")]
    #[case("3.1", VersionModifier::None, "3.1")]
    #[case("", VersionModifier::None, "")]
    fn parse_splits_modifier_and_dotted_list(
        #[case] value: &str,
        #[case] modifier: VersionModifier,
        #[case] dotted_list: &str,
    ) {
        let parsed = part(value);
        assert_eq!(parsed.modifier(), modifier);
        assert_eq!(parsed.dotted_list().to_string(), dotted_list);
        assert_eq!(parsed.to_string(), value);
    }

    #[rstest]
    #[case("beta1")]
    #[case("Pre1")]
    #[case("pre-1")]
    #[case("rc1.")]
    fn parse_rejects_unknown_suffix(#[case] value: &str) {
        assert!(value.parse::<VersionPart>().is_err());
    }

    #[rstest]
    #[case("pre", "rc", Ordering::Less)]
    #[case("rc9", "0", Ordering::Less)]
    #[case("", "0", Ordering::Less)]
    #[case("9", "post", Ordering::Less)]
    #[case("pre2", "pre10", Ordering::Less)]
    #[case("post1", "post1", Ordering::Equal)]
    fn cmp_orders_modifier_then_dotted_list(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(part(left).cmp(&part(right)), expected);
    }

    #[rstest]
    #[case("pre", Ordering::Greater)]
    #[case("rc", Ordering::Greater)]
    #[case("", Ordering::Less)]
    #[case("0", Ordering::Less)]
    #[case("post", Ordering::Less)]
    fn missing_slot_compares_against_present_part(#[case] value: &str, #[case] expected: Ordering) {
        let present = part(value);
        assert_eq!(VersionPart::cmp_slots(None, Some(&present)), expected);
        assert_eq!(
            VersionPart::cmp_slots(Some(&present), None),
            expected.reverse()
        );
    }
}
