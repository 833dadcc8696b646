//! Period-separated lists of non-negative integers (`1.2.3`)

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::version::error::FormatError;

static DOTTED_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)*$").expect("dotted list pattern is valid"));

/// Largest component value, matching feeds' signed 64-bit integers
pub const MAX_COMPONENT: u64 = i64::MAX as u64;

/// A sequence of non-negative integers compared component by component
///
/// When two lists differ in length the missing trailing components sort below
/// any explicit value, so `1.0 < 1.0.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct VersionDottedList {
    decimals: Vec<u64>,
}

impl VersionDottedList {
    /// Check whether `value` matches `\d+(\.\d+)*`
    pub fn is_valid(value: &str) -> bool {
        DOTTED_LIST.is_match(value)
    }

    /// Build a non-empty list; components are limited to the signed 64-bit range
    pub fn new(decimals: Vec<u64>) -> Result<Self, FormatError> {
        if decimals.is_empty() {
            return Err(FormatError::Empty);
        }
        if decimals.iter().any(|decimal| *decimal > MAX_COMPONENT) {
            let list = Self { decimals };
            return Err(FormatError::DottedList(list.to_string()));
        }
        Ok(Self { decimals })
    }

    /// The single-component list `0`
    pub(crate) fn zero() -> Self {
        Self { decimals: vec![0] }
    }

    pub fn decimals(&self) -> &[u64] {
        &self.decimals
    }

    pub fn is_empty(&self) -> bool {
        self.decimals.is_empty()
    }
}

impl FromStr for VersionDottedList {
    type Err = FormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Err(FormatError::Empty);
        }

        let decimals = value
            .split('.')
            .map(|token| {
                // i64::from_str would also accept a sign
                if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(FormatError::DottedList(value.to_string()));
                }
                token
                    .parse::<i64>()
                    .ok()
                    .and_then(|decimal| u64::try_from(decimal).ok())
                    .ok_or_else(|| FormatError::DottedList(value.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { decimals })
    }
}

impl Ord for VersionDottedList {
    fn cmp(&self, other: &Self) -> Ordering {
        let upper_bound = self.decimals.len().max(other.decimals.len());
        (0..upper_bound)
            .map(|i| self.decimals.get(i).cmp(&other.decimals.get(i)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for VersionDottedList {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for VersionDottedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, decimal) in self.decimals.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{decimal}")?;
        }
        Ok(())
    }
}
