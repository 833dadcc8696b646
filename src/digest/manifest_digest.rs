//! Manifest digest records parsed from implementation IDs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use tracing::warn;

use crate::digest::algorithm::DigestAlgorithm;
use crate::digest::error::DigestError;

/// Up to one hash per [`DigestAlgorithm`] identifying an implementation's files
///
/// A hash, once set, is never overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ManifestDigest {
    sha1: Option<String>,
    sha1_new: Option<String>,
    sha256: Option<String>,
    sha256_new: Option<String>,
}

impl ManifestDigest {
    /// Builder-style variant of [`ManifestDigest::insert`]
    pub fn with(mut self, algorithm: DigestAlgorithm, hash: impl Into<String>) -> Self {
        self.insert(algorithm, hash.into());
        self
    }

    /// Accumulate a single `sha1=`, `sha1new=`, `sha256=` or `sha256new_` token
    ///
    /// Returns `false` if the token carries no recognized prefix or an empty
    /// hash. A hash already set for the token's algorithm is kept.
    pub fn try_parse(&mut self, token: &str) -> bool {
        let token = token.trim();
        let Some((algorithm, hash)) = DigestAlgorithm::PARSE_ORDER
            .iter()
            .find_map(|algorithm| algorithm.strip_prefix(token).map(|hash| (*algorithm, hash)))
        else {
            return false;
        };
        if hash.is_empty() {
            return false;
        }

        self.insert(algorithm, hash.to_string());
        true
    }

    pub fn get(&self, algorithm: DigestAlgorithm) -> Option<&str> {
        self.slot(algorithm).as_deref()
    }

    /// Whether no hash is set at all
    pub fn is_empty(&self) -> bool {
        DigestAlgorithm::PARSE_ORDER
            .iter()
            .all(|algorithm| self.get(*algorithm).is_none())
    }

    /// All set digests as prefixed IDs, strongest algorithm first
    pub fn available_digests(&self) -> Vec<String> {
        DigestAlgorithm::BEST_FIRST
            .iter()
            .filter_map(|algorithm| {
                self.get(*algorithm)
                    .map(|hash| format!("{}{}", algorithm.prefix(), hash))
            })
            .collect()
    }

    /// The prefixed ID of the strongest set digest
    pub fn best(&self) -> Option<String> {
        self.available_digests().into_iter().next()
    }

    /// Whether the two digests agree on at least one algorithm and contradict on none
    pub fn partial_equals(&self, other: &ManifestDigest) -> bool {
        let mut matches = 0;
        for algorithm in DigestAlgorithm::PARSE_ORDER {
            match (self.get(algorithm), other.get(algorithm)) {
                (Some(left), Some(right)) if left == right => matches += 1,
                (Some(_), Some(_)) => return false,
                _ => {}
            }
        }
        matches > 0
    }

    fn insert(&mut self, algorithm: DigestAlgorithm, hash: String) {
        if hash.is_empty() {
            warn!("Ignoring empty {} digest", algorithm.as_str());
            return;
        }

        let slot = self.slot_mut(algorithm);
        if slot.is_none() {
            *slot = Some(hash);
        }
    }

    fn slot(&self, algorithm: DigestAlgorithm) -> &Option<String> {
        match algorithm {
            DigestAlgorithm::Sha1 => &self.sha1,
            DigestAlgorithm::Sha1New => &self.sha1_new,
            DigestAlgorithm::Sha256 => &self.sha256,
            DigestAlgorithm::Sha256New => &self.sha256_new,
        }
    }

    fn slot_mut(&mut self, algorithm: DigestAlgorithm) -> &mut Option<String> {
        match algorithm {
            DigestAlgorithm::Sha1 => &mut self.sha1,
            DigestAlgorithm::Sha1New => &mut self.sha1_new,
            DigestAlgorithm::Sha256 => &mut self.sha256,
            DigestAlgorithm::Sha256New => &mut self.sha256_new,
        }
    }
}

impl FromStr for ManifestDigest {
    type Err = DigestError;

    /// Parse a comma-separated list of prefixed digests; the first hash per algorithm wins
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().is_empty() {
            return Err(DigestError::Empty);
        }

        let mut digest = Self::default();
        for token in value.split(',') {
            if !digest.try_parse(token) {
                warn!("Skipping unrecognized digest '{}'", token.trim());
            }
        }

        if digest.is_empty() {
            return Err(DigestError::NotSupported(value.to_string()));
        }
        Ok(digest)
    }
}

impl fmt::Display for ManifestDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for algorithm in DigestAlgorithm::PARSE_ORDER {
            if let Some(hash) = self.get(algorithm) {
                if !first {
                    f.write_str(",")?;
                }
                write!(f, "{}{}", algorithm.prefix(), hash)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl Serialize for ManifestDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ManifestDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(de::Error::custom)
    }
}
