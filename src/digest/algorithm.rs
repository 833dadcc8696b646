//! Digest algorithms supported in implementation IDs

/// Manifest digest algorithm
///
/// Variants are declared from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DigestAlgorithm {
    /// `sha1=` (legacy manifest format)
    Sha1,
    /// `sha1new=`
    Sha1New,
    /// `sha256=`
    Sha256,
    /// `sha256new_` (base32 encoded, usable in file names)
    Sha256New,
}

impl DigestAlgorithm {
    /// Order in which ID prefixes are tried when parsing
    pub const PARSE_ORDER: [DigestAlgorithm; 4] = [
        DigestAlgorithm::Sha1,
        DigestAlgorithm::Sha1New,
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Sha256New,
    ];

    /// Strongest algorithm first
    pub const BEST_FIRST: [DigestAlgorithm; 4] = [
        DigestAlgorithm::Sha256New,
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Sha1New,
        DigestAlgorithm::Sha1,
    ];

    /// Returns the algorithm name used in manifests
    pub fn as_str(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha1 => "sha1",
            DigestAlgorithm::Sha1New => "sha1new",
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Sha256New => "sha256new",
        }
    }

    /// Separator between algorithm name and hash value in IDs
    pub fn separator(&self) -> char {
        match self {
            DigestAlgorithm::Sha256New => '_',
            _ => '=',
        }
    }

    /// Returns the full ID prefix, e.g. `sha1new=` or `sha256new_`
    pub fn prefix(&self) -> String {
        format!("{}{}", self.as_str(), self.separator())
    }

    /// Strip this algorithm's prefix from an ID
    pub fn strip_prefix<'a>(&self, id: &'a str) -> Option<&'a str> {
        id.strip_prefix(self.as_str())?
            .strip_prefix(self.separator())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DigestAlgorithm::Sha1, "sha1=")]
    #[case(DigestAlgorithm::Sha1New, "sha1new=")]
    #[case(DigestAlgorithm::Sha256, "sha256=")]
    #[case(DigestAlgorithm::Sha256New, "sha256new_")]
    fn prefix_returns_expected(#[case] algorithm: DigestAlgorithm, #[case] expected: &str) {
        assert_eq!(algorithm.prefix(), expected);
    }

    #[rstest]
    #[case(DigestAlgorithm::Sha1, "sha1=abc", Some("abc"))]
    #[case(DigestAlgorithm::Sha1, "sha1new=abc", None)]
    #[case(DigestAlgorithm::Sha256, "sha256new_abc", None)]
    #[case(DigestAlgorithm::Sha256New, "sha256new_abc", Some("abc"))]
    #[case(DigestAlgorithm::Sha256New, "sha256new=abc", None)]
    fn strip_prefix_requires_matching_separator(
        #[case] algorithm: DigestAlgorithm,
        #[case] id: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(algorithm.strip_prefix(id), expected);
    }

    #[test]
    fn best_first_is_descending_strength() {
        let mut sorted = DigestAlgorithm::BEST_FIRST;
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(sorted, DigestAlgorithm::BEST_FIRST);
    }
}
