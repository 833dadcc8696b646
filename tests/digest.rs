use zeroinstall_model::digest::{DigestAlgorithm, DigestError, ManifestDigest};

#[test]
fn digests_without_shared_algorithm_are_not_partially_equal() {
    let sha1 = ManifestDigest::default().with(DigestAlgorithm::Sha1, "a");
    let sha256 = ManifestDigest::default().with(DigestAlgorithm::Sha256, "b");

    assert!(!sha1.partial_equals(&sha256));
}

#[test]
fn digests_sharing_a_hash_are_partially_equal() {
    let left = ManifestDigest::default().with(DigestAlgorithm::Sha256, "x");
    let right = ManifestDigest::default()
        .with(DigestAlgorithm::Sha256, "x")
        .with(DigestAlgorithm::Sha1New, "y");

    assert!(left.partial_equals(&right));
    assert!(!left.partial_equals(&ManifestDigest::default().with(DigestAlgorithm::Sha256, "y")));
}

#[test]
fn canonical_and_best_first_orders_differ() {
    let digest: ManifestDigest = "sha256new_ABC123,sha1=def".parse().unwrap();

    assert_eq!(digest.to_string(), "sha1=def,sha256new_ABC123");
    assert_eq!(
        digest.available_digests(),
        vec!["sha256new_ABC123".to_string(), "sha1=def".to_string()]
    );
    assert_eq!(digest.best().as_deref(), Some("sha256new_ABC123"));
}

#[test]
fn accumulating_implementation_ids_keeps_first_hash() {
    let mut digest = ManifestDigest::default();
    for id in ["sha1new=first", "not-a-digest", "sha1new=second", "sha256=abc"] {
        digest.try_parse(id);
    }

    assert_eq!(digest.get(DigestAlgorithm::Sha1New), Some("first"));
    assert_eq!(digest.best().as_deref(), Some("sha256=abc"));
}

#[test]
fn unsupported_digest_is_reported() {
    assert_eq!(
        "md5=abc".parse::<ManifestDigest>(),
        Err(DigestError::NotSupported("md5=abc".to_string()))
    );
}

#[test]
fn with_does_not_overwrite_or_store_empty_hashes() {
    let digest = ManifestDigest::default()
        .with(DigestAlgorithm::Sha1, "")
        .with(DigestAlgorithm::Sha256, "one")
        .with(DigestAlgorithm::Sha256, "two");

    assert!(digest.get(DigestAlgorithm::Sha1).is_none());
    assert_eq!(digest.get(DigestAlgorithm::Sha256), Some("one"));
    assert!(!digest.is_empty());
}
