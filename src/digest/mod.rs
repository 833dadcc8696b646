//! Manifest digests identifying the content of an implementation
//!
//! # Modules
//!
//! - [`algorithm`]: Supported digest algorithms and their ID prefixes
//! - [`manifest_digest`]: Digest records with partial equality
//! - [`error`]: Digest parse errors

pub mod algorithm;
pub mod error;
pub mod manifest_digest;

pub use algorithm::DigestAlgorithm;
pub use error::DigestError;
pub use manifest_digest::ManifestDigest;
