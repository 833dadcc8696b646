use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigestError {
    #[error("Manifest digest must not be empty")]
    Empty,

    #[error("No supported digest algorithm found in '{0}'")]
    NotSupported(String),
}
