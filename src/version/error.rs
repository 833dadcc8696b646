use thiserror::Error;

/// Malformed version, dotted list or range syntax
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Version string must not be empty")]
    Empty,

    #[error("'{0}' is not a dotted list of non-negative integers")]
    DottedList(String),

    #[error("Version '{0}' must start with a dotted list")]
    MissingDottedList(String),

    #[error("Template version '{0}' contains no {{...}} placeholder")]
    MissingTemplateVariable(String),

    #[error("Upper bound in range '{0}' must be exclusive and start with '!'")]
    MissingExclusiveMarker(String),
}

/// Two range parts whose intersection has no representation as a list of parts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot intersect {left} with {right}")]
pub struct UnsupportedIntersection {
    pub left: String,
    pub right: String,
}
