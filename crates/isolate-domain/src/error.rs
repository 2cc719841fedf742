//! Errors raised while parsing domain values.

/// Errors from parsing domain values supplied as text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Unknown access level: {0}")]
    InvalidAccessLevel(String),

    #[error("Malformed accession number '{value}': {reason}")]
    MalformedAccession { value: String, reason: String },
}
