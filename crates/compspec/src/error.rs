//! Error types for compspec
//!
//! Exactly one failure mode exists: a construction tag outside the closed
//! variant set. An unmatched tag is always surfaced as an error, never as an
//! absent value.

/// Factory error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactoryError {
    /// Tag does not name a recognized variant
    #[error("unrecognized variant tag {tag:?} (recognized: PC, Server)")]
    UnrecognizedVariant {
        /// The rejected tag, unmodified
        tag: String,
    },
}

impl FactoryError {
    /// The tag that failed to match
    #[inline]
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::UnrecognizedVariant { tag } => tag,
        }
    }
}
