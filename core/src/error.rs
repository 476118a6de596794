//! Common error types for kin.

use thiserror::Error;

/// A malformed record identifier.
///
/// Reported before any lookup happens; callers surface it the same way as
/// a missing record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("malformed {kind} identifier: {text}")]
pub struct IdError {
    /// Which kind of record the identifier was meant to reference.
    pub kind: &'static str,
    /// The rejected input.
    pub text: String,
}

impl IdError {
    pub fn malformed(kind: &'static str, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// An unrecognized gender token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown gender: {0}")]
pub struct GenderParseError(pub String);
