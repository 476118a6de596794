//! Engine outcome taxonomy.
//!
//! Three kinds of failure leave an operation:
//! - `NotFound` - a referenced record does not exist (a malformed
//!   identifier is reported the same way, before any lookup)
//! - `Logic` - a domain rule was violated; never retried automatically
//! - `Conflict` - the registry lock was contended past the deadline; the
//!   whole operation may be retried from scratch

use std::fmt;

use kin_core::IdError;
use kin_rules::Violation;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// A referenced record does not exist, or its identifier is malformed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("the {entity} was not found for key={key}")]
pub struct NotFound {
    entity: &'static str,
    key: String,
}

impl NotFound {
    pub fn person(key: impl fmt::Display) -> Self {
        Self {
            entity: "person",
            key: key.to_string(),
        }
    }

    pub fn family(key: impl fmt::Display) -> Self {
        Self {
            entity: "family",
            key: key.to_string(),
        }
    }

    /// Which kind of record was missing.
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// The key the lookup was made with.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl From<IdError> for NotFound {
    fn from(err: IdError) -> Self {
        Self {
            entity: err.kind,
            key: err.text,
        }
    }
}

/// Errors surfaced by relationship-edit operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A referenced person or family does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFound),

    /// A domain rule was violated; carries the human-readable reason.
    #[error(transparent)]
    Logic(#[from] Violation),

    /// The registry could not be locked within the deadline.
    #[error("the registry is busy; the operation may be retried")]
    Conflict,
}

impl EngineError {
    /// Whether retrying the unchanged operation may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, EngineError::Conflict)
    }
}
