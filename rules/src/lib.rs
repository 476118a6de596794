//! Kin Rules
//!
//! Pure validation predicates for relationship edits. Every predicate
//! receives already-fetched records, performs no I/O, and reports a
//! [`Violation`] carrying the human-readable reason on failure. Sequencing
//! the predicates, and exiting early on the first failure, is the mutation
//! engine's job.

pub mod checks;

mod violation;

pub use violation::{Relation, Violation};
