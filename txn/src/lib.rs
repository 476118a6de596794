//! Kin Transaction
//!
//! Unit-of-work support for relationship edits. A [`Transaction`] borrows
//! the registry exclusively, applies writes directly, and records enough
//! state to undo them. [`execute`] runs a closure as one atomic operation:
//! all writes commit together on success and are all rolled back on any
//! error, so no partial edit is ever observable.

mod buffer;
mod transaction;

pub use buffer::UndoBuffer;
pub use transaction::{execute, Transaction};
