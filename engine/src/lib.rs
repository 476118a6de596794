//! Kin Engine
//!
//! The relationship mutation engine: creates, links, splits, and deletes
//! family records while enforcing the registry's integrity rules.
//!
//! Each public operation is a short decision procedure - a fixed sequence
//! of lookups whose found/not-found outcomes select the next branch, with
//! rule checks applied in a pinned order and every write committed as one
//! atomic unit of work. A failed check aborts the whole operation with no
//! partial edge persisted.
//!
//! # Module Structure
//!
//! - `engine` - the `FamilyEngine` facade owning the shared registry
//! - `ops/` - one decision procedure per relationship edit
//! - `error` - the engine outcome taxonomy

mod engine;
mod error;
mod ops;

pub use engine::FamilyEngine;
pub use error::{EngineError, EngineResult, NotFound};
