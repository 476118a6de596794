//! Kin Core Types
//!
//! This crate provides the foundational types used throughout the kin
//! registry:
//! - Identity types (PersonId, FamilyId)
//! - Person records (gender, birth date)
//! - Family aggregates (parent slots, children set, marriage date)
//! - Common error types

mod error;
mod family;
mod id;
mod person;

pub use error::*;
pub use family::*;
pub use id::*;
pub use person::*;
