//! Kin Store
//!
//! In-memory storage for the member registry:
//! - `PersonStore` - person records by id
//! - `FamilyStore` - family records with parent-slot and child-membership
//!   indexes
//! - `PopulatedFamily` - a family with person references expanded for
//!   validation
//! - `Registry` - the combined storage facade that callers serialize on

mod families;
mod index;
mod persons;
mod populated;
mod registry;

pub use families::FamilyStore;
pub use index::{ChildIndex, ParentIndex};
pub use persons::PersonStore;
pub use populated::PopulatedFamily;
pub use registry::Registry;
