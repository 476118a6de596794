//! Relationship-edit decision procedures.
//!
//! Every procedure runs inside one transaction; a rule violation or a
//! fatal not-found aborts it before any write becomes visible. Absence of
//! a family is a branch outcome, not an error, wherever the procedure has
//! a fallback for it.

mod add_child;
mod add_parent;
mod add_partner;
mod add_sibling;
mod delete_person;
mod left_family;
mod marriage;
mod remove;

pub(crate) use add_child::add_child;
pub(crate) use add_parent::add_parent;
pub(crate) use add_partner::add_partner;
pub(crate) use add_sibling::add_sibling;
pub(crate) use delete_person::delete_person;
pub(crate) use left_family::left_family;
pub(crate) use marriage::update_marriage_date;
pub(crate) use remove::{remove_child, remove_parent, remove_partner, remove_sibling};

use kin_core::{Person, PersonId};
use kin_txn::Transaction;

use crate::error::{EngineResult, NotFound};

/// Fetch a person record or fail the procedure.
fn fetch_person(tx: &Transaction<'_>, id: PersonId) -> EngineResult<Person> {
    tx.person(id)
        .cloned()
        .ok_or_else(|| NotFound::person(id).into())
}
