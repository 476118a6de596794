//! Cascading person deletion.

use kin_core::{Person, PersonId};
use kin_txn::Transaction;

use crate::error::EngineResult;
use crate::ops::fetch_person;
use crate::ops::remove::finish_removal;

/// Delete `user_id` and detach them from both of their families.
///
/// Either family may legitimately not exist; that is a branch, not a
/// failure. A family left under the minimum membership by the detachment
/// is deleted along the way, inside the same transaction as the person
/// removal.
pub(crate) fn delete_person(tx: &mut Transaction<'_>, user_id: PersonId) -> EngineResult<Person> {
    let person = fetch_person(tx, user_id)?;

    if let Some(mut family) = tx.parent_family(user_id, person.gender) {
        family.set_parent_slot(person.gender, None);
        family.marriage = None;
        finish_removal(tx, family)?;
    }

    if let Some(mut family) = tx.child_family(user_id) {
        family.remove_child(user_id);
        finish_removal(tx, family)?;
    }

    tx.remove_person(user_id);
    Ok(person)
}
