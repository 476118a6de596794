//! Attach a child to a person.

use kin_core::{Family, PersonId};
use kin_rules::{checks, Relation, Violation};
use kin_txn::Transaction;

use crate::error::EngineResult;
use crate::ops::fetch_person;

/// Attach `child_id` as a child of `user_id`.
///
/// The inverse view of parent attachment: the user's parent-slot family is
/// resolved (or created) and the child joins its children set, unless the
/// child already belongs to that same family.
pub(crate) fn add_child(
    tx: &mut Transaction<'_>,
    user_id: PersonId,
    child_id: PersonId,
) -> EngineResult<Family> {
    checks::distinct_identities(user_id, child_id, Relation::Child)?;

    let user = fetch_person(tx, user_id)?;
    let child = fetch_person(tx, child_id)?;
    checks::parent_older_than_child(&user, &child)?;

    // The user's blood relatives cannot become their children.
    if let Some(family) = tx.child_family(user_id) {
        checks::not_child_in(&family, child_id, Violation::SiblingAsChild)?;
        checks::not_parent_in(&family, child_id, Violation::ParentAsChild)?;
    }

    let mut family = tx.get_or_create_parent_family(user_id, user.gender);
    // Neither parent slot of the user's family may hold the candidate.
    checks::not_parent_in(&family, child_id, Violation::PartnersAsParentChild)?;
    let view = tx.populate(&family);
    checks::parents_older_than(&view, &child)?;

    match tx.child_family(child_id) {
        Some(existing) => {
            checks::same_family(&existing, &family)?;
            Ok(existing)
        }
        None => {
            family.add_child(child_id);
            tx.save_family(family.clone());
            Ok(family)
        }
    }
}
