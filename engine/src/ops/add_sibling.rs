//! Attach a sibling to a person.

use kin_core::{Family, PersonId};
use kin_rules::{checks, Relation, Violation};
use kin_txn::Transaction;

use crate::error::EngineResult;
use crate::ops::fetch_person;

/// Attach `sibling_id` as a brother or sister of `user_id`.
///
/// Siblings share a child-family. Whichever of the two already has one
/// receives the other as a child; two existing but different child
/// families are a conflict.
pub(crate) fn add_sibling(
    tx: &mut Transaction<'_>,
    user_id: PersonId,
    sibling_id: PersonId,
) -> EngineResult<Family> {
    checks::distinct_identities(user_id, sibling_id, Relation::Sibling)?;

    let user = fetch_person(tx, user_id)?;
    let sibling = fetch_person(tx, sibling_id)?;

    // The family the user heads: neither their partner nor their own
    // child can become their sibling.
    if let Some(own) = tx.parent_family(user_id, user.gender) {
        checks::not_parent_in(&own, sibling_id, Violation::PartnersAsSiblings)?;
        checks::not_child_in(&own, sibling_id, Violation::ParentAsSibling)?;
    }

    match tx.child_family(user_id) {
        Some(family) => {
            // The user's parent cannot double as their sibling.
            checks::not_parent_in(&family, sibling_id, Violation::ParentAsSibling)?;
            let view = tx.populate(&family);
            checks::parents_older_than(&view, &sibling)?;

            match tx.child_family(sibling_id) {
                Some(existing) => {
                    checks::same_family(&existing, &family)?;
                    Ok(existing)
                }
                None => {
                    let mut family = family;
                    family.add_child(sibling_id);
                    tx.save_family(family.clone());
                    Ok(family)
                }
            }
        }
        None => {
            let mut family = tx.get_or_create_child_family(sibling_id);
            checks::not_parent_in(&family, user_id, Violation::ParentAsSibling)?;
            let view = tx.populate(&family);
            checks::parents_older_than(&view, &user)?;

            family.add_child(user_id);
            tx.save_family(family.clone());
            Ok(family)
        }
    }
}
