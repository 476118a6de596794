//! Attach a parent to a person.

use kin_core::{Family, Gender, PersonId};
use kin_rules::{checks, Relation, Violation};
use kin_txn::Transaction;

use crate::error::EngineResult;
use crate::ops::fetch_person;

/// Attach `parent_id` as a parent of `user_id`, filling the parent slot
/// declared by `gender`.
///
/// Resolution order: the user's own parent-slot family first (a partner or
/// an own child can never become a parent), then the family where the user
/// is a child. If the user already has one, the candidate either fills its
/// empty slot or must already be its parent; otherwise the user joins the
/// candidate's (possibly fresh) family as a child.
pub(crate) fn add_parent(
    tx: &mut Transaction<'_>,
    user_id: PersonId,
    parent_id: PersonId,
    gender: Gender,
) -> EngineResult<Family> {
    checks::distinct_identities(user_id, parent_id, Relation::Parent)?;

    let user = fetch_person(tx, user_id)?;
    let parent = fetch_person(tx, parent_id)?;
    checks::gender_matches(gender, parent.gender)?;
    checks::parent_older_than_child(&parent, &user)?;

    // The family the user heads: neither their partner nor their own
    // child can become their parent.
    if let Some(own) = tx.parent_family(user_id, user.gender) {
        checks::not_parent_in(&own, parent_id, Violation::PartnersAsParentChild)?;
        checks::not_child_in(&own, parent_id, Violation::ChildAsParent)?;
    }

    match tx.child_family(user_id) {
        Some(family) => {
            // A sibling of the user cannot double as a parent.
            checks::not_child_in(&family, parent_id, Violation::SiblingAsParent)?;
            let view = tx.populate(&family);
            checks::older_than_children(&parent, view.children())?;

            match tx.parent_family(parent_id, parent.gender) {
                Some(existing) => {
                    // The candidate already heads a family; it must be
                    // this very one.
                    checks::same_family(&existing, &family)?;
                    Ok(existing)
                }
                None => {
                    let mut family = family;
                    if family.parent_slot(parent.gender).is_some() {
                        return Err(Violation::SlotOccupied(parent.gender).into());
                    }
                    family.set_parent_slot(parent.gender, Some(parent_id));
                    tx.save_family(family.clone());
                    Ok(family)
                }
            }
        }
        None => {
            // The user has no child-family yet: join the candidate's.
            let mut family = tx.get_or_create_parent_family(parent_id, parent.gender);
            let view = tx.populate(&family);
            checks::parents_older_than(&view, &user)?;

            family.add_child(user_id);
            tx.save_family(family.clone());
            Ok(family)
        }
    }
}
