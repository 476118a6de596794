//! Detach operations: remove a named relative from a person's family.
//!
//! Each operation locates the relevant family, asserts the edge actually
//! exists, applies the removal, and re-evaluates the minimum-membership
//! rule on the result: a family left with too few members is deleted and
//! reported as `None`.

use kin_core::{Family, PersonId};
use kin_rules::{checks, Relation, Violation};
use kin_store::FamilyStore;
use kin_txn::Transaction;

use crate::error::{EngineResult, NotFound};
use crate::ops::fetch_person;

/// Detach `parent_id` from the parent slot of the family where `user_id`
/// is a child. Clears the marriage date alongside the slot.
pub(crate) fn remove_parent(
    tx: &mut Transaction<'_>,
    user_id: PersonId,
    parent_id: PersonId,
) -> EngineResult<Option<Family>> {
    checks::distinct_identities(user_id, parent_id, Relation::Parent)?;
    fetch_person(tx, user_id)?;
    let parent = fetch_person(tx, parent_id)?;

    let mut family = tx
        .child_family(user_id)
        .ok_or_else(|| NotFound::family(user_id))?;
    if family.parent_slot(parent.gender) != Some(parent_id) {
        return Err(Violation::NoSuchTie.into());
    }

    family.set_parent_slot(parent.gender, None);
    family.marriage = None;
    finish_removal(tx, family)
}

/// Detach `sibling_id` from the children of the family shared with
/// `user_id`.
pub(crate) fn remove_sibling(
    tx: &mut Transaction<'_>,
    user_id: PersonId,
    sibling_id: PersonId,
) -> EngineResult<Option<Family>> {
    checks::distinct_identities(user_id, sibling_id, Relation::Sibling)?;
    fetch_person(tx, user_id)?;
    fetch_person(tx, sibling_id)?;

    let mut family = tx
        .child_family(user_id)
        .ok_or_else(|| NotFound::family(user_id))?;
    if !family.remove_child(sibling_id) {
        return Err(Violation::NoSuchTie.into());
    }

    finish_removal(tx, family)
}

/// Detach `partner_id` from the family where `user_id` fills a parent
/// slot. Clears the marriage date alongside the slot.
pub(crate) fn remove_partner(
    tx: &mut Transaction<'_>,
    user_id: PersonId,
    partner_id: PersonId,
) -> EngineResult<Option<Family>> {
    checks::distinct_identities(user_id, partner_id, Relation::Partner)?;
    let user = fetch_person(tx, user_id)?;
    let partner = fetch_person(tx, partner_id)?;

    let mut family = tx
        .parent_family(user_id, user.gender)
        .ok_or_else(|| NotFound::family(user_id))?;
    if family.parent_slot(partner.gender) != Some(partner_id) {
        return Err(Violation::NoSuchTie.into());
    }

    family.set_parent_slot(partner.gender, None);
    family.marriage = None;
    finish_removal(tx, family)
}

/// Detach `child_id` from the children of the family headed by `user_id`.
pub(crate) fn remove_child(
    tx: &mut Transaction<'_>,
    user_id: PersonId,
    child_id: PersonId,
) -> EngineResult<Option<Family>> {
    checks::distinct_identities(user_id, child_id, Relation::Child)?;
    let user = fetch_person(tx, user_id)?;
    fetch_person(tx, child_id)?;

    let mut family = tx
        .parent_family(user_id, user.gender)
        .ok_or_else(|| NotFound::family(user_id))?;
    if !family.remove_child(child_id) {
        return Err(Violation::NoSuchTie.into());
    }

    finish_removal(tx, family)
}

/// Persist a shrunken family, or delete it when its membership fell below
/// the minimum. `None` reports the deletion to the caller.
pub(super) fn finish_removal(
    tx: &mut Transaction<'_>,
    family: Family,
) -> EngineResult<Option<Family>> {
    if FamilyStore::must_delete(&family) {
        tx.delete_family(family.id);
        Ok(None)
    } else {
        tx.save_family(family.clone());
        Ok(Some(family))
    }
}
