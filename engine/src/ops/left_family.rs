//! Generic removal of a person from a family, by family id.

use kin_core::{Family, FamilyId, PersonId};
use kin_rules::Violation;
use kin_txn::Transaction;

use crate::error::{EngineResult, NotFound};
use crate::ops::fetch_person;
use crate::ops::remove::finish_removal;

/// Remove `user_id` from `family_id`, whichever position they occupy.
///
/// A parent leaving also clears the marriage date; a person occupying no
/// position in the family is a rule violation, not a not-found.
pub(crate) fn left_family(
    tx: &mut Transaction<'_>,
    user_id: PersonId,
    family_id: FamilyId,
) -> EngineResult<Option<Family>> {
    let user = fetch_person(tx, user_id)?;
    let mut family = tx
        .family(family_id)
        .ok_or_else(|| NotFound::family(family_id))?;

    if family.parent_slot(user.gender) == Some(user_id) {
        family.set_parent_slot(user.gender, None);
        family.marriage = None;
    } else if !family.remove_child(user_id) {
        return Err(Violation::NotInFamily.into());
    }

    finish_removal(tx, family)
}
