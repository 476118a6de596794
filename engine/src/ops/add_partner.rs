//! Attach a partner to a person.

use kin_core::{Family, Gender, PersonId};
use kin_rules::{checks, Relation, Violation};
use kin_txn::Transaction;

use crate::error::EngineResult;
use crate::ops::fetch_person;

/// Attach `partner_id` as the partner of `user_id`.
///
/// Partners share a family through its two parent slots. The man's
/// parent-slot family is resolved first; the woman either already heads
/// the same family, fills its empty mother slot, or receives the man into
/// the father slot of her (possibly fresh) family.
pub(crate) fn add_partner(
    tx: &mut Transaction<'_>,
    user_id: PersonId,
    partner_id: PersonId,
) -> EngineResult<Family> {
    checks::distinct_identities(user_id, partner_id, Relation::Partner)?;

    let user = fetch_person(tx, user_id)?;
    let partner = fetch_person(tx, partner_id)?;
    checks::genders_differ(&user, &partner)?;

    let (father, mother) = match user.gender {
        Gender::Man => (&user, &partner),
        Gender::Woman => (&partner, &user),
    };

    // Directly related persons cannot be partners.
    if let Some(family) = tx.child_family(user_id) {
        checks::not_child_in(&family, partner_id, Violation::PartnersAsSiblings)?;
        checks::not_parent_in(&family, partner_id, Violation::ParentAsPartner)?;
    }

    match tx.parent_family(father.id, Gender::Man) {
        Some(family) => {
            checks::not_child_in(&family, mother.id, Violation::ChildAsPartner)?;
            let view = tx.populate(&family);
            checks::older_than_children(mother, view.children())?;

            match tx.parent_family(mother.id, Gender::Woman) {
                Some(existing) => {
                    checks::same_family(&existing, &family)?;
                    Ok(existing)
                }
                None => {
                    let mut family = family;
                    if family.mother_id.is_some() {
                        return Err(Violation::SlotOccupied(Gender::Woman).into());
                    }
                    family.mother_id = Some(mother.id);
                    tx.save_family(family.clone());
                    Ok(family)
                }
            }
        }
        None => {
            let mut family = tx.get_or_create_parent_family(mother.id, Gender::Woman);
            checks::not_child_in(&family, father.id, Violation::ChildAsPartner)?;
            let view = tx.populate(&family);
            checks::older_than_children(father, view.children())?;

            if family.father_id.is_some() {
                return Err(Violation::SlotOccupied(Gender::Man).into());
            }
            family.father_id = Some(father.id);
            tx.save_family(family.clone());
            Ok(family)
        }
    }
}
