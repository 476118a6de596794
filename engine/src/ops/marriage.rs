//! Marriage date updates.

use chrono::NaiveDate;
use kin_core::{Family, FamilyId};
use kin_rules::{checks, Violation};
use kin_txn::Transaction;

use crate::error::{EngineResult, NotFound};

/// Set or clear the marriage date of a family.
///
/// Both parent slots must be filled. A concrete date must fall strictly
/// after both parents' births; `None` clears the date unconditionally.
pub(crate) fn update_marriage_date(
    tx: &mut Transaction<'_>,
    family_id: FamilyId,
    date: Option<NaiveDate>,
) -> EngineResult<Family> {
    let mut family = tx
        .family(family_id)
        .ok_or_else(|| NotFound::family(family_id))?;

    let view = tx.populate(&family);
    let (father, mother) = match (view.father(), view.mother()) {
        (Some(father), Some(mother)) => (father, mother),
        _ => return Err(Violation::MissingParents.into()),
    };
    if let Some(date) = date {
        checks::marriage_after_both_births(date, father, mother)?;
    }

    family.marriage = date;
    tx.save_family(family.clone());
    Ok(family)
}
