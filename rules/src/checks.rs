//! Validation predicates.
//!
//! Each function is a single self-contained check over already-fetched
//! records. Age comparisons are strict: equal birth dates never satisfy a
//! parent/child ordering.

use chrono::NaiveDate;
use kin_core::{Family, Gender, Person, PersonId};
use kin_store::PopulatedFamily;

use crate::{Relation, Violation};

/// Result type for rule checks.
pub type RuleResult = Result<(), Violation>;

/// A person cannot be linked to themselves in any relationship.
pub fn distinct_identities(a: PersonId, b: PersonId, relation: Relation) -> RuleResult {
    if a == b {
        return Err(Violation::SelfRelation(relation));
    }
    Ok(())
}

/// The gender a caller declared for a parent slot must match the record.
pub fn gender_matches(declared: Gender, actual: Gender) -> RuleResult {
    if declared != actual {
        return Err(Violation::GenderMismatch {
            expected: declared,
            actual,
        });
    }
    Ok(())
}

/// Partner candidates must have different genders.
pub fn genders_differ(a: &Person, b: &Person) -> RuleResult {
    if a.gender == b.gender {
        return Err(Violation::SameGender);
    }
    Ok(())
}

/// A parent must be born strictly before their child.
pub fn parent_older_than_child(parent: &Person, child: &Person) -> RuleResult {
    if parent.birthday >= child.birthday {
        return Err(Violation::ParentNotOlder);
    }
    Ok(())
}

/// A parent candidate must be born strictly before every existing child.
pub fn older_than_children(parent: &Person, children: &[Person]) -> RuleResult {
    for child in children {
        parent_older_than_child(parent, child)?;
    }
    Ok(())
}

/// Every filled parent slot must be born strictly before the candidate
/// child.
pub fn parents_older_than(family: &PopulatedFamily, child: &Person) -> RuleResult {
    for parent in [family.father(), family.mother()].into_iter().flatten() {
        parent_older_than_child(parent, child)?;
    }
    Ok(())
}

/// A marriage date must fall strictly after both parents' births.
pub fn marriage_after_both_births(
    date: NaiveDate,
    father: &Person,
    mother: &Person,
) -> RuleResult {
    if father.birthday >= date || mother.birthday >= date {
        return Err(Violation::MarriageBeforeBirth);
    }
    Ok(())
}

/// Reject `candidate` filling a parent slot of `family`, raising
/// `violation`. Kinship-conflict guard for cycle and incest checks.
pub fn not_parent_in(family: &Family, candidate: PersonId, violation: Violation) -> RuleResult {
    if family.has_parent(candidate) {
        return Err(violation);
    }
    Ok(())
}

/// Reject `candidate` appearing among the children of `family`, raising
/// `violation`.
pub fn not_child_in(family: &Family, candidate: PersonId, violation: Violation) -> RuleResult {
    if family.has_child(candidate) {
        return Err(violation);
    }
    Ok(())
}

/// Two independently resolved lookups must agree on one family record;
/// disagreement must fail instead of silently merging two families.
pub fn same_family(a: &Family, b: &Family) -> RuleResult {
    if a.id != b.id {
        return Err(Violation::CrossFamily);
    }
    Ok(())
}
