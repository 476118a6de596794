//! Family record storage.

use std::collections::HashMap;

use kin_core::{Family, FamilyId, Gender, PersonId, MIN_FAMILY_MEMBERS};

use crate::index::{ChildIndex, ParentIndex};

/// In-memory family storage with its lookup indexes.
///
/// Every write keeps the parent-slot and child-membership indexes in step
/// with the stored records, so the two graph queries stay O(1).
#[derive(Debug, Default)]
pub struct FamilyStore {
    families: HashMap<FamilyId, Family>,
    parents: ParentIndex,
    children: ChildIndex,
}

impl FamilyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch one family by id.
    pub fn get(&self, id: FamilyId) -> Option<&Family> {
        self.families.get(&id)
    }

    /// The family where `person` fills the parent slot matching `gender`.
    pub fn parent_family(&self, person: PersonId, gender: Gender) -> Option<&Family> {
        self.parents
            .get(gender, person)
            .and_then(|id| self.families.get(&id))
    }

    /// The family whose children set lists `person`.
    pub fn child_family(&self, person: PersonId) -> Option<&Family> {
        self.children
            .get(person)
            .and_then(|id| self.families.get(&id))
    }

    /// Insert a freshly created family record, returning its id.
    pub fn insert(&mut self, family: Family) -> FamilyId {
        let id = family.id;
        self.index(&family);
        self.families.insert(id, family);
        id
    }

    /// Replace a stored family with an updated record, reindexing it.
    /// Inserts the record if nothing was stored under its id.
    pub fn save(&mut self, family: Family) {
        if let Some(old) = self.families.remove(&family.id) {
            self.unindex(&old);
        }
        self.index(&family);
        self.families.insert(family.id, family);
    }

    /// Remove a family record, returning it if it existed.
    pub fn remove(&mut self, id: FamilyId) -> Option<Family> {
        let family = self.families.remove(&id)?;
        self.unindex(&family);
        Some(family)
    }

    /// Whether a family's membership has dropped below the minimum and the
    /// record must be deleted instead of saved.
    pub fn must_delete(family: &Family) -> bool {
        family.member_count() < MIN_FAMILY_MEMBERS
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    fn index(&mut self, family: &Family) {
        if let Some(father) = family.father_id {
            self.parents.insert(Gender::Man, father, family.id);
        }
        if let Some(mother) = family.mother_id {
            self.parents.insert(Gender::Woman, mother, family.id);
        }
        for child in &family.children {
            self.children.insert(*child, family.id);
        }
    }

    fn unindex(&mut self, family: &Family) {
        if let Some(father) = family.father_id {
            self.parents.remove(Gender::Man, father, family.id);
        }
        if let Some(mother) = family.mother_id {
            self.parents.remove(Gender::Woman, mother, family.id);
        }
        for child in &family.children {
            self.children.remove(*child, family.id);
        }
    }
}
