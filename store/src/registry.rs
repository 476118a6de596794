//! The combined storage facade.

use kin_core::{Family, FamilyId, Gender, Person, PersonId};

use crate::{FamilyStore, PersonStore, PopulatedFamily};

/// The member registry: person records plus family records.
///
/// One `Registry` is the unit of isolation. Callers hold it exclusively
/// for the duration of each relationship edit; no record is cached across
/// edits.
#[derive(Debug, Default)]
pub struct Registry {
    persons: PersonStore,
    families: FamilyStore,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Persons ====================

    pub fn insert_person(&mut self, person: Person) -> PersonId {
        self.persons.insert(person)
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.persons.get(id)
    }

    pub fn remove_person(&mut self, id: PersonId) -> Option<Person> {
        self.persons.remove(id)
    }

    pub fn person_count(&self) -> usize {
        self.persons.len()
    }

    // ==================== Families ====================

    pub fn family(&self, id: FamilyId) -> Option<&Family> {
        self.families.get(id)
    }

    pub fn parent_family(&self, person: PersonId, gender: Gender) -> Option<&Family> {
        self.families.parent_family(person, gender)
    }

    pub fn child_family(&self, person: PersonId) -> Option<&Family> {
        self.families.child_family(person)
    }

    pub fn insert_family(&mut self, family: Family) -> FamilyId {
        self.families.insert(family)
    }

    pub fn save_family(&mut self, family: Family) {
        self.families.save(family)
    }

    pub fn remove_family(&mut self, id: FamilyId) -> Option<Family> {
        self.families.remove(id)
    }

    pub fn family_count(&self) -> usize {
        self.families.len()
    }

    // ==================== Views ====================

    /// Expand a family's person references into full records.
    ///
    /// References resolve against the person store; a reference whose
    /// record is gone resolves to an empty slot, the same way an absent
    /// member does.
    pub fn populate(&self, family: &Family) -> PopulatedFamily {
        let father = family
            .father_id
            .and_then(|id| self.persons.get(id))
            .cloned();
        let mother = family
            .mother_id
            .and_then(|id| self.persons.get(id))
            .cloned();
        let children = family
            .children
            .iter()
            .filter_map(|id| self.persons.get(*id))
            .cloned()
            .collect();
        PopulatedFamily::new(family.clone(), father, mother, children)
    }
}
