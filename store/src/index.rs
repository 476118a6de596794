//! Lookup indexes for family records.
//!
//! The person-family graph is only ever reached through two queries: the
//! family where a person fills a parent slot, and the family that lists a
//! person as a child. Both indexes map a person to at most one family.

use std::collections::HashMap;

use kin_core::{FamilyId, Gender, PersonId};

/// Parent index: person -> family where that person fills a parent slot.
#[derive(Debug, Default)]
pub struct ParentIndex {
    fathers: HashMap<PersonId, FamilyId>,
    mothers: HashMap<PersonId, FamilyId>,
}

impl ParentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, gender: Gender) -> &HashMap<PersonId, FamilyId> {
        match gender {
            Gender::Man => &self.fathers,
            Gender::Woman => &self.mothers,
        }
    }

    fn slot_mut(&mut self, gender: Gender) -> &mut HashMap<PersonId, FamilyId> {
        match gender {
            Gender::Man => &mut self.fathers,
            Gender::Woman => &mut self.mothers,
        }
    }

    pub fn insert(&mut self, gender: Gender, person: PersonId, family: FamilyId) {
        self.slot_mut(gender).insert(person, family);
    }

    /// Remove the entry for `person`, but only while it still points at
    /// `family`. A stale removal must never evict a newer entry.
    pub fn remove(&mut self, gender: Gender, person: PersonId, family: FamilyId) {
        let slot = self.slot_mut(gender);
        if slot.get(&person) == Some(&family) {
            slot.remove(&person);
        }
    }

    pub fn get(&self, gender: Gender, person: PersonId) -> Option<FamilyId> {
        self.slot(gender).get(&person).copied()
    }
}

/// Child index: person -> family whose children set lists that person.
#[derive(Debug, Default)]
pub struct ChildIndex {
    index: HashMap<PersonId, FamilyId>,
}

impl ChildIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, person: PersonId, family: FamilyId) {
        self.index.insert(person, family);
    }

    /// Remove the entry for `person`, but only while it still points at
    /// `family`.
    pub fn remove(&mut self, person: PersonId, family: FamilyId) {
        if self.index.get(&person) == Some(&family) {
            self.index.remove(&person);
        }
    }

    pub fn get(&self, person: PersonId) -> Option<FamilyId> {
        self.index.get(&person).copied()
    }
}
