//! Person record storage.

use std::collections::HashMap;

use kin_core::{Person, PersonId};

/// In-memory person storage.
///
/// The relationship engine only reads records from here; creating and
/// removing them is driven by the registry's callers (removal also happens
/// through the cascading person deletion).
#[derive(Debug, Default)]
pub struct PersonStore {
    persons: HashMap<PersonId, Person>,
}

impl PersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a person record, returning its id.
    pub fn insert(&mut self, person: Person) -> PersonId {
        let id = person.id;
        self.persons.insert(id, person);
        id
    }

    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.persons.get(&id)
    }

    pub fn remove(&mut self, id: PersonId) -> Option<Person> {
        self.persons.remove(&id)
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.persons.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}
