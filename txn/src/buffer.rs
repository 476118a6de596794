//! Undo buffer for tracking pending changes.

use std::collections::{HashMap, HashSet};

use kin_core::{Family, FamilyId, Person, PersonId};

/// Tracks the changes of one transaction so they can be undone.
///
/// Each family id lives in at most one bucket: a family created and then
/// deleted inside the same transaction collapses to no tracking at all,
/// and a family updated and then deleted keeps its pre-update snapshot.
#[derive(Debug, Default)]
pub struct UndoBuffer {
    created_families: HashSet<FamilyId>,
    updated_families: HashMap<FamilyId, Family>,
    deleted_families: HashMap<FamilyId, Family>,
    deleted_persons: HashMap<PersonId, Person>,
}

impl UndoBuffer {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a family created in this transaction.
    pub fn track_created_family(&mut self, id: FamilyId) {
        self.created_families.insert(id);
    }

    /// Record the stored state of a family about to be overwritten.
    /// Only the first snapshot per family is kept.
    pub fn track_updated_family(&mut self, before: &Family) {
        if self.created_families.contains(&before.id)
            || self.updated_families.contains_key(&before.id)
        {
            return;
        }
        self.updated_families.insert(before.id, before.clone());
    }

    /// Record a family removed in this transaction, with its stored state.
    pub fn track_deleted_family(&mut self, stored: Family) {
        // A family created in this transaction leaves no trace.
        if self.created_families.remove(&stored.id) {
            return;
        }
        // Keep the pre-update snapshot if the family was updated first.
        let snapshot = self.updated_families.remove(&stored.id).unwrap_or(stored);
        self.deleted_families.insert(snapshot.id, snapshot);
    }

    /// Record a person removed in this transaction.
    pub fn track_deleted_person(&mut self, person: Person) {
        self.deleted_persons.entry(person.id).or_insert(person);
    }

    /// Families created in this transaction.
    pub fn created_families(&self) -> impl Iterator<Item = FamilyId> + '_ {
        self.created_families.iter().copied()
    }

    /// Pre-update snapshots of families overwritten in this transaction.
    pub fn updated_families(&self) -> impl Iterator<Item = &Family> {
        self.updated_families.values()
    }

    /// Stored state of families removed in this transaction.
    pub fn deleted_families(&self) -> impl Iterator<Item = &Family> {
        self.deleted_families.values()
    }

    /// Person records removed in this transaction.
    pub fn deleted_persons(&self) -> impl Iterator<Item = &Person> {
        self.deleted_persons.values()
    }

    /// Check if the buffer tracks nothing.
    pub fn is_empty(&self) -> bool {
        self.created_families.is_empty()
            && self.updated_families.is_empty()
            && self.deleted_families.is_empty()
            && self.deleted_persons.is_empty()
    }

    /// Discard all tracked state (after a commit).
    pub fn clear(&mut self) {
        self.created_families.clear();
        self.updated_families.clear();
        self.deleted_families.clear();
        self.deleted_persons.clear();
    }
}
