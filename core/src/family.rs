//! Family aggregate records.
//!
//! A family groups at most two parent slots and a set of children. Each
//! person fills a parent slot in at most one family and appears among the
//! children of at most one family, and those two are always distinct
//! records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{FamilyId, Gender, PersonId};

/// Minimum total membership below which a family record is deleted
/// instead of saved.
pub const MIN_FAMILY_MEMBERS: usize = 3;

/// A family aggregate record.
///
/// Parent and child fields hold bare person references; the store's
/// populated view expands them into full records for validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    pub id: FamilyId,
    pub father_id: Option<PersonId>,
    pub mother_id: Option<PersonId>,
    /// Meaningful only while both parent slots are filled.
    pub marriage: Option<NaiveDate>,
    pub children: Vec<PersonId>,
}

impl Family {
    /// Create an empty family with a fresh identifier.
    pub fn new() -> Self {
        Self {
            id: FamilyId::generate(),
            father_id: None,
            mother_id: None,
            marriage: None,
            children: Vec::new(),
        }
    }

    /// The occupant of the parent slot matching `gender`, if any.
    pub fn parent_slot(&self, gender: Gender) -> Option<PersonId> {
        match gender {
            Gender::Man => self.father_id,
            Gender::Woman => self.mother_id,
        }
    }

    /// Fill or clear the parent slot matching `gender`.
    pub fn set_parent_slot(&mut self, gender: Gender, person: Option<PersonId>) {
        match gender {
            Gender::Man => self.father_id = person,
            Gender::Woman => self.mother_id = person,
        }
    }

    /// Whether `person` fills either parent slot.
    pub fn has_parent(&self, person: PersonId) -> bool {
        self.father_id == Some(person) || self.mother_id == Some(person)
    }

    /// Whether `person` is listed among the children.
    pub fn has_child(&self, person: PersonId) -> bool {
        self.children.contains(&person)
    }

    /// Append a child reference. Duplicates are ignored.
    pub fn add_child(&mut self, person: PersonId) {
        if !self.has_child(person) {
            self.children.push(person);
        }
    }

    /// Remove a child reference. Returns whether it was present.
    pub fn remove_child(&mut self, person: PersonId) -> bool {
        let before = self.children.len();
        self.children.retain(|c| *c != person);
        self.children.len() != before
    }

    /// Total membership: filled parent slots plus children.
    pub fn member_count(&self) -> usize {
        self.children.len()
            + usize::from(self.father_id.is_some())
            + usize::from(self.mother_id.is_some())
    }

    /// Iterate over every person referenced by this record.
    pub fn members(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.father_id
            .into_iter()
            .chain(self.mother_id)
            .chain(self.children.iter().copied())
    }
}

impl Default for Family {
    fn default() -> Self {
        Self::new()
    }
}
