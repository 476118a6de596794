//! Populated family views.

use kin_core::{Family, Gender, Person};
use serde::Serialize;

/// A family with its person references expanded into full records.
///
/// Produced for validation and presentation. The view cannot be persisted:
/// writes only accept the bare `Family` record, obtained back through
/// [`PopulatedFamily::depopulate`], so a denormalized snapshot never
/// reaches the store.
#[derive(Debug, Clone, Serialize)]
pub struct PopulatedFamily {
    record: Family,
    father: Option<Person>,
    mother: Option<Person>,
    children: Vec<Person>,
}

impl PopulatedFamily {
    pub(crate) fn new(
        record: Family,
        father: Option<Person>,
        mother: Option<Person>,
        children: Vec<Person>,
    ) -> Self {
        Self {
            record,
            father,
            mother,
            children,
        }
    }

    /// The bare record underlying this view.
    pub fn record(&self) -> &Family {
        &self.record
    }

    /// The expanded occupant of the father slot.
    pub fn father(&self) -> Option<&Person> {
        self.father.as_ref()
    }

    /// The expanded occupant of the mother slot.
    pub fn mother(&self) -> Option<&Person> {
        self.mother.as_ref()
    }

    /// The expanded occupant of the parent slot matching `gender`.
    pub fn parent(&self, gender: Gender) -> Option<&Person> {
        match gender {
            Gender::Man => self.father(),
            Gender::Woman => self.mother(),
        }
    }

    /// The expanded children records.
    pub fn children(&self) -> &[Person] {
        &self.children
    }

    /// Collapse the view back to the bare record for persistence.
    pub fn depopulate(self) -> Family {
        self.record
    }
}
