//! The transaction handle and the unit-of-work coordinator.

use kin_core::{Family, FamilyId, Gender, Person, PersonId};
use kin_store::{PopulatedFamily, Registry};

use crate::buffer::UndoBuffer;

/// A unit of work over the registry.
///
/// The transaction borrows the registry exclusively, so concurrent
/// operations serialize at the borrow. Writes apply directly (later reads
/// in the same transaction observe them) and are tracked in an undo
/// buffer; dropping the transaction without committing rolls everything
/// back.
#[derive(Debug)]
pub struct Transaction<'r> {
    registry: &'r mut Registry,
    buffer: UndoBuffer,
    committed: bool,
}

impl<'r> Transaction<'r> {
    /// Begin a transaction over the registry.
    pub fn begin(registry: &'r mut Registry) -> Self {
        Self {
            registry,
            buffer: UndoBuffer::new(),
            committed: false,
        }
    }

    // ==================== Reads ====================

    /// Fetch a person record.
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.registry.person(id)
    }

    /// Fetch a family by id, cloned for read-modify-write.
    pub fn family(&self, id: FamilyId) -> Option<Family> {
        self.registry.family(id).cloned()
    }

    /// The family where `person` fills the parent slot matching `gender`.
    pub fn parent_family(&self, person: PersonId, gender: Gender) -> Option<Family> {
        self.registry.parent_family(person, gender).cloned()
    }

    /// The family whose children set lists `person`.
    pub fn child_family(&self, person: PersonId) -> Option<Family> {
        self.registry.child_family(person).cloned()
    }

    /// Expand a family's references into full person records.
    pub fn populate(&self, family: &Family) -> PopulatedFamily {
        self.registry.populate(family)
    }

    // ==================== Writes ====================

    /// The existing parent-family of `person`, or a fresh family with the
    /// matching parent slot filled.
    pub fn get_or_create_parent_family(&mut self, person: PersonId, gender: Gender) -> Family {
        if let Some(found) = self.registry.parent_family(person, gender) {
            return found.clone();
        }
        let mut family = Family::new();
        family.set_parent_slot(gender, Some(person));
        self.create_family(family)
    }

    /// The existing child-family of `person`, or a fresh family whose
    /// children set lists only `person`.
    pub fn get_or_create_child_family(&mut self, person: PersonId) -> Family {
        if let Some(found) = self.registry.child_family(person) {
            return found.clone();
        }
        let mut family = Family::new();
        family.add_child(person);
        self.create_family(family)
    }

    fn create_family(&mut self, family: Family) -> Family {
        self.buffer.track_created_family(family.id);
        self.registry.insert_family(family.clone());
        family
    }

    /// Persist an updated family record.
    pub fn save_family(&mut self, family: Family) {
        if let Some(before) = self.registry.family(family.id) {
            self.buffer.track_updated_family(before);
        }
        self.registry.save_family(family);
    }

    /// Remove a family record. Returns whether it existed.
    pub fn delete_family(&mut self, id: FamilyId) -> bool {
        match self.registry.remove_family(id) {
            Some(stored) => {
                self.buffer.track_deleted_family(stored);
                true
            }
            None => false,
        }
    }

    /// Remove a person record.
    pub fn remove_person(&mut self, id: PersonId) -> Option<Person> {
        let person = self.registry.remove_person(id)?;
        self.buffer.track_deleted_person(person.clone());
        Some(person)
    }

    // ==================== Lifecycle ====================

    /// Keep all applied writes and discard the undo state.
    pub fn commit(mut self) {
        self.buffer.clear();
        self.committed = true;
    }

    /// Undo every write applied by this transaction.
    pub fn rollback(mut self) {
        self.undo();
        self.committed = true;
    }

    fn undo(&mut self) {
        // Created families go first so their index entries cannot shadow
        // the records being restored.
        let created: Vec<FamilyId> = self.buffer.created_families().collect();
        for id in created {
            self.registry.remove_family(id);
        }
        let updated: Vec<Family> = self.buffer.updated_families().cloned().collect();
        for family in updated {
            self.registry.save_family(family);
        }
        let deleted: Vec<Family> = self.buffer.deleted_families().cloned().collect();
        for family in deleted {
            self.registry.save_family(family);
        }
        let persons: Vec<Person> = self.buffer.deleted_persons().cloned().collect();
        for person in persons {
            self.registry.insert_person(person);
        }
        self.buffer.clear();
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.undo();
        }
    }
}

/// Run `op` as a single atomic unit of work over the registry.
///
/// All reads and writes inside `op` observe one consistent state; the
/// writes commit together on `Ok` and are all rolled back on `Err`.
pub fn execute<'r, T, E, F>(registry: &'r mut Registry, op: F) -> Result<T, E>
where
    F: FnOnce(&mut Transaction<'r>) -> Result<T, E>,
{
    let mut tx = Transaction::begin(registry);
    match op(&mut tx) {
        Ok(value) => {
            tx.commit();
            Ok(value)
        }
        Err(err) => {
            tx.rollback();
            Err(err)
        }
    }
}
