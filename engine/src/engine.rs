//! The engine facade.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use parking_lot::{Mutex, MutexGuard};

use kin_core::{Family, FamilyId, Gender, Person, PersonId};
use kin_store::Registry;
use kin_txn::Transaction;

use crate::error::{EngineError, EngineResult, NotFound};
use crate::ops;

/// Default deadline for acquiring the registry lock.
const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// The relationship mutation engine.
///
/// Owns the shared registry behind a lock; every operation parses its
/// identifiers, takes the lock, and runs as one atomic unit of work. An
/// operation that loses the lock race past the deadline fails with the
/// retryable [`EngineError::Conflict`] instead of blocking indefinitely.
///
/// Clones share the same registry, so one engine can serve concurrent
/// callers.
#[derive(Clone)]
pub struct FamilyEngine {
    registry: Arc<Mutex<Registry>>,
    lock_timeout: Duration,
}

impl FamilyEngine {
    /// Create an engine over a registry.
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Arc::new(Mutex::new(registry)),
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
        }
    }

    /// Override the lock deadline.
    pub fn with_lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout = timeout;
        self
    }

    // ==================== Relationship edits ====================

    /// Attach a parent, filling the parent slot declared by `gender`.
    pub fn add_parent(
        &self,
        user_id: &str,
        parent_id: &str,
        gender: Gender,
    ) -> EngineResult<Family> {
        let user_id = parse_person(user_id)?;
        let parent_id = parse_person(parent_id)?;
        self.transact(|tx| ops::add_parent(tx, user_id, parent_id, gender))
    }

    /// Attach a brother or sister.
    pub fn add_sibling(&self, user_id: &str, sibling_id: &str) -> EngineResult<Family> {
        let user_id = parse_person(user_id)?;
        let sibling_id = parse_person(sibling_id)?;
        self.transact(|tx| ops::add_sibling(tx, user_id, sibling_id))
    }

    /// Attach a partner.
    pub fn add_partner(&self, user_id: &str, partner_id: &str) -> EngineResult<Family> {
        let user_id = parse_person(user_id)?;
        let partner_id = parse_person(partner_id)?;
        self.transact(|tx| ops::add_partner(tx, user_id, partner_id))
    }

    /// Attach a child.
    pub fn add_child(&self, user_id: &str, child_id: &str) -> EngineResult<Family> {
        let user_id = parse_person(user_id)?;
        let child_id = parse_person(child_id)?;
        self.transact(|tx| ops::add_child(tx, user_id, child_id))
    }

    /// Detach a parent. `None` means the family fell below the minimum
    /// membership and was deleted.
    pub fn remove_parent(&self, user_id: &str, parent_id: &str) -> EngineResult<Option<Family>> {
        let user_id = parse_person(user_id)?;
        let parent_id = parse_person(parent_id)?;
        self.transact(|tx| ops::remove_parent(tx, user_id, parent_id))
    }

    /// Detach a brother or sister.
    pub fn remove_sibling(&self, user_id: &str, sibling_id: &str) -> EngineResult<Option<Family>> {
        let user_id = parse_person(user_id)?;
        let sibling_id = parse_person(sibling_id)?;
        self.transact(|tx| ops::remove_sibling(tx, user_id, sibling_id))
    }

    /// Detach a partner.
    pub fn remove_partner(&self, user_id: &str, partner_id: &str) -> EngineResult<Option<Family>> {
        let user_id = parse_person(user_id)?;
        let partner_id = parse_person(partner_id)?;
        self.transact(|tx| ops::remove_partner(tx, user_id, partner_id))
    }

    /// Detach a child.
    pub fn remove_child(&self, user_id: &str, child_id: &str) -> EngineResult<Option<Family>> {
        let user_id = parse_person(user_id)?;
        let child_id = parse_person(child_id)?;
        self.transact(|tx| ops::remove_child(tx, user_id, child_id))
    }

    /// Remove a person from a family, whichever position they occupy.
    pub fn left_family(&self, user_id: &str, family_id: &str) -> EngineResult<Option<Family>> {
        let user_id = parse_person(user_id)?;
        let family_id = parse_family(family_id)?;
        self.transact(|tx| ops::left_family(tx, user_id, family_id))
    }

    /// Set or clear a family's marriage date.
    pub fn update_marriage_date(
        &self,
        family_id: &str,
        date: Option<NaiveDate>,
    ) -> EngineResult<Family> {
        let family_id = parse_family(family_id)?;
        self.transact(|tx| ops::update_marriage_date(tx, family_id, date))
    }

    /// Delete a person, cascading the family cleanup.
    pub fn delete_person(&self, user_id: &str) -> EngineResult<Person> {
        let user_id = parse_person(user_id)?;
        self.transact(|tx| ops::delete_person(tx, user_id))
    }

    // ==================== Reads & seeding ====================

    /// Create a person record.
    pub fn create_person(
        &self,
        name: &str,
        gender: Gender,
        birthday: NaiveDate,
    ) -> EngineResult<Person> {
        let person = Person::new(name, gender, birthday);
        let mut registry = self.lock()?;
        registry.insert_person(person.clone());
        Ok(person)
    }

    /// Fetch a person record.
    pub fn person(&self, id: &str) -> EngineResult<Person> {
        let id = parse_person(id)?;
        let registry = self.lock()?;
        registry
            .person(id)
            .cloned()
            .ok_or_else(|| NotFound::person(id).into())
    }

    /// Fetch a family record.
    pub fn family(&self, id: &str) -> EngineResult<Family> {
        let id = parse_family(id)?;
        let registry = self.lock()?;
        registry
            .family(id)
            .cloned()
            .ok_or_else(|| NotFound::family(id).into())
    }

    /// The family where the person fills a parent slot.
    pub fn parent_family(&self, id: &str) -> EngineResult<Family> {
        let person_id = parse_person(id)?;
        let registry = self.lock()?;
        let person = registry
            .person(person_id)
            .ok_or_else(|| NotFound::person(person_id))?;
        registry
            .parent_family(person_id, person.gender)
            .cloned()
            .ok_or_else(|| NotFound::family(person_id).into())
    }

    /// The family where the person is listed as a child.
    pub fn child_family(&self, id: &str) -> EngineResult<Family> {
        let person_id = parse_person(id)?;
        let registry = self.lock()?;
        registry
            .child_family(person_id)
            .cloned()
            .ok_or_else(|| NotFound::family(person_id).into())
    }

    // ==================== Internal helpers ====================

    /// Run one operation as an atomic unit of work over the registry.
    fn transact<T>(
        &self,
        op: impl for<'r> FnOnce(&mut Transaction<'r>) -> EngineResult<T>,
    ) -> EngineResult<T> {
        let mut registry = self.lock()?;
        kin_txn::execute(&mut registry, op)
    }

    fn lock(&self) -> EngineResult<MutexGuard<'_, Registry>> {
        self.registry
            .try_lock_for(self.lock_timeout)
            .ok_or(EngineError::Conflict)
    }
}

fn parse_person(text: &str) -> Result<PersonId, NotFound> {
    PersonId::parse(text).map_err(NotFound::from)
}

fn parse_family(text: &str) -> Result<FamilyId, NotFound> {
    FamilyId::parse(text).map_err(NotFound::from)
}
