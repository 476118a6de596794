//! Shared fixtures for the kin integration tests.

use chrono::NaiveDate;
use kin_core::{Gender, Person};
use kin_engine::FamilyEngine;
use kin_store::Registry;

/// A calendar date. Test-only helper, panics on nonsense input.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// An engine over an empty registry.
pub fn engine() -> FamilyEngine {
    FamilyEngine::new(Registry::new())
}

/// Seed a man born on January 1st of `year`.
pub fn man(engine: &FamilyEngine, name: &str, year: i32) -> Person {
    seed(engine, name, Gender::Man, date(year, 1, 1))
}

/// Seed a woman born on January 1st of `year`.
pub fn woman(engine: &FamilyEngine, name: &str, year: i32) -> Person {
    seed(engine, name, Gender::Woman, date(year, 1, 1))
}

/// Seed a person record through the engine facade.
pub fn seed(engine: &FamilyEngine, name: &str, gender: Gender, birthday: NaiveDate) -> Person {
    engine
        .create_person(name, gender, birthday)
        .expect("seed person")
}

/// A person's id in its textual (transport) form.
pub fn pid(person: &Person) -> String {
    person.id.to_string()
}
