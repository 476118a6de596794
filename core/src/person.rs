//! Person records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::GenderParseError;
use crate::PersonId;

/// Gender of a person. Immutable after creation; it decides which parent
/// slot the person can fill in a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Man,
    Woman,
}

impl Gender {
    /// The parent slot a person of this gender fills.
    pub fn role_name(self) -> &'static str {
        match self {
            Gender::Man => "father",
            Gender::Woman => "mother",
        }
    }

    /// The opposite gender.
    pub fn opposite(self) -> Self {
        match self {
            Gender::Man => Gender::Woman,
            Gender::Woman => Gender::Man,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Man => write!(f, "man"),
            Gender::Woman => write!(f, "woman"),
        }
    }
}

impl FromStr for Gender {
    type Err = GenderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "man" => Ok(Gender::Man),
            "woman" => Ok(Gender::Woman),
            _ => Err(GenderParseError(s.to_string())),
        }
    }
}

/// A member record.
///
/// The relationship engine only reads `gender` and `birthday`; profile
/// details stay with the person store and its callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub gender: Gender,
    pub birthday: NaiveDate,
}

impl Person {
    /// Create a new person record with a fresh identifier.
    pub fn new(name: impl Into<String>, gender: Gender, birthday: NaiveDate) -> Self {
        Self {
            id: PersonId::generate(),
            name: name.into(),
            gender,
            birthday,
        }
    }
}
