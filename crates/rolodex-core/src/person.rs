//! The person record and the empty-selection sentinel.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sex of a person, encoded as `"m"`/`"f"` in roster files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// A single roster entry. Immutable once loaded; names are non-empty and
/// unique within a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub sex: Sex,
}

impl Person {
    pub fn new(name: &str, sex: Sex) -> Self {
        Self {
            name: name.to_string(),
            sex,
        }
    }

    /// The canonical "nothing selected" value. The sex of the sentinel is
    /// never read; an empty name cannot occur in a validated roster.
    pub fn none() -> Self {
        Self {
            name: String::new(),
            sex: Sex::Male,
        }
    }

    /// Whether this value is the empty sentinel.
    pub fn is_none(&self) -> bool {
        self.name.is_empty()
    }
}
