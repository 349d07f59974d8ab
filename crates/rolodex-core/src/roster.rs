//! Roster loading and validation.
//!
//! A roster is the fixed, ordered candidate list the picker filters over.
//! It is loaded once at startup (built-in or from a JSON file), validated,
//! and never mutated afterwards.

use std::collections::HashSet;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::person::{Person, Sex};

/// An ordered, validated list of people.
#[derive(Debug, Clone)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    /// Build a roster from raw entries, rejecting empty and duplicate names.
    pub fn new(people: Vec<Person>) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::new();
        for (index, person) in people.iter().enumerate() {
            if person.name.is_empty() {
                return Err(Error::InvalidRoster(format!(
                    "person at index {index} has an empty name"
                )));
            }
            if !seen.insert(person.name.as_str()) {
                return Err(Error::InvalidRoster(format!(
                    "duplicate name {:?}",
                    person.name
                )));
            }
        }
        Ok(Self { people })
    }

    /// The compiled-in default dataset, used when no roster file is given.
    pub fn builtin() -> Self {
        Self {
            people: vec![
                Person::new("Adam Fletcher", Sex::Male),
                Person::new("Anna Delacroix", Sex::Female),
                Person::new("Andrew Sokolov", Sex::Male),
                Person::new("Beatrice Lang", Sex::Female),
                Person::new("Carl Jansen", Sex::Male),
                Person::new("Diana Moreau", Sex::Female),
                Person::new("Elena Petrova", Sex::Female),
                Person::new("Frank Olsen", Sex::Male),
                Person::new("Hanna Lindqvist", Sex::Female),
                Person::new("Ivan Castellanos", Sex::Male),
                Person::new("Johanna Beck", Sex::Female),
                Person::new("Leon Takahashi", Sex::Male),
                Person::new("Marianne Dupont", Sex::Female),
                Person::new("Nora Svendsen", Sex::Female),
                Person::new("Oliver Grant", Sex::Male),
                Person::new("Sandro Villanueva", Sex::Male),
            ],
        }
    }

    /// Load a roster from a JSON file containing an array of people.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let people: Vec<Person> = serde_json::from_str(&raw)?;
        debug!(count = people.len(), path = %path.display(), "Loaded roster file");
        Self::new(people)
    }

    /// The candidate list, in load order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_roster_validates() {
        let builtin = Roster::builtin();
        assert!(!builtin.is_empty());
        // Re-running validation over the built-in entries must succeed.
        let revalidated = Roster::new(builtin.people().to_vec());
        assert!(revalidated.is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        let people = vec![
            Person::new("Anna", Sex::Female),
            Person::new("", Sex::Male),
        ];
        let err = Roster::new(people).unwrap_err();
        assert!(matches!(err, Error::InvalidRoster(_)));
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn rejects_duplicate_name() {
        let people = vec![
            Person::new("Anna", Sex::Female),
            Person::new("Andrew", Sex::Male),
            Person::new("Anna", Sex::Female),
        ];
        let err = Roster::new(people).unwrap_err();
        assert!(err.to_string().contains("duplicate name"));
        assert!(err.to_string().contains("Anna"));
    }

    #[test]
    fn empty_roster_is_valid() {
        let roster = Roster::new(Vec::new()).unwrap();
        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);
    }

    #[test]
    fn loads_roster_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name":"Anna","sex":"f"}},{{"name":"Andrew","sex":"m"}}]"#
        )
        .unwrap();

        let roster = Roster::from_json_file(file.path()).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.people()[0].name, "Anna");
        assert_eq!(roster.people()[1].sex, Sex::Male);
    }

    #[test]
    fn missing_roster_file_is_io_error() {
        let err = Roster::from_json_file(Path::new("/nonexistent/roster.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn invalid_json_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = Roster::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
