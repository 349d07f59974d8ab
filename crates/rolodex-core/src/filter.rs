//! Case-insensitive substring filtering of people by name.

use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::person::Person;

/// A single filtered candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch {
    pub person: Person,
    /// Character positions in the name that matched the query, for UI
    /// highlighting. Empty for the empty query.
    pub positions: Vec<usize>,
}

/// Filter `people` down to those whose name contains `query`,
/// case-insensitively.
///
/// Dataset order is preserved; results are never ranked or truncated. The
/// empty query matches every candidate. An empty result is a normal value,
/// the caller's cue for the "no matching suggestions" notice.
pub fn filter_people(query: &str, people: &[Person]) -> Vec<NameMatch> {
    if query.is_empty() {
        return people
            .iter()
            .map(|person| NameMatch {
                person: person.clone(),
                positions: Vec::new(),
            })
            .collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let atom = Atom::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Substring,
        false,
    );

    let mut buf = Vec::new();
    people
        .iter()
        .filter_map(|person| {
            let mut indices = Vec::new();
            let haystack = Utf32Str::new(&person.name, &mut buf);
            atom.indices(haystack, &mut matcher, &mut indices)?;
            Some(NameMatch {
                person: person.clone(),
                positions: indices.into_iter().map(|i| i as usize).collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::Sex;

    fn people() -> Vec<Person> {
        vec![
            Person::new("Anna", Sex::Female),
            Person::new("Andrew", Sex::Male),
            Person::new("Bella", Sex::Female),
        ]
    }

    fn names(matches: &[NameMatch]) -> Vec<&str> {
        matches.iter().map(|m| m.person.name.as_str()).collect()
    }

    #[test]
    fn substring_match_preserves_dataset_order() {
        let matches = filter_people("an", &people());
        assert_eq!(names(&matches), vec!["Anna", "Andrew"]);
    }

    #[test]
    fn match_is_case_insensitive() {
        let matches = filter_people("AN", &people());
        assert_eq!(names(&matches), vec!["Anna", "Andrew"]);
        let matches = filter_people("bELL", &people());
        assert_eq!(names(&matches), vec!["Bella"]);
    }

    #[test]
    fn matches_inner_substring() {
        let matches = filter_people("drew", &people());
        assert_eq!(names(&matches), vec!["Andrew"]);
    }

    #[test]
    fn empty_query_matches_everyone() {
        let matches = filter_people("", &people());
        assert_eq!(names(&matches), vec!["Anna", "Andrew", "Bella"]);
        assert!(matches.iter().all(|m| m.positions.is_empty()));
    }

    #[test]
    fn no_match_returns_empty() {
        assert!(filter_people("anz", &people()).is_empty());
    }

    #[test]
    fn empty_dataset_never_matches() {
        assert!(filter_people("", &[]).is_empty());
        assert!(filter_people("an", &[]).is_empty());
    }

    #[test]
    fn positions_cover_the_matched_substring() {
        let matches = filter_people("an", &people());
        // "an" occurs in "Anna" only at the start.
        assert_eq!(matches[0].positions, vec![0, 1]);
        let drew = filter_people("drew", &people());
        assert_eq!(drew[0].positions, vec![2, 3, 4, 5]);
    }

    #[test]
    fn non_contiguous_letters_do_not_match() {
        // Substring semantics, not fuzzy: "aa" is not a substring of "Anna".
        assert!(filter_people("aa", &people()).is_empty());
    }
}
