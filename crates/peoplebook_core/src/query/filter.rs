//! Likes/name filtering and the likes facet.
//!
//! # Responsibility
//! - Apply optional case-insensitive filters over person records.
//! - Derive the distinct sorted likes present in a result set.
//!
//! # Invariants
//! - Both filters compose with AND semantics.
//! - Empty query strings mean "no filter", not "match empty string".
//! - The facet reflects the filtered result, not the whole collection.

use crate::model::person::Person;
use std::collections::BTreeSet;

/// Applies the likes and name filters, keeping original record order.
///
/// The likes filter keeps records whose `likes` contain a case-insensitive
/// match for the query; the name filter is a case-insensitive substring
/// match. `None` or an empty string disables a filter.
pub fn apply_filters(mut people: Vec<Person>, like: Option<&str>, name: Option<&str>) -> Vec<Person> {
    if let Some(like) = normalized(like) {
        people.retain(|person| {
            person
                .likes
                .iter()
                .any(|token| token.to_lowercase() == like)
        });
    }

    if let Some(name) = normalized(name) {
        people.retain(|person| person.name.to_lowercase().contains(&name));
    }

    people
}

/// Distinct sorted likes values present in `people`.
///
/// Used as the facet list offered back to the caller for filter UI.
pub fn likes_facet(people: &[Person]) -> Vec<String> {
    let distinct: BTreeSet<&String> = people.iter().flat_map(|person| &person.likes).collect();
    distinct.into_iter().cloned().collect()
}

fn normalized(query: Option<&str>) -> Option<String> {
    match query {
        Some(query) if !query.is_empty() => Some(query.to_lowercase()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_filters, likes_facet};
    use crate::model::person::Person;

    fn person(name: &str, likes: &[&str]) -> Person {
        let mut person = Person::new(name);
        person.likes = likes.iter().map(|like| like.to_string()).collect();
        person
    }

    #[test]
    fn like_filter_matches_case_insensitively() {
        let people = vec![person("Ann", &["Chess"]), person("Ben", &["hiking"])];
        let filtered = apply_filters(people, Some("chess"), None);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Ann");
    }

    #[test]
    fn name_filter_is_substring_match() {
        let people = vec![person("Annabel", &[]), person("Ben", &[])];
        let filtered = apply_filters(people, None, Some("nab"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Annabel");
    }

    #[test]
    fn filters_compose_with_and_semantics() {
        let people = vec![
            person("Ann", &["chess"]),
            person("Anna", &["hiking"]),
            person("Ben", &["chess"]),
        ];
        let filtered = apply_filters(people, Some("chess"), Some("an"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Ann");
    }

    #[test]
    fn empty_query_strings_disable_filters() {
        let people = vec![person("Ann", &["chess"]), person("Ben", &[])];
        let filtered = apply_filters(people.clone(), Some(""), Some(""));
        assert_eq!(filtered, people);
    }

    #[test]
    fn filtering_is_idempotent() {
        let people = vec![person("Ann", &["chess"]), person("Ben", &["hiking"])];
        let once = apply_filters(people, Some("chess"), None);
        let twice = apply_filters(once.clone(), Some("chess"), None);
        assert_eq!(once, twice);
    }

    #[test]
    fn facet_is_distinct_and_sorted() {
        let people = vec![
            person("Ann", &["chess", "art"]),
            person("Ben", &["chess", "biking"]),
        ];
        assert_eq!(likes_facet(&people), vec!["art", "biking", "chess"]);
    }
}
