//! Person use-case service.
//!
//! # Responsibility
//! - Expose the listing/add/edit/delete surface over the repository.
//! - Derive stored fields from raw form input, including date-of-birth.
//!
//! # Invariants
//! - Create coerces a missing or unparsable age to 0; update stores no age
//!   unless the submitted string is all digits. The divergence is observed
//!   behavior and is kept intact.
//! - Update recomputes `dob` from the submitted age, overwriting any prior
//!   value; create copies the submitted `dob` verbatim.
//! - Malformed numeric input is silently defaulted, never surfaced.

use crate::model::form::{pair_children, split_tags, PersonForm};
use crate::model::person::{Person, PersonId};
use crate::query::filter::{apply_filters, likes_facet};
use crate::query::page::{paginate, parse_page};
use crate::repo::person_repo::{PersonRepository, RepoError, RepoResult};
use chrono::{Datelike, Local, NaiveDate};
use uuid::Uuid;

const PAGE_SIZE: usize = 10;
const DEFAULT_VIEW_MODE: &str = "cards";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw listing query parameters as received from the caller.
#[derive(Debug, Clone, Default)]
pub struct IndexQuery {
    /// Case-insensitive likes filter; empty means no filter.
    pub like: Option<String>,
    /// Case-insensitive name substring filter; empty means no filter.
    pub name: Option<String>,
    /// Display-mode hint, passed through opaquely.
    pub view: Option<String>,
    /// Raw page parameter; coerced to 1 when unusable.
    pub page: Option<String>,
}

/// Filtered, paginated listing result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexPage {
    /// Records on the requested page, collection order preserved.
    pub people: Vec<Person>,
    /// Distinct sorted likes of the filtered result, for filter UI.
    pub likes_filter: Vec<String>,
    /// Today's date, `%Y-%m-%d`.
    pub today: String,
    pub view_mode: String,
    pub page: usize,
    pub total_pages: usize,
}

/// Use-case service over a person repository.
pub struct PersonService<R: PersonRepository> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads, filters, and paginates the collection for listing.
    pub fn index(&self, query: &IndexQuery) -> RepoResult<IndexPage> {
        let people = self.repo.list_people()?;
        let filtered = apply_filters(people, query.like.as_deref(), query.name.as_deref());
        let likes_filter = likes_facet(&filtered);

        let page = parse_page(query.page.as_deref());
        let (slice, total_pages) = paginate(&filtered, page, PAGE_SIZE);

        Ok(IndexPage {
            people: slice.to_vec(),
            likes_filter,
            today: today_string(),
            view_mode: query
                .view
                .clone()
                .unwrap_or_else(|| DEFAULT_VIEW_MODE.to_string()),
            page,
            total_pages,
        })
    }

    /// Returns the blank creation form.
    pub fn blank_form(&self) -> PersonForm {
        PersonForm::default()
    }

    /// Creates a person from raw form input and persists the collection.
    ///
    /// The submitted `dob` is stored verbatim; age parses to an integer or
    /// defaults to 0.
    pub fn create(&self, form: &PersonForm) -> RepoResult<PersonId> {
        let person = Person {
            id: Uuid::new_v4(),
            name: form.name.clone(),
            age: Some(form.age.trim().parse().unwrap_or(0)),
            dob: form.dob.clone(),
            location: form.location.clone(),
            school: form.school.clone(),
            likes: split_tags(&form.likes),
            notes: split_tags(&form.notes),
            children: pair_children(&form.child_names, &form.child_ages),
        };
        self.repo.create_person(person)
    }

    /// Returns the record backing the edit form, or `NotFound`.
    pub fn edit_form(&self, id: PersonId) -> RepoResult<Person> {
        self.repo
            .get_person(id)?
            .ok_or(RepoError::NotFound(id))
    }

    /// Overwrites a person from raw form input and persists the collection.
    ///
    /// Age is stored only when the submitted string is all digits; `dob` is
    /// recomputed from the submitted age either way.
    pub fn update(&self, id: PersonId, form: &PersonForm) -> RepoResult<()> {
        let person = Person {
            id,
            name: form.name.clone(),
            age: digits_age(&form.age),
            dob: derive_dob(&form.age),
            location: form.location.clone(),
            school: form.school.clone(),
            likes: split_tags(&form.likes),
            notes: split_tags(&form.notes),
            children: pair_children(&form.child_names, &form.child_ages),
        };
        self.repo.update_person(&person)
    }

    /// Removes a person if present; unknown IDs are already satisfied.
    pub fn delete(&self, id: PersonId) -> RepoResult<()> {
        self.repo.delete_person(id)
    }
}

/// Today's date as `%Y-%m-%d`, for display alongside listings.
pub fn today_string() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

/// Derives a date of birth from raw age input.
///
/// Subtracts the age from today's year, keeping month and day. Any failure
/// (unparsable age, or an impossible date such as Feb 29 landing in a
/// non-leap year) yields the empty string.
pub fn derive_dob(age_input: &str) -> String {
    derive_dob_on(age_input, Local::now().date_naive())
}

fn derive_dob_on(age_input: &str, today: NaiveDate) -> String {
    let Ok(age) = age_input.trim().parse::<i32>() else {
        return String::new();
    };
    match today.with_year(today.year() - age) {
        Some(dob) => dob.format(DATE_FORMAT).to_string(),
        None => String::new(),
    }
}

// Mirrors the edit-path coercion: digits-only input parses, everything
// else (signs, spaces, blanks) stores no age.
fn digits_age(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::{derive_dob_on, digits_age};
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn derive_dob_keeps_month_and_day() {
        assert_eq!(derive_dob_on("30", date(2026, 8, 30)), "1996-08-30");
    }

    #[test]
    fn derive_dob_of_unparsable_age_is_empty() {
        assert_eq!(derive_dob_on("abc", date(2026, 8, 30)), "");
        assert_eq!(derive_dob_on("", date(2026, 8, 30)), "");
    }

    #[test]
    fn derive_dob_on_leap_day_into_common_year_is_empty() {
        assert_eq!(derive_dob_on("1", date(2024, 2, 29)), "");
    }

    #[test]
    fn derive_dob_on_leap_day_into_leap_year_succeeds() {
        assert_eq!(derive_dob_on("4", date(2024, 2, 29)), "2020-02-29");
    }

    #[test]
    fn digits_age_rejects_signs_spaces_and_blanks() {
        assert_eq!(digits_age("30"), Some(30));
        assert_eq!(digits_age(""), None);
        assert_eq!(digits_age(" 30"), None);
        assert_eq!(digits_age("-3"), None);
        assert_eq!(digits_age("abc"), None);
    }
}
