//! Person submission form and derivation rules.
//!
//! # Responsibility
//! - Mirror the raw add/edit body: scalar strings plus repeated
//!   `child_name`/`child_age` pairs.
//! - Derive stored shapes from raw input: comma-split tag lists and
//!   positionally paired children.
//!
//! # Invariants
//! - Tag derivation preserves duplicates and submission order.
//! - Child pairing truncates to the shorter of the two input lists and
//!   drops pairs with a blank name.

use crate::model::person::Child;

/// Raw person submission as received from the caller.
///
/// All fields are unvalidated text; derivation and coercion happen in the
/// service layer. The default value doubles as the blank creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonForm {
    pub name: String,
    /// Raw age text; create and edit coerce this differently.
    pub age: String,
    /// Only honored on create; edits recompute `dob` from `age`.
    pub dob: String,
    pub location: String,
    pub school: String,
    /// Comma-separated likes input.
    pub likes: String,
    /// Comma-separated notes input.
    pub notes: String,
    /// Positional child names, paired with `child_ages` by index.
    pub child_names: Vec<String>,
    pub child_ages: Vec<String>,
}

/// Splits comma-separated input into trimmed, non-empty tokens.
///
/// Duplicates and ordering are preserved as given.
pub fn split_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pairs child names with ages positionally.
///
/// Length mismatch truncates to the shorter list. Pairs with a blank name
/// are dropped; an unparsable age is coerced to 0.
pub fn pair_children(names: &[String], ages: &[String]) -> Vec<Child> {
    names
        .iter()
        .zip(ages.iter())
        .filter_map(|(name, age)| {
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some(Child {
                name: name.to_string(),
                age: age.trim().parse().unwrap_or(0),
            })
        })
        .collect()
}
