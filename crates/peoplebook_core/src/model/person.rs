//! Person domain model.
//!
//! # Responsibility
//! - Define the canonical person record persisted in the people document.
//! - Keep the serialized field order stable for the on-disk format.
//!
//! # Invariants
//! - `id` is generated once at creation and never reused.
//! - `age` is `None` when the submitted value was absent or unparsable on
//!   edit; it is never a sentinel number.
//! - `children` are embedded values, not references to other records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a person record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PersonId = Uuid;

/// Embedded child entry paired from positional form input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    /// Non-blank trimmed name; blank-name pairs are dropped before storage.
    pub name: String,
    /// Parsed age, coerced to 0 when the submitted value is unparsable.
    pub age: i64,
}

/// Canonical person record.
///
/// Field order here is the serialized field order of the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Stable unique ID, the sole lookup key.
    pub id: PersonId,
    /// Display name; may be empty.
    pub name: String,
    /// Age in years. Absent when the edited value did not parse.
    pub age: Option<i64>,
    /// Date-of-birth text derived from `age`; empty when underivable.
    pub dob: String,
    pub location: String,
    pub school: String,
    /// Ordered tag tokens; duplicates and order preserved as submitted.
    pub likes: Vec<String>,
    /// Same shape and derivation as `likes`.
    pub notes: Vec<String>,
    pub children: Vec<Child>,
}

impl Person {
    /// Creates an empty person record with a freshly generated stable ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            age: None,
            dob: String::new(),
            location: String::new(),
            school: String::new(),
            likes: Vec::new(),
            notes: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// Whole-collection document: one top-level `people` array.
///
/// The entire document is loaded at the start of every operation and
/// rewritten in full at the end of every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeopleDoc {
    pub people: Vec<Person>,
}

impl PeopleDoc {
    /// Finds a person by ID, or `None` when absent.
    pub fn find(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|person| person.id == id)
    }

    /// Mutable lookup used by in-place updates.
    pub fn find_mut(&mut self, id: PersonId) -> Option<&mut Person> {
        self.people.iter_mut().find(|person| person.id == id)
    }
}
