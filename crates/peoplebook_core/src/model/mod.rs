//! Domain model for the people collection.
//!
//! # Responsibility
//! - Define the canonical person record and its document wrapper.
//! - Define the raw submission shape and its derivation rules.
//!
//! # Invariants
//! - Every person is identified by a stable `PersonId`.
//! - `likes`/`notes` hold non-empty trimmed tokens, order preserved.

pub mod form;
pub mod person;
