//! Repository layer over the people document store.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate load-mutate-save mechanics from service orchestration.
//!
//! # Invariants
//! - Every mutation rewrites the whole persisted document.
//! - Repository APIs return semantic errors (`NotFound`) in addition to
//!   storage transport errors.

pub mod person_repo;
