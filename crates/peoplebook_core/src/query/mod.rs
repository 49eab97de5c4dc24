//! In-memory querying over the loaded people collection.
//!
//! # Responsibility
//! - Narrow the collection with likes/name filters.
//! - Slice filtered results into fixed-size pages.
//!
//! # Invariants
//! - Filtering never reorders records.
//! - Pagination is 1-indexed and never errors on out-of-range pages.

pub mod filter;
pub mod page;
