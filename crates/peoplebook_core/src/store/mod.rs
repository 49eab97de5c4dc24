//! Document storage boundary for the people collection.
//!
//! # Responsibility
//! - Own reading and writing the single on-disk JSON document.
//! - Keep file-format details out of repository/service layers.
//!
//! # Invariants
//! - The document is always read and written in full; there are no
//!   partial reads, indexes, or caches.
//! - A missing data file is the empty collection, not an error.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod json_store;

pub use json_store::JsonPeopleStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error for the people document.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    /// Persisted data exists but cannot be parsed. Fatal by design: the
    /// store never guesses at corrupted state.
    Malformed(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Malformed(err) => write!(f, "malformed people document: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Malformed(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value)
    }
}
