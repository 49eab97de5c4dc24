//! JSON file persistence for the people document.
//!
//! # Responsibility
//! - Load the full collection from one JSON file.
//! - Rewrite the full collection back, human-readable.
//!
//! # Invariants
//! - Writes are pretty-printed with 4-space indentation and stable field
//!   order per record.
//! - Writes overwrite the file in place: no atomic rename, no partial-write
//!   protection, last writer wins on the whole document.

use super::StoreResult;
use crate::model::person::PeopleDoc;
use log::{error, info};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Explicit storage handle for the people document.
///
/// Opened once per process and handed to every operation; there is no
/// ambient global data file.
#[derive(Debug, Clone)]
pub struct JsonPeopleStore {
    path: PathBuf,
}

impl JsonPeopleStore {
    /// Creates a store handle for the given data file path.
    ///
    /// The file is not touched until the first `load` or `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing data file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full document from the data file.
    ///
    /// A missing file yields the empty collection. Malformed persisted
    /// data propagates as a fatal error.
    pub fn load(&self) -> StoreResult<PeopleDoc> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "event=store_load module=store status=ok path={} count=0 missing=true",
                    self.path.display()
                );
                return Ok(PeopleDoc::default());
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error path={} error={}",
                    self.path.display(),
                    err
                );
                return Err(err.into());
            }
        };

        match serde_json::from_str::<PeopleDoc>(&raw) {
            Ok(doc) => {
                info!(
                    "event=store_load module=store status=ok path={} count={}",
                    self.path.display(),
                    doc.people.len()
                );
                Ok(doc)
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error path={} error={}",
                    self.path.display(),
                    err
                );
                Err(err.into())
            }
        }
    }

    /// Serializes the full document back to the data file, overwriting it.
    pub fn save(&self, doc: &PeopleDoc) -> StoreResult<()> {
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(
            &mut buf,
            PrettyFormatter::with_indent(b"    "),
        );
        doc.serialize(&mut serializer)?;

        match std::fs::write(&self.path, &buf) {
            Ok(()) => {
                info!(
                    "event=store_save module=store status=ok path={} count={}",
                    self.path.display(),
                    doc.people.len()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=store status=error path={} error={}",
                    self.path.display(),
                    err
                );
                Err(err.into())
            }
        }
    }
}
