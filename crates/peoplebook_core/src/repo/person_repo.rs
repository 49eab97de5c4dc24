//! Person repository contract and JSON-document implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the people document.
//! - Keep load-mutate-save mechanics inside the persistence boundary.
//!
//! # Invariants
//! - Each operation independently loads the full document; mutations
//!   rewrite it in full before returning.
//! - Updates replace the record in place, preserving collection order.
//! - Deleting an unknown ID is a no-op that still persists the document.

use crate::model::person::{PeopleDoc, Person, PersonId};
use crate::store::{JsonPeopleStore, StoreError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for person persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    NotFound(PersonId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "person not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Repository interface for person CRUD operations.
pub trait PersonRepository {
    fn list_people(&self) -> RepoResult<Vec<Person>>;
    fn get_person(&self, id: PersonId) -> RepoResult<Option<Person>>;
    fn create_person(&self, person: Person) -> RepoResult<PersonId>;
    fn update_person(&self, person: &Person) -> RepoResult<()>;
    fn delete_person(&self, id: PersonId) -> RepoResult<()>;
}

/// People repository backed by the JSON document store.
pub struct JsonPersonRepository<'store> {
    store: &'store JsonPeopleStore,
}

impl<'store> JsonPersonRepository<'store> {
    pub fn new(store: &'store JsonPeopleStore) -> Self {
        Self { store }
    }

    fn load(&self) -> RepoResult<PeopleDoc> {
        Ok(self.store.load()?)
    }
}

impl PersonRepository for JsonPersonRepository<'_> {
    fn list_people(&self) -> RepoResult<Vec<Person>> {
        Ok(self.load()?.people)
    }

    fn get_person(&self, id: PersonId) -> RepoResult<Option<Person>> {
        Ok(self.load()?.find(id).cloned())
    }

    fn create_person(&self, person: Person) -> RepoResult<PersonId> {
        let mut doc = self.load()?;
        let id = person.id;
        doc.people.push(person);
        self.store.save(&doc)?;

        info!("event=person_create module=repo status=ok id={id}");
        Ok(id)
    }

    fn update_person(&self, person: &Person) -> RepoResult<()> {
        let mut doc = self.load()?;
        let Some(existing) = doc.find_mut(person.id) else {
            return Err(RepoError::NotFound(person.id));
        };
        *existing = person.clone();
        self.store.save(&doc)?;

        info!("event=person_update module=repo status=ok id={}", person.id);
        Ok(())
    }

    fn delete_person(&self, id: PersonId) -> RepoResult<()> {
        let mut doc = self.load()?;
        let before = doc.people.len();
        doc.people.retain(|person| person.id != id);
        // Unknown IDs are treated as already satisfied; the document is
        // persisted either way.
        self.store.save(&doc)?;

        info!(
            "event=person_delete module=repo status=ok id={id} removed={}",
            before - doc.people.len()
        );
        Ok(())
    }
}
