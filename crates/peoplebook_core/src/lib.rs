//! Core domain logic for peoplebook.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging};
pub use model::form::{pair_children, split_tags, PersonForm};
pub use model::person::{Child, PeopleDoc, Person, PersonId};
pub use query::filter::{apply_filters, likes_facet};
pub use query::page::{paginate, parse_page};
pub use repo::person_repo::{JsonPersonRepository, PersonRepository, RepoError, RepoResult};
pub use service::person_service::{derive_dob, today_string, IndexPage, IndexQuery, PersonService};
pub use store::{JsonPeopleStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
