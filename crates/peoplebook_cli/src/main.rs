//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `peoplebook_core` linkage.
//! - Print the first listing page of a people data file.

use peoplebook_core::{IndexQuery, JsonPeopleStore, JsonPersonRepository, PersonService};

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "people_data.json".to_string());

    let store = JsonPeopleStore::new(&path);
    let repo = JsonPersonRepository::new(&store);
    let service = PersonService::new(repo);

    match service.index(&IndexQuery::default()) {
        Ok(page) => {
            println!(
                "peoplebook v{} {} page {}/{} ({})",
                peoplebook_core::core_version(),
                path,
                page.page,
                page.total_pages,
                page.today
            );
            for person in &page.people {
                println!(
                    "{} {} likes=[{}]",
                    person.id,
                    person.name,
                    person.likes.join(", ")
                );
            }
        }
        Err(err) => {
            eprintln!("failed to read {path}: {err}");
            std::process::exit(1);
        }
    }
}
