use peoplebook_core::{Child, JsonPeopleStore, PeopleDoc, Person, StoreError};
use tempfile::tempdir;

fn sample_doc() -> PeopleDoc {
    let mut ann = Person::new("Ann");
    ann.age = Some(34);
    ann.dob = "1992-01-15".to_string();
    ann.location = "Leeds".to_string();
    ann.school = "Weetwood".to_string();
    ann.likes = vec!["reading".to_string(), "chess".to_string()];
    ann.notes = vec!["met at work".to_string()];
    ann.children = vec![Child {
        name: "Cleo".to_string(),
        age: 4,
    }];

    let mut ben = Person::new("Ben");
    ben.age = None;

    PeopleDoc {
        people: vec![ann, ben],
    }
}

#[test]
fn save_then_load_roundtrips_the_collection() {
    let dir = tempdir().unwrap();
    let store = JsonPeopleStore::new(dir.path().join("people_data.json"));

    let doc = sample_doc();
    store.save(&doc).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded, doc);
}

#[test]
fn missing_file_loads_as_empty_collection() {
    let dir = tempdir().unwrap();
    let store = JsonPeopleStore::new(dir.path().join("absent.json"));

    let loaded = store.load().unwrap();
    assert!(loaded.people.is_empty());
}

#[test]
fn malformed_document_is_a_fatal_store_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("people_data.json");
    std::fs::write(&path, "{\"people\": [{]}").unwrap();

    let store = JsonPeopleStore::new(&path);
    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::Malformed(_)));
}

#[test]
fn saved_document_is_indented_four_spaces() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("people_data.json");
    let store = JsonPeopleStore::new(&path);

    store.save(&sample_doc()).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.starts_with("{\n    \"people\""));
    // Null ages are written explicitly, not omitted.
    assert!(raw.contains("\"age\": null"));
}

#[test]
fn save_overwrites_the_previous_document_in_full() {
    let dir = tempdir().unwrap();
    let store = JsonPeopleStore::new(dir.path().join("people_data.json"));

    store.save(&sample_doc()).unwrap();
    store.save(&PeopleDoc::default()).unwrap();

    let loaded = store.load().unwrap();
    assert!(loaded.people.is_empty());
}
