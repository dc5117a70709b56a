mod common;

use products_lib::{Error, PageRequest, ProductStore};

use common::kettle;

#[test]
fn get_returns_every_seeded_record() {
    let store = ProductStore::seeded();
    for product in store.products() {
        let found = store.get(&product.id).expect("seeded id resolves");
        assert_eq!(found, product);
    }
}

#[test]
fn get_unknown_id_is_not_found() {
    let store = ProductStore::seeded();
    for id in ["0", "4", "", "laptop"] {
        assert!(matches!(store.get(id), Err(Error::NotFound { .. })));
    }
}

#[test]
fn create_then_get_round_trips_fields() {
    let mut store = ProductStore::seeded();
    let prior: Vec<String> = store.products().iter().map(|p| p.id.clone()).collect();

    let created = store.create(kettle());
    assert!(!prior.contains(&created.id));

    let fetched = store.get(&created.id).expect("created product resolves");
    assert_eq!(fetched.fields(), kettle());
}

#[test]
fn replace_then_get_keeps_original_id() {
    let mut store = ProductStore::seeded();
    let updated = store.replace("1", kettle()).expect("seed id exists");
    assert_eq!(updated.id, "1");

    let fetched = store.get("1").expect("still present");
    assert_eq!(fetched.id, "1");
    assert_eq!(fetched.fields(), kettle());
    assert_eq!(store.len(), 3);
}

#[test]
fn delete_removes_and_returns_record() {
    let mut store = ProductStore::seeded();
    let expected = store.get("3").expect("seed exists").clone();

    let removed = store.delete("3").expect("delete succeeds");
    assert_eq!(removed, expected);
    assert!(matches!(store.get("3"), Err(Error::NotFound { .. })));
    assert!(matches!(store.delete("3"), Err(Error::NotFound { .. })));
}

#[test]
fn electronics_listing_on_seed_data() {
    let store = ProductStore::seeded();
    let page = store.list(Some("electronics"), PageRequest::new(1, 10));

    assert_eq!(page.total, 2);
    let names: Vec<_> = page.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Laptop", "Smartphone"]);
}

#[test]
fn search_phone_on_seed_data() {
    let store = ProductStore::seeded();
    let results = store.search("phone").expect("name supplied");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Smartphone");
}

#[test]
fn stats_on_seed_data() {
    let store = ProductStore::seeded();
    let stats = store.stats();
    assert_eq!(stats.len(), 2);
    assert_eq!(stats["electronics"], 2);
    assert_eq!(stats["kitchen"], 1);
}

#[test]
fn paging_past_end_keeps_total() {
    let store = ProductStore::seeded();
    let page = store.list(None, PageRequest::from_query(Some("3"), Some("2")));
    assert_eq!(page.total, 3);
    assert!(page.items.is_empty());
}
