//! Registry lifecycle and shared-handle tests.

use std::thread;
use textdex::{Document, IndexConfig, IndexRegistry, SearchOptions};

fn add(registry: &IndexRegistry, index: &str, id: &str, name: &str) {
    registry
        .get_index(index)
        .write()
        .add_document(id, Document::new().with_field("name", name), &["name"]);
}

#[test]
fn test_registries_do_not_share_state() {
    let first = IndexRegistry::new();
    let second = IndexRegistry::new();
    add(&first, "products", "1", "Comet Lamp");

    assert!(!second.contains("products"));
    let total = second
        .get_index("products")
        .read()
        .search("comet", &SearchOptions::default())
        .total;
    assert_eq!(total, 0);
}

#[test]
fn test_lifecycle() {
    let registry = IndexRegistry::new();
    add(&registry, "products", "1", "Comet Lamp");
    add(&registry, "articles", "1", "Nebula Guide");
    assert_eq!(registry.names(), vec!["articles", "products"]);

    let fresh = registry.create_index("products");
    assert!(fresh.read().is_empty());

    assert!(registry.delete_index("articles"));
    assert_eq!(registry.names(), vec!["products"]);

    add(&registry, "products", "2", "Quasar Poster");
    registry.clear_all();
    assert_eq!(registry.get_index("products").read().get_stats().total_documents, 0);
}

#[test]
fn test_config_is_shared_by_instances() {
    let config = IndexConfig {
        stopwords: vec!["comet".to_string()],
        ..IndexConfig::default()
    };
    let registry = IndexRegistry::with_config(config).unwrap();
    add(&registry, "a", "1", "Comet Lamp");

    let index = registry.get_index("a");
    let index = index.read();
    assert_eq!(index.search("comet", &SearchOptions::default()).total, 0);
    assert_eq!(index.search("lamp", &SearchOptions::default()).total, 1);
}

#[test]
fn test_concurrent_readers_share_an_index() {
    let registry = IndexRegistry::new();
    for i in 0..50 {
        add(&registry, "shared", &i.to_string(), &format!("Comet number {}", i));
    }

    let handle = registry.get_index("shared");
    thread::scope(|scope| {
        for t in 0..4 {
            let handle = handle.clone();
            scope.spawn(move || {
                for page in 0..5 {
                    let options = SearchOptions::new().limit(10).offset(page * 10);
                    let response = handle.read().search("comet", &options);
                    assert_eq!(response.total, 50, "thread {}", t);
                    assert_eq!(response.results.len(), 10);
                }
            });
        }
    });

    assert_eq!(handle.read().get_stats().cache_size, 5);
}
