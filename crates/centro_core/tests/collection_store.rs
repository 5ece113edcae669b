use centro_core::db::{open_db, open_db_in_memory};
use centro_core::{CollectionStore, SqliteCollectionStore};
use rusqlite::params;
use serde_json::json;

#[test]
fn load_of_never_saved_collection_is_empty() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::try_new(&conn).unwrap();

    assert!(store.load("events").is_empty());
    assert!(!store.exists("events"));
}

#[test]
fn save_then_load_roundtrip_preserves_order() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::try_new(&conn).unwrap();
    let records = vec![
        json!({"id": "b", "n": 2}),
        json!({"id": "a", "n": 1}),
        json!({"id": "c", "nested": {"k": [1, 2, 3]}}),
    ];

    store.save("anything", &records).unwrap();

    assert_eq!(store.load("anything"), records);
    assert!(store.exists("anything"));
}

#[test]
fn save_overwrites_whole_collection() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::try_new(&conn).unwrap();

    store
        .save("inventory", &[json!({"id": "1"}), json!({"id": "2"})])
        .unwrap();
    store.save("inventory", &[json!({"id": "3"})]).unwrap();

    assert_eq!(store.load("inventory"), vec![json!({"id": "3"})]);
}

#[test]
fn saved_empty_collection_still_exists() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::try_new(&conn).unwrap();

    store.save("inventory", &[]).unwrap();

    assert!(store.exists("inventory"));
    assert!(store.load("inventory").is_empty());
}

#[test]
fn collections_are_independent() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::try_new(&conn).unwrap();

    store.save("events", &[json!({"id": "e"})]).unwrap();
    store.save("inventory", &[json!({"id": "i"})]).unwrap();

    assert_eq!(store.load("events"), vec![json!({"id": "e"})]);
    assert_eq!(store.load("inventory"), vec![json!({"id": "i"})]);
}

#[test]
fn malformed_payload_loads_as_empty() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::try_new(&conn).unwrap();

    for (name, payload) in [
        ("broken", "{not json"),
        ("object", r#"{"id": "1"}"#),
        ("scalar", "42"),
    ] {
        conn.execute(
            "INSERT INTO collections (name, payload) VALUES (?1, ?2);",
            params![name, payload],
        )
        .unwrap();
        assert!(store.load(name).is_empty(), "{name} should load empty");
    }
}

#[test]
fn second_surface_sees_write_on_next_load() {
    let conn = open_db_in_memory().unwrap();
    let calendar_surface = SqliteCollectionStore::try_new(&conn).unwrap();
    let dashboard_surface = SqliteCollectionStore::try_new(&conn).unwrap();

    assert!(dashboard_surface.load("events").is_empty());
    calendar_surface
        .save("events", &[json!({"id": "1"})])
        .unwrap();

    assert_eq!(dashboard_surface.load("events").len(), 1);
}

#[test]
fn saved_collection_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("centro.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        let store = SqliteCollectionStore::try_new(&conn).unwrap();
        store.save("events", &[json!({"id": "kept"})]).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let store = SqliteCollectionStore::try_new(&conn).unwrap();
    assert_eq!(store.load("events"), vec![json!({"id": "kept"})]);
}
