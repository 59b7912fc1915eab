//! Entry store tests against the in-memory storage fake: stamping, merge
//! semantics, degradation on corrupt data.

use medjournal::models::{EntryDraft, EntryPatch};
use medjournal::storage::MemoryStorage;
use medjournal::store::{EntryStore, STORAGE_KEY};

fn draft(medications: &[&str], wellbeing: Option<i64>, notes: Option<&str>) -> EntryDraft {
    EntryDraft {
        medications: medications.iter().map(|m| m.to_string()).collect(),
        wellbeing,
        notes: notes.map(str::to_string),
    }
}

#[test]
fn create_stamps_id_and_timestamp() {
    let mut store = EntryStore::new(MemoryStorage::new());
    let entry = store
        .create(draft(&["Aspirin"], Some(7), Some("after lunch")))
        .unwrap();

    assert!(!entry.id.is_empty());
    assert_eq!(entry.medications, vec!["Aspirin"]);
    assert_eq!(entry.wellbeing, Some(7));
    assert_eq!(entry.notes.as_deref(), Some("after lunch"));

    let all = store.get_all();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, entry.id);
}

#[test]
fn created_ids_are_unique() {
    let mut store = EntryStore::new(MemoryStorage::new());
    let a = store.create(draft(&["A"], Some(5), None)).unwrap();
    let b = store.create(draft(&["A"], Some(5), None)).unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn get_all_on_a_fresh_store_is_empty() {
    let store = EntryStore::new(MemoryStorage::new());
    assert!(store.get_all().is_empty());
}

#[test]
fn corrupt_payload_degrades_to_an_empty_journal() {
    let mut storage = MemoryStorage::new();
    storage.preload(STORAGE_KEY, "{not json");
    let store = EntryStore::new(storage);
    assert!(store.get_all().is_empty());
}

#[test]
fn entries_missing_optional_fields_still_load() {
    let mut storage = MemoryStorage::new();
    storage.preload(
        STORAGE_KEY,
        r#"[{"id": "legacy", "timestamp": "2026-08-01T09:00:00+00:00"}]"#,
    );
    let store = EntryStore::new(storage);
    let all = store.get_all();
    assert_eq!(all.len(), 1);
    assert!(all[0].medications.is_empty());
    assert_eq!(all[0].wellbeing, None);
    assert_eq!(all[0].notes, None);
}

#[test]
fn update_merges_only_the_given_fields() {
    let mut store = EntryStore::new(MemoryStorage::new());
    let created = store
        .create(draft(&["Aspirin"], Some(4), Some("headache")))
        .unwrap();

    let updated = store
        .update(
            &created.id,
            EntryPatch {
                wellbeing: Some(8),
                ..Default::default()
            },
        )
        .unwrap()
        .expect("entry should exist");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.timestamp, created.timestamp);
    assert_eq!(updated.medications, vec!["Aspirin"]);
    assert_eq!(updated.wellbeing, Some(8));
    assert_eq!(updated.notes.as_deref(), Some("headache"));
}

#[test]
fn update_with_empty_notes_clears_them() {
    let mut store = EntryStore::new(MemoryStorage::new());
    let created = store.create(draft(&["A"], Some(5), Some("old"))).unwrap();

    let updated = store
        .update(
            &created.id,
            EntryPatch {
                notes: Some(String::new()),
                ..Default::default()
            },
        )
        .unwrap()
        .expect("entry should exist");
    assert_eq!(updated.notes, None);
}

#[test]
fn update_of_unknown_id_returns_none() {
    let mut store = EntryStore::new(MemoryStorage::new());
    let res = store.update("missing", EntryPatch::default()).unwrap();
    assert!(res.is_none());
}

#[test]
fn delete_reports_whether_something_was_removed() {
    let mut store = EntryStore::new(MemoryStorage::new());
    let created = store.create(draft(&["A"], Some(5), None)).unwrap();

    assert!(store.delete(&created.id).unwrap());
    assert!(!store.delete(&created.id).unwrap());
    assert!(store.get_all().is_empty());
}

#[test]
fn clear_drops_the_whole_journal() {
    let mut store = EntryStore::new(MemoryStorage::new());
    store.create(draft(&["A"], Some(5), None)).unwrap();
    store.create(draft(&["B"], Some(6), None)).unwrap();

    store.clear().unwrap();
    assert!(store.get_all().is_empty());
}
