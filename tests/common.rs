#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn mj() -> Command {
    cargo_bin_cmd!("medjournal")
}

/// Create a unique store directory inside the system temp dir and remove any
/// leftover from a previous run.
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_medjournal_store", name));
    let store_dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&store_dir).ok();
    store_dir
}

/// Pre-seed the store file with a raw JSON array. Writing the on-disk format
/// directly also pins it: a single array under the namespaced key.
pub fn seed_store(store_dir: &str, entries_json: &serde_json::Value) {
    fs::create_dir_all(store_dir).unwrap();
    let path = PathBuf::from(store_dir).join("medication_entries.json");
    fs::write(path, serde_json::to_string_pretty(entries_json).unwrap()).unwrap();
}

/// One entry object in the stored shape.
pub fn entry_json(
    id: &str,
    timestamp: &str,
    medications: &[&str],
    wellbeing: i64,
    notes: Option<&str>,
) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "timestamp": timestamp,
        "medications": medications,
        "wellbeing": wellbeing,
        "notes": notes,
    })
}

/// RFC3339 timestamp `days` days before now, local offset.
pub fn days_ago(days: i64) -> String {
    (chrono::Local::now() - chrono::Duration::days(days)).to_rfc3339()
}
