use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::json;
use std::path::PathBuf;

mod common;
use common::{days_ago, entry_json, mj, seed_store, setup_test_store};

#[test]
fn init_creates_an_empty_store() {
    let store_dir = setup_test_store("init_creates");

    mj().args(["--store", &store_dir, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Journal initialized"));

    let store_file = PathBuf::from(&store_dir).join("medication_entries.json");
    assert_eq!(std::fs::read_to_string(store_file).unwrap(), "[]");
}

#[test]
fn add_then_list_shows_the_entry() {
    let store_dir = setup_test_store("add_then_list");

    mj().args([
        "--store",
        &store_dir,
        "add",
        "--meds",
        "Vitamin D, Omega-3",
        "--score",
        "7",
        "--notes",
        "sunny day",
    ])
    .assert()
    .success()
    .stdout(contains("Logged Vitamin D, Omega-3"));

    mj().args(["--store", &store_dir, "list"])
        .assert()
        .success()
        .stdout(contains("Vitamin D, Omega-3"))
        .stdout(contains("sunny day"));
}

#[test]
fn add_rejects_an_out_of_range_score() {
    let store_dir = setup_test_store("add_bad_score");

    mj().args(["--store", &store_dir, "add", "--meds", "Aspirin", "--score", "11"])
        .assert()
        .failure()
        .stderr(contains("between 1 and 10"));
}

#[test]
fn add_rejects_an_empty_medication_list() {
    let store_dir = setup_test_store("add_no_meds");

    mj().args(["--store", &store_dir, "add", "--meds", " , ,", "--score", "5"])
        .assert()
        .failure()
        .stderr(contains("No medications"));
}

#[test]
fn list_json_emits_the_raw_entries() {
    let store_dir = setup_test_store("list_json");
    seed_store(
        &store_dir,
        &json!([entry_json("e1", &days_ago(1), &["Aspirin"], 6, None)]),
    );

    mj().args(["--store", &store_dir, "list", "--json"])
        .assert()
        .success()
        .stdout(contains("\"medications\""))
        .stdout(contains("Aspirin"));
}

#[test]
fn del_removes_a_seeded_entry() {
    let store_dir = setup_test_store("del_entry");
    seed_store(
        &store_dir,
        &json!([
            entry_json("e1", &days_ago(2), &["Aspirin"], 6, None),
            entry_json("e2", &days_ago(1), &["Omega-3"], 8, None),
        ]),
    );

    mj().args(["--store", &store_dir, "del", "e1", "--yes"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    mj().args(["--store", &store_dir, "list"])
        .assert()
        .success()
        .stdout(contains("Omega-3"))
        .stdout(contains("Aspirin").not());
}

#[test]
fn del_of_unknown_id_fails() {
    let store_dir = setup_test_store("del_unknown");

    mj().args(["--store", &store_dir, "del", "nope", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No entry found"));
}

#[test]
fn edit_updates_the_score() {
    let store_dir = setup_test_store("edit_score");
    seed_store(
        &store_dir,
        &json!([entry_json("e1", &days_ago(1), &["Aspirin"], 3, None)]),
    );

    mj().args(["--store", &store_dir, "edit", "e1", "--score", "9"])
        .assert()
        .success()
        .stdout(contains("9/10"));
}

#[test]
fn clear_empties_the_journal() {
    let store_dir = setup_test_store("clear_all");
    seed_store(
        &store_dir,
        &json!([
            entry_json("e1", &days_ago(2), &["A"], 6, None),
            entry_json("e2", &days_ago(1), &["B"], 8, None),
        ]),
    );

    mj().args(["--store", &store_dir, "clear", "--yes"])
        .assert()
        .success()
        .stdout(contains("Deleted 2 entries"));

    mj().args(["--store", &store_dir, "list"])
        .assert()
        .success()
        .stdout(contains("No entries yet"));
}

#[test]
fn stats_reports_the_overall_average() {
    let store_dir = setup_test_store("stats_avg");
    seed_store(
        &store_dir,
        &json!([
            entry_json("e1", &days_ago(2), &["Aspirin"], 8, None),
            entry_json("e2", &days_ago(1), &["Aspirin", "Omega-3"], 6, None),
        ]),
    );

    mj().args(["--store", &store_dir, "stats"])
        .assert()
        .success()
        .stdout(contains("Average well-being"))
        .stdout(contains("7.00"))
        .stdout(contains("Aspirin"));
}

#[test]
fn trend_buckets_recent_entries_by_day() {
    let store_dir = setup_test_store("trend_days");
    let yesterday = days_ago(1);
    seed_store(
        &store_dir,
        &json!([
            entry_json("e1", &yesterday, &["A"], 6, None),
            entry_json("e2", &yesterday, &["B"], 8, None),
            // Outside a 30-day window, must not appear.
            entry_json("e3", &days_ago(40), &["C"], 1, None),
        ]),
    );

    let day_key = yesterday.split('T').next().unwrap().to_string();
    mj().args(["--store", &store_dir, "trend", "--days", "30"])
        .assert()
        .success()
        .stdout(contains(day_key))
        .stdout(contains("7.00"));
}

#[test]
fn correlate_reports_the_with_without_difference() {
    let store_dir = setup_test_store("correlate_x");
    seed_store(
        &store_dir,
        &json!([
            entry_json("e1", &days_ago(3), &["X"], 8, None),
            entry_json("e2", &days_ago(2), &["X"], 6, None),
            entry_json("e3", &days_ago(1), &[] as &[&str], 2, None),
        ]),
    );

    mj().args(["--store", &store_dir, "correlate", "X"])
        .assert()
        .success()
        .stdout(contains("7.00"))
        .stdout(contains("2.00"))
        .stdout(contains("5.00"))
        .stdout(contains("strong positive"));
}

#[test]
fn correlate_of_unknown_medication_fails() {
    let store_dir = setup_test_store("correlate_unknown");
    seed_store(
        &store_dir,
        &json!([entry_json("e1", &days_ago(1), &["X"], 8, None)]),
    );

    mj().args(["--store", &store_dir, "correlate", "Y"])
        .assert()
        .failure()
        .stderr(contains("No entries recorded"));
}

#[test]
fn correlate_ranking_drops_medications_taken_once() {
    let store_dir = setup_test_store("correlate_rank");
    seed_store(
        &store_dir,
        &json!([
            entry_json("e1", &days_ago(4), &["Up"], 9, None),
            entry_json("e2", &days_ago(3), &["Up"], 9, None),
            entry_json("e3", &days_ago(2), &["Once"], 10, None),
            entry_json("e4", &days_ago(1), &[] as &[&str], 5, None),
        ]),
    );

    mj().args(["--store", &store_dir, "correlate"])
        .assert()
        .success()
        .stdout(contains("Up"))
        .stdout(contains("Once").not());
}
