//! End-to-end CLI tests: every invocation runs the real binary against an
//! isolated data directory via `FLYQ_DATA_DIR`.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn flyq(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("flyq").unwrap();
    cmd.env("FLYQ_DATA_DIR", dir.path());
    cmd
}

fn build_flight_id_filter(dir: &TempDir) {
    flyq(dir).args(["add-rule", "root"]).assert().success();
    flyq(dir)
        .args(["select", "root,0", "Flight ID"])
        .assert()
        .success();
    flyq(dir).args(["set", "root,0", "0", "="]).assert().success();
    flyq(dir)
        .args(["set", "root,0", "1", "1042"])
        .assert()
        .success();
}

#[test]
fn empty_filter_fails_check() {
    let dir = TempDir::new().unwrap();
    flyq(&dir)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid"));
}

#[test]
fn built_filter_passes_check() {
    let dir = TempDir::new().unwrap();
    build_flight_id_filter(&dir);
    flyq(&dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Filter is valid"));
}

#[test]
fn show_renders_the_tree_with_paths() {
    let dir = TempDir::new().unwrap();
    build_flight_id_filter(&dir);
    flyq(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("root,0"))
        .stdout(predicate::str::contains("Flight ID"));
}

#[test]
fn rules_lists_the_catalog() {
    let dir = TempDir::new().unwrap();
    flyq(&dir)
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("Flight ID"))
        .stdout(predicate::str::contains("Takeoff Time"));
}

#[test]
fn share_and_load_round_trip_between_sessions() {
    let sender = TempDir::new().unwrap();
    build_flight_id_filter(&sender);
    // An empty sub-group rides along and is culled on share.
    flyq(&sender).args(["add-group", "root"]).assert().success();

    let output = flyq(&sender).arg("share").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let token = stdout.lines().next().unwrap().trim().to_string();
    assert!(!token.is_empty());

    let receiver = TempDir::new().unwrap();
    flyq(&receiver).args(["load", &token]).assert().success();
    flyq(&receiver)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Flight ID"))
        .stdout(predicate::str::contains("1042"));
    flyq(&receiver).arg("check").assert().success();
}

#[test]
fn malformed_locator_falls_back_to_an_empty_filter() {
    let dir = TempDir::new().unwrap();
    build_flight_id_filter(&dir);
    flyq(&dir)
        .args(["load", "%7Bnotjson"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Ignoring shared filter"));
    flyq(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("empty filter"));
}

#[test]
fn incomplete_shared_filter_is_not_applied() {
    let sender = TempDir::new().unwrap();
    flyq(&sender).args(["add-rule", "root"]).assert().success();
    let output = flyq(&sender).arg("share").assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let token = stdout.lines().next().unwrap().trim().to_string();

    let receiver = TempDir::new().unwrap();
    flyq(&receiver)
        .args(["load", &token])
        .assert()
        .success()
        .stderr(predicate::str::contains("Ignoring shared filter"));
    flyq(&receiver)
        .arg("show")
        .assert()
        .stdout(predicate::str::contains("empty filter"));
}

#[test]
fn clear_resets_the_tree() {
    let dir = TempDir::new().unwrap();
    build_flight_id_filter(&dir);
    flyq(&dir).arg("clear").assert().success();
    flyq(&dir)
        .arg("show")
        .assert()
        .stdout(predicate::str::contains("empty filter"));
}

#[test]
fn removing_an_out_of_range_path_reports_an_error() {
    let dir = TempDir::new().unwrap();
    build_flight_id_filter(&dir);
    flyq(&dir)
        .args(["rm", "root,5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn saved_filters_cycle_save_list_use_drop() {
    let dir = TempDir::new().unwrap();
    build_flight_id_filter(&dir);
    flyq(&dir)
        .args(["save", "daily", "--color", "#cc3366"])
        .assert()
        .success();

    flyq(&dir)
        .arg("filters")
        .assert()
        .success()
        .stdout(predicate::str::contains("daily"))
        .stdout(predicate::str::contains("#cc3366"));

    flyq(&dir).arg("clear").assert().success();
    flyq(&dir).args(["use", "daily"]).assert().success();
    flyq(&dir).arg("check").assert().success();

    flyq(&dir).args(["drop", "daily"]).assert().success();
    flyq(&dir)
        .args(["use", "daily"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no saved filter"));
}

#[test]
fn duplicate_save_names_are_rejected() {
    let dir = TempDir::new().unwrap();
    build_flight_id_filter(&dir);
    flyq(&dir).args(["save", "daily"]).assert().success();
    flyq(&dir)
        .args(["save", "daily"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn rename_and_recolor_saved_filters() {
    let dir = TempDir::new().unwrap();
    build_flight_id_filter(&dir);
    flyq(&dir).args(["save", "daily"]).assert().success();

    flyq(&dir)
        .args(["rename", "daily", "weekly"])
        .assert()
        .success();
    flyq(&dir)
        .args(["recolor", "weekly", "#00aa88"])
        .assert()
        .success();

    flyq(&dir)
        .arg("filters")
        .assert()
        .stdout(predicate::str::contains("weekly"))
        .stdout(predicate::str::contains("#00aa88"))
        .stdout(predicate::str::contains("daily").not());
}
