use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn aidreq(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("aidreq").unwrap();
    cmd.env("AIDREQ_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("AIDREQ_LOG");
    cmd
}

fn json_out(home: &TempDir, args: &[&str]) -> Value {
    let output = aidreq(home)
        .arg("--json")
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).unwrap()
}

fn create(home: &TempDir, name: &str, item: &str) -> String {
    let created = json_out(home, &["create", name, item]);
    created["id"].as_str().unwrap().to_string()
}

#[test]
fn create_then_list() {
    let home = tempfile::tempdir().unwrap();

    aidreq(&home)
        .args(["create", "Ana Silva", "water filter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created request"))
        .stdout(predicate::str::contains("Pending"));

    aidreq(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana Silva"))
        .stdout(predicate::str::contains("water filter"))
        .stdout(predicate::str::contains("Page 1 of 1 (1 request)"));

    assert!(home.path().join("requests.json").exists());
}

#[test]
fn empty_store_lists_nothing() {
    let home = tempfile::tempdir().unwrap();

    aidreq(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("No requests found."));

    let listed = json_out(&home, &["list"]);
    assert_eq!(listed["totalRecords"], 0);
    assert_eq!(listed["totalPages"], 0);
    assert_eq!(listed["data"].as_array().unwrap().len(), 0);
}

#[test]
fn invalid_create_fails_without_writing() {
    let home = tempfile::tempdir().unwrap();

    aidreq(&home)
        .args(["create", "Al", "water"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Invalid input"));

    aidreq(&home)
        .args(["create", "Alice", &"x".repeat(101)])
        .assert()
        .failure();

    let listed = json_out(&home, &["list"]);
    assert_eq!(listed["totalRecords"], 0);
}

#[test]
fn json_create_shape() {
    let home = tempfile::tempdir().unwrap();
    let created = json_out(&home, &["create", "  Noor  ", " crutches "]);

    assert_eq!(created["requestorName"], "Noor");
    assert_eq!(created["itemRequested"], "crutches");
    assert_eq!(created["status"], "pending");
    assert_eq!(created["requestCreatedDate"], created["lastEditedDate"]);
}

#[test]
fn set_status_moves_between_filters() {
    let home = tempfile::tempdir().unwrap();
    let id = create(&home, "Rosa Diaz", "insulin");
    create(&home, "Sam Lee", "blankets");

    aidreq(&home)
        .args(["set-status", &id, "approved"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is now Approved"));

    let approved = json_out(&home, &["list", "--status", "approved"]);
    assert_eq!(approved["totalRecords"], 1);
    assert_eq!(approved["data"][0]["id"], id.as_str());

    let pending = json_out(&home, &["list", "--status", "pending"]);
    assert_eq!(pending["totalRecords"], 1);

    // `edit` is an alias and any status may follow any other
    let completed = json_out(&home, &["edit", &id, "completed"]);
    assert_eq!(completed["status"], "completed");
    let reopened = json_out(&home, &["edit", &id, "pending"]);
    assert_eq!(reopened["status"], "pending");
}

#[test]
fn set_status_rejects_unknown_status() {
    let home = tempfile::tempdir().unwrap();
    let id = create(&home, "Rosa Diaz", "insulin");

    aidreq(&home)
        .args(["--json", "set-status", &id, "Approved"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("INVALID_INPUT"));

    let viewed = json_out(&home, &["view", &id]);
    assert_eq!(viewed["status"], "pending");
}

#[test]
fn unknown_ids_are_not_found() {
    let home = tempfile::tempdir().unwrap();
    create(&home, "Rosa Diaz", "insulin");

    aidreq(&home)
        .args(["--json", "view", "3f2504e0-4f89-11d3-9a0c-0305e82c3301"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("NOT_FOUND"))
        .stderr(predicate::str::contains("Request not found"));

    aidreq(&home)
        .args(["set-status", "not-an-id", "approved"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Request not found"));
}

#[test]
fn paging_follows_configured_size() {
    let home = tempfile::tempdir().unwrap();

    aidreq(&home)
        .args(["config", "page-size", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size set to 2"));

    for i in 1..=5 {
        create(&home, &format!("Requestor {}", i), "soap");
    }

    let first = json_out(&home, &["list"]);
    assert_eq!(first["pageSize"], 2);
    assert_eq!(first["totalPages"], 3);
    assert_eq!(first["totalRecords"], 5);
    assert_eq!(first["data"].as_array().unwrap().len(), 2);

    let last = json_out(&home, &["list", "--page", "3"]);
    assert_eq!(last["data"].as_array().unwrap().len(), 1);
    assert_eq!(last["currentPage"], 3);

    let past_end = json_out(&home, &["list", "--page", "4"]);
    assert_eq!(past_end["data"].as_array().unwrap().len(), 0);
    assert_eq!(past_end["totalPages"], 3);
    assert_eq!(past_end["totalRecords"], 5);

    let far_past_end = json_out(&home, &["list", "--page", "5000000000"]);
    assert_eq!(far_past_end["data"].as_array().unwrap().len(), 0);
    assert_eq!(far_past_end["totalPages"], 3);
    assert_eq!(far_past_end["currentPage"], 5_000_000_000u64);

    aidreq(&home)
        .args(["list", "--page", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn unknown_status_filter_lists_everything() {
    let home = tempfile::tempdir().unwrap();
    create(&home, "Rosa Diaz", "insulin");
    create(&home, "Sam Lee", "blankets");

    let listed = json_out(&home, &["list", "--status", "archived"]);
    assert_eq!(listed["totalRecords"], 2);
}

#[test]
fn quick_approve() {
    let home = tempfile::tempdir().unwrap();

    aidreq(&home)
        .args(["create", "Field Team", "radios", "--approve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Approved"));

    let approved = json_out(&home, &["list", "--status", "approved"]);
    assert_eq!(approved["totalRecords"], 1);
}

#[test]
fn config_rejects_bad_values() {
    let home = tempfile::tempdir().unwrap();

    aidreq(&home)
        .args(["config", "page-size", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("page-size"));

    aidreq(&home)
        .args(["config", "colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));

    aidreq(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("page-size = 6"))
        .stdout(predicate::str::contains("log-level = warn"));
}

#[test]
fn zero_page_size_on_disk_is_rejected() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("config.json"), r#"{"page_size": 0}"#).unwrap();

    aidreq(&home)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}
