use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_act, init_db_with_data, setup_test_db, stl};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    stl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_then_list() {
    let db_path = setup_test_db("add_then_list");
    init_db_with_data(&db_path);

    stl()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(
            contains("Choir")
                .and(contains("St. Mary"))
                .and(contains("Drums"))
                .and(contains("Pending")),
        );
}

#[test]
fn test_list_json_uses_wire_names() {
    let db_path = setup_test_db("list_json");
    init_db_with_data(&db_path);

    let out = stl()
        .args(["--db", &db_path, "--test", "list", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 3);
    assert_eq!(value[0]["id"], 1);
    assert_eq!(value[0]["churchName"], "St. Mary");
    assert_eq!(value[0]["mobileNo"], "555-0100");
    assert_eq!(value[0]["completed"], false);
}

#[test]
fn test_add_with_missing_field_fails() {
    let db_path = setup_test_db("add_missing_field");

    stl()
        .args([
            "--db", &db_path, "--test", "add", "--church", "St. Mary", "--name", "Choir",
        ])
        .assert()
        .failure()
        .stderr(contains("Missing required field: no"));
}

#[test]
fn test_toggle_flips_status_both_ways() {
    let db_path = setup_test_db("toggle_flips");
    init_db_with_data(&db_path);

    stl()
        .args(["--db", &db_path, "--test", "toggle", "2"])
        .assert()
        .success()
        .stdout(contains("Event #2 is now Completed"));

    stl()
        .args(["--db", &db_path, "--test", "toggle", "2"])
        .assert()
        .success()
        .stdout(contains("Event #2 is now Pending"));
}

#[test]
fn test_toggle_unknown_id_fails() {
    let db_path = setup_test_db("toggle_unknown");
    init_db_with_data(&db_path);

    stl()
        .args(["--db", &db_path, "--test", "toggle", "99"])
        .assert()
        .failure()
        .stderr(contains("No event with id 99"));
}

#[test]
fn test_edit_changes_fields_in_place() {
    let db_path = setup_test_db("edit_in_place");
    init_db_with_data(&db_path);

    stl()
        .args(["--db", &db_path, "--test", "toggle", "1"])
        .assert()
        .success();

    stl()
        .args(["--db", &db_path, "--test", "edit", "1", "--name", "Youth Choir"])
        .assert()
        .success()
        .stdout(contains("Event #1 updated: Youth Choir - St. Mary"));

    // same id, status kept, nothing appended
    let out = stl()
        .args(["--db", &db_path, "--test", "list", "--json"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 3);
    assert_eq!(value[0]["name"], "Youth Choir");
    assert_eq!(value[0]["completed"], true);
}

#[test]
fn test_edit_cannot_blank_a_field() {
    let db_path = setup_test_db("edit_blank");
    init_db_with_data(&db_path);

    stl()
        .args(["--db", &db_path, "--test", "edit", "1", "--author", " "])
        .assert()
        .failure()
        .stderr(contains("Missing required field: author"));
}

#[test]
fn test_del_with_yes_removes_event() {
    let db_path = setup_test_db("del_with_yes");
    init_db_with_data(&db_path);

    stl()
        .args(["--db", &db_path, "--test", "del", "2", "--yes"])
        .assert()
        .success()
        .stdout(contains("Event #2 has been deleted."));

    stl()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Drums").not());

    // ids are not reused
    add_act(&db_path, "Grace", "Flutes", "4");
    stl()
        .args(["--db", &db_path, "--test", "list", "--json"])
        .assert()
        .success()
        .stdout(contains("\"id\": 4"));
}

#[test]
fn test_del_declined_keeps_event() {
    let db_path = setup_test_db("del_declined");
    init_db_with_data(&db_path);

    stl()
        .args(["--db", &db_path, "--test", "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    stl()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Choir"));
}

#[test]
fn test_order_lists_completed_first() {
    let db_path = setup_test_db("order_completed_first");
    init_db_with_data(&db_path);

    stl()
        .args(["--db", &db_path, "--test", "toggle", "3"])
        .assert()
        .success();

    let out = stl()
        .args(["--db", &db_path, "--test", "order"])
        .output()
        .unwrap();
    let text = String::from_utf8_lossy(&out.stdout);

    let mime = text.find("Mime").unwrap();
    let choir = text.find("Choir").unwrap();
    let pending = text.find("Pending").unwrap();
    assert!(mime < pending);
    assert!(pending < choir);
}

#[test]
fn test_viewer_shows_neighbours() {
    let db_path = setup_test_db("viewer_neighbours");
    init_db_with_data(&db_path);

    stl()
        .args(["--db", &db_path, "--test", "viewer", "--position", "1"])
        .assert()
        .success()
        .stdout(
            contains("Choir - St. Mary")
                .and(contains("Drums - Grace"))
                .and(contains("Mime - Hope")),
        );
}

#[test]
fn test_viewer_skips_completed_acts() {
    let db_path = setup_test_db("viewer_skips_completed");
    init_db_with_data(&db_path);

    stl()
        .args(["--db", &db_path, "--test", "toggle", "1"])
        .assert()
        .success();

    stl()
        .args(["--db", &db_path, "--test", "viewer"])
        .assert()
        .success()
        .stdout(contains("Drums - Grace").and(contains("Choir").not()));
}

#[test]
fn test_viewer_with_nothing_pending() {
    let db_path = setup_test_db("viewer_nothing_pending");

    stl()
        .args(["--db", &db_path, "--test", "viewer"])
        .assert()
        .success()
        .stdout(contains("No pending events."));
}

#[test]
fn test_console_session_adds_and_lists() {
    let db_path = setup_test_db("console_session");

    let script = "\
set church St. Mary
set name Youth Choir
set no 7
set token T7
set author Jane
set mobile 555-0100
submit
toggle 1
list
quit
";

    stl()
        .args(["--db", &db_path, "--test", "console"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(
            contains("Event #1 created: Youth Choir - St. Mary")
                .and(contains("Event #1 is now Completed"))
                .and(contains("Completed")),
        );

    stl()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Youth Choir").and(contains("Completed")));
}

#[test]
fn test_console_rejects_incomplete_form() {
    let db_path = setup_test_db("console_incomplete");

    stl()
        .args(["--db", &db_path, "--test", "console"])
        .write_stdin("set name Choir\nsubmit\nquit\n")
        .assert()
        .success()
        .stderr(contains("Missing required field: churchName"));

    stl()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("No events registered."));
}

#[test]
fn test_log_print_shows_audit_trail() {
    let db_path = setup_test_db("log_print");
    init_db_with_data(&db_path);

    stl()
        .args(["--db", &db_path, "--test", "del", "3", "--yes"])
        .assert()
        .success();

    stl()
        .args(["--db", &db_path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(
            contains("migration_applied")
                .and(contains("init"))
                .and(contains("add"))
                .and(contains("del")),
        );
}

#[test]
fn test_db_info_counts_events() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    stl()
        .args(["--db", &db_path, "--test", "toggle", "1"])
        .assert()
        .success();

    stl()
        .args(["--db", &db_path, "--test", "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(
            contains("completed: 1")
                .and(contains("pending:   2"))
                .and(contains("Integrity check passed")),
        );
}
