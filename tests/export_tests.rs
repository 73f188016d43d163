use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, setup_test_db, stl, temp_out};

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db_with_data(&db_path);

    stl()
        .args(["--db", &db_path, "--test", "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let text = fs::read_to_string(&out).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("id,churchName,name,no,token,author,mobileNo,completed,status")
    );
    assert_eq!(
        lines.next(),
        Some("1,St. Mary,Choir,1,T1,Jane,555-0100,false,Pending")
    );
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_data(&db_path);

    stl()
        .args(["--db", &db_path, "--test", "toggle", "2"])
        .assert()
        .success();

    stl()
        .args(["--db", &db_path, "--test", "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 3);
    assert_eq!(value[1]["name"], "Drums");
    assert_eq!(value[1]["status"], "Completed");
}

#[test]
fn test_export_refuses_overwrite_without_confirmation() {
    let db_path = setup_test_db("export_no_overwrite");
    let out = temp_out("export_no_overwrite", "csv");
    init_db_with_data(&db_path);
    fs::write(&out, "keep me").unwrap();

    stl()
        .args(["--db", &db_path, "--test", "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("Export cancelled"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    stl()
        .args(["--db", &db_path, "--test", "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("id,"));
}
