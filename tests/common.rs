#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn stl() -> Command {
    cargo_bin_cmd!("stagelist")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_stagelist.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_stagelist_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Add one act through the CLI.
pub fn add_act(db_path: &str, church: &str, name: &str, no: &str) {
    stl()
        .args([
            "--db", db_path, "--test", "add", "--church", church, "--name", name, "--no", no,
            "--token", "T1", "--author", "Jane", "--mobile", "555-0100",
        ])
        .assert()
        .success();
}

/// Initialize DB and add three acts: #1 Choir, #2 Drums, #3 Mime
pub fn init_db_with_data(db_path: &str) {
    stl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    add_act(db_path, "St. Mary", "Choir", "1");
    add_act(db_path, "Grace", "Drums", "2");
    add_act(db_path, "Hope", "Mime", "3");
}
