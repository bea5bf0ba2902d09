#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rpm() -> Command {
    cargo_bin_cmd!("rpayminder")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file (including the sidecar session file).
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpayminder.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    fs::remove_file(format!("{}.session", db_path)).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and sign up a user so store commands are authenticated
pub fn init_db_with_user(db_path: &str, email: &str) {
    // init DB (creates tables)
    rpm()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    // signup also signs the user in (writes the session file)
    rpm()
        .args(["--db", db_path, "signup", email])
        .assert()
        .success();
}

/// Add a payment via CLI and return its id (parsed from stdout).
pub fn add_payment(db_path: &str, title: &str, amount: &str, due: &str) -> String {
    let output = rpm()
        .args([
            "--db", db_path, "add", title, "--amount", amount, "--due", due,
        ])
        .output()
        .expect("failed to run add");

    assert!(output.status.success(), "add failed: {:?}", output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let re = regex::Regex::new(r"\[id ([0-9a-f-]{36})\]").unwrap();
    re.captures(&stdout)
        .map(|c| c[1].to_string())
        .unwrap_or_else(|| panic!("no payment id in output: {stdout}"))
}

/// Days-relative date helper ("today + n" as YYYY-MM-DD).
pub fn date_from_today(days: i64) -> String {
    (chrono::Local::now().date_naive() + chrono::Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}
