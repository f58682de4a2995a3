use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cachesweep() -> Command {
    Command::cargo_bin("cachesweep").unwrap()
}

/// A fake home with the standard user roots, so CLI runs never touch the
/// real machine. `dirs::home_dir` follows `$HOME` on unix.
fn fake_home() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("Library/Caches")).unwrap();
    fs::create_dir_all(tmp.path().join("Library/Logs")).unwrap();
    fs::create_dir_all(tmp.path().join(".Trash")).unwrap();
    tmp
}

// ─── Help & version ──────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    cachesweep()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("clean"))
        .stdout(predicate::str::contains("categories"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_flag() {
    cachesweep()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cachesweep"));
}

// ─── Categories command ──────────────────────────────────────────────────────

#[test]
fn test_categories_lists_all_roots() {
    cachesweep()
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("User Caches"))
        .stdout(predicate::str::contains("System Caches"))
        .stdout(predicate::str::contains("Browser Caches"))
        .stdout(predicate::str::contains("Logs"))
        .stdout(predicate::str::contains("Trash"))
        .stdout(predicate::str::contains("Xcode DerivedData"))
        .stdout(predicate::str::contains("Library/Caches"));
}

// ─── Analyze command ─────────────────────────────────────────────────────────

#[test]
fn test_analyze_json_output() {
    let home = fake_home();
    fs::write(home.path().join("Library/Logs/app.log"), "0123456789").unwrap();

    let output = cachesweep()
        .env("HOME", home.path())
        .args(["analyze", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let results: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 6);

    let logs = results
        .iter()
        .find(|r| r["category"] == "logs")
        .expect("logs category present");
    assert_eq!(logs["total_bytes"], 10);
    assert_eq!(logs["item_count"], 1);
}

#[test]
fn test_analyze_single_category_quiet() {
    let home = fake_home();
    cachesweep()
        .env("HOME", home.path())
        .args(["analyze", "trash", "--quiet", "--format", "quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Trash"));
}

#[test]
fn test_analyze_rejects_unknown_category() {
    cachesweep()
        .args(["analyze", "registry-hives"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// ─── Clean command ───────────────────────────────────────────────────────────

#[test]
fn test_clean_dry_run_deletes_nothing() {
    let home = fake_home();
    let log = home.path().join("Library/Logs/keep.log");
    fs::write(&log, "important").unwrap();

    cachesweep()
        .env("HOME", home.path())
        .args(["clean", "logs", "--dry-run", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(log.exists(), "dry run must not delete files");
}

#[test]
fn test_clean_dry_run_json_output() {
    let home = fake_home();
    fs::write(home.path().join("Library/Logs/app.log"), "0123456789").unwrap();

    let output = cachesweep()
        .env("HOME", home.path())
        .args(["clean", "logs", "--dry-run", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let summary: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(summary["category"], "logs");
    assert_eq!(summary["dry_run"], true);
    assert_eq!(summary["item_count"], 1);
    assert_eq!(summary["bytes_reclaimable"], 10);
}

#[test]
fn test_clean_handles_non_ascii_item_names() {
    let home = fake_home();
    let log = home.path().join("Library/Logs/кэш-журнал-приложения.log");
    fs::write(&log, "x".repeat(64)).unwrap();

    cachesweep()
        .env("HOME", home.path())
        .args(["clean", "logs", "--yes", "--format", "quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("64"));

    assert!(!log.exists());
}

#[test]
fn test_clean_yes_reclaims_and_prints_bytes() {
    let home = fake_home();
    let log = home.path().join("Library/Logs/gone.log");
    fs::write(&log, "x".repeat(256)).unwrap();

    cachesweep()
        .env("HOME", home.path())
        .args(["clean", "logs", "--yes", "--format", "quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("256"));

    assert!(!log.exists(), "clean --yes must delete the item");
}

// ─── Completions ─────────────────────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    cachesweep()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cachesweep"));
}
