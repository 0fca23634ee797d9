mod common;

use std::fs;

use assert_cmd::Command;
use common::{fingerprint, write_bytes};
use predicates::prelude::*;
use tempfile::tempdir;

/// The binary with HOME pointed at a scratch directory.
///
/// Every test here passes `--target`, so no default junk root is touched.
fn bilge_pump(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("bilge-pump").unwrap();
    cmd.env("HOME", home)
        .env_remove("BILGE_DRY_RUN")
        .env_remove("BILGE_LIST")
        .env_remove("BILGE_QUIET")
        .env_remove("BILGE_VERBOSE")
        .env_remove("BILGE_TARGET");
    cmd
}

#[test]
fn test_help_lists_flags_and_commands() {
    let home = tempdir().unwrap();
    bilge_pump(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--aggressive"))
        .stdout(predicate::str::contains("--target"))
        .stdout(predicate::str::contains("logbook"))
        .stdout(predicate::str::contains("flotsam"));
}

#[test]
fn test_system_target_is_refused_with_success_exit() {
    let home = tempdir().unwrap();
    bilge_pump(home.path())
        .args(["--target", "/etc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not safe to delete: /etc"));
    assert!(std::path::Path::new("/etc").exists());
}

#[test]
fn test_home_target_is_refused() {
    let home = tempdir().unwrap();
    write_bytes(home.path().join("notes"), 5);

    bilge_pump(home.path())
        .args(["-t", "~"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not safe to delete"));
    assert!(home.path().join("notes").exists());
}

#[test]
fn test_missing_target_is_reported() {
    let home = tempdir().unwrap();
    let missing = home.path().join("gone");

    bilge_pump(home.path())
        .arg("--target")
        .arg(&missing)
        .assert()
        .success()
        .stdout(predicate::str::contains("Target does not exist"));
}

#[test]
fn test_list_target_prints_listing_and_total() {
    let home = tempdir().unwrap();
    let junk = home.path().join("junk");
    write_bytes(junk.join("a.tmp"), 2048);
    write_bytes(junk.join("b"), 10);

    bilge_pump(home.path())
        .arg("--list")
        .arg("--target")
        .arg(&junk)
        .assert()
        .success()
        .stdout(predicate::str::contains("Listing junk:"))
        .stdout(predicate::str::contains("2 files"))
        .stdout(predicate::str::contains("Target total: 2 files, 2.01 KiB"));
    assert!(junk.join("a.tmp").exists());
}

#[test]
fn test_dry_run_target_changes_nothing() {
    let home = tempdir().unwrap();
    let junk = home.path().join("junk");
    write_bytes(junk.join("nested/deep.log"), 300);
    let before = fingerprint(home.path());

    bilge_pump(home.path())
        .args(["--dry-run", "-v", "--target"])
        .arg(&junk)
        .assert()
        .success()
        .stdout(predicate::str::contains("DRY RUN"))
        .stderr(predicate::str::contains("[DRY-RUN] Would remove:"));

    assert_eq!(fingerprint(home.path()), before);
}

#[test]
fn test_target_is_removed() {
    let home = tempdir().unwrap();
    let junk = home.path().join("junk");
    write_bytes(junk.join("x"), 1);

    bilge_pump(home.path())
        .arg("--target")
        .arg(&junk)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleaning..."))
        .stdout(predicate::str::contains("Target cleaned:"));
    assert!(!junk.exists());
    assert!(fs::read_dir(home.path()).unwrap().next().is_none());
}

#[test]
fn test_quiet_and_verbose_conflict() {
    let home = tempdir().unwrap();
    bilge_pump(home.path())
        .args(["-q", "-v", "--target", "/nowhere"])
        .assert()
        .failure();
}

#[test]
fn test_env_list_and_target_are_honoured() {
    let home = tempdir().unwrap();
    let junk = home.path().join("junk");
    write_bytes(junk.join("a.tmp"), 2048);
    let before = fingerprint(home.path());

    bilge_pump(home.path())
        .env("BILGE_LIST", "true")
        .env("BILGE_TARGET", &junk)
        .assert()
        .success()
        .stdout(predicate::str::contains("Listing junk:"));

    assert_eq!(fingerprint(home.path()), before);
}

#[test]
fn test_env_dry_run_changes_nothing() {
    let home = tempdir().unwrap();
    let junk = home.path().join("junk");
    write_bytes(junk.join("x"), 7);
    let before = fingerprint(home.path());

    bilge_pump(home.path())
        .env("BILGE_DRY_RUN", "true")
        .args(["--target", "~/junk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DRY RUN"));

    assert_eq!(fingerprint(home.path()), before);
}

#[test]
fn test_inaccessible_target_is_not_reported_missing() {
    let home = tempdir().unwrap();
    write_bytes(home.path().join("plain.txt"), 3);

    bilge_pump(home.path())
        .arg("--target")
        .arg(home.path().join("plain.txt/inside"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Cannot access target"))
        .stdout(predicate::str::contains("does not exist").not());
}
