//! Dry-run integration tests: nothing on disk changes, the log still
//! reflects what would have happened.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_dry_run_creates_nothing() {
    let src = TempDir::new().unwrap();
    let parent = TempDir::new().unwrap();
    let dst = parent.path().join("never-created");
    let logs = TempDir::new().unwrap();

    fs::create_dir_all(src.path().join("sub")).unwrap();
    fs::write(src.path().join("a.txt"), "a").unwrap();
    fs::write(src.path().join("sub/b.txt"), "b").unwrap();

    let mut cmd = cargo_bin_cmd!("prunecopy");
    cmd.arg(src.path())
        .arg("--dest")
        .arg(&dst)
        .arg("--dry-run")
        .arg("--log-dir")
        .arg(logs.path())
        .assert()
        .success();

    assert!(!dst.exists());

    let contents = read_log(logs.path());
    assert!(contents.contains("Dry run enabled"));
    assert!(contents.contains("2 copied, 0 skipped, 0 failed"));
}

#[test]
fn test_dry_run_emits_same_copied_records_as_real_run() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    let dry_logs = TempDir::new().unwrap();
    let real_logs = TempDir::new().unwrap();

    fs::create_dir_all(src.path().join("sub")).unwrap();
    fs::write(src.path().join("a.txt"), "a").unwrap();
    fs::write(src.path().join("sub/b.txt"), "b").unwrap();

    let mut dry = cargo_bin_cmd!("prunecopy");
    dry.arg(src.path())
        .arg("--dest")
        .arg(dst.path())
        .arg("--dry-run")
        .arg("--log-dir")
        .arg(dry_logs.path())
        .assert()
        .success();

    let mut real = cargo_bin_cmd!("prunecopy");
    real.arg(src.path())
        .arg("--dest")
        .arg(dst.path())
        .arg("--log-dir")
        .arg(real_logs.path())
        .assert()
        .success();

    assert_eq!(
        copied_lines(&read_log(dry_logs.path())),
        copied_lines(&read_log(real_logs.path()))
    );
}

#[test]
fn test_dry_run_does_not_delete_target_first() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::write(src.path().join("a.txt"), "a").unwrap();
    fs::write(dst.path().join("precious.txt"), "keep me").unwrap();

    let mut cmd = cargo_bin_cmd!("prunecopy");
    cmd.arg(src.path())
        .arg("--dest")
        .arg(dst.path())
        .arg("--dry-run")
        .arg("--delete-target-first")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dst.path().join("precious.txt")).unwrap(),
        "keep me"
    );
}

#[test]
fn test_delete_target_first_clears_destination() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::write(src.path().join("a.txt"), "a").unwrap();
    fs::write(dst.path().join("stale.txt"), "stale").unwrap();

    let mut cmd = cargo_bin_cmd!("prunecopy");
    cmd.arg(src.path())
        .arg("--dest")
        .arg(dst.path())
        .arg("--delete-target-first")
        .assert()
        .success();

    assert!(!dst.path().join("stale.txt").exists());
    assert!(dst.path().join("a.txt").exists());
}

#[test]
fn test_dry_run_still_prompts_on_existing_conflicts() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::write(src.path().join("a.txt"), "new").unwrap();
    fs::write(dst.path().join("a.txt"), "old").unwrap();

    let mut cmd = cargo_bin_cmd!("prunecopy");
    cmd.arg(src.path())
        .arg("--dest")
        .arg(dst.path())
        .arg("--dry-run")
        .write_stdin("y\n")
        .assert()
        .success();

    // Approved overwrite, but dry-run: nothing written.
    assert_eq!(fs::read_to_string(dst.path().join("a.txt")).unwrap(), "old");
}

fn copied_lines(log: &str) -> Vec<String> {
    let mut lines: Vec<String> = log
        .lines()
        .filter(|line| line.starts_with("[Copied"))
        .map(str::to_string)
        .collect();
    lines.sort();
    lines
}

fn read_log(log_dir: &Path) -> String {
    let entry = fs::read_dir(log_dir)
        .unwrap()
        .flatten()
        .find(|entry| entry.file_name().to_string_lossy().starts_with("prunecopy_"))
        .unwrap();
    fs::read_to_string(entry.path()).unwrap()
}
