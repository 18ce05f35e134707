//! Preset persistence integration tests.
//!
//! Every command points `PRUNECOPY_PRESET_DIR` at a per-test directory so
//! tests never touch the real user configuration.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_save_preset_then_rerun_from_it() {
    let presets = TempDir::new().unwrap();
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::write(src.path().join("a.rs"), "a").unwrap();
    fs::write(src.path().join("skip.md"), "m").unwrap();

    let mut save = cargo_bin_cmd!("prunecopy");
    save.env("PRUNECOPY_PRESET_DIR", presets.path())
        .arg(src.path())
        .arg("--dest")
        .arg(dst.path())
        .arg("--include")
        .arg("*.rs")
        .arg("--save-preset")
        .arg("rust-only")
        .assert()
        .success();

    assert!(dst.path().join("a.rs").exists());
    assert!(presets.path().join("rust-only.json").exists());

    // New source content; the preset must reproduce the same filtered run.
    fs::write(src.path().join("b.rs"), "b").unwrap();
    fs::write(src.path().join("more.md"), "m").unwrap();

    let mut rerun = cargo_bin_cmd!("prunecopy");
    rerun
        .env("PRUNECOPY_PRESET_DIR", presets.path())
        .arg("--preset")
        .arg("rust-only")
        .write_stdin("a\n")
        .assert()
        .success();

    assert!(dst.path().join("b.rs").exists());
    assert!(!dst.path().join("skip.md").exists());
    assert!(!dst.path().join("more.md").exists());
}

#[test]
fn test_saved_preset_is_json_with_args_array() {
    let presets = TempDir::new().unwrap();
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::write(src.path().join("a.txt"), "a").unwrap();

    let mut cmd = cargo_bin_cmd!("prunecopy");
    cmd.env("PRUNECOPY_PRESET_DIR", presets.path())
        .arg(src.path())
        .arg("--dest")
        .arg(dst.path())
        .arg("--flatten")
        .arg("--save-preset")
        .arg("flat")
        .assert()
        .success();

    let raw = fs::read_to_string(presets.path().join("flat.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let args = value.get("args").and_then(|v| v.as_array()).unwrap();
    assert!(args.iter().any(|a| a == "--flatten"));
    assert!(args.iter().any(|a| a == "--dest"));
}

#[test]
fn test_list_presets() {
    let presets = TempDir::new().unwrap();
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::write(src.path().join("a.txt"), "a").unwrap();

    let mut save = cargo_bin_cmd!("prunecopy");
    save.env("PRUNECOPY_PRESET_DIR", presets.path())
        .arg(src.path())
        .arg("--dest")
        .arg(dst.path())
        .arg("--save-preset")
        .arg("mine")
        .assert()
        .success();

    let mut list = cargo_bin_cmd!("prunecopy");
    list.env("PRUNECOPY_PRESET_DIR", presets.path())
        .arg("--list-presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available presets:"))
        .stdout(predicate::str::contains("mine"));
}

#[test]
fn test_list_presets_empty() {
    let presets = TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("prunecopy");
    cmd.env("PRUNECOPY_PRESET_DIR", presets.path())
        .arg("--list-presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("No presets found"));
}

#[test]
fn test_show_preset_prints_stored_args() {
    let presets = TempDir::new().unwrap();
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::write(src.path().join("a.txt"), "a").unwrap();

    let mut save = cargo_bin_cmd!("prunecopy");
    save.env("PRUNECOPY_PRESET_DIR", presets.path())
        .arg(src.path())
        .arg("--dest")
        .arg(dst.path())
        .arg("--no-overwrite")
        .arg("--save-preset")
        .arg("mine")
        .assert()
        .success();

    let mut show = cargo_bin_cmd!("prunecopy");
    show.env("PRUNECOPY_PRESET_DIR", presets.path())
        .arg("--show-preset")
        .arg("mine")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dest"))
        .stdout(predicate::str::contains("--no-overwrite"));
}

#[test]
fn test_unknown_preset_exits_with_code_2() {
    let presets = TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("prunecopy");
    cmd.env("PRUNECOPY_PRESET_DIR", presets.path())
        .arg("--preset")
        .arg("nope")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("could not be found"));
}

#[test]
fn test_corrupt_preset_exits_with_code_2() {
    let presets = TempDir::new().unwrap();
    fs::write(presets.path().join("bad.json"), r#"{"flags": []}"#).unwrap();

    let mut cmd = cargo_bin_cmd!("prunecopy");
    cmd.env("PRUNECOPY_PRESET_DIR", presets.path())
        .arg("--preset")
        .arg("bad")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("missing 'args'"));
}
