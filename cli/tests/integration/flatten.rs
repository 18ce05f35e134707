//! Flatten-mode integration tests.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_flatten_collapses_structure() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::create_dir_all(src.path().join("sub")).unwrap();
    fs::write(src.path().join("sub/a.txt"), "a").unwrap();

    let mut cmd = cargo_bin_cmd!("prunecopy");
    cmd.arg(src.path())
        .arg("--dest")
        .arg(dst.path())
        .arg("--flatten")
        .assert()
        .success();

    assert!(dst.path().join("a.txt").exists());
    assert!(!dst.path().join("sub").exists());
}

#[test]
fn test_flatten_suffix_prefixes_nested_files() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::create_dir_all(src.path().join("core")).unwrap();
    fs::write(src.path().join("core/core.txt"), "nested").unwrap();

    let mut cmd = cargo_bin_cmd!("prunecopy");
    cmd.arg(src.path())
        .arg("--dest")
        .arg(dst.path())
        .arg("--flatten-suffix")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dst.path().join("core_core.txt")).unwrap(),
        "nested"
    );
}

#[test]
fn test_flatten_suffix_leaves_root_files_unprefixed() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::write(src.path().join("root.txt"), "root").unwrap();

    let mut cmd = cargo_bin_cmd!("prunecopy");
    cmd.arg(src.path())
        .arg("--dest")
        .arg(dst.path())
        .arg("--flatten-suffix")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dst.path().join("root.txt")).unwrap(),
        "root"
    );
}

#[test]
fn test_flatten_suffix_joins_deep_paths_with_underscores() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::create_dir_all(src.path().join("a/b")).unwrap();
    fs::write(src.path().join("a/b/c.txt"), "deep").unwrap();

    let mut cmd = cargo_bin_cmd!("prunecopy");
    cmd.arg(src.path())
        .arg("--dest")
        .arg(dst.path())
        .arg("--flatten-suffix")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dst.path().join("a_b_c.txt")).unwrap(),
        "deep"
    );
}

#[test]
fn test_auto_rename_keeps_both_colliding_files() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::create_dir_all(src.path().join("one")).unwrap();
    fs::create_dir_all(src.path().join("two")).unwrap();
    fs::write(src.path().join("one/same.txt"), "first").unwrap();
    fs::write(src.path().join("two/same.txt"), "second").unwrap();

    let mut cmd = cargo_bin_cmd!("prunecopy");
    cmd.arg(src.path())
        .arg("--dest")
        .arg(dst.path())
        .arg("--flatten")
        .arg("--auto-rename")
        .assert()
        .success();

    // Traversal order is platform enumeration order, so either file may
    // land under the bare name; both contents must survive.
    let plain = fs::read_to_string(dst.path().join("same.txt")).unwrap();
    let renamed = fs::read_to_string(dst.path().join("same(1).txt")).unwrap();
    let mut contents = vec![plain, renamed];
    contents.sort();
    assert_eq!(contents, vec!["first".to_string(), "second".to_string()]);
}

#[test]
fn test_auto_rename_counts_past_taken_suffixes() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();

    fs::write(src.path().join("same.txt"), "incoming").unwrap();
    fs::write(dst.path().join("same.txt"), "existing").unwrap();
    fs::write(dst.path().join("same(1).txt"), "also existing").unwrap();

    let mut cmd = cargo_bin_cmd!("prunecopy");
    cmd.arg(src.path())
        .arg("--dest")
        .arg(dst.path())
        .arg("--flatten")
        .arg("--auto-rename")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dst.path().join("same(2).txt")).unwrap(),
        "incoming"
    );
    assert_eq!(
        fs::read_to_string(dst.path().join("same.txt")).unwrap(),
        "existing"
    );
}
