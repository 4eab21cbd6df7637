//! Integration tests for init command

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{tagpages_cmd, write_file};

#[test]
fn test_init_creates_project_structure() {
    let temp = TempDir::new().unwrap();

    tagpages_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized tagpages project at"));

    assert!(temp.path().join(".tagpages").is_dir());
    assert!(temp.path().join(".tagpages/config.toml").is_file());
    assert!(temp.path().join("tags.toml").is_file());
    assert!(temp.path().join("content").is_dir());
}

#[test]
fn test_init_twice_fails() {
    let temp = TempDir::new().unwrap();

    tagpages_cmd().arg("init").arg(temp.path()).assert().success();

    tagpages_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_init_with_locale() {
    let temp = TempDir::new().unwrap();

    tagpages_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--locale")
        .arg("de")
        .assert()
        .success()
        .stdout(predicate::str::contains("Locale: de"));

    tagpages_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("locale")
        .assert()
        .success()
        .stdout(predicate::str::contains("de"));
}

#[test]
fn test_init_creates_missing_directory() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("site");

    tagpages_cmd().arg("init").arg(&target).assert().success();

    assert!(target.join(".tagpages").is_dir());
}

#[test]
fn test_init_keeps_existing_registry() {
    let temp = TempDir::new().unwrap();
    write_file(
        temp.path(),
        "tags.toml",
        "[[tags]]\n\
         key = \"css\"\n\
         title = \"CSS\"\n\
         description = \"Style\"\n\
         href = \"/tags/css/\"\n",
    );

    tagpages_cmd().arg("init").arg(temp.path()).assert().success();

    let registry = std::fs::read_to_string(temp.path().join("tags.toml")).unwrap();
    assert!(registry.contains("key = \"css\""));
}
