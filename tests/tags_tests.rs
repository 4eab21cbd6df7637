//! Integration tests for tags command

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{tagpages_cmd, write_file};

fn init_project(temp: &TempDir) {
    tagpages_cmd().arg("init").arg(temp.path()).assert().success();
}

#[test]
fn test_tags_no_tags_found() {
    let temp = TempDir::new().unwrap();
    init_project(&temp);

    tagpages_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tags found"));
}

#[test]
fn test_tags_lists_unique_sorted_keys() {
    let temp = TempDir::new().unwrap();
    init_project(&temp);

    write_file(
        temp.path(),
        "content/one.md",
        "+++\ntags = [\"performance\", \"css\"]\n+++\n",
    );
    write_file(temp.path(), "content/two.md", "+++\ntags = [\"css\", \"a11y\"]\n+++\n");

    let output = tagpages_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["a11y", "css", "performance"]);
}

#[test]
fn test_tags_excludes_draft_only_tags() {
    let temp = TempDir::new().unwrap();
    init_project(&temp);

    write_file(temp.path(), "content/live.md", "+++\ntags = [\"css\"]\n+++\n");
    write_file(
        temp.path(),
        "content/wip.md",
        "+++\ndraft = true\ntags = [\"webgl\"]\n+++\n",
    );

    tagpages_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("css"))
        .stdout(predicate::str::contains("webgl").not());
}

#[test]
fn test_tags_drafts_flag_includes_all_content() {
    let temp = TempDir::new().unwrap();
    init_project(&temp);

    write_file(
        temp.path(),
        "content/wip.md",
        "+++\ndraft = true\ntags = [\"webgl\"]\n+++\n",
    );

    tagpages_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .arg("--drafts")
        .assert()
        .success()
        .stdout(predicate::str::contains("webgl"));
}

#[test]
fn test_tags_outside_project_fails() {
    let temp = TempDir::new().unwrap();

    tagpages_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a tagpages project"));
}
