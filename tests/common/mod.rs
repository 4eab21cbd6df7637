use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn tagpages_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tagpages").unwrap();
    cmd.env_remove("TAGPAGES_ROOT");
    cmd
}

pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
