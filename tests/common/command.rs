use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

/// An initialized repository with two committed files (1.txt, 2.txt)
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let file1 = FileSpec::new(repository_dir.path().join("1.txt"), "one".to_string());
    write_file(file1);

    let file2 = FileSpec::new(repository_dir.path().join("2.txt"), "two".to_string());
    write_file(file2);

    run_jot_command(repository_dir.path(), &["add", "1.txt", "2.txt"])
        .assert()
        .success();

    jot_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

pub fn run_jot_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("jot").expect("Failed to find jot binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn jot_commit(dir: &Path, message: &str) -> Command {
    run_jot_command(dir, &["commit", "-m", message])
}

/// Read the active branch pointer from the branch table
pub fn get_main_pointer(dir: &Path) -> String {
    let main_path = dir.join(".jot").join("branches").join("main");
    std::fs::read_to_string(main_path)
        .expect("Failed to read the main branch file")
        .trim()
        .to_string()
}

/// Extract the commit id from jot's commit output ("[<id>] <message>")
pub fn parse_commit_id(stdout: &[u8]) -> String {
    let output = String::from_utf8_lossy(stdout);
    let start = output.find('[').expect("commit output missing '['") + 1;
    let end = output.find(']').expect("commit output missing ']'");

    output[start..end]
        .trim_start_matches("(root-commit) ")
        .to_string()
}

/// List the file names currently staged
pub fn list_staged_files(dir: &Path) -> Vec<String> {
    let staging_path = dir.join(".jot").join("staging");
    let mut names = std::fs::read_dir(staging_path)
        .expect("Failed to read the staging directory")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect::<Vec<_>>();
    names.sort();
    names
}
