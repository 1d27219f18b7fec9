use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::{Word, Words};
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::Value;

mod common;

use common::command::{
    get_main_pointer, jot_commit, list_staged_files, parse_commit_id, repository_dir,
    run_jot_command,
};
use common::file::{FileSpec, write_file};

#[rstest]
fn commit_drains_the_staging_area(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let file_count = (1..=5).fake::<usize>();
    for _ in 0..file_count {
        let file_name = format!("{}.txt", Word().fake::<String>());
        let file_content = Words(5..10).fake::<Vec<String>>().join(" ");
        write_file(FileSpec::new(
            repository_dir.path().join(&file_name),
            file_content,
        ));
        run_jot_command(repository_dir.path(), &["add", &file_name])
            .assert()
            .success();
    }

    jot_commit(repository_dir.path(), "snapshot")
        .assert()
        .success();

    assert!(list_staged_files(repository_dir.path()).is_empty());

    Ok(())
}

#[rstest]
fn commit_advances_the_active_branch_pointer(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    assert_eq!(get_main_pointer(repository_dir.path()), "0");

    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "alpha".to_string(),
    ));
    run_jot_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    let output = jot_commit(repository_dir.path(), "first")
        .assert()
        .success()
        .stdout(predicate::str::contains("(root-commit) "))
        .get_output()
        .clone();
    let commit_id = parse_commit_id(&output.stdout);

    assert_eq!(get_main_pointer(repository_dir.path()), commit_id);

    // the snapshot is stored under the identifier
    let commit_path = repository_dir
        .path()
        .join(".jot")
        .join("commits")
        .join(&commit_id);
    assert_eq!(std::fs::read_to_string(commit_path.join("a.txt"))?, "alpha");

    Ok(())
}

#[rstest]
fn commit_with_empty_staging_set_is_permitted(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let output = jot_commit(repository_dir.path(), "empty snapshot")
        .assert()
        .success()
        .get_output()
        .clone();
    let commit_id = parse_commit_id(&output.stdout);

    let metadata_path = repository_dir
        .path()
        .join(".jot")
        .join("commits")
        .join(&commit_id)
        .join("metadata.json");
    let metadata: Value = serde_json::from_str(&std::fs::read_to_string(metadata_path)?)?;

    assert_eq!(metadata["message"], "empty snapshot");
    assert_eq!(metadata["files"], Value::Array(Vec::new()));

    Ok(())
}

#[rstest]
fn commit_metadata_records_message_timestamp_and_files(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("b.txt"),
        "beta".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "alpha".to_string(),
    ));
    run_jot_command(repository_dir.path(), &["add", "b.txt", "a.txt"])
        .assert()
        .success();

    let output = jot_commit(repository_dir.path(), "two files")
        .assert()
        .success()
        .get_output()
        .clone();
    let commit_id = parse_commit_id(&output.stdout);

    let metadata_path = repository_dir
        .path()
        .join(".jot")
        .join("commits")
        .join(&commit_id)
        .join("metadata.json");
    let metadata: Value = serde_json::from_str(&std::fs::read_to_string(metadata_path)?)?;

    assert_eq!(metadata["message"], "two files");
    assert_eq!(
        metadata["files"],
        serde_json::json!(["a.txt", "b.txt"]),
        "file list is sorted"
    );
    assert!(metadata["timestamp"].is_string());

    Ok(())
}

#[rstest]
fn commits_with_different_content_get_different_identifiers(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("README.md"),
        "hello".to_string(),
    ));
    run_jot_command(repository_dir.path(), &["add", "README.md"])
        .assert()
        .success();
    let first_output = jot_commit(repository_dir.path(), "init")
        .assert()
        .success()
        .get_output()
        .clone();

    write_file(FileSpec::new(
        repository_dir.path().join("README.md"),
        "world".to_string(),
    ));
    run_jot_command(repository_dir.path(), &["add", "README.md"])
        .assert()
        .success();
    let second_output = jot_commit(repository_dir.path(), "update")
        .assert()
        .success()
        .get_output()
        .clone();

    assert_ne!(
        parse_commit_id(&first_output.stdout),
        parse_commit_id(&second_output.stdout)
    );

    Ok(())
}

#[rstest]
fn log_lists_commits_in_ascending_identifier_order(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let mut commit_ids = Vec::new();
    for i in 0..3 {
        let file_name = format!("file{}.txt", i);
        write_file(FileSpec::new(
            repository_dir.path().join(&file_name),
            format!("content {}", i),
        ));
        run_jot_command(repository_dir.path(), &["add", &file_name])
            .assert()
            .success();
        let output = jot_commit(repository_dir.path(), &format!("commit {}", i))
            .assert()
            .success()
            .get_output()
            .clone();
        commit_ids.push(parse_commit_id(&output.stdout));
    }

    let output = run_jot_command(repository_dir.path(), &["log"])
        .assert()
        .success()
        .get_output()
        .clone();
    let log = String::from_utf8(output.stdout)?;

    let logged_ids = log
        .lines()
        .filter_map(|line| line.strip_prefix("commit "))
        .map(str::to_string)
        .collect::<Vec<_>>();

    commit_ids.sort();
    assert_eq!(logged_ids, commit_ids, "log is in identifier order");

    Ok(())
}

#[rstest]
fn log_shows_message_and_file_list(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_jot_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("README.md"),
        "hello".to_string(),
    ));
    run_jot_command(repository_dir.path(), &["add", "README.md"])
        .assert()
        .success();
    jot_commit(repository_dir.path(), "init").assert().success();

    run_jot_command(repository_dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Files: README.md"))
        .stdout(predicate::str::contains("    init"));

    Ok(())
}
