use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn extract_commands() -> Command {
    Command::cargo_bin("extract-commands").unwrap()
}

#[test]
fn prints_command_list_from_table() {
    let temp_dir = TempDir::new().unwrap();
    let table = "\
| Command | Description |
|---------|-------------|
| \\frac | fraction |
| \\sqrt | square root |
| notacommand | plain cell |
| \\CmdOne extra text
";
    fs::write(temp_dir.path().join("commands.md"), table).unwrap();

    extract_commands()
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout("[\"frac\", \"sqrt\", \"CmdOne\"]\n");
}

#[test]
fn empty_table_prints_empty_list() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("commands.md"), "# No table here\n").unwrap();

    extract_commands()
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn missing_input_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    extract_commands()
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("commands.md"));
}
