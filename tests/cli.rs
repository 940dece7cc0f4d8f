use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(base: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_TRACKER_DIR", base)
        .env_remove("EXPENSES_FILE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn add_then_list_uses_configured_data_file() {
    let temp_dir = TempDir::new().unwrap();

    expenses(temp_dir.path())
        .args(["add", "10.50", "-c", "food", "-d", "2024-03-01", "-n", "lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense id=1"));

    expenses(temp_dir.path())
        .args(["add", "-c", "food", "-d", "2024-03-09", "--", "-2.00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense id=2"));

    let data = fs::read_to_string(temp_dir.path().join("expenses.db")).unwrap();
    assert_eq!(data, "1|2024-03-01|food|10.50|lunch\n2|2024-03-09|food|-2.00|\n");

    expenses(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "  1 | 2024-03-01 | food       |    10.50 | lunch",
        ))
        .stdout(predicate::str::contains("   -2.00"));
}

#[test]
fn explicit_file_overrides_settings() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("custom.db");
    fs::write(&data_file, "5|2024-01-15|rent|900.00|\nbroken line\n").unwrap();

    expenses(temp_dir.path())
        .arg("--file")
        .arg(&data_file)
        .args(["add", "3", "-c", "misc", "-d", "2024-01-20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense id=6"));

    let data = fs::read_to_string(&data_file).unwrap();
    assert_eq!(data, "5|2024-01-15|rent|900.00|\n6|2024-01-20|misc|3.00|\n");
    assert!(!temp_dir.path().join("expenses.db").exists());
}

#[test]
fn explicit_file_ignores_malformed_settings() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("settings.json"), "not json").unwrap();
    let data_file = temp_dir.path().join("custom.db");

    expenses(temp_dir.path())
        .arg("--file")
        .arg(&data_file)
        .args(["add", "1.25", "-c", "misc", "-d", "2024-02-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense id=1"));
    assert!(data_file.exists());

    expenses(temp_dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn month_and_report() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("expenses.db"),
        "1|2024-03-01|food|10.50|\n2|2024-03-15|food|4.25|\n3|2024-04-01|rent|900.00|\n4|2024|odd|1.00|\n",
    )
    .unwrap();

    expenses(temp_dir.path())
        .args(["month", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-01"))
        .stdout(predicate::str::contains("2024-03-15"))
        .stdout(predicate::str::contains("2024-04-01").not());

    expenses(temp_dir.path())
        .args(["report", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("food         -> 14.75"))
        .stdout(predicate::str::contains("Total -> 14.75"));

    expenses(temp_dir.path())
        .args(["report", "1999-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data for 1999-01"));
}

#[test]
fn edit_and_remove() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("expenses.db");
    fs::write(&data_file, "1|2024-03-01|food|10.50|lunch\n").unwrap();

    expenses(temp_dir.path())
        .args(["edit", "1", "--amount", "12", "--note", "dinner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Amount:   12.00"));
    assert_eq!(
        fs::read_to_string(&data_file).unwrap(),
        "1|2024-03-01|food|12.00|dinner\n"
    );

    expenses(temp_dir.path())
        .args(["remove", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found: 7"));

    expenses(temp_dir.path())
        .args(["remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed expense 1"));
    assert_eq!(fs::read_to_string(&data_file).unwrap(), "");
}

#[test]
fn invalid_amount_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    expenses(temp_dir.path())
        .args(["add", "lots", "-c", "food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    assert!(!temp_dir.path().join("expenses.db").exists());
}

#[test]
fn interactive_shell_from_stdin() {
    let temp_dir = TempDir::new().unwrap();

    expenses(temp_dir.path())
        .write_stdin("2\n2024-05-02\nbooks\n19.99\nnovel\n1\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== ExpenseTracker ==="))
        .stdout(predicate::str::contains("Added expense id=1"))
        .stdout(predicate::str::contains("Goodbye."));

    let data = fs::read_to_string(temp_dir.path().join("expenses.db")).unwrap();
    assert_eq!(data, "1|2024-05-02|books|19.99|novel\n");
}

#[test]
fn config_shows_paths() {
    let temp_dir = TempDir::new().unwrap();

    expenses(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense Tracker Configuration"))
        .stdout(predicate::str::contains("expenses.db"));
}
