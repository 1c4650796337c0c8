//! End-to-end tests for the `expense` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_TRACKER_DATA_DIR", data_dir.path());
    cmd.env_remove("EXPENSE_TRACKER_LOG");
    cmd
}

const LOGIN: &str = "1\nalice1\nPassw0rd\n2\nalice1\nPassw0rd\n";

#[test]
fn budget_scenario() {
    let dir = TempDir::new().unwrap();
    let script = format!(
        "1\nalice1\nweak\n{}1\nfood\nlunch\n12.50\n2024-03-15\n6\n9\n10\n11\n12\n",
        LOGIN
    );

    expense(&dir)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Password must be at least 8 characters long"))
        .stdout(predicate::str::contains("Registration successful. Please login."))
        .stdout(predicate::str::contains("Login successful. Welcome, alice1!"))
        .stdout(predicate::str::contains("Expense added with ID: 1"))
        .stdout(predicate::str::contains("Total Expenses: $12.50"))
        .stdout(predicate::str::contains(
            "You have exceeded your monthly budget by $2.50",
        ))
        .stdout(predicate::str::contains("Logging out..."));

    let users = std::fs::read_to_string(dir.path().join("data").join("users.txt")).unwrap();
    assert_eq!(users, "alice1 Passw0rd\n");

    let expenses = std::fs::read_to_string(dir.path().join("data").join("expenses.txt")).unwrap();
    assert_eq!(expenses, "1 food lunch 12.5 2024-03-15\n");
}

#[test]
fn data_survives_restart() {
    let dir = TempDir::new().unwrap();
    expense(&dir)
        .write_stdin(format!(
            "{}1\ngroceries\nweekly shop\n40\n2024-03-02\n12\n",
            LOGIN
        ))
        .assert()
        .success();

    expense(&dir)
        .write_stdin("2\nalice1\nPassw0rd\n3\n1\nrent\nmarch\n800\n2024-03-01\n12\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("weekly shop"))
        .stdout(predicate::str::contains("Expense added with ID: 2"));
}

#[test]
fn invalid_date_is_retried() {
    let dir = TempDir::new().unwrap();
    expense(&dir)
        .write_stdin(format!(
            "{}1\nfood\nlunch\n12.50\n2024-02-30\n2024-03-15\n12\n",
            LOGIN
        ))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid date format. Please use YYYY-MM-DD.",
        ))
        .stdout(predicate::str::contains("Expense added with ID: 1"));
}

#[test]
fn end_of_input_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    expense(&dir)
        .write_stdin(format!("{}1\nfood\n", LOGIN))
        .assert()
        .success();
}

#[test]
fn exit_from_login_menu() {
    let dir = TempDir::new().unwrap();
    expense(&dir)
        .arg("shell")
        .write_stdin("7\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Please try again."))
        .stdout(predicate::str::contains("Exiting..."));
}

#[test]
fn export_csv_to_stdout() {
    let dir = TempDir::new().unwrap();
    expense(&dir)
        .write_stdin(format!(
            "{}1\nfood\nlunch with friends\n12.50\n2024-03-15\n12\n",
            LOGIN
        ))
        .assert()
        .success();

    expense(&dir)
        .args(["export", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "ID,Date,Category,Description,Amount\n",
        ))
        .stdout(predicate::str::contains(
            "1,2024-03-15,food,lunch with friends,12.50",
        ));
}

#[test]
fn config_init_writes_settings() {
    let dir = TempDir::new().unwrap();
    expense(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Password storage: plaintext"));

    let settings = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(settings.contains("\"currency_symbol\": \"$\""));
}

#[test]
fn history_lists_changes() {
    let dir = TempDir::new().unwrap();
    expense(&dir)
        .write_stdin(format!("{}1\nfood\nlunch\n12.50\n2024-03-15\n12\n", LOGIN))
        .assert()
        .success();

    expense(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("User alice1"))
        .stdout(predicate::str::contains("Expense 1 (lunch) by alice1"));
}
