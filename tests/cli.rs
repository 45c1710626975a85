use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budgetease(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budgetease").unwrap();
    cmd.env("BUDGETEASE_DATA_DIR", temp_dir.path());
    cmd.env_remove("BUDGETEASE_LOG");
    cmd
}

#[test]
fn test_summary_reflects_added_income_and_expenses() {
    let temp_dir = TempDir::new().unwrap();

    budgetease(&temp_dir)
        .args(["income", "add", "Student Loan", "450", "--frequency", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added income: Student Loan"));

    budgetease(&temp_dir)
        .args(["income", "add", "Tutoring", "200", "--frequency", "weekly"])
        .assert()
        .success();

    budgetease(&temp_dir)
        .args(["expense", "add", "Rent", "500", "--category", "accommodation"])
        .assert()
        .success();

    // 450 + 200 * 4.33 = 1316.00
    budgetease(&temp_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("£1316.00"))
        .stdout(predicate::str::contains("£500.00"))
        .stdout(predicate::str::contains("£816.00"));

    assert!(temp_dir.path().join("data").join("budgetease_data.json").exists());
}

#[test]
fn test_invalid_amount_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    budgetease(&temp_dir)
        .args(["expense", "add", "Lunch", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));

    budgetease(&temp_dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses yet."));
}

#[test]
fn test_chart_and_activity_when_empty() {
    let temp_dir = TempDir::new().unwrap();

    budgetease(&temp_dir)
        .arg("chart")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expense data to display"));

    budgetease(&temp_dir)
        .arg("activity")
        .assert()
        .success()
        .stdout(predicate::str::contains("No activity yet"));
}

#[test]
fn test_todo_workflow() {
    let temp_dir = TempDir::new().unwrap();

    budgetease(&temp_dir)
        .args(["todo", "add", "Buy milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added todo"));

    budgetease(&temp_dir)
        .args(["todo", "add", "Submit essay", "--priority", "high"])
        .assert()
        .success();

    budgetease(&temp_dir)
        .args(["todo", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"))
        .stdout(predicate::str::contains("Total todos: 2  Active: 2  Completed: 0"));

    budgetease(&temp_dir)
        .args(["todo", "list", "--filter", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos to show."));

    budgetease(&temp_dir)
        .args(["todo", "filter", "everything"])
        .assert()
        .failure();
}

#[test]
fn test_reset_clears_saved_data() {
    let temp_dir = TempDir::new().unwrap();

    budgetease(&temp_dir)
        .args(["savings", "add", "Laptop", "1000", "--current", "350"])
        .assert()
        .success();

    budgetease(&temp_dir)
        .args(["savings", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("35.0%"));

    budgetease(&temp_dir).arg("reset").assert().success();

    budgetease(&temp_dir)
        .args(["savings", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No savings goals yet."));
}

#[test]
fn test_corrupt_data_file_starts_fresh() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("budgetease_data.json"), "{not json").unwrap();

    budgetease(&temp_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("£0.00"));
}

#[test]
fn test_config_shows_data_directory() {
    let temp_dir = TempDir::new().unwrap();

    budgetease(&temp_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol:       £"));

    assert!(temp_dir.path().join("config.json").exists());
}
