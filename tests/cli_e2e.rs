use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn mason(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mason").unwrap();
    cmd.env("MASON_CONFIG_DIR", home.join("config"))
        .env_remove("MASON_DATA_DIR")
        .env_remove("MASON_BIRTHDAY_WINDOW")
        .env_remove("MASON_CONTACTS_FILE")
        .env_remove("MASON_NOTES_FILE")
        .env_remove("MASON_LOG")
        .arg("--data-dir")
        .arg(home.join("data"));
    cmd
}

#[test]
fn test_contact_lifecycle() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    mason(home)
        .args(["contact", "add", "Jane", "Doe", "-p", "1234567890", "-b", "15.03.1990"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added: Jane Doe"));

    assert!(home.join("data").join("contacts.json").exists());

    mason(home)
        .args(["contact", "search", "jane"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"))
        .stdout(predicate::str::contains("1234567890"));

    // Names are unique
    mason(home)
        .args(["contact", "add", "Jane", "Doe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    mason(home)
        .args(["contact", "edit", "Jane", "Doe", "--add-phone", "0987654321"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact updated: Jane Doe"));

    mason(home)
        .args(["contact", "search", "0987", "--field", "phone"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe"));

    mason(home)
        .args(["contact", "delete", "Jane", "Doe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted: Jane Doe"));

    mason(home)
        .args(["contact", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."));
}

#[test]
fn test_invalid_contact_is_not_saved() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    mason(home)
        .args(["contact", "add", "Bob", "-p", "12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid phone"));

    mason(home)
        .args(["contact", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."));
}

#[test]
fn test_birthdays_window() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    mason(home)
        .args(["contact", "add", "Amy", "-b", "1990-07-01"])
        .assert()
        .success();

    // A window longer than a year always contains the next celebration
    mason(home)
        .args(["birthdays", "400"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Amy").and(predicate::str::contains("turns")));

    mason(home)
        .args(["birthdays", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a number of days"));

    mason(home)
        .args(["birthdays", "soon"])
        .assert()
        .failure();
}

#[test]
fn test_note_lifecycle() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();

    mason(home)
        .args(["note", "add", "Groceries", "-b", "milk and eggs", "-t", "home, errands"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note added: Groceries"));

    mason(home)
        .args(["note", "search", "errands", "--field", "tags"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"));

    mason(home)
        .args(["note", "add"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("title or a body"));

    mason(home)
        .args(["note", "edit", "Groceries", "--title", "Shopping"])
        .assert()
        .success();

    mason(home)
        .args(["note", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shopping"))
        .stdout(predicate::str::contains("Groceries").not());
}

#[test]
fn test_unknown_field_is_reported() {
    let temp_dir = tempfile::tempdir().unwrap();

    mason(temp_dir.path())
        .args(["contact", "search", "x", "--field", "nickname"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid contact field"));
}

#[test]
fn test_config_lists_effective_values() {
    let temp_dir = tempfile::tempdir().unwrap();
    let home = temp_dir.path();
    std::fs::create_dir_all(home.join("config")).unwrap();
    std::fs::write(home.join("config").join("mason.toml"), "birthday_window = 14\n").unwrap();

    mason(home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("birthday_window"))
        .stdout(predicate::str::contains("14"));
}
