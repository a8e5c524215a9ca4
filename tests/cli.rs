use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn medidesk(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("medidesk").unwrap();
    cmd.arg("--data-dir").arg(dir.path());
    cmd
}

#[test]
fn add_then_list_patient() {
    let dir = TempDir::new().unwrap();

    medidesk(&dir)
        .args(["patient", "add", "Jane Doe", "34", "Female", "9876543210"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Patient added successfully with ID: 1",
        ));

    medidesk(&dir)
        .args(["patient", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ID: 1, Name: Jane Doe, Age: 34, Gender: Female, Contact: 9876543210",
        ));
}

#[test]
fn invalid_contact_is_reported_and_nothing_is_written() {
    let dir = TempDir::new().unwrap();

    medidesk(&dir)
        .args(["patient", "add", "Jane Doe", "34", "Female", "123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid contact number."));

    medidesk(&dir)
        .args(["patient", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No patients found."));
}

#[test]
fn non_numeric_age_is_rejected_at_the_boundary() {
    let dir = TempDir::new().unwrap();

    medidesk(&dir)
        .args(["patient", "add", "Jane Doe", "old", "Female", "9876543210"])
        .assert()
        .failure();
}

#[test]
fn appointment_requires_existing_patient_and_doctor() {
    let dir = TempDir::new().unwrap();

    medidesk(&dir)
        .args(["appointment", "add", "1", "1", "2024-03-15", "10:30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid patient ID."));

    medidesk(&dir)
        .args(["appointment", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No appointments found."));
}

#[test]
fn appointment_listing_resolves_names() {
    let dir = TempDir::new().unwrap();

    medidesk(&dir)
        .args(["patient", "add", "John Roe", "40", "Male", "1234567890"])
        .assert()
        .success();
    medidesk(&dir)
        .args(["doctor", "add", "Gregory House", "Diagnostics", "5556667777"])
        .assert()
        .success();
    medidesk(&dir)
        .args(["appointment", "add", "1", "1", "2024-03-15", "10:30"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Appointment scheduled successfully with ID: 1",
        ));

    medidesk(&dir)
        .args(["appointment", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ID: 1, Patient: John Roe, Doctor: Gregory House, Date: 2024-03-15, Time: 10:30",
        ));
}

#[test]
fn delete_patient_then_list_shows_the_rest() {
    let dir = TempDir::new().unwrap();

    medidesk(&dir)
        .args(["patient", "add", "Jane Doe", "34", "Female", "9876543210"])
        .assert()
        .success();
    medidesk(&dir)
        .args(["patient", "add", "John Roe", "40", "Male", "1234567890"])
        .assert()
        .success();

    medidesk(&dir)
        .args(["patient", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Patient deleted successfully."));

    medidesk(&dir)
        .args(["patient", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 2, Name: John Roe").and(
            predicate::str::contains("Jane Doe").not(),
        ));
}

#[test]
fn init_creates_the_data_directory() {
    let base = TempDir::new().unwrap();
    let data_dir = base.path().join("records");

    Command::cargo_bin("medidesk")
        .unwrap()
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized medidesk data directory"));

    assert!(data_dir.is_dir());
}
