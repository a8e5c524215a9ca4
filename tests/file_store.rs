use medidesk::error::MedideskError;
use medidesk::model::{Appointment, Doctor, Gender, Patient};
use medidesk::store::fs::FileStore;
use medidesk::store::RecordStore;
use std::fs;
use tempfile::TempDir;

fn patient(id: u32, name: &str) -> Patient {
    Patient::new(
        id,
        name.to_string(),
        34,
        Gender::Female,
        "9876543210".to_string(),
    )
}

fn setup() -> (TempDir, FileStore<Patient>) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());
    (dir, store)
}

#[test]
fn missing_file_loads_as_empty() {
    let (_dir, store) = setup();
    assert!(store.load_all().unwrap().is_empty());
    assert_eq!(store.next_id().unwrap(), 1);
}

#[test]
fn records_persist_across_store_instances() {
    let (dir, mut store) = setup();
    store.add(patient(1, "Jane Doe")).unwrap();
    store.add(patient(2, "John Roe")).unwrap();

    let reopened: FileStore<Patient> = FileStore::new(dir.path().to_path_buf());
    let records = reopened.load_all().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Jane Doe");
    assert_eq!(records[1].name, "John Roe");
}

#[test]
fn each_entity_type_gets_its_own_file() {
    let dir = TempDir::new().unwrap();
    let mut patients: FileStore<Patient> = FileStore::new(dir.path().to_path_buf());
    let mut doctors: FileStore<Doctor> = FileStore::new(dir.path().to_path_buf());
    let mut appointments: FileStore<Appointment> = FileStore::new(dir.path().to_path_buf());

    patients.add(patient(1, "Jane Doe")).unwrap();
    doctors
        .add(Doctor::new(
            1,
            "Gregory House".to_string(),
            "Diagnostics".to_string(),
            "1234567890".to_string(),
        ))
        .unwrap();
    appointments
        .add(Appointment::new(
            1,
            1,
            1,
            "2024-03-15".to_string(),
            "10:30".to_string(),
        ))
        .unwrap();

    assert!(dir.path().join("patients.txt").exists());
    assert!(dir.path().join("doctors.txt").exists());
    assert!(dir.path().join("appointments.txt").exists());
}

#[test]
fn one_line_per_record_in_order() {
    let (dir, mut store) = setup();
    store.add(patient(1, "Jane Doe")).unwrap();
    store.add(patient(2, "John Roe")).unwrap();

    let on_disk = fs::read_to_string(dir.path().join("patients.txt")).unwrap();
    assert_eq!(
        on_disk,
        "1,Jane Doe,34,Female,9876543210\n2,John Roe,34,Female,9876543210\n"
    );
}

#[test]
fn blank_lines_are_skipped_on_read() {
    let (dir, store) = setup();
    fs::write(
        dir.path().join("patients.txt"),
        "1,Jane Doe,34,Female,9876543210\n\n   \n2,John Roe,40,Male,1234567890\n",
    )
    .unwrap();

    let records = store.load_all().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].id, 2);
}

#[test]
fn malformed_line_fails_the_whole_load() {
    let (dir, store) = setup();
    fs::write(
        dir.path().join("patients.txt"),
        "1,Jane Doe,34,Female,9876543210\n2,John Roe\n",
    )
    .unwrap();

    let err = store.load_all().unwrap_err();
    match err {
        MedideskError::Malformed { kind, line, reason } => {
            assert_eq!(kind, "patients");
            assert_eq!(line, 2);
            assert_eq!(reason, "expected 5 fields, found 2");
        }
        other => panic!("expected Malformed, got: {}", other),
    }
}

#[test]
fn unmatched_update_rewrites_the_file_unchanged() {
    let (dir, mut store) = setup();
    store.add(patient(1, "Jane Doe")).unwrap();
    let before = fs::read_to_string(dir.path().join("patients.txt")).unwrap();

    store.update(patient(9, "Nobody")).unwrap();

    let after = fs::read_to_string(dir.path().join("patients.txt")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn delete_preserves_remaining_records_and_order() {
    let (dir, mut store) = setup();
    store.add(patient(1, "Jane Doe")).unwrap();
    store.add(patient(2, "John Roe")).unwrap();
    store.add(patient(3, "Ann Poe")).unwrap();

    store.delete(2).unwrap();

    let on_disk = fs::read_to_string(dir.path().join("patients.txt")).unwrap();
    assert_eq!(
        on_disk,
        "1,Jane Doe,34,Female,9876543210\n3,Ann Poe,34,Female,9876543210\n"
    );
    assert_eq!(store.next_id().unwrap(), 4);
}

#[test]
fn save_all_creates_the_data_directory() {
    let base = TempDir::new().unwrap();
    let nested = base.path().join("clinic").join("records");
    let mut store: FileStore<Patient> = FileStore::new(nested.clone());

    store.add(patient(1, "Jane Doe")).unwrap();
    assert!(nested.join("patients.txt").exists());
}
