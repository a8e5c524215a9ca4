use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Gender, Patient};
use crate::store::RecordStore;
use crate::validate;

/// Fields are checked in declaration order and the first failure wins;
/// nothing is persisted unless every check passes.
pub fn add<S: RecordStore<Patient>>(
    store: &mut S,
    name: String,
    age: u32,
    gender: &str,
    contact: String,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !validate::is_valid_name(&name) {
        result.add_message(CmdMessage::error("Invalid name."));
        return Ok(result);
    }
    if !validate::is_valid_age(age) {
        result.add_message(CmdMessage::error("Invalid age."));
        return Ok(result);
    }
    let gender: Gender = match gender.parse() {
        Ok(gender) => gender,
        Err(_) => {
            result.add_message(CmdMessage::error("Invalid gender."));
            return Ok(result);
        }
    };
    if !validate::is_valid_contact(&contact) {
        result.add_message(CmdMessage::error("Invalid contact number."));
        return Ok(result);
    }

    let id = store.next_id()?;
    store.add(Patient::new(id, name, age, gender, contact))?;

    result.new_id = Some(id);
    result.add_message(CmdMessage::success(format!(
        "Patient added successfully with ID: {}",
        id
    )));
    Ok(result)
}

/// The id is immutable; every other field is replaced after passing the
/// same checks as `add`.
pub fn update<S: RecordStore<Patient>>(
    store: &mut S,
    id: u32,
    name: String,
    age: u32,
    gender: &str,
    contact: String,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let mut patient = match store.get(id)? {
        Some(patient) => patient,
        None => {
            result.add_message(CmdMessage::error("Patient not found."));
            return Ok(result);
        }
    };

    if !validate::is_valid_name(&name) {
        result.add_message(CmdMessage::error("Invalid name."));
        return Ok(result);
    }
    if !validate::is_valid_age(age) {
        result.add_message(CmdMessage::error("Invalid age."));
        return Ok(result);
    }
    let gender: Gender = match gender.parse() {
        Ok(gender) => gender,
        Err(_) => {
            result.add_message(CmdMessage::error("Invalid gender."));
            return Ok(result);
        }
    };
    if !validate::is_valid_contact(&contact) {
        result.add_message(CmdMessage::error("Invalid contact number."));
        return Ok(result);
    }

    patient.name = name;
    patient.age = age;
    patient.gender = gender;
    patient.contact = contact;
    store.update(patient)?;

    result.add_message(CmdMessage::success("Patient updated successfully."));
    Ok(result)
}

pub fn delete<S: RecordStore<Patient>>(store: &mut S, id: u32) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.get(id)?.is_none() {
        result.add_message(CmdMessage::error("Patient not found."));
        return Ok(result);
    }

    store.delete(id)?;
    result.add_message(CmdMessage::success("Patient deleted successfully."));
    Ok(result)
}

pub fn list<S: RecordStore<Patient>>(store: &S) -> Result<CmdResult> {
    let patients = store.load_all()?;
    let mut result = CmdResult::default();

    if patients.is_empty() {
        result.add_message(CmdMessage::info("No patients found."));
        return Ok(result);
    }

    Ok(result.with_patients(patients))
}
