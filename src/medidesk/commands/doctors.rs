use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Doctor;
use crate::store::RecordStore;
use crate::validate;

fn invalid_field(name: &str, specialization: &str, contact: &str) -> Option<CmdMessage> {
    if !validate::is_valid_name(name) {
        return Some(CmdMessage::error("Invalid name."));
    }
    if !validate::is_valid_specialization(specialization) {
        return Some(CmdMessage::error("Invalid specialization."));
    }
    if !validate::is_valid_contact(contact) {
        return Some(CmdMessage::error("Invalid contact number."));
    }
    None
}

pub fn add<S: RecordStore<Doctor>>(
    store: &mut S,
    name: String,
    specialization: String,
    contact: String,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if let Some(message) = invalid_field(&name, &specialization, &contact) {
        result.add_message(message);
        return Ok(result);
    }

    let id = store.next_id()?;
    store.add(Doctor::new(id, name, specialization, contact))?;

    result.new_id = Some(id);
    result.add_message(CmdMessage::success(format!(
        "Doctor added successfully with ID: {}",
        id
    )));
    Ok(result)
}

pub fn update<S: RecordStore<Doctor>>(
    store: &mut S,
    id: u32,
    name: String,
    specialization: String,
    contact: String,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let mut doctor = match store.get(id)? {
        Some(doctor) => doctor,
        None => {
            result.add_message(CmdMessage::error("Doctor not found."));
            return Ok(result);
        }
    };

    if let Some(message) = invalid_field(&name, &specialization, &contact) {
        result.add_message(message);
        return Ok(result);
    }

    doctor.name = name;
    doctor.specialization = specialization;
    doctor.contact = contact;
    store.update(doctor)?;

    result.add_message(CmdMessage::success("Doctor updated successfully."));
    Ok(result)
}

pub fn delete<S: RecordStore<Doctor>>(store: &mut S, id: u32) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.get(id)?.is_none() {
        result.add_message(CmdMessage::error("Doctor not found."));
        return Ok(result);
    }

    store.delete(id)?;
    result.add_message(CmdMessage::success("Doctor deleted successfully."));
    Ok(result)
}

pub fn list<S: RecordStore<Doctor>>(store: &S) -> Result<CmdResult> {
    let doctors = store.load_all()?;
    let mut result = CmdResult::default();

    if doctors.is_empty() {
        result.add_message(CmdMessage::info("No doctors found."));
        return Ok(result);
    }

    Ok(result.with_doctors(doctors))
}
