use crate::commands::{AppointmentRow, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Appointment, Doctor, Patient};
use crate::store::RecordStore;
use crate::validate;

/// Both foreign keys must resolve before any field format is checked;
/// an appointment for an unknown patient is rejected even when the
/// date and time are fine.
pub fn add<A, P, D>(
    store: &mut A,
    patients: &P,
    doctors: &D,
    patient_id: u32,
    doctor_id: u32,
    date: String,
    time: String,
) -> Result<CmdResult>
where
    A: RecordStore<Appointment>,
    P: RecordStore<Patient>,
    D: RecordStore<Doctor>,
{
    let mut result = CmdResult::default();

    if patients.get(patient_id)?.is_none() {
        result.add_message(CmdMessage::error("Invalid patient ID."));
        return Ok(result);
    }
    if doctors.get(doctor_id)?.is_none() {
        result.add_message(CmdMessage::error("Invalid doctor ID."));
        return Ok(result);
    }
    if !validate::is_valid_date(&date) {
        result.add_message(CmdMessage::error("Invalid date format. Use YYYY-MM-DD."));
        return Ok(result);
    }
    if !validate::is_valid_time(&time) {
        result.add_message(CmdMessage::error("Invalid time format. Use HH:MM."));
        return Ok(result);
    }

    let id = store.next_id()?;
    store.add(Appointment::new(id, patient_id, doctor_id, date, time))?;

    result.new_id = Some(id);
    result.add_message(CmdMessage::success(format!(
        "Appointment scheduled successfully with ID: {}",
        id
    )));
    Ok(result)
}

/// Only the date and time are replaceable; the patient and doctor
/// references are fixed at scheduling time.
pub fn update<A: RecordStore<Appointment>>(
    store: &mut A,
    id: u32,
    date: String,
    time: String,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let mut appointment = match store.get(id)? {
        Some(appointment) => appointment,
        None => {
            result.add_message(CmdMessage::error("Appointment not found."));
            return Ok(result);
        }
    };

    if !validate::is_valid_date(&date) {
        result.add_message(CmdMessage::error("Invalid date format. Use YYYY-MM-DD."));
        return Ok(result);
    }
    if !validate::is_valid_time(&time) {
        result.add_message(CmdMessage::error("Invalid time format. Use HH:MM."));
        return Ok(result);
    }

    appointment.date = date;
    appointment.time = time;
    store.update(appointment)?;

    result.add_message(CmdMessage::success("Appointment updated successfully."));
    Ok(result)
}

pub fn delete<A: RecordStore<Appointment>>(store: &mut A, id: u32) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.get(id)?.is_none() {
        result.add_message(CmdMessage::error("Appointment not found."));
        return Ok(result);
    }

    store.delete(id)?;
    result.add_message(CmdMessage::success("Appointment cancelled successfully."));
    Ok(result)
}

pub fn list<A, P, D>(store: &A, patients: &P, doctors: &D) -> Result<CmdResult>
where
    A: RecordStore<Appointment>,
    P: RecordStore<Patient>,
    D: RecordStore<Doctor>,
{
    let appointments = store.load_all()?;
    let mut result = CmdResult::default();

    if appointments.is_empty() {
        result.add_message(CmdMessage::info("No appointments found."));
        return Ok(result);
    }

    let mut rows = Vec::with_capacity(appointments.len());
    for appointment in appointments {
        rows.push(AppointmentRow {
            id: appointment.id,
            patient: resolve_name(patients.get(appointment.patient_id)?.map(|p| p.name)),
            doctor: resolve_name(doctors.get(appointment.doctor_id)?.map(|d| d.name)),
            date: appointment.date,
            time: appointment.time,
        });
    }

    Ok(result.with_appointments(rows))
}

fn resolve_name(name: Option<String>) -> String {
    name.unwrap_or_else(|| "Unknown".to_string())
}
