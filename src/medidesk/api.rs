//! # API Facade
//!
//! The API layer is a thin facade over the command layer: the single
//! entry point for every medidesk operation, regardless of the UI in
//! front of it. It owns the three record stores and dispatches each
//! method to the matching command function; business logic stays in
//! `commands/*.rs` and presentation stays with the caller.
//!
//! `MedideskApi` is generic over the storage backends so the same
//! facade runs against `FileStore` in production and `MemoryStore` in
//! tests.

use crate::commands;
use crate::error::Result;
use crate::model::{Appointment, Doctor, Patient};
use crate::store::fs::FileStore;
use crate::store::RecordStore;

pub struct MedideskApi<P, D, A>
where
    P: RecordStore<Patient>,
    D: RecordStore<Doctor>,
    A: RecordStore<Appointment>,
{
    patients: P,
    doctors: D,
    appointments: A,
    paths: MedideskPaths,
}

impl<P, D, A> MedideskApi<P, D, A>
where
    P: RecordStore<Patient>,
    D: RecordStore<Doctor>,
    A: RecordStore<Appointment>,
{
    pub fn new(patients: P, doctors: D, appointments: A, paths: MedideskPaths) -> Self {
        Self {
            patients,
            doctors,
            appointments,
            paths,
        }
    }

    pub fn add_patient(
        &mut self,
        name: String,
        age: u32,
        gender: &str,
        contact: String,
    ) -> Result<CmdResult> {
        commands::patients::add(&mut self.patients, name, age, gender, contact)
    }

    pub fn update_patient(
        &mut self,
        id: u32,
        name: String,
        age: u32,
        gender: &str,
        contact: String,
    ) -> Result<CmdResult> {
        commands::patients::update(&mut self.patients, id, name, age, gender, contact)
    }

    pub fn delete_patient(&mut self, id: u32) -> Result<CmdResult> {
        commands::patients::delete(&mut self.patients, id)
    }

    pub fn list_patients(&self) -> Result<CmdResult> {
        commands::patients::list(&self.patients)
    }

    pub fn add_doctor(
        &mut self,
        name: String,
        specialization: String,
        contact: String,
    ) -> Result<CmdResult> {
        commands::doctors::add(&mut self.doctors, name, specialization, contact)
    }

    pub fn update_doctor(
        &mut self,
        id: u32,
        name: String,
        specialization: String,
        contact: String,
    ) -> Result<CmdResult> {
        commands::doctors::update(&mut self.doctors, id, name, specialization, contact)
    }

    pub fn delete_doctor(&mut self, id: u32) -> Result<CmdResult> {
        commands::doctors::delete(&mut self.doctors, id)
    }

    pub fn list_doctors(&self) -> Result<CmdResult> {
        commands::doctors::list(&self.doctors)
    }

    pub fn add_appointment(
        &mut self,
        patient_id: u32,
        doctor_id: u32,
        date: String,
        time: String,
    ) -> Result<CmdResult> {
        commands::appointments::add(
            &mut self.appointments,
            &self.patients,
            &self.doctors,
            patient_id,
            doctor_id,
            date,
            time,
        )
    }

    pub fn update_appointment(&mut self, id: u32, date: String, time: String) -> Result<CmdResult> {
        commands::appointments::update(&mut self.appointments, id, date, time)
    }

    pub fn delete_appointment(&mut self, id: u32) -> Result<CmdResult> {
        commands::appointments::delete(&mut self.appointments, id)
    }

    pub fn list_appointments(&self) -> Result<CmdResult> {
        commands::appointments::list(&self.appointments, &self.patients, &self.doctors)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths.config_home, action)
    }

    pub fn init(&self) -> Result<CmdResult> {
        commands::init::run(&self.paths.data_dir)
    }

    pub fn paths(&self) -> &MedideskPaths {
        &self.paths
    }
}

/// The production API: every store backed by a file in the same data
/// directory.
pub type FileApi = MedideskApi<FileStore<Patient>, FileStore<Doctor>, FileStore<Appointment>>;

impl FileApi {
    pub fn open(paths: MedideskPaths) -> Self {
        let patients = FileStore::new(paths.data_dir.clone());
        let doctors = FileStore::new(paths.data_dir.clone());
        let appointments = FileStore::new(paths.data_dir.clone());
        Self::new(patients, doctors, appointments, paths)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{AppointmentRow, CmdMessage, CmdResult, MedideskPaths, MessageLevel};
