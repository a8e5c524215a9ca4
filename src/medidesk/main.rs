use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use medidesk::api::{
    AppointmentRow, CmdMessage, ConfigAction, FileApi, MedideskPaths, MessageLevel,
};
use medidesk::config::MedideskConfig;
use medidesk::error::{MedideskError, Result};
use medidesk::model::{Doctor, Patient};
use std::path::PathBuf;

mod args;
use args::{AppointmentCommands, Cli, Commands, DoctorCommands, PatientCommands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init_api(&cli)?;

    match cli.command {
        Commands::Patient(cmd) => handle_patient(&mut api, cmd),
        Commands::Doctor(cmd) => handle_doctor(&mut api, cmd),
        Commands::Appointment(cmd) => handle_appointment(&mut api, cmd),
        Commands::Init => handle_init(&api),
        Commands::Config { key, value } => handle_config(&api, key, value),
    }
}

fn init_api(cli: &Cli) -> Result<FileApi> {
    let proj_dirs = ProjectDirs::from("com", "medidesk", "medidesk").ok_or_else(|| {
        MedideskError::Store("Could not determine the platform data directory".to_string())
    })?;
    let config_home = proj_dirs.data_dir().to_path_buf();

    let config = MedideskConfig::load(&config_home).unwrap_or_default();
    let data_dir: PathBuf = cli
        .data_dir
        .clone()
        .or(config.data_dir)
        .unwrap_or_else(|| config_home.clone());

    Ok(FileApi::open(MedideskPaths {
        data_dir,
        config_home,
    }))
}

fn handle_patient(api: &mut FileApi, cmd: PatientCommands) -> Result<()> {
    let result = match cmd {
        PatientCommands::Add {
            name,
            age,
            gender,
            contact,
        } => api.add_patient(name, age, &gender, contact)?,
        PatientCommands::Update {
            id,
            name,
            age,
            gender,
            contact,
        } => api.update_patient(id, name, age, &gender, contact)?,
        PatientCommands::Delete { id } => api.delete_patient(id)?,
        PatientCommands::List => api.list_patients()?,
    };
    print_patients(&result.patients);
    print_messages(&result.messages);
    Ok(())
}

fn handle_doctor(api: &mut FileApi, cmd: DoctorCommands) -> Result<()> {
    let result = match cmd {
        DoctorCommands::Add {
            name,
            specialization,
            contact,
        } => api.add_doctor(name, specialization, contact)?,
        DoctorCommands::Update {
            id,
            name,
            specialization,
            contact,
        } => api.update_doctor(id, name, specialization, contact)?,
        DoctorCommands::Delete { id } => api.delete_doctor(id)?,
        DoctorCommands::List => api.list_doctors()?,
    };
    print_doctors(&result.doctors);
    print_messages(&result.messages);
    Ok(())
}

fn handle_appointment(api: &mut FileApi, cmd: AppointmentCommands) -> Result<()> {
    let result = match cmd {
        AppointmentCommands::Add {
            patient_id,
            doctor_id,
            date,
            time,
        } => api.add_appointment(patient_id, doctor_id, date, time)?,
        AppointmentCommands::Update { id, date, time } => api.update_appointment(id, date, time)?,
        AppointmentCommands::Delete { id } => api.delete_appointment(id)?,
        AppointmentCommands::List => api.list_appointments()?,
    };
    print_appointments(&result.appointments);
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(api: &FileApi) -> Result<()> {
    let result = api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(api: &FileApi, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api.config(action)?;
    if let Some(config) = &result.config {
        if let Some(value) = config.get("data-dir") {
            println!("data-dir = {}", value);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_patients(patients: &[Patient]) {
    if patients.is_empty() {
        return;
    }
    println!("{}", "Patient List:".bold());
    for p in patients {
        println!(
            "ID: {}, Name: {}, Age: {}, Gender: {}, Contact: {}",
            p.id, p.name, p.age, p.gender, p.contact
        );
    }
}

fn print_doctors(doctors: &[Doctor]) {
    if doctors.is_empty() {
        return;
    }
    println!("{}", "Doctor List:".bold());
    for d in doctors {
        println!(
            "ID: {}, Name: {}, Specialization: {}, Contact: {}",
            d.id, d.name, d.specialization, d.contact
        );
    }
}

fn print_appointments(appointments: &[AppointmentRow]) {
    if appointments.is_empty() {
        return;
    }
    println!("{}", "Appointment List:".bold());
    for a in appointments {
        println!(
            "ID: {}, Patient: {}, Doctor: {}, Date: {}, Time: {}",
            a.id, a.patient, a.doctor, a.date, a.time
        );
    }
}
