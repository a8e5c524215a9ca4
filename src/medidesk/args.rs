use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "medidesk")]
#[command(version)]
#[command(about = "File-backed clinic record manager for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the record files (overrides config)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage patient records
    #[command(subcommand)]
    Patient(PatientCommands),

    /// Manage doctor records
    #[command(subcommand)]
    Doctor(DoctorCommands),

    /// Manage appointment records
    #[command(subcommand, alias = "appt")]
    Appointment(AppointmentCommands),

    /// Create the data directory
    Init,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PatientCommands {
    /// Register a new patient
    Add {
        /// Full name (letters and spaces, 2 to 50 characters)
        name: String,

        /// Age in years
        age: u32,

        /// Male, Female or Other
        gender: String,

        /// 10-digit contact number
        contact: String,
    },

    /// Replace the fields of an existing patient
    Update {
        /// Patient ID
        id: u32,

        name: String,
        age: u32,
        gender: String,
        contact: String,
    },

    /// Delete a patient
    #[command(alias = "rm")]
    Delete {
        /// Patient ID
        id: u32,
    },

    /// List all patients
    #[command(alias = "ls")]
    List,
}

#[derive(Subcommand, Debug)]
pub enum DoctorCommands {
    /// Register a new doctor
    Add {
        /// Full name (letters and spaces, 2 to 50 characters)
        name: String,

        /// Medical specialization (at least 2 characters)
        specialization: String,

        /// 10-digit contact number
        contact: String,
    },

    /// Replace the fields of an existing doctor
    Update {
        /// Doctor ID
        id: u32,

        name: String,
        specialization: String,
        contact: String,
    },

    /// Delete a doctor
    #[command(alias = "rm")]
    Delete {
        /// Doctor ID
        id: u32,
    },

    /// List all doctors
    #[command(alias = "ls")]
    List,
}

#[derive(Subcommand, Debug)]
pub enum AppointmentCommands {
    /// Schedule an appointment for an existing patient and doctor
    Add {
        /// ID of a registered patient
        patient_id: u32,

        /// ID of a registered doctor
        doctor_id: u32,

        /// Date as YYYY-MM-DD
        date: String,

        /// Time as HH:MM
        time: String,
    },

    /// Reschedule an appointment (date and time only)
    Update {
        /// Appointment ID
        id: u32,

        /// New date as YYYY-MM-DD
        date: String,

        /// New time as HH:MM
        time: String,
    },

    /// Cancel an appointment
    #[command(alias = "cancel")]
    Delete {
        /// Appointment ID
        id: u32,
    },

    /// List all appointments
    #[command(alias = "ls")]
    List,
}
