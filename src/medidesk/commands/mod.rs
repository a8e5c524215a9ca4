use crate::config::MedideskConfig;
use crate::model::{Doctor, Patient};
use std::path::PathBuf;

pub mod appointments;
pub mod config;
pub mod doctors;
pub mod init;
pub mod patients;

/// Resolved filesystem locations handed to the API at construction.
/// Record files live under `data_dir`; config.json lives under
/// `config_home`.
#[derive(Debug, Clone)]
pub struct MedideskPaths {
    pub data_dir: PathBuf,
    pub config_home: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// An appointment prepared for display: foreign keys already resolved
/// to names, with "Unknown" standing in for a dangling reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRow {
    pub id: u32,
    pub patient: String,
    pub doctor: String,
    pub date: String,
    pub time: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub patients: Vec<Patient>,
    pub doctors: Vec<Doctor>,
    pub appointments: Vec<AppointmentRow>,
    pub new_id: Option<u32>,
    pub config: Option<MedideskConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_patients(mut self, patients: Vec<Patient>) -> Self {
        self.patients = patients;
        self
    }

    pub fn with_doctors(mut self, doctors: Vec<Doctor>) -> Self {
        self.doctors = doctors;
        self
    }

    pub fn with_appointments(mut self, appointments: Vec<AppointmentRow>) -> Self {
        self.appointments = appointments;
        self
    }

    pub fn with_config(mut self, config: MedideskConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// First error-level message, if any. Convenient in tests.
    pub fn first_error(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.level == MessageLevel::Error)
            .map(|m| m.content.as_str())
    }
}
