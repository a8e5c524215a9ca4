use super::{Record, RecordStore};
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data.
pub struct MemoryStore<R: Record> {
    records: Vec<R>,
}

impl<R: Record> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RecordStore<R> for MemoryStore<R> {
    fn load_all(&self) -> Result<Vec<R>> {
        Ok(self.records.clone())
    }

    fn save_all(&mut self, records: &[R]) -> Result<()> {
        self.records = records.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::{Appointment, Doctor, Gender, Patient};

    pub fn patient(id: u32, name: &str) -> Patient {
        Patient::new(id, name.to_string(), 34, Gender::Female, "9876543210".to_string())
    }

    pub fn doctor(id: u32, name: &str) -> Doctor {
        Doctor::new(
            id,
            name.to_string(),
            "Cardiology".to_string(),
            "1234567890".to_string(),
        )
    }

    pub fn appointment(id: u32, patient_id: u32, doctor_id: u32) -> Appointment {
        Appointment::new(
            id,
            patient_id,
            doctor_id,
            "2024-03-15".to_string(),
            "10:30".to_string(),
        )
    }
}
