use crate::store::Record;
use std::fmt;
use std::str::FromStr;

/// Patient gender, parsed case-insensitively and stored in canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("male") {
            Ok(Gender::Male)
        } else if s.eq_ignore_ascii_case("female") {
            Ok(Gender::Female)
        } else if s.eq_ignore_ascii_case("other") {
            Ok(Gender::Other)
        } else {
            Err(format!("unrecognized gender '{}'", s))
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Other => write!(f, "Other"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub contact: String,
}

impl Patient {
    pub fn new(id: u32, name: String, age: u32, gender: Gender, contact: String) -> Self {
        Self {
            id,
            name,
            age,
            gender,
            contact,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    pub id: u32,
    pub name: String,
    pub specialization: String,
    pub contact: String,
}

impl Doctor {
    pub fn new(id: u32, name: String, specialization: String, contact: String) -> Self {
        Self {
            id,
            name,
            specialization,
            contact,
        }
    }
}

/// A scheduled visit. `patient_id` and `doctor_id` must resolve when the
/// appointment is created; they are not re-checked afterwards, so a later
/// delete of either record leaves a dangling reference (listings render
/// those as "Unknown").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: u32,
    pub patient_id: u32,
    pub doctor_id: u32,
    pub date: String,
    pub time: String,
}

impl Appointment {
    pub fn new(id: u32, patient_id: u32, doctor_id: u32, date: String, time: String) -> Self {
        Self {
            id,
            patient_id,
            doctor_id,
            date,
            time,
        }
    }
}

fn numeric_field(raw: &str, field: &str) -> std::result::Result<u32, String> {
    raw.parse()
        .map_err(|_| format!("non-numeric {}: '{}'", field, raw))
}

fn split_fields(line: &str, expected: usize) -> std::result::Result<Vec<&str>, String> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != expected {
        return Err(format!(
            "expected {} fields, found {}",
            expected,
            fields.len()
        ));
    }
    Ok(fields)
}

impl Record for Patient {
    const KIND: &'static str = "patients";
    const DISPLAY: &'static str = "Patient";

    fn id(&self) -> u32 {
        self.id
    }

    fn to_line(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.id, self.name, self.age, self.gender, self.contact
        )
    }

    fn from_line(line: &str) -> std::result::Result<Self, String> {
        let fields = split_fields(line, 5)?;
        Ok(Self {
            id: numeric_field(fields[0], "id")?,
            name: fields[1].to_string(),
            age: numeric_field(fields[2], "age")?,
            gender: fields[3].parse()?,
            contact: fields[4].to_string(),
        })
    }
}

impl Record for Doctor {
    const KIND: &'static str = "doctors";
    const DISPLAY: &'static str = "Doctor";

    fn id(&self) -> u32 {
        self.id
    }

    fn to_line(&self) -> String {
        format!(
            "{},{},{},{}",
            self.id, self.name, self.specialization, self.contact
        )
    }

    fn from_line(line: &str) -> std::result::Result<Self, String> {
        let fields = split_fields(line, 4)?;
        Ok(Self {
            id: numeric_field(fields[0], "id")?,
            name: fields[1].to_string(),
            specialization: fields[2].to_string(),
            contact: fields[3].to_string(),
        })
    }
}

impl Record for Appointment {
    const KIND: &'static str = "appointments";
    const DISPLAY: &'static str = "Appointment";

    fn id(&self) -> u32 {
        self.id
    }

    fn to_line(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.id, self.patient_id, self.doctor_id, self.date, self.time
        )
    }

    fn from_line(line: &str) -> std::result::Result<Self, String> {
        let fields = split_fields(line, 5)?;
        Ok(Self {
            id: numeric_field(fields[0], "id")?,
            patient_id: numeric_field(fields[1], "patient id")?,
            doctor_id: numeric_field(fields[2], "doctor id")?,
            date: fields[3].to_string(),
            time: fields[4].to_string(),
        })
    }
}
