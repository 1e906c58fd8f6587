// models/src/medical/patient.rs
use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::identifiers::PatientId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("male"),
            Gender::Female => f.write_str("female"),
        }
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(ValidationError::UnknownVariant { kind: "gender", value: s.to_string() }),
        }
    }
}

/// Demographic record created when a patient arrives at the emergency room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub arrived_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields the nurse fills in on the first intake step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPatient {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl Patient {
    /// Builds a patient record arriving at `now`. Blank optional fields are stored as absent.
    pub fn register(new: NewPatient, now: DateTime<Utc>) -> Self {
        Patient {
            id: PatientId::new_v4(),
            name: new.name.trim().to_string(),
            age: new.age,
            gender: new.gender,
            address: non_blank(new.address),
            phone: non_blank(new.phone),
            arrived_at: now,
            created_at: now,
            updated_at: now,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
