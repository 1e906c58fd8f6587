// models/src/medical/patient_history.rs
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identifiers::{HistoryId, PatientId, UserId};

/// Care status of a history entry. This workspace writes `Completed` when a
/// diagnosis is recorded; `InTreatment` is set by the hospital backend when a
/// doctor takes a patient and is only read here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PatientStatus {
    #[default]
    Waiting,
    InTreatment,
    Completed,
}

impl fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatientStatus::Waiting => f.write_str("waiting"),
            PatientStatus::InTreatment => f.write_str("in_treatment"),
            PatientStatus::Completed => f.write_str("completed"),
        }
    }
}

/// A doctor's diagnosis and treatment entry for a patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientHistory {
    pub id: HistoryId,
    pub patient_id: PatientId,
    pub doctor_id: Option<UserId>,
    pub status: PatientStatus,
    pub diagnosis: Option<String>,
    pub treatment: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_read_backend_in_treatment_status() {
        let status: PatientStatus = serde_json::from_str("\"in_treatment\"").unwrap();
        assert_eq!(status, PatientStatus::InTreatment);
        assert_eq!(status.to_string(), "in_treatment");
        assert_eq!(PatientStatus::default(), PatientStatus::Waiting);
    }
}
