// models/src/medical/chart.rs
use serde::{Deserialize, Serialize};

use crate::medical::patient::Patient;
use crate::medical::patient_history::{PatientHistory, PatientStatus};
use crate::medical::triage::{TriageCategory, TriageRecord};

/// A patient joined with every triage assessment and history entry recorded
/// for them. Joined rows are always present as (possibly empty) lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientChart {
    pub patient: Patient,
    #[serde(default)]
    pub triage: Vec<TriageRecord>,
    #[serde(default)]
    pub history: Vec<PatientHistory>,
}

impl PatientChart {
    pub fn new(patient: Patient) -> Self {
        PatientChart { patient, triage: Vec::new(), history: Vec::new() }
    }

    /// The most recent assessment. Later rows win ties.
    pub fn latest_triage(&self) -> Option<&TriageRecord> {
        self.triage.iter().max_by_key(|t| t.recorded_at)
    }

    pub fn latest_history(&self) -> Option<&PatientHistory> {
        self.history.iter().max_by_key(|h| h.updated_at)
    }

    pub fn current_category(&self) -> Option<TriageCategory> {
        self.latest_triage().map(|t| t.category)
    }

    pub fn is_triaged(&self) -> bool {
        !self.triage.is_empty()
    }

    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }

    /// Status of the latest history entry, or `Waiting` when no doctor has seen the patient.
    pub fn status(&self) -> PatientStatus {
        self.latest_history().map(|h| h.status).unwrap_or_default()
    }
}
