// lib/src/intake/mod.rs

pub mod validation;
pub mod workflow;

use serde::{Deserialize, Serialize};

use models::medical::{NewPatient, VitalSigns};

pub use validation::IntakePolicy;
pub use workflow::{IntakeReceipt, IntakeService};

/// The second intake step: complaint and measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageForm {
    pub chief_complaint: String,
    pub vitals: VitalSigns,
}

/// Everything a nurse submits when registering a new arrival.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientIntake {
    pub patient: NewPatient,
    pub triage: TriageForm,
}
