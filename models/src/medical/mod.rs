// models/src/medical/mod.rs

pub mod chart;
pub mod patient;
pub mod patient_history;
pub mod triage;
pub mod user;
pub mod vitals;

pub use chart::PatientChart;
pub use patient::{Gender, NewPatient, Patient};
pub use patient_history::{PatientHistory, PatientStatus};
pub use triage::{TriageCategory, TriageColor, TriageRecord, UNTRIAGED_PRIORITY};
pub use user::{SystemUser, UserRole};
pub use vitals::{ConsciousnessLevel, VitalSigns};
