// lib/src/lib.rs

//! Emergency-room triage: vital-sign classification, intake and diagnosis
//! workflow, queue ordering and dashboard statistics over a pluggable
//! [`store::PatientStore`].

pub mod config;
pub mod dashboard;
pub mod errors;
pub mod intake;
pub mod queue;
pub mod store;
pub mod triage;

pub use crate::errors::{TriageError, TriageResult};
pub use crate::intake::{IntakePolicy, IntakeReceipt, IntakeService, PatientIntake, TriageForm};
pub use crate::triage::{assess, classify, TriageAssessment, TriageFinding};

pub use models;
