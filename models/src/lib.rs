// models/src/lib.rs

//! Domain types shared by the triage library and the command-line front end.

pub mod dashboard;
pub mod errors;
pub mod identifiers;
pub mod medical;

pub use errors::{ValidationError, ValidationResult};
pub use identifiers::{HistoryId, PatientId, TriageId, UserId};
pub use medical::*;
