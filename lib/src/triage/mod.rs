// lib/src/triage/mod.rs

pub mod classifier;
pub mod thresholds;

pub use classifier::{assess, classify, TriageAssessment, TriageFinding};
