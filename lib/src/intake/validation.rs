// lib/src/intake/validation.rs

//! Checks applied to intake data before it is classified or stored. The
//! classifier accepts anything; these are the form limits a nurse can enter.

use std::ops::RangeInclusive;

use log::warn;
use models::errors::{ValidationError, ValidationResult};
use models::medical::{NewPatient, VitalSigns};

use super::{PatientIntake, TriageForm};

pub const PLAUSIBLE_SYSTOLIC: RangeInclusive<i32> = 50..=250;
pub const PLAUSIBLE_DIASTOLIC: RangeInclusive<i32> = 30..=150;
pub const PLAUSIBLE_PULSE: RangeInclusive<i32> = 30..=200;
pub const PLAUSIBLE_TEMPERATURE: RangeInclusive<f64> = 30.0..=45.0;
pub const PLAUSIBLE_AGE: RangeInclusive<u8> = 0..=150;

/// Controls which checks run at the intake boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntakePolicy {
    /// When false only required fields and finiteness are checked.
    pub enforce_plausible_ranges: bool,
}

impl Default for IntakePolicy {
    fn default() -> Self {
        IntakePolicy { enforce_plausible_ranges: true }
    }
}

pub fn validate_vitals(vitals: &VitalSigns, policy: IntakePolicy) -> ValidationResult<()> {
    if !vitals.body_temperature.is_finite() {
        warn!("Rejected non-finite body temperature");
        return Err(ValidationError::NotFinite("body_temperature"));
    }
    if !policy.enforce_plausible_ranges {
        return Ok(());
    }
    check_int("systolic_bp", vitals.systolic_bp, PLAUSIBLE_SYSTOLIC)?;
    check_int("diastolic_bp", vitals.diastolic_bp, PLAUSIBLE_DIASTOLIC)?;
    check_int("pulse_rate", vitals.pulse_rate, PLAUSIBLE_PULSE)?;
    if !PLAUSIBLE_TEMPERATURE.contains(&vitals.body_temperature) {
        return Err(reject(
            "body_temperature",
            vitals.body_temperature,
            *PLAUSIBLE_TEMPERATURE.start(),
            *PLAUSIBLE_TEMPERATURE.end(),
        ));
    }
    Ok(())
}

pub fn validate_triage_form(form: &TriageForm, policy: IntakePolicy) -> ValidationResult<()> {
    require("chief_complaint", &form.chief_complaint)?;
    validate_vitals(&form.vitals, policy)
}

pub fn validate_patient(patient: &NewPatient) -> ValidationResult<()> {
    require("name", &patient.name)?;
    if !PLAUSIBLE_AGE.contains(&patient.age) {
        return Err(reject(
            "age",
            f64::from(patient.age),
            f64::from(*PLAUSIBLE_AGE.start()),
            f64::from(*PLAUSIBLE_AGE.end()),
        ));
    }
    Ok(())
}

pub fn validate_intake(intake: &PatientIntake, policy: IntakePolicy) -> ValidationResult<()> {
    validate_patient(&intake.patient)?;
    validate_triage_form(&intake.triage, policy)
}

/// Rejects empty or whitespace-only text.
pub fn require(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        warn!("Rejected intake: {} is empty", field);
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

fn check_int(field: &'static str, value: i32, range: RangeInclusive<i32>) -> ValidationResult<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(reject(field, f64::from(value), f64::from(*range.start()), f64::from(*range.end())))
    }
}

fn reject(field: &'static str, value: f64, min: f64, max: f64) -> ValidationError {
    warn!("Rejected intake: {} = {} outside {}..={}", field, value, min, max);
    ValidationError::OutOfRange { field, value, min, max }
}
