// lib/src/triage/classifier.rs

// Maps intake vital signs onto a triage category. The tiers are checked in
// order (critical, then urgent) and the first tier with any matching condition
// decides the result; nothing is scored or combined across tiers.
//
// Diastolic pressure is carried on `VitalSigns` but does not take part in the
// decision.

use std::fmt;

use serde::{Deserialize, Serialize};

use models::medical::{ConsciousnessLevel, TriageCategory, VitalSigns};

use super::thresholds::*;

/// Classifies a set of vital signs. Total over every representable input:
/// out-of-range or NaN readings still produce a category, never a panic.
/// Never returns `TriageCategory::Deceased`.
pub fn classify(vitals: &VitalSigns) -> TriageCategory {
    let VitalSigns { systolic_bp, pulse_rate, body_temperature, consciousness, .. } = *vitals;

    if matches!(consciousness, ConsciousnessLevel::Comatose | ConsciousnessLevel::Stuporous)
        || systolic_bp < CRITICAL_SYSTOLIC_LOW
        || systolic_bp > CRITICAL_SYSTOLIC_HIGH
        || pulse_rate < CRITICAL_PULSE_LOW
        || pulse_rate > CRITICAL_PULSE_HIGH
        || body_temperature < CRITICAL_TEMPERATURE_LOW
        || body_temperature > CRITICAL_TEMPERATURE_HIGH
    {
        return TriageCategory::Critical;
    }

    if consciousness == ConsciousnessLevel::Drowsy
        || systolic_bp < URGENT_SYSTOLIC_LOW
        || systolic_bp > URGENT_SYSTOLIC_HIGH
        || pulse_rate < URGENT_PULSE_LOW
        || pulse_rate > URGENT_PULSE_HIGH
        || body_temperature > URGENT_TEMPERATURE_HIGH
        || body_temperature < URGENT_TEMPERATURE_LOW
    {
        return TriageCategory::Urgent;
    }

    TriageCategory::LessUrgent
}

/// A single condition that matched in the deciding tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TriageFinding {
    Consciousness { level: ConsciousnessLevel },
    SystolicBelow { value: i32, bound: i32 },
    SystolicAbove { value: i32, bound: i32 },
    PulseBelow { value: i32, bound: i32 },
    PulseAbove { value: i32, bound: i32 },
    TemperatureBelow { value: f64, bound: f64 },
    TemperatureAbove { value: f64, bound: f64 },
}

impl fmt::Display for TriageFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriageFinding::Consciousness { level } => write!(f, "consciousness is {}", level),
            TriageFinding::SystolicBelow { value, bound } => write!(f, "systolic {} mmHg < {}", value, bound),
            TriageFinding::SystolicAbove { value, bound } => write!(f, "systolic {} mmHg > {}", value, bound),
            TriageFinding::PulseBelow { value, bound } => write!(f, "pulse {} bpm < {}", value, bound),
            TriageFinding::PulseAbove { value, bound } => write!(f, "pulse {} bpm > {}", value, bound),
            TriageFinding::TemperatureBelow { value, bound } => write!(f, "temperature {:.1} °C < {:.1}", value, bound),
            TriageFinding::TemperatureAbove { value, bound } => write!(f, "temperature {:.1} °C > {:.1}", value, bound),
        }
    }
}

/// The category together with the conditions that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageAssessment {
    pub category: TriageCategory,
    /// Conditions matched in the deciding tier. Empty for `LessUrgent`.
    pub findings: Vec<TriageFinding>,
}

/// Same decision as [`classify`], also reporting every condition that matched
/// in the tier that decided it.
pub fn assess(vitals: &VitalSigns) -> TriageAssessment {
    let critical = critical_findings(vitals);
    if !critical.is_empty() {
        return TriageAssessment { category: TriageCategory::Critical, findings: critical };
    }
    let urgent = urgent_findings(vitals);
    if !urgent.is_empty() {
        return TriageAssessment { category: TriageCategory::Urgent, findings: urgent };
    }
    TriageAssessment { category: TriageCategory::LessUrgent, findings: Vec::new() }
}

fn critical_findings(vitals: &VitalSigns) -> Vec<TriageFinding> {
    let mut findings = Vec::new();
    if matches!(vitals.consciousness, ConsciousnessLevel::Comatose | ConsciousnessLevel::Stuporous) {
        findings.push(TriageFinding::Consciousness { level: vitals.consciousness });
    }
    range_findings(
        vitals,
        (CRITICAL_SYSTOLIC_LOW, CRITICAL_SYSTOLIC_HIGH),
        (CRITICAL_PULSE_LOW, CRITICAL_PULSE_HIGH),
        (CRITICAL_TEMPERATURE_LOW, CRITICAL_TEMPERATURE_HIGH),
        &mut findings,
    );
    findings
}

fn urgent_findings(vitals: &VitalSigns) -> Vec<TriageFinding> {
    let mut findings = Vec::new();
    if vitals.consciousness == ConsciousnessLevel::Drowsy {
        findings.push(TriageFinding::Consciousness { level: vitals.consciousness });
    }
    range_findings(
        vitals,
        (URGENT_SYSTOLIC_LOW, URGENT_SYSTOLIC_HIGH),
        (URGENT_PULSE_LOW, URGENT_PULSE_HIGH),
        (URGENT_TEMPERATURE_LOW, URGENT_TEMPERATURE_HIGH),
        &mut findings,
    );
    findings
}

fn range_findings(
    vitals: &VitalSigns,
    systolic: (i32, i32),
    pulse: (i32, i32),
    temperature: (f64, f64),
    findings: &mut Vec<TriageFinding>,
) {
    let value = vitals.systolic_bp;
    if value < systolic.0 {
        findings.push(TriageFinding::SystolicBelow { value, bound: systolic.0 });
    } else if value > systolic.1 {
        findings.push(TriageFinding::SystolicAbove { value, bound: systolic.1 });
    }

    let value = vitals.pulse_rate;
    if value < pulse.0 {
        findings.push(TriageFinding::PulseBelow { value, bound: pulse.0 });
    } else if value > pulse.1 {
        findings.push(TriageFinding::PulseAbove { value, bound: pulse.1 });
    }

    let value = vitals.body_temperature;
    if value < temperature.0 {
        findings.push(TriageFinding::TemperatureBelow { value, bound: temperature.0 });
    } else if value > temperature.1 {
        findings.push(TriageFinding::TemperatureAbove { value, bound: temperature.1 });
    }
}
