// models/src/medical/vitals.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Level of consciousness observed at intake, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConsciousnessLevel {
    #[default]
    Alert,
    Drowsy,
    Stuporous,
    Comatose,
}

impl ConsciousnessLevel {
    pub const ALL: [ConsciousnessLevel; 4] = [
        ConsciousnessLevel::Alert,
        ConsciousnessLevel::Drowsy,
        ConsciousnessLevel::Stuporous,
        ConsciousnessLevel::Comatose,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConsciousnessLevel::Alert => "alert",
            ConsciousnessLevel::Drowsy => "drowsy",
            ConsciousnessLevel::Stuporous => "stuporous",
            ConsciousnessLevel::Comatose => "comatose",
        }
    }
}

impl fmt::Display for ConsciousnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsciousnessLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        ConsciousnessLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| ValidationError::UnknownVariant {
                kind: "consciousness level",
                value: s.to_string(),
            })
    }
}

/// The five measurements taken at intake. Constructed once per assessment and
/// never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    /// mmHg
    pub systolic_bp: i32,
    /// mmHg. Recorded with the assessment but not used by the classifier.
    pub diastolic_bp: i32,
    /// beats per minute
    pub pulse_rate: i32,
    /// degrees Celsius
    pub body_temperature: f64,
    pub consciousness: ConsciousnessLevel,
}

impl Default for VitalSigns {
    /// The values the intake form starts from.
    fn default() -> Self {
        VitalSigns {
            systolic_bp: 120,
            diastolic_bp: 80,
            pulse_rate: 80,
            body_temperature: 36.5,
            consciousness: ConsciousnessLevel::Alert,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_order_consciousness_by_severity() {
        assert!(ConsciousnessLevel::Alert < ConsciousnessLevel::Drowsy);
        assert!(ConsciousnessLevel::Drowsy < ConsciousnessLevel::Stuporous);
        assert!(ConsciousnessLevel::Stuporous < ConsciousnessLevel::Comatose);
    }

    #[test]
    fn should_parse_consciousness_case_insensitively() {
        assert_eq!("Drowsy".parse::<ConsciousnessLevel>().unwrap(), ConsciousnessLevel::Drowsy);
        assert_eq!(" comatose ".parse::<ConsciousnessLevel>().unwrap(), ConsciousnessLevel::Comatose);
        assert!("asleep".parse::<ConsciousnessLevel>().is_err());
    }

    #[test]
    fn should_default_to_intake_form_values() {
        let vitals = VitalSigns::default();
        assert_eq!(vitals.systolic_bp, 120);
        assert_eq!(vitals.diastolic_bp, 80);
        assert_eq!(vitals.pulse_rate, 80);
        assert_eq!(vitals.body_temperature, 36.5);
        assert_eq!(vitals.consciousness, ConsciousnessLevel::Alert);
    }

    #[test]
    fn should_deserialize_snake_case_consciousness() {
        let json = r#"{"systolic_bp":85,"diastolic_bp":60,"pulse_rate":130,"body_temperature":39.4,"consciousness":"stuporous"}"#;
        let vitals: VitalSigns = serde_json::from_str(json).unwrap();
        assert_eq!(vitals.consciousness, ConsciousnessLevel::Stuporous);
        assert_eq!(vitals.pulse_rate, 130);
    }
}
