// models/src/medical/triage.rs
use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::identifiers::{PatientId, TriageId, UserId};
use crate::medical::vitals::VitalSigns;

/// Rank given to a patient that has no triage record yet. Sorts after every category.
pub const UNTRIAGED_PRIORITY: u8 = 4;

/// Severity bucket assigned at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriageCategory {
    Critical,
    Urgent,
    LessUrgent,
    /// Terminal state set by a clinician override; the classifier never yields it.
    Deceased,
}

/// Colour code used by the dashboards for each category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriageColor {
    Red,
    Yellow,
    Green,
    Black,
}

impl TriageCategory {
    pub const ALL: [TriageCategory; 4] = [
        TriageCategory::Critical,
        TriageCategory::Urgent,
        TriageCategory::LessUrgent,
        TriageCategory::Deceased,
    ];

    /// Queue rank, lower is seen first.
    pub fn priority(&self) -> u8 {
        match self {
            TriageCategory::Critical => 0,
            TriageCategory::Urgent => 1,
            TriageCategory::LessUrgent => 2,
            TriageCategory::Deceased => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TriageCategory::Critical => "EMERGENCY",
            TriageCategory::Urgent => "URGENT",
            TriageCategory::LessUrgent => "LESS URGENT",
            TriageCategory::Deceased => "DECEASED",
        }
    }

    pub fn color(&self) -> TriageColor {
        match self {
            TriageCategory::Critical => TriageColor::Red,
            TriageCategory::Urgent => TriageColor::Yellow,
            TriageCategory::LessUrgent => TriageColor::Green,
            TriageCategory::Deceased => TriageColor::Black,
        }
    }

    pub fn is_classifier_output(&self) -> bool {
        !matches!(self, TriageCategory::Deceased)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TriageCategory::Critical => "critical",
            TriageCategory::Urgent => "urgent",
            TriageCategory::LessUrgent => "less_urgent",
            TriageCategory::Deceased => "deceased",
        }
    }
}

impl fmt::Display for TriageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TriageCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        TriageCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| ValidationError::UnknownVariant {
                kind: "triage category",
                value: s.to_string(),
            })
    }
}

/// One triage assessment: the measurements, the complaint and the category
/// computed (or assigned) for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageRecord {
    pub id: TriageId,
    pub patient_id: PatientId,
    /// Staff member who wrote the record: the triaging nurse, or the
    /// clinician for an override.
    pub recorded_by: UserId,
    pub chief_complaint: String,
    pub vitals: VitalSigns,
    pub category: TriageCategory,
    pub recorded_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_rank_categories_by_severity() {
        let ranks: Vec<u8> = TriageCategory::ALL.iter().map(|c| c.priority()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
        assert!(TriageCategory::Deceased.priority() < UNTRIAGED_PRIORITY);
    }

    #[test]
    fn should_map_dashboard_labels_and_colors() {
        assert_eq!(TriageCategory::Critical.label(), "EMERGENCY");
        assert_eq!(TriageCategory::LessUrgent.label(), "LESS URGENT");
        assert_eq!(TriageCategory::Urgent.color(), TriageColor::Yellow);
        assert_eq!(TriageCategory::Deceased.color(), TriageColor::Black);
    }

    #[test]
    fn should_exclude_deceased_from_classifier_outputs() {
        assert!(TriageCategory::Critical.is_classifier_output());
        assert!(!TriageCategory::Deceased.is_classifier_output());
    }

    #[test]
    fn should_parse_category_names() {
        assert_eq!("less_urgent".parse::<TriageCategory>().unwrap(), TriageCategory::LessUrgent);
        assert_eq!("Less-Urgent".parse::<TriageCategory>().unwrap(), TriageCategory::LessUrgent);
        assert_eq!("DECEASED".parse::<TriageCategory>().unwrap(), TriageCategory::Deceased);
        assert!("green".parse::<TriageCategory>().is_err());
    }

    #[test]
    fn should_serialize_as_snake_case() {
        let json = serde_json::to_string(&TriageCategory::LessUrgent).unwrap();
        assert_eq!(json, "\"less_urgent\"");
    }
}
