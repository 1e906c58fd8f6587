// lib/src/queue/mod.rs

//! Orders patient charts for the nurse, doctor and administrator views and
//! attaches the label and colour each row is shown with.

pub mod ordering;

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use models::errors::ValidationError;
use models::identifiers::PatientId;
use models::medical::{Gender, PatientChart, PatientStatus, TriageCategory, TriageColor};

pub use ordering::{admin_list, doctor_queue, nurse_queue, render_queue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueView {
    Nurse,
    Doctor,
    Admin,
}

impl fmt::Display for QueueView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueView::Nurse => f.write_str("nurse"),
            QueueView::Doctor => f.write_str("doctor"),
            QueueView::Admin => f.write_str("admin"),
        }
    }
}

impl FromStr for QueueView {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nurse" => Ok(QueueView::Nurse),
            "doctor" => Ok(QueueView::Doctor),
            "admin" => Ok(QueueView::Admin),
            _ => Err(ValidationError::UnknownVariant { kind: "queue view", value: s.to_string() }),
        }
    }
}

/// One row of a rendered queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub patient_id: PatientId,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub arrived_at: DateTime<Utc>,
    pub category: Option<TriageCategory>,
    pub label: String,
    pub color: Option<TriageColor>,
    pub chief_complaint: Option<String>,
    pub status: PatientStatus,
}

impl QueueEntry {
    pub fn from_chart(chart: &PatientChart, view: QueueView) -> Self {
        let latest = chart.latest_triage();
        let category = latest.map(|t| t.category);
        QueueEntry {
            patient_id: chart.patient.id,
            name: chart.patient.name.clone(),
            age: chart.patient.age,
            gender: chart.patient.gender,
            arrived_at: chart.patient.arrived_at,
            category,
            label: label_for(view, category).to_string(),
            color: category.map(|c| c.color()),
            chief_complaint: latest.map(|t| t.chief_complaint.clone()),
            status: chart.status(),
        }
    }
}

/// Display label for a row. Untriaged patients read as a call to action on
/// the nurse view and as pending everywhere else.
pub fn label_for(view: QueueView, category: Option<TriageCategory>) -> &'static str {
    match (category, view) {
        (Some(category), _) => category.label(),
        (None, QueueView::Nurse) => "NEEDS TRIAGE",
        (None, _) => "PENDING",
    }
}
