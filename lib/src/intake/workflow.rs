// lib/src/intake/workflow.rs
use chrono::Utc;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use models::identifiers::{HistoryId, PatientId, TriageId, UserId};
use models::medical::{
    Patient, PatientChart, PatientHistory, PatientStatus, TriageCategory, TriageRecord, VitalSigns,
};

use super::validation::{require, validate_intake, validate_triage_form, IntakePolicy};
use super::{PatientIntake, TriageForm};
use crate::errors::{TriageError, TriageResult};
use crate::store::PatientStore;
use crate::triage::{assess, classify, TriageAssessment, TriageFinding};

/// Result of a successful registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeReceipt {
    pub patient: Patient,
    pub triage: TriageRecord,
    pub findings: Vec<TriageFinding>,
}

/// Runs the intake and diagnosis steps against a [`PatientStore`]. Store
/// failures are returned to the caller as-is; nothing is retried.
pub struct IntakeService<S> {
    store: S,
    policy: IntakePolicy,
}

impl<S: PatientStore> IntakeService<S> {
    pub fn new(store: S, policy: IntakePolicy) -> Self {
        IntakeService { store, policy }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Category the vitals would receive, without storing anything.
    pub fn preview(&self, vitals: &VitalSigns) -> TriageAssessment {
        assess(vitals)
    }

    /// Validates the intake, stores the patient, classifies the vitals and
    /// stores the triage record linked to the new patient.
    pub async fn register_patient(&self, nurse_id: UserId, intake: PatientIntake) -> TriageResult<IntakeReceipt> {
        validate_intake(&intake, self.policy)?;
        let PatientIntake { patient, triage: form } = intake;

        let patient = self.store.insert_patient(Patient::register(patient, Utc::now())).await?;
        let assessment = assess(&form.vitals);
        let record = self
            .store
            .insert_triage(TriageRecord {
                id: TriageId::new_v4(),
                patient_id: patient.id,
                recorded_by: nurse_id,
                chief_complaint: form.chief_complaint.trim().to_string(),
                vitals: form.vitals,
                category: assessment.category,
                recorded_at: Utc::now(),
            })
            .await?;

        info!(
            "Registered patient {} with triage category {}",
            patient.id, record.category
        );
        Ok(IntakeReceipt { patient, triage: record, findings: assessment.findings })
    }

    /// Records a fresh assessment for an already registered patient. Earlier
    /// records are kept; the newest one becomes the patient's category.
    pub async fn retriage(&self, patient_id: PatientId, nurse_id: UserId, form: TriageForm) -> TriageResult<TriageRecord> {
        validate_triage_form(&form, self.policy)?;
        self.chart(patient_id).await?;

        let record = self
            .store
            .insert_triage(TriageRecord {
                id: TriageId::new_v4(),
                patient_id,
                recorded_by: nurse_id,
                chief_complaint: form.chief_complaint.trim().to_string(),
                category: classify(&form.vitals),
                vitals: form.vitals,
                recorded_at: Utc::now(),
            })
            .await?;
        info!("Re-triaged patient {} as {}", patient_id, record.category);
        Ok(record)
    }

    /// Clinician override of the computed category. The latest measurements
    /// and complaint are carried onto a new record with the assigned category.
    /// This is the only way a patient becomes `Deceased`.
    pub async fn override_category(
        &self,
        patient_id: PatientId,
        clinician_id: UserId,
        category: TriageCategory,
    ) -> TriageResult<TriageRecord> {
        let chart = self.chart(patient_id).await?;
        let latest = chart
            .latest_triage()
            .ok_or(TriageError::NoTriageRecord(patient_id))?;

        let record = TriageRecord {
            id: TriageId::new_v4(),
            recorded_by: clinician_id,
            category,
            recorded_at: Utc::now(),
            ..latest.clone()
        };
        warn!(
            "Triage category for patient {} overridden from {} to {} by {}",
            patient_id, latest.category, category, clinician_id
        );
        self.store.insert_triage(record).await
    }

    /// Stores a doctor's diagnosis and treatment, marking the patient as handled.
    pub async fn record_diagnosis(
        &self,
        patient_id: PatientId,
        doctor_id: UserId,
        diagnosis: &str,
        treatment: Option<&str>,
    ) -> TriageResult<PatientHistory> {
        require("diagnosis", diagnosis)?;
        self.chart(patient_id).await?;

        let entry = self
            .store
            .insert_history(PatientHistory {
                id: HistoryId::new_v4(),
                patient_id,
                doctor_id: Some(doctor_id),
                status: PatientStatus::Completed,
                diagnosis: Some(diagnosis.trim().to_string()),
                treatment: treatment
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string),
                updated_at: Utc::now(),
            })
            .await?;
        info!("Recorded diagnosis for patient {}", patient_id);
        Ok(entry)
    }

    pub async fn latest_diagnosis(&self, patient_id: PatientId) -> TriageResult<Option<PatientHistory>> {
        let chart = self.chart(patient_id).await?;
        Ok(chart.latest_history().cloned())
    }

    async fn chart(&self, patient_id: PatientId) -> TriageResult<PatientChart> {
        self.store
            .get_chart(patient_id)
            .await?
            .ok_or(TriageError::PatientNotFound(patient_id))
    }
}
