// lib/src/store/memory.rs
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;

use models::identifiers::PatientId;
use models::medical::{Patient, PatientChart, PatientHistory, SystemUser, TriageRecord};

use super::snapshot::StoreSnapshot;
use super::PatientStore;
use crate::errors::{TriageError, TriageResult};

#[derive(Debug, Default)]
struct StoreState {
    patients: HashMap<PatientId, Patient>,
    triage: Vec<TriageRecord>,
    history: Vec<PatientHistory>,
    users: Vec<SystemUser>,
}

/// Process-local store. Clones share the same rows.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPatientStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryPatientStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        let patients = snapshot
            .patients
            .into_iter()
            .map(|p| (p.id, p))
            .collect();
        InMemoryPatientStore {
            state: Arc::new(RwLock::new(StoreState {
                patients,
                triage: snapshot.triage,
                history: snapshot.history,
                users: snapshot.users,
            })),
        }
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        let state = self.state.read().await;
        let mut patients: Vec<Patient> = state.patients.values().cloned().collect();
        patients.sort_by_key(|p| p.arrived_at);
        StoreSnapshot {
            patients,
            triage: state.triage.clone(),
            history: state.history.clone(),
            users: state.users.clone(),
        }
    }

    fn chart_for(state: &StoreState, patient: &Patient) -> PatientChart {
        PatientChart {
            patient: patient.clone(),
            triage: state
                .triage
                .iter()
                .filter(|t| t.patient_id == patient.id)
                .cloned()
                .collect(),
            history: state
                .history
                .iter()
                .filter(|h| h.patient_id == patient.id)
                .cloned()
                .collect(),
        }
    }
}

#[async_trait]
impl PatientStore for InMemoryPatientStore {
    async fn insert_patient(&self, patient: Patient) -> TriageResult<Patient> {
        let mut state = self.state.write().await;
        if state.patients.contains_key(&patient.id) {
            return Err(TriageError::Store(format!("patient {} already exists", patient.id)));
        }
        debug!("Inserting patient {}", patient.id);
        state.patients.insert(patient.id, patient.clone());
        Ok(patient)
    }

    async fn insert_triage(&self, record: TriageRecord) -> TriageResult<TriageRecord> {
        let mut state = self.state.write().await;
        if !state.patients.contains_key(&record.patient_id) {
            return Err(TriageError::PatientNotFound(record.patient_id));
        }
        debug!("Inserting triage {} for patient {}", record.id, record.patient_id);
        state.triage.push(record.clone());
        Ok(record)
    }

    async fn insert_history(&self, entry: PatientHistory) -> TriageResult<PatientHistory> {
        let mut state = self.state.write().await;
        if !state.patients.contains_key(&entry.patient_id) {
            return Err(TriageError::PatientNotFound(entry.patient_id));
        }
        debug!("Inserting history {} for patient {}", entry.id, entry.patient_id);
        state.history.push(entry.clone());
        Ok(entry)
    }

    async fn insert_user(&self, user: SystemUser) -> TriageResult<SystemUser> {
        let mut state = self.state.write().await;
        if state.users.iter().any(|u| u.username == user.username) {
            return Err(TriageError::Store(format!("username '{}' is taken", user.username)));
        }
        state.users.push(user.clone());
        Ok(user)
    }

    async fn get_chart(&self, patient_id: PatientId) -> TriageResult<Option<PatientChart>> {
        let state = self.state.read().await;
        Ok(state
            .patients
            .get(&patient_id)
            .map(|patient| Self::chart_for(&state, patient)))
    }

    async fn list_charts(&self) -> TriageResult<Vec<PatientChart>> {
        let state = self.state.read().await;
        let mut charts: Vec<PatientChart> = state
            .patients
            .values()
            .map(|patient| Self::chart_for(&state, patient))
            .collect();
        charts.sort_by(|a, b| b.patient.arrived_at.cmp(&a.patient.arrived_at));
        Ok(charts)
    }

    async fn list_users(&self) -> TriageResult<Vec<SystemUser>> {
        let state = self.state.read().await;
        let mut users = state.users.clone();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }
}
