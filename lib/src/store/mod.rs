// lib/src/store/mod.rs

//! The persistence seam. In production this sits in front of the hosted
//! backend; `InMemoryPatientStore` backs the CLI and the tests.

pub mod memory;
pub mod snapshot;

use async_trait::async_trait;

use models::identifiers::PatientId;
use models::medical::{Patient, PatientChart, PatientHistory, SystemUser, TriageRecord};

use crate::errors::TriageResult;

pub use memory::InMemoryPatientStore;
pub use snapshot::{load_snapshot, save_snapshot, StoreSnapshot};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PatientStore: Send + Sync {
    /// Persists a new patient row and returns it as stored.
    async fn insert_patient(&self, patient: Patient) -> TriageResult<Patient>;

    /// Persists a triage row. The referenced patient must exist.
    async fn insert_triage(&self, record: TriageRecord) -> TriageResult<TriageRecord>;

    /// Persists a diagnosis/treatment row. The referenced patient must exist.
    async fn insert_history(&self, entry: PatientHistory) -> TriageResult<PatientHistory>;

    async fn insert_user(&self, user: SystemUser) -> TriageResult<SystemUser>;

    /// Loads one patient joined with their triage and history rows.
    async fn get_chart(&self, patient_id: PatientId) -> TriageResult<Option<PatientChart>>;

    /// Every patient chart, newest arrival first.
    async fn list_charts(&self) -> TriageResult<Vec<PatientChart>>;

    /// Every staff account, newest first.
    async fn list_users(&self) -> TriageResult<Vec<SystemUser>>;
}
