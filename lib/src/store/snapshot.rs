// lib/src/store/snapshot.rs
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use models::medical::{Patient, PatientHistory, SystemUser, TriageRecord};

use super::memory::InMemoryPatientStore;
use crate::errors::TriageResult;

/// Serialized form of every row held by an [`InMemoryPatientStore`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub patients: Vec<Patient>,
    #[serde(default)]
    pub triage: Vec<TriageRecord>,
    #[serde(default)]
    pub history: Vec<PatientHistory>,
    #[serde(default)]
    pub users: Vec<SystemUser>,
}

/// Loads a store from a JSON snapshot. A missing file yields an empty store.
pub async fn load_snapshot(path: &Path) -> TriageResult<InMemoryPatientStore> {
    if !tokio::fs::try_exists(path).await? {
        info!("No snapshot at {}, starting with an empty store", path.display());
        return Ok(InMemoryPatientStore::new());
    }
    let raw = tokio::fs::read(path).await?;
    let snapshot: StoreSnapshot = serde_json::from_slice(&raw)?;
    info!(
        "Loaded {} patients and {} triage records from {}",
        snapshot.patients.len(),
        snapshot.triage.len(),
        path.display()
    );
    Ok(InMemoryPatientStore::from_snapshot(snapshot))
}

/// Writes the store to `path`, replacing any previous snapshot.
pub async fn save_snapshot(store: &InMemoryPatientStore, path: &Path) -> TriageResult<()> {
    let snapshot = store.snapshot().await;
    let json = serde_json::to_vec_pretty(&snapshot)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, json).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}
