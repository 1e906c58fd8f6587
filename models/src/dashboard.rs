// models/src/dashboard.rs
use serde::{Deserialize, Serialize};

/// Counters shown on the nurse dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NurseDashboardStats {
    /// Every registered patient
    pub total: usize,
    /// Patients without any triage assessment
    pub need_triage: usize,
    pub triaged: usize,
}

/// Counters shown on the doctor dashboard. Only triaged patients are counted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorDashboardStats {
    pub total: usize,
    /// Latest category is critical
    pub emergency: usize,
    /// No diagnosis recorded yet
    pub need_diagnosis: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub critical: usize,
    pub urgent: usize,
    pub less_urgent: usize,
    pub deceased: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCounts {
    pub nurse: usize,
    pub doctor: usize,
    pub admin: usize,
}

/// Aggregate view for administrators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminDashboardStats {
    pub total_patients: usize,
    pub total_users: usize,
    pub categories: CategoryCounts,
    pub roles: RoleCounts,
}
