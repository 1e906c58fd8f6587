// lib/src/dashboard/mod.rs

//! Aggregate counters for the role dashboards. Every count is taken over the
//! latest triage record of each patient.

use models::dashboard::{
    AdminDashboardStats, CategoryCounts, DoctorDashboardStats, NurseDashboardStats, RoleCounts,
};
use models::medical::{PatientChart, SystemUser, TriageCategory, UserRole};

pub fn nurse_stats(charts: &[PatientChart]) -> NurseDashboardStats {
    let total = charts.len();
    let need_triage = charts.iter().filter(|c| !c.is_triaged()).count();
    NurseDashboardStats { total, need_triage, triaged: total - need_triage }
}

/// Only patients with at least one triage record are counted.
pub fn doctor_stats(charts: &[PatientChart]) -> DoctorDashboardStats {
    let triaged: Vec<&PatientChart> = charts.iter().filter(|c| c.is_triaged()).collect();
    let completed = triaged.iter().filter(|c| c.has_history()).count();
    DoctorDashboardStats {
        total: triaged.len(),
        emergency: triaged
            .iter()
            .filter(|c| c.current_category() == Some(TriageCategory::Critical))
            .count(),
        need_diagnosis: triaged.len() - completed,
        completed,
    }
}

pub fn category_counts(charts: &[PatientChart]) -> CategoryCounts {
    let mut counts = CategoryCounts::default();
    for category in charts.iter().filter_map(|c| c.current_category()) {
        match category {
            TriageCategory::Critical => counts.critical += 1,
            TriageCategory::Urgent => counts.urgent += 1,
            TriageCategory::LessUrgent => counts.less_urgent += 1,
            TriageCategory::Deceased => counts.deceased += 1,
        }
    }
    counts
}

pub fn role_counts(users: &[SystemUser]) -> RoleCounts {
    let mut counts = RoleCounts::default();
    for user in users {
        match user.role {
            UserRole::Nurse => counts.nurse += 1,
            UserRole::Doctor => counts.doctor += 1,
            UserRole::Admin => counts.admin += 1,
        }
    }
    counts
}

pub fn admin_stats(charts: &[PatientChart], users: &[SystemUser]) -> AdminDashboardStats {
    AdminDashboardStats {
        total_patients: charts.len(),
        total_users: users.len(),
        categories: category_counts(charts),
        roles: role_counts(users),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use models::identifiers::{HistoryId, TriageId, UserId};
    use models::medical::{Gender, NewPatient, Patient, PatientHistory, PatientStatus, TriageRecord, VitalSigns};

    fn chart(categories: &[TriageCategory], diagnosed: bool) -> PatientChart {
        let patient = Patient::register(
            NewPatient { name: "p".to_string(), age: 20, gender: Gender::Female, address: None, phone: None },
            Utc::now(),
        );
        let mut chart = PatientChart::new(patient);
        for (i, category) in categories.iter().enumerate() {
            chart.triage.push(TriageRecord {
                id: TriageId::new_v4(),
                patient_id: chart.patient.id,
                recorded_by: UserId::new_v4(),
                chief_complaint: "pain".to_string(),
                vitals: VitalSigns::default(),
                category: *category,
                recorded_at: chart.patient.arrived_at + chrono::Duration::minutes(i as i64),
            });
        }
        if diagnosed {
            chart.history.push(PatientHistory {
                id: HistoryId::new_v4(),
                patient_id: chart.patient.id,
                doctor_id: None,
                status: PatientStatus::Completed,
                diagnosis: Some("sprain".to_string()),
                treatment: None,
                updated_at: Utc::now(),
            });
        }
        chart
    }

    fn user(role: UserRole) -> SystemUser {
        SystemUser {
            id: UserId::new_v4(),
            username: format!("{}-{}", role, UserId::new_v4()),
            display_name: "staff".to_string(),
            role,
            created_at: Utc::now(),
        }
    }

    fn ward() -> Vec<PatientChart> {
        vec![
            chart(&[], false),
            chart(&[TriageCategory::Critical], false),
            chart(&[TriageCategory::Critical], true),
            // Re-triaged from critical to urgent: only the latest counts.
            chart(&[TriageCategory::Critical, TriageCategory::Urgent], false),
            chart(&[TriageCategory::LessUrgent], true),
            chart(&[TriageCategory::Urgent, TriageCategory::Deceased], false),
        ]
    }

    #[test]
    fn should_count_nurse_dashboard() {
        let stats = nurse_stats(&ward());
        assert_eq!(stats, NurseDashboardStats { total: 6, need_triage: 1, triaged: 5 });
    }

    #[test]
    fn should_count_doctor_dashboard_over_triaged_only() {
        let stats = doctor_stats(&ward());
        assert_eq!(stats, DoctorDashboardStats { total: 5, emergency: 2, need_diagnosis: 3, completed: 2 });
    }

    #[test]
    fn should_count_admin_dashboard() {
        let users = vec![user(UserRole::Nurse), user(UserRole::Nurse), user(UserRole::Doctor), user(UserRole::Admin)];
        let stats = admin_stats(&ward(), &users);
        assert_eq!(stats.total_patients, 6);
        assert_eq!(stats.total_users, 4);
        assert_eq!(stats.categories, CategoryCounts { critical: 2, urgent: 1, less_urgent: 1, deceased: 1 });
        assert_eq!(stats.roles, RoleCounts { nurse: 2, doctor: 1, admin: 1 });
    }

    #[test]
    fn should_return_zeroes_for_empty_ward() {
        assert_eq!(nurse_stats(&[]), NurseDashboardStats::default());
        assert_eq!(doctor_stats(&[]), DoctorDashboardStats::default());
        assert_eq!(admin_stats(&[], &[]), AdminDashboardStats::default());
    }
}
