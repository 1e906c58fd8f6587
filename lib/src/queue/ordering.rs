// lib/src/queue/ordering.rs
use std::cmp::Reverse;

use models::medical::{PatientChart, UNTRIAGED_PRIORITY};

use super::{QueueEntry, QueueView};

fn priority(chart: &PatientChart) -> u8 {
    chart
        .current_category()
        .map(|c| c.priority())
        .unwrap_or(UNTRIAGED_PRIORITY)
}

/// Newest arrival first. Every view starts from this order and the sorts
/// below are stable, so ties keep it.
fn by_arrival(charts: &[PatientChart]) -> Vec<&PatientChart> {
    let mut sorted: Vec<&PatientChart> = charts.iter().collect();
    sorted.sort_by_key(|c| Reverse(c.patient.arrived_at));
    sorted
}

fn entries(charts: Vec<&PatientChart>, view: QueueView) -> Vec<QueueEntry> {
    charts
        .into_iter()
        .map(|chart| QueueEntry::from_chart(chart, view))
        .collect()
}

/// Patients still waiting for triage first, then by severity.
pub fn nurse_queue(charts: &[PatientChart]) -> Vec<QueueEntry> {
    let mut sorted = by_arrival(charts);
    sorted.sort_by_key(|c| (c.is_triaged(), priority(c)));
    entries(sorted, QueueView::Nurse)
}

/// Triaged patients only: those without a diagnosis first, then by severity.
pub fn doctor_queue(charts: &[PatientChart]) -> Vec<QueueEntry> {
    let mut sorted: Vec<&PatientChart> = by_arrival(charts)
        .into_iter()
        .filter(|c| c.is_triaged())
        .collect();
    sorted.sort_by_key(|c| (c.has_history(), priority(c)));
    entries(sorted, QueueView::Doctor)
}

/// All patients, newest arrival first.
pub fn admin_list(charts: &[PatientChart]) -> Vec<QueueEntry> {
    entries(by_arrival(charts), QueueView::Admin)
}

pub fn render_queue(view: QueueView, charts: &[PatientChart]) -> Vec<QueueEntry> {
    match view {
        QueueView::Nurse => nurse_queue(charts),
        QueueView::Doctor => doctor_queue(charts),
        QueueView::Admin => admin_list(charts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use models::identifiers::{HistoryId, TriageId, UserId};
    use models::medical::{
        Gender, NewPatient, Patient, PatientHistory, PatientStatus, TriageCategory, TriageColor,
        TriageRecord, VitalSigns,
    };

    fn chart(name: &str, arrived_minute: i64, category: Option<TriageCategory>, diagnosed: bool) -> PatientChart {
        let arrived = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap() + Duration::minutes(arrived_minute);
        let patient = Patient::register(
            NewPatient { name: name.to_string(), age: 40, gender: Gender::Male, address: None, phone: None },
            arrived,
        );
        let mut chart = PatientChart::new(patient);
        if let Some(category) = category {
            chart.triage.push(TriageRecord {
                id: TriageId::new_v4(),
                patient_id: chart.patient.id,
                recorded_by: UserId::new_v4(),
                chief_complaint: format!("{} complaint", name),
                vitals: VitalSigns::default(),
                category,
                recorded_at: arrived + Duration::minutes(2),
            });
        }
        if diagnosed {
            chart.history.push(PatientHistory {
                id: HistoryId::new_v4(),
                patient_id: chart.patient.id,
                doctor_id: Some(UserId::new_v4()),
                status: PatientStatus::Completed,
                diagnosis: Some("observed".to_string()),
                treatment: None,
                updated_at: arrived + Duration::minutes(30),
            });
        }
        chart
    }

    fn names(entries: &[QueueEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    fn ward() -> Vec<PatientChart> {
        vec![
            chart("green", 0, Some(TriageCategory::LessUrgent), false),
            chart("untriaged", 1, None, false),
            chart("red-done", 2, Some(TriageCategory::Critical), true),
            chart("yellow", 3, Some(TriageCategory::Urgent), false),
            chart("red", 4, Some(TriageCategory::Critical), false),
            chart("black", 5, Some(TriageCategory::Deceased), false),
        ]
    }

    #[test]
    fn should_put_untriaged_first_on_nurse_queue() {
        let queue = nurse_queue(&ward());
        assert_eq!(names(&queue), vec!["untriaged", "red", "red-done", "yellow", "green", "black"]);
        assert_eq!(queue[0].label, "NEEDS TRIAGE");
        assert_eq!(queue[0].color, None);
        assert_eq!(queue[1].color, Some(TriageColor::Red));
    }

    #[test]
    fn should_put_undiagnosed_first_on_doctor_queue() {
        let queue = doctor_queue(&ward());
        assert_eq!(names(&queue), vec!["red", "yellow", "green", "black", "red-done"]);
        assert_eq!(queue[4].status, PatientStatus::Completed);
        assert_eq!(queue[0].status, PatientStatus::Waiting);
    }

    #[test]
    fn should_list_newest_first_for_admin() {
        let list = admin_list(&ward());
        assert_eq!(names(&list), vec!["black", "red", "yellow", "red-done", "untriaged", "green"]);
        assert_eq!(list[4].label, "PENDING");
    }

    #[test]
    fn should_break_ties_by_newest_arrival() {
        let charts = vec![
            chart("first", 0, Some(TriageCategory::Urgent), false),
            chart("second", 10, Some(TriageCategory::Urgent), false),
        ];
        assert_eq!(names(&nurse_queue(&charts)), vec!["second", "first"]);
        assert_eq!(names(&doctor_queue(&charts)), vec!["second", "first"]);
    }

    #[test]
    fn should_carry_latest_complaint() {
        let queue = render_queue(QueueView::Nurse, &[chart("red", 0, Some(TriageCategory::Critical), false)]);
        assert_eq!(queue[0].chief_complaint.as_deref(), Some("red complaint"));
        assert_eq!(queue[0].label, "EMERGENCY");
    }

    #[test]
    fn should_render_empty_queue() {
        assert!(render_queue(QueueView::Doctor, &[]).is_empty());
    }

    #[test]
    fn should_parse_queue_view() {
        assert_eq!("Doctor".parse::<QueueView>().unwrap(), QueueView::Doctor);
        assert!("triage".parse::<QueueView>().is_err());
    }
}
