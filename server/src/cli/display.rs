// server/src/cli/display.rs

// Plain-text rendering of assessments, queues, charts and dashboard counters.
use colored::{ColoredString, Colorize};

use ertriage::queue::{QueueEntry, QueueView};
use ertriage::TriageAssessment;
use models::dashboard::{AdminDashboardStats, DoctorDashboardStats, NurseDashboardStats};
use models::medical::{PatientChart, TriageColor};

const TIME_FORMAT: &str = "%d-%m-%Y %H:%M";

pub fn paint(label: &str, color: Option<TriageColor>) -> ColoredString {
    match color {
        Some(TriageColor::Red) => label.white().on_red().bold(),
        Some(TriageColor::Yellow) => label.black().on_yellow().bold(),
        Some(TriageColor::Green) => label.white().on_green().bold(),
        Some(TriageColor::Black) => label.white().on_black().bold(),
        None => label.dimmed(),
    }
}

pub fn format_assessment(assessment: &TriageAssessment) -> String {
    let category = assessment.category;
    let mut out = format!("Triage category: {}", paint(category.label(), Some(category.color())));
    for finding in &assessment.findings {
        out.push_str(&format!("\n  - {}", finding));
    }
    out
}

pub fn format_queue(view: QueueView, entries: &[QueueEntry]) -> String {
    if entries.is_empty() {
        return format!("No patients on the {} queue.", view);
    }
    let mut lines = vec![format!("{} queue ({} patients)", view, entries.len())];
    for (position, entry) in entries.iter().enumerate() {
        lines.push(format!(
            "{:>3}. {} {} ({}y, {}) arrived {} [{}] {}\n     {}",
            position + 1,
            paint(&entry.label, entry.color),
            entry.name,
            entry.age,
            entry.gender,
            entry.arrived_at.format(TIME_FORMAT),
            entry.status,
            entry.chief_complaint.as_deref().unwrap_or("-"),
            entry.patient_id,
        ));
    }
    lines.join("\n")
}

pub fn format_chart(chart: &PatientChart) -> String {
    let patient = &chart.patient;
    let mut lines = vec![
        format!("Patient {} ({})", patient.name, patient.id),
        format!("  Age/gender: {} / {}", patient.age, patient.gender),
        format!("  Arrived:    {}", patient.arrived_at.format(TIME_FORMAT)),
        format!("  Address:    {}", patient.address.as_deref().unwrap_or("-")),
        format!("  Phone:      {}", patient.phone.as_deref().unwrap_or("-")),
        format!("  Status:     {}", chart.status()),
    ];

    if chart.triage.is_empty() {
        lines.push("  Triage:     not yet triaged".to_string());
    }
    let mut triage: Vec<_> = chart.triage.iter().collect();
    triage.sort_by_key(|t| t.recorded_at);
    for record in triage {
        let v = &record.vitals;
        lines.push(format!(
            "  Triage {}: {} | {} | BP {}/{} pulse {} temp {:.1} {}",
            record.recorded_at.format(TIME_FORMAT),
            paint(record.category.label(), Some(record.category.color())),
            record.chief_complaint,
            v.systolic_bp,
            v.diastolic_bp,
            v.pulse_rate,
            v.body_temperature,
            v.consciousness,
        ));
    }

    let mut history: Vec<_> = chart.history.iter().collect();
    history.sort_by_key(|h| h.updated_at);
    for entry in history {
        lines.push(format!(
            "  Diagnosis {}: {} | treatment: {}",
            entry.updated_at.format(TIME_FORMAT),
            entry.diagnosis.as_deref().unwrap_or("-"),
            entry.treatment.as_deref().unwrap_or("-"),
        ));
    }
    lines.join("\n")
}

pub fn format_nurse_stats(stats: &NurseDashboardStats) -> String {
    format!(
        "Total patients: {}\nNeed triage:    {}\nTriaged:        {}",
        stats.total, stats.need_triage, stats.triaged
    )
}

pub fn format_doctor_stats(stats: &DoctorDashboardStats) -> String {
    format!(
        "Triaged patients: {}\nEmergency:        {}\nNeed diagnosis:   {}\nCompleted:        {}",
        stats.total, stats.emergency, stats.need_diagnosis, stats.completed
    )
}

pub fn format_admin_stats(stats: &AdminDashboardStats) -> String {
    let c = &stats.categories;
    let r = &stats.roles;
    format!(
        "Patients: {}  Users: {}\nRed: {}  Yellow: {}  Green: {}  Black: {}\nNurses: {}  Doctors: {}  Admins: {}",
        stats.total_patients,
        stats.total_users,
        c.critical,
        c.urgent,
        c.less_urgent,
        c.deceased,
        r.nurse,
        r.doctor,
        r.admin
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ertriage::assess;
    use models::medical::VitalSigns;

    #[test]
    fn should_list_findings_under_category() {
        colored::control::set_override(false);
        let vitals = VitalSigns { body_temperature: 38.5, ..VitalSigns::default() };
        let text = format_assessment(&assess(&vitals));
        assert_eq!(text, "Triage category: URGENT\n  - temperature 38.5 °C > 38.0");
    }

    #[test]
    fn should_report_empty_queue() {
        assert_eq!(format_queue(QueueView::Doctor, &[]), "No patients on the doctor queue.");
    }

    #[test]
    fn should_format_admin_counters() {
        let mut stats = AdminDashboardStats::default();
        stats.total_patients = 3;
        stats.categories.critical = 2;
        stats.roles.doctor = 1;
        let text = format_admin_stats(&stats);
        assert!(text.starts_with("Patients: 3  Users: 0"));
        assert!(text.contains("Red: 2"));
        assert!(text.contains("Doctors: 1"));
    }
}
