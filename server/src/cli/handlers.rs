// server/src/cli/handlers.rs

// Executes one parsed command against the intake service and returns the
// text to print. Saving the store is left to the caller.
use anyhow::{Context, Result};
use chrono::Utc;
use log::info;

use ertriage::dashboard::{admin_stats, doctor_stats, nurse_stats};
use ertriage::queue::{render_queue, QueueView};
use ertriage::store::PatientStore;
use ertriage::{IntakeService, PatientIntake};
use models::identifiers::UserId;
use models::medical::{SystemUser, VitalSigns};

use crate::cli::commands::{new_patient, triage_form, unassigned_staff, TriageCommands};
use crate::cli::display::{
    format_admin_stats, format_assessment, format_chart, format_doctor_stats, format_nurse_stats,
    format_queue, paint,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutcome {
    pub output: String,
}

impl CommandOutcome {
    fn text(output: impl Into<String>) -> Self {
        CommandOutcome { output: output.into() }
    }
}

pub async fn execute<S: PatientStore>(command: &TriageCommands, service: &IntakeService<S>) -> Result<CommandOutcome> {
    match command {
        TriageCommands::Classify { vitals, json } => {
            let assessment = service.preview(&VitalSigns::from(vitals));
            if *json {
                let body = serde_json::to_string_pretty(&assessment)
                    .context("Failed to serialize assessment")?;
                Ok(CommandOutcome::text(body))
            } else {
                Ok(CommandOutcome::text(format_assessment(&assessment)))
            }
        }
        TriageCommands::Intake { name, age, gender, address, phone, complaint, vitals, nurse } => {
            let intake = PatientIntake {
                patient: new_patient(name, *age, *gender, address.as_ref(), phone.as_ref()),
                triage: triage_form(complaint, vitals),
            };
            let receipt = service
                .register_patient(nurse.unwrap_or_else(unassigned_staff), intake)
                .await
                .context("Failed to register patient")?;
            let category = receipt.triage.category;
            let mut output = format!(
                "Registered {} ({}) with triage category {}",
                receipt.patient.name,
                receipt.patient.id,
                paint(category.label(), Some(category.color()))
            );
            for finding in &receipt.findings {
                output.push_str(&format!("\n  - {}", finding));
            }
            Ok(CommandOutcome::text(output))
        }
        TriageCommands::Retriage { patient, complaint, vitals, nurse } => {
            let record = service
                .retriage(*patient, nurse.unwrap_or_else(unassigned_staff), triage_form(complaint, vitals))
                .await
                .with_context(|| format!("Failed to re-triage patient {}", patient))?;
            Ok(CommandOutcome::text(format!(
                "Patient {} re-triaged as {}",
                patient,
                paint(record.category.label(), Some(record.category.color()))
            )))
        }
        TriageCommands::Diagnose { patient, diagnosis, treatment, doctor } => {
            service
                .record_diagnosis(
                    *patient,
                    doctor.unwrap_or_else(unassigned_staff),
                    diagnosis,
                    treatment.as_deref(),
                )
                .await
                .with_context(|| format!("Failed to record diagnosis for patient {}", patient))?;
            Ok(CommandOutcome::text(format!("Diagnosis recorded for patient {}", patient)))
        }
        TriageCommands::Override { patient, category, clinician } => {
            let record = service
                .override_category(*patient, clinician.unwrap_or_else(unassigned_staff), *category)
                .await
                .with_context(|| format!("Failed to override category for patient {}", patient))?;
            Ok(CommandOutcome::text(format!(
                "Patient {} is now {}",
                patient,
                paint(record.category.label(), Some(record.category.color()))
            )))
        }
        TriageCommands::AddUser { username, name, role } => {
            let user = service
                .store()
                .insert_user(SystemUser {
                    id: UserId::new_v4(),
                    username: username.trim().to_string(),
                    display_name: name.trim().to_string(),
                    role: *role,
                    created_at: Utc::now(),
                })
                .await
                .context("Failed to add user")?;
            info!("Added {} account {}", user.role, user.username);
            Ok(CommandOutcome::text(format!("Added {} {} ({})", user.role, user.username, user.id)))
        }
        TriageCommands::Queue { view } => {
            let charts = service.store().list_charts().await.context("Failed to load patients")?;
            Ok(CommandOutcome::text(format_queue(*view, &render_queue(*view, &charts))))
        }
        TriageCommands::Stats { view } => {
            let charts = service.store().list_charts().await.context("Failed to load patients")?;
            let output = match view {
                QueueView::Nurse => format_nurse_stats(&nurse_stats(&charts)),
                QueueView::Doctor => format_doctor_stats(&doctor_stats(&charts)),
                QueueView::Admin => {
                    let users = service.store().list_users().await.context("Failed to load users")?;
                    format_admin_stats(&admin_stats(&charts, &users))
                }
            };
            Ok(CommandOutcome::text(output))
        }
        TriageCommands::Show { patient } => {
            let chart = service
                .store()
                .get_chart(*patient)
                .await
                .context("Failed to load patient")?
                .with_context(|| format!("Patient {} was not found", patient))?;
            Ok(CommandOutcome::text(format_chart(&chart)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::CliArgs;
    use clap::Parser;
    use ertriage::store::InMemoryPatientStore;
    use ertriage::IntakePolicy;

    fn service() -> IntakeService<InMemoryPatientStore> {
        IntakeService::new(InMemoryPatientStore::new(), IntakePolicy::default())
    }

    async fn run(service: &IntakeService<InMemoryPatientStore>, args: &[&str]) -> Result<String> {
        let mut argv = vec!["triage-cli"];
        argv.extend_from_slice(args);
        let parsed = CliArgs::try_parse_from(argv)?;
        Ok(execute(&parsed.command, service).await?.output)
    }

    #[tokio::test]
    async fn should_emit_json_assessment() {
        let service = service();
        let output = run(&service, &["classify", "--consciousness", "comatose", "--json"]).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["category"], "critical");
        assert_eq!(value["findings"][0]["kind"], "consciousness");
    }

    #[tokio::test]
    async fn should_register_then_queue_and_count() {
        colored::control::set_override(false);
        let service = service();
        let output = run(
            &service,
            &["intake", "--name", "Rudi", "--age", "67", "--gender", "m", "--complaint", "dizziness", "--systolic", "190"],
        )
        .await
        .unwrap();
        assert!(output.contains("EMERGENCY"));

        let queue = run(&service, &["queue", "--view", "doctor"]).await.unwrap();
        assert!(queue.starts_with("doctor queue (1 patients)"));
        assert!(queue.contains("Rudi"));

        let stats = run(&service, &["stats", "--view", "doctor"]).await.unwrap();
        assert!(stats.contains("Emergency:        1"));
    }

    #[tokio::test]
    async fn should_fail_for_unknown_patient() {
        let service = service();
        let err = run(&service, &["show", "--patient", "67e55044-10b1-426f-9247-bb680e5fe0c8"])
            .await
            .unwrap_err();
        assert!(err.to_string().contains("was not found"));
    }

    #[tokio::test]
    async fn should_reject_implausible_intake() {
        let service = service();
        let result = run(
            &service,
            &["intake", "--name", "Rudi", "--age", "67", "--gender", "m", "--complaint", "pain", "--pulse", "400"],
        )
        .await;
        assert!(result.is_err());
        assert!(service.store().list_charts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_count_added_users_in_admin_stats() {
        colored::control::set_override(false);
        let service = service();
        run(&service, &["add-user", "--username", "dr.sari", "--name", "Sari", "--role", "doctor"])
            .await
            .unwrap();
        let stats = run(&service, &["stats", "--view", "admin"]).await.unwrap();
        assert!(stats.contains("Users: 1"));
        assert!(stats.contains("Doctors: 1"));
    }
}
