// server/src/cli/commands.rs

// Command-line arguments and subcommands for triage-cli.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

use ertriage::queue::QueueView;
use ertriage::TriageForm;
use models::identifiers::{PatientId, UserId};
use models::medical::{ConsciousnessLevel, Gender, NewPatient, TriageCategory, UserRole, VitalSigns};

#[derive(Debug, Parser)]
#[clap(name = "triage-cli", version, about = "Emergency room intake and triage")]
pub struct CliArgs {
    /// Path to a TOML/YAML config file. Defaults to ./triage.* when present.
    #[clap(long, global = true, env = "TRIAGE_CONFIG", value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    #[clap(subcommand)]
    pub command: TriageCommands,
}

/// Vital-sign flags. Defaults are the intake form's starting values.
#[derive(Debug, Args, Clone, PartialEq)]
pub struct VitalsArgs {
    /// Systolic blood pressure, mmHg
    #[clap(long, default_value_t = 120, allow_negative_numbers = true)]
    pub systolic: i32,
    /// Diastolic blood pressure, mmHg
    #[clap(long, default_value_t = 80, allow_negative_numbers = true)]
    pub diastolic: i32,
    /// Pulse rate, beats per minute
    #[clap(long, default_value_t = 80, allow_negative_numbers = true)]
    pub pulse: i32,
    /// Body temperature, degrees Celsius
    #[clap(long, default_value_t = 36.5, allow_negative_numbers = true)]
    pub temperature: f64,
    /// alert, drowsy, stuporous or comatose
    #[clap(long, default_value = "alert")]
    pub consciousness: ConsciousnessLevel,
}

impl From<&VitalsArgs> for VitalSigns {
    fn from(args: &VitalsArgs) -> Self {
        VitalSigns {
            systolic_bp: args.systolic,
            diastolic_bp: args.diastolic,
            pulse_rate: args.pulse,
            body_temperature: args.temperature,
            consciousness: args.consciousness,
        }
    }
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum TriageCommands {
    /// Classify a set of vital signs without storing anything.
    Classify {
        #[clap(flatten)]
        vitals: VitalsArgs,
        /// Print the assessment as JSON
        #[clap(long)]
        json: bool,
    },
    /// Register a new patient with their first triage assessment.
    Intake {
        #[clap(long)]
        name: String,
        #[clap(long)]
        age: u8,
        /// male/female (m/f)
        #[clap(long)]
        gender: Gender,
        #[clap(long)]
        address: Option<String>,
        #[clap(long)]
        phone: Option<String>,
        #[clap(long)]
        complaint: String,
        #[clap(flatten)]
        vitals: VitalsArgs,
        /// Staff id of the recording nurse
        #[clap(long)]
        nurse: Option<UserId>,
    },
    /// Record a new assessment for an existing patient.
    Retriage {
        #[clap(long)]
        patient: PatientId,
        #[clap(long)]
        complaint: String,
        #[clap(flatten)]
        vitals: VitalsArgs,
        #[clap(long)]
        nurse: Option<UserId>,
    },
    /// Record a diagnosis and treatment.
    Diagnose {
        #[clap(long)]
        patient: PatientId,
        #[clap(long)]
        diagnosis: String,
        #[clap(long)]
        treatment: Option<String>,
        #[clap(long)]
        doctor: Option<UserId>,
    },
    /// Assign a category by hand, e.g. deceased.
    Override {
        #[clap(long)]
        patient: PatientId,
        #[clap(long)]
        category: TriageCategory,
        #[clap(long)]
        clinician: Option<UserId>,
    },
    /// Register a staff account.
    AddUser {
        #[clap(long)]
        username: String,
        #[clap(long)]
        name: String,
        /// nurse, doctor or admin
        #[clap(long)]
        role: UserRole,
    },
    /// Print the prioritized patient list for a role.
    Queue {
        #[clap(long, default_value = "nurse")]
        view: QueueView,
    },
    /// Print dashboard counters for a role.
    Stats {
        #[clap(long, default_value = "admin")]
        view: QueueView,
    },
    /// Print one patient's chart.
    Show {
        #[clap(long)]
        patient: PatientId,
    },
}

impl TriageCommands {
    /// Whether the command writes to the store.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            TriageCommands::Intake { .. }
                | TriageCommands::Retriage { .. }
                | TriageCommands::Diagnose { .. }
                | TriageCommands::Override { .. }
                | TriageCommands::AddUser { .. }
        )
    }
}

/// Staff id used when a command is run without naming the acting user.
pub fn unassigned_staff() -> UserId {
    UserId::from(Uuid::nil())
}

pub fn triage_form(complaint: &str, vitals: &VitalsArgs) -> TriageForm {
    TriageForm { chief_complaint: complaint.to_string(), vitals: vitals.into() }
}

pub fn new_patient(
    name: &str,
    age: u8,
    gender: Gender,
    address: Option<&String>,
    phone: Option<&String>,
) -> NewPatient {
    NewPatient {
        name: name.to_string(),
        age,
        gender,
        address: address.cloned(),
        phone: phone.cloned(),
    }
}
