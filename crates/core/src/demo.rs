//! Reference clinic scenario.
//!
//! Builds a clinic with one psychiatrist and one patient, links them, books an appointment,
//! edits the patient's diagnoses and history, and records a human-readable transcript of each
//! step. Both binaries print the transcript.

use crate::config::{parse_date, CoreConfig};
use crate::patient::Patient;
use crate::psychiatrist::Psychiatrist;
use crate::user::{ClinicUser, User};
use crate::{Clinic, ClinicResult};
use clinic_types::{MentalHealthIssue, UserId};
use std::sync::Arc;

pub const PSYCHIATRIST_ID: UserId = UserId::new(1);
pub const PATIENT_ID: UserId = UserId::new(2);

const APPOINTMENT_DATE: &str = "2024-10-05";
const APPOINTMENT_TIME: &str = "14:00";
const CONSULTATION_NOTE: &str = "Initial consultation completed. Prescribed antidepressants.";

/// Result of [`run_demonstration`].
pub struct Demonstration {
    pub clinic: Clinic,
    pub transcript: Vec<String>,
}

pub fn run_demonstration(cfg: Arc<CoreConfig>) -> ClinicResult<Demonstration> {
    let mut clinic = Clinic::new(cfg);
    let mut transcript = Vec::new();

    let psychiatrist = Psychiatrist::new(
        User::new(
            "John",
            "Doe",
            "johndoe",
            "john@clinic.com",
            "password123",
            parse_date("1975-05-15")?,
            PSYCHIATRIST_ID,
        ),
        "Clinical Psychiatrist",
    );
    let patient = Patient::new(User::new(
        "Jane",
        "Smith",
        "janesmith",
        "jane@email.com",
        "pass456",
        parse_date("1990-08-20")?,
        PATIENT_ID,
    ));

    transcript.push(psychiatrist.to_string());
    transcript.push(patient.to_string());

    clinic.register_psychiatrist(psychiatrist)?;
    clinic.register_patient(patient)?;

    let patient = clinic.patient_mut(PATIENT_ID)?;
    patient.add_diagnosis(MentalHealthIssue::Anxiety);
    patient.add_diagnosis(MentalHealthIssue::Depression);
    clinic.assign_patient(PSYCHIATRIST_ID, PATIENT_ID)?;

    for user in clinic.users() {
        transcript.push(format!("{} - Age: {}", user, clinic.age_of(user)));
    }

    let appointment_id = clinic.schedule_appointment(
        APPOINTMENT_DATE,
        APPOINTMENT_TIME,
        PSYCHIATRIST_ID,
        PATIENT_ID,
    )?;
    transcript.push(String::new());
    transcript.push(format!(
        "Created appointment: {}",
        clinic.appointment(appointment_id)?
    ));
    transcript.push(format!("Total appointments: {}", clinic.appointment_count()));

    transcript.push(String::new());
    transcript.push(format!(
        "Patient's diagnoses: {}",
        clinic.patient(PATIENT_ID)?.diagnosis_labels()
    ));
    clinic
        .patient_mut(PATIENT_ID)?
        .remove_diagnosis(MentalHealthIssue::Anxiety);
    transcript.push(format!(
        "Updated patient's diagnoses: {}",
        clinic.patient(PATIENT_ID)?.diagnosis_labels()
    ));

    clinic.record_history(PATIENT_ID, CONSULTATION_NOTE)?;

    transcript.push(String::new());
    transcript.push(format!(
        "Psychiatrist's patient count: {}",
        clinic.psychiatrist(PSYCHIATRIST_ID)?.patient_count()
    ));

    tracing::debug!(
        "demonstration finished with {} appointment(s) for {}",
        clinic.patient(PATIENT_ID)?.appointments().len(),
        PATIENT_ID
    );

    Ok(Demonstration { clinic, transcript })
}
