//! In-memory clinic registry.
//!
//! [`Clinic`] owns every registered psychiatrist and patient together with one
//! [`AppointmentBook`]. Psychiatrist and patient identifiers are unique within their role.

use crate::appointment::{Appointment, AppointmentBook};
use crate::config::CoreConfig;
use crate::patient::Patient;
use crate::psychiatrist::Psychiatrist;
use crate::user::ClinicUser;
use crate::{ClinicError, ClinicResult};
use chrono::NaiveDate;
use clinic_types::{AppointmentId, UserId};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

pub struct Clinic {
    cfg: Arc<CoreConfig>,
    psychiatrists: BTreeMap<UserId, Psychiatrist>,
    patients: BTreeMap<UserId, Patient>,
    appointments: AppointmentBook,
}

#[derive(Serialize)]
struct ClinicSnapshot<'a> {
    today: NaiveDate,
    psychiatrists: Vec<&'a Psychiatrist>,
    patients: Vec<&'a Patient>,
    appointments: Vec<&'a Appointment>,
    appointment_count: u64,
}

impl Clinic {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            cfg,
            psychiatrists: BTreeMap::new(),
            patients: BTreeMap::new(),
            appointments: AppointmentBook::new(),
        }
    }

    /// The reference date used for ages and history entries.
    pub fn today(&self) -> NaiveDate {
        self.cfg.today()
    }

    pub fn register_psychiatrist(&mut self, psychiatrist: Psychiatrist) -> ClinicResult<()> {
        let id = psychiatrist.id();
        if self.psychiatrists.contains_key(&id) {
            tracing::warn!("rejected duplicate psychiatrist id {}", id);
            return Err(ClinicError::DuplicatePsychiatrist(id));
        }
        tracing::info!("registered psychiatrist {} ({})", id, psychiatrist);
        self.psychiatrists.insert(id, psychiatrist);
        Ok(())
    }

    pub fn register_patient(&mut self, patient: Patient) -> ClinicResult<()> {
        let id = patient.id();
        if self.patients.contains_key(&id) {
            tracing::warn!("rejected duplicate patient id {}", id);
            return Err(ClinicError::DuplicatePatient(id));
        }
        tracing::info!("registered patient {} ({})", id, patient);
        self.patients.insert(id, patient);
        Ok(())
    }

    pub fn psychiatrist(&self, id: UserId) -> ClinicResult<&Psychiatrist> {
        self.psychiatrists
            .get(&id)
            .ok_or(ClinicError::UnknownPsychiatrist(id))
    }

    pub fn psychiatrist_mut(&mut self, id: UserId) -> ClinicResult<&mut Psychiatrist> {
        self.psychiatrists
            .get_mut(&id)
            .ok_or(ClinicError::UnknownPsychiatrist(id))
    }

    pub fn patient(&self, id: UserId) -> ClinicResult<&Patient> {
        self.patients
            .get(&id)
            .ok_or(ClinicError::UnknownPatient(id))
    }

    pub fn patient_mut(&mut self, id: UserId) -> ClinicResult<&mut Patient> {
        self.patients
            .get_mut(&id)
            .ok_or(ClinicError::UnknownPatient(id))
    }

    /// Every registered user, psychiatrists first, each group in identifier order.
    pub fn users(&self) -> Vec<&dyn ClinicUser> {
        self.psychiatrists
            .values()
            .map(|p| p as &dyn ClinicUser)
            .chain(self.patients.values().map(|p| p as &dyn ClinicUser))
            .collect()
    }

    /// Adds a registered patient to a registered psychiatrist's caseload.
    ///
    /// Assigning the same patient twice is not an error.
    pub fn assign_patient(
        &mut self,
        psychiatrist_id: UserId,
        patient_id: UserId,
    ) -> ClinicResult<()> {
        let patient = self
            .patients
            .get(&patient_id)
            .ok_or(ClinicError::UnknownPatient(patient_id))?;
        let psychiatrist = self
            .psychiatrists
            .get_mut(&psychiatrist_id)
            .ok_or(ClinicError::UnknownPsychiatrist(psychiatrist_id))?;

        if psychiatrist.add_patient(patient) {
            tracing::info!(
                "assigned patient {} to psychiatrist {}",
                patient_id,
                psychiatrist_id
            );
        } else {
            tracing::debug!(
                "patient {} already assigned to psychiatrist {}",
                patient_id,
                psychiatrist_id
            );
        }
        Ok(())
    }

    /// Books an appointment and links it into both participants' appointment lists.
    pub fn schedule_appointment(
        &mut self,
        date: impl Into<String>,
        time: impl Into<String>,
        psychiatrist_id: UserId,
        patient_id: UserId,
    ) -> ClinicResult<AppointmentId> {
        let psychiatrist = self
            .psychiatrists
            .get(&psychiatrist_id)
            .ok_or(ClinicError::UnknownPsychiatrist(psychiatrist_id))?;
        let patient = self
            .patients
            .get(&patient_id)
            .ok_or(ClinicError::UnknownPatient(patient_id))?;

        let appointment = self.appointments.book(date, time, psychiatrist, patient);
        let id = appointment.id();

        self.psychiatrist_mut(psychiatrist_id)?.add_appointment(id);
        self.patient_mut(patient_id)?.add_appointment(id);

        tracing::info!("scheduled {}", appointment);
        Ok(id)
    }

    pub fn appointment(&self, id: AppointmentId) -> ClinicResult<&Appointment> {
        self.appointments
            .get(id)
            .ok_or(ClinicError::UnknownAppointment(id))
    }

    /// Resolves a user's appointment list, in the order the appointments were added.
    pub fn appointments_of(&self, user: &dyn ClinicUser) -> ClinicResult<Vec<&Appointment>> {
        user.appointments()
            .iter()
            .map(|id| self.appointment(*id))
            .collect()
    }

    pub fn appointment_book(&self) -> &AppointmentBook {
        &self.appointments
    }

    pub fn appointment_count(&self) -> u64 {
        self.appointments.appointment_count()
    }

    /// Finds the first user whose credentials match, psychiatrists first.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&dyn ClinicUser> {
        let found = self
            .users()
            .into_iter()
            .find(|user| user.login(username, password));

        match found {
            Some(user) => tracing::info!("user {} logged in", user.id()),
            None => tracing::warn!("failed login for username '{}'", username),
        }
        found
    }

    /// Appends a dated entry to a patient's medical history.
    pub fn record_history(&mut self, patient_id: UserId, text: &str) -> ClinicResult<()> {
        let today = self.today();
        self.patient_mut(patient_id)?
            .update_medical_history_on(today, text);
        tracing::debug!("updated medical history for patient {}", patient_id);
        Ok(())
    }

    pub fn age_of(&self, user: &dyn ClinicUser) -> i32 {
        user.age_on(self.today())
    }

    /// Pretty JSON snapshot of the registry. Passwords are never included.
    pub fn render_json(&self) -> ClinicResult<String> {
        let snapshot = ClinicSnapshot {
            today: self.today(),
            psychiatrists: self.psychiatrists.values().collect(),
            patients: self.patients.values().collect(),
            appointments: self.appointments.iter().collect(),
            appointment_count: self.appointment_count(),
        };
        serde_json::to_string_pretty(&snapshot).map_err(ClinicError::Serialization)
    }
}
