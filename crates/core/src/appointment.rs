//! Appointments and the allocator that numbers them.
//!
//! Appointment identifiers come from an [`AppointmentBook`] rather than a process-wide static:
//! whoever constructs appointments owns the book, and two books never share a counter.
//!
//! The book is also the single source of truth for appointment values. Participants only hold
//! [`AppointmentId`]s, and booking never links an appointment into either participant's list;
//! that is left to the caller (see [`crate::Clinic::schedule_appointment`]).

use crate::constants::DOCTOR_PREFIX;
use crate::patient::Patient;
use crate::psychiatrist::Psychiatrist;
use crate::user::ClinicUser;
use clinic_types::{AppointmentId, UserId};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A meeting between one psychiatrist and one patient.
///
/// Date and time are free text and are not validated. The psychiatrist's last name is captured
/// when the appointment is booked so the appointment can render itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Appointment {
    id: AppointmentId,
    date: String,
    time: String,
    psychiatrist_id: UserId,
    psychiatrist_last_name: String,
    patient_id: UserId,
}

impl Appointment {
    pub fn id(&self) -> AppointmentId {
        self.id
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn psychiatrist_id(&self) -> UserId {
        self.psychiatrist_id
    }

    pub fn psychiatrist_last_name(&self) -> &str {
        &self.psychiatrist_last_name
    }

    pub fn patient_id(&self) -> UserId {
        self.patient_id
    }

    /// Returns true if `user` is the psychiatrist or the patient of this appointment.
    pub fn involves(&self, user: UserId) -> bool {
        self.psychiatrist_id == user || self.patient_id == user
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Appointment #{} with {} {} at {} on {}",
            self.id, DOCTOR_PREFIX, self.psychiatrist_last_name, self.time, self.date
        )
    }
}

/// Allocates appointment identifiers and keeps every appointment it has created.
#[derive(Clone, Debug, Default)]
pub struct AppointmentBook {
    next_id: u64,
    appointments: BTreeMap<AppointmentId, Appointment>,
}

impl AppointmentBook {
    /// Creates an empty book whose first appointment will be `#0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an appointment with the next identifier and records it.
    ///
    /// Any date and time text is accepted. The appointment is not added to either participant's
    /// appointment list.
    pub fn book(
        &mut self,
        date: impl Into<String>,
        time: impl Into<String>,
        psychiatrist: &Psychiatrist,
        patient: &Patient,
    ) -> Appointment {
        let id = AppointmentId::new(self.next_id);
        self.next_id += 1;

        let appointment = Appointment {
            id,
            date: date.into(),
            time: time.into(),
            psychiatrist_id: psychiatrist.id(),
            psychiatrist_last_name: psychiatrist.user().last_name().to_string(),
            patient_id: patient.id(),
        };
        self.appointments.insert(id, appointment.clone());

        tracing::debug!("booked appointment {}", appointment);
        appointment
    }

    /// Total number of appointments ever created by this book.
    pub fn appointment_count(&self) -> u64 {
        self.next_id
    }

    pub fn get(&self, id: AppointmentId) -> Option<&Appointment> {
        self.appointments.get(&id)
    }

    /// Appointments in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Appointment> + '_ {
        self.appointments.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::User;
    use chrono::NaiveDate;

    fn birth(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn participants() -> (Psychiatrist, Patient) {
        let psychiatrist = Psychiatrist::new(
            User::new(
                "John",
                "Doe",
                "johndoe",
                "john@clinic.com",
                "password123",
                birth(1975, 5, 15),
                UserId::new(1),
            ),
            "Clinical Psychiatrist",
        );
        let patient = Patient::new(User::new(
            "Jane",
            "Smith",
            "janesmith",
            "jane@email.com",
            "pass456",
            birth(1990, 8, 20),
            UserId::new(2),
        ));
        (psychiatrist, patient)
    }

    #[test]
    fn identifiers_start_at_zero_and_have_no_gaps() {
        let (psychiatrist, patient) = participants();
        let mut book = AppointmentBook::new();
        assert_eq!(book.appointment_count(), 0);

        for expected in 0..5u64 {
            let appointment = book.book("2024-10-05", "14:00", &psychiatrist, &patient);
            assert_eq!(appointment.id(), AppointmentId::new(expected));
            assert_eq!(book.appointment_count(), expected + 1);
        }

        let ids: Vec<u64> = book.iter().map(|a| a.id().value()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn separate_books_do_not_share_a_counter() {
        let (psychiatrist, patient) = participants();
        let mut first = AppointmentBook::new();
        let mut second = AppointmentBook::new();

        first.book("2024-10-05", "14:00", &psychiatrist, &patient);
        first.book("2024-10-06", "09:30", &psychiatrist, &patient);
        let appointment = second.book("2024-10-07", "11:00", &psychiatrist, &patient);

        assert_eq!(appointment.id(), AppointmentId::new(0));
        assert_eq!(first.appointment_count(), 2);
        assert_eq!(second.appointment_count(), 1);
    }

    #[test]
    fn booking_does_not_link_participants() {
        let (psychiatrist, patient) = participants();
        let mut book = AppointmentBook::new();
        let appointment = book.book("2024-10-05", "14:00", &psychiatrist, &patient);

        assert!(psychiatrist.appointments().is_empty());
        assert!(patient.appointments().is_empty());
        assert_eq!(book.get(appointment.id()), Some(&appointment));
    }

    #[test]
    fn any_date_and_time_text_is_accepted() {
        let (psychiatrist, patient) = participants();
        let mut book = AppointmentBook::new();
        let appointment = book.book("", "not a time", &psychiatrist, &patient);

        assert_eq!(appointment.date(), "");
        assert_eq!(appointment.time(), "not a time");
    }

    #[test]
    fn display_embeds_id_doctor_time_and_date() {
        let (psychiatrist, patient) = participants();
        let mut book = AppointmentBook::new();
        let appointment = book.book("2024-10-05", "14:00", &psychiatrist, &patient);

        assert_eq!(
            appointment.to_string(),
            "Appointment #0 with Dr. Doe at 14:00 on 2024-10-05"
        );
        assert!(appointment.involves(UserId::new(1)));
        assert!(appointment.involves(UserId::new(2)));
        assert!(!appointment.involves(UserId::new(3)));
    }
}
