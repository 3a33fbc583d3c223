use crate::constants::DOCTOR_PREFIX;
use crate::patient::Patient;
use crate::user::{ClinicUser, User};
use clinic_types::UserId;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// A clinician with a specialization and a caseload of patients.
///
/// The caseload is a set of patient identifiers: adding the same patient twice is a no-op.
#[derive(Clone, Debug, Serialize)]
pub struct Psychiatrist {
    #[serde(flatten)]
    user: User,
    specialization: String,
    patients: BTreeSet<UserId>,
}

impl Psychiatrist {
    pub fn new(user: User, specialization: impl Into<String>) -> Self {
        Self {
            user,
            specialization: specialization.into(),
            patients: BTreeSet::new(),
        }
    }

    pub fn specialization(&self) -> &str {
        &self.specialization
    }

    /// Adds a patient to the caseload.
    ///
    /// Returns `false` if the patient was already present.
    pub fn add_patient(&mut self, patient: &Patient) -> bool {
        self.patients.insert(patient.id())
    }

    pub fn has_patient(&self, patient: UserId) -> bool {
        self.patients.contains(&patient)
    }

    pub fn patient_count(&self) -> usize {
        self.patients.len()
    }

    /// Patient identifiers in ascending order.
    pub fn patients(&self) -> impl Iterator<Item = UserId> + '_ {
        self.patients.iter().copied()
    }
}

impl ClinicUser for Psychiatrist {
    fn user(&self) -> &User {
        &self.user
    }

    fn user_mut(&mut self) -> &mut User {
        &mut self.user
    }
}

impl fmt::Display for Psychiatrist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {}",
            DOCTOR_PREFIX,
            self.user.last_name(),
            self.specialization
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn birth(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn doe() -> Psychiatrist {
        Psychiatrist::new(
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
        )
    }

    fn patient(id: u32) -> Patient {
        Patient::new(User::new(
            "Pat",
            "Ient",
            format!("patient{id}"),
            "patient@email.com",
            "secret",
            birth(1990, 8, 20),
            UserId::new(id),
        ))
    }

    #[test]
    fn display_uses_title_and_specialization() {
        assert_eq!(doe().to_string(), "Dr. Doe - Clinical Psychiatrist");
    }

    #[test]
    fn add_patient_is_idempotent() {
        let mut psychiatrist = doe();
        let jane = patient(2);

        assert!(psychiatrist.add_patient(&jane));
        assert!(!psychiatrist.add_patient(&jane));
        assert_eq!(psychiatrist.patient_count(), 1);
        assert!(psychiatrist.has_patient(UserId::new(2)));
    }

    #[test]
    fn distinct_patients_are_counted_separately() {
        let mut psychiatrist = doe();
        psychiatrist.add_patient(&patient(5));
        psychiatrist.add_patient(&patient(3));

        assert_eq!(psychiatrist.patient_count(), 2);
        assert_eq!(
            psychiatrist.patients().collect::<Vec<_>>(),
            vec![UserId::new(3), UserId::new(5)]
        );
    }

    #[test]
    fn shares_user_behaviour() {
        let psychiatrist = doe();
        assert!(psychiatrist.login("johndoe", "password123"));
        assert!(!psychiatrist.login("johndoe", "Password123"));
        assert_eq!(psychiatrist.age_on(birth(2024, 5, 14)), 48);
        assert_eq!(psychiatrist.age_on(birth(2024, 5, 15)), 49);
    }
}
