use crate::constants::{DATE_FORMAT, DIAGNOSIS_SEPARATOR};
use crate::user::{ClinicUser, User};
use chrono::NaiveDate;
use clinic_types::MentalHealthIssue;
use serde::Serialize;
use std::fmt;

/// A person receiving care, with a diagnosis list and a free-text medical history.
#[derive(Clone, Debug, Serialize)]
pub struct Patient {
    #[serde(flatten)]
    user: User,
    diagnoses: Vec<MentalHealthIssue>,
    medical_history: String,
}

impl Patient {
    /// Creates a patient with no diagnoses and an empty history.
    pub fn new(user: User) -> Self {
        Self {
            user,
            diagnoses: Vec::new(),
            medical_history: String::new(),
        }
    }

    /// Diagnoses in the order they were first added.
    pub fn diagnoses(&self) -> &[MentalHealthIssue] {
        &self.diagnoses
    }

    pub fn has_diagnosis(&self, issue: MentalHealthIssue) -> bool {
        self.diagnoses.contains(&issue)
    }

    /// Appends `issue` unless it is already present.
    ///
    /// Returns `false` when the call was a no-op.
    pub fn add_diagnosis(&mut self, issue: MentalHealthIssue) -> bool {
        if self.has_diagnosis(issue) {
            return false;
        }
        self.diagnoses.push(issue);
        true
    }

    /// Removes `issue` if present.
    ///
    /// Returns `false` when the call was a no-op.
    pub fn remove_diagnosis(&mut self, issue: MentalHealthIssue) -> bool {
        match self.diagnoses.iter().position(|d| *d == issue) {
            Some(index) => {
                self.diagnoses.remove(index);
                true
            }
            None => false,
        }
    }

    /// Diagnosis labels joined on one line, e.g. `Anxiety, Depression`.
    pub fn diagnosis_labels(&self) -> String {
        self.diagnoses
            .iter()
            .map(MentalHealthIssue::label)
            .collect::<Vec<_>>()
            .join(DIAGNOSIS_SEPARATOR)
    }

    /// The accumulated history. Each entry starts on a new line as `YYYY-MM-DD: text`.
    pub fn medical_history(&self) -> &str {
        &self.medical_history
    }

    /// Appends an entry dated `date`. Earlier entries are never touched.
    pub fn update_medical_history_on(&mut self, date: NaiveDate, text: &str) {
        self.medical_history
            .push_str(&format!("\n{}: {}", date.format(DATE_FORMAT), text));
    }

    /// Appends an entry dated with the local calendar date.
    pub fn update_medical_history(&mut self, text: &str) {
        self.update_medical_history_on(chrono::Local::now().date_naive(), text);
    }
}

impl ClinicUser for Patient {
    fn user(&self) -> &User {
        &self.user
    }

    fn user_mut(&mut self) -> &mut User {
        &mut self.user
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.user, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_types::UserId;
    use clinic_types::MentalHealthIssue::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn jane() -> Patient {
        Patient::new(User::new(
            "Jane",
            "Smith",
            "janesmith",
            "jane@email.com",
            "pass456",
            date(1990, 8, 20),
            UserId::new(2),
        ))
    }

    #[test]
    fn add_diagnosis_keeps_insertion_order_without_duplicates() {
        let mut patient = jane();
        assert!(patient.add_diagnosis(Anxiety));
        assert!(patient.add_diagnosis(Depression));
        assert!(!patient.add_diagnosis(Anxiety));

        assert_eq!(patient.diagnoses(), &[Anxiety, Depression]);
    }

    #[test]
    fn remove_diagnosis_absent_is_noop() {
        let mut patient = jane();
        patient.add_diagnosis(Ocd);

        assert!(!patient.remove_diagnosis(Ptsd));
        assert_eq!(patient.diagnoses(), &[Ocd]);

        assert!(patient.remove_diagnosis(Ocd));
        assert!(patient.diagnoses().is_empty());
        assert!(!patient.remove_diagnosis(Ocd));
    }

    #[test]
    fn diagnosis_labels_join_display_strings() {
        let mut patient = jane();
        assert_eq!(patient.diagnosis_labels(), "");

        patient.add_diagnosis(Bipolar);
        patient.add_diagnosis(Schizophrenia);
        assert_eq!(
            patient.diagnosis_labels(),
            "Bipolar Disorder, Schizophrenia"
        );
    }

    #[test]
    fn medical_history_is_append_only() {
        let mut patient = jane();
        assert_eq!(patient.medical_history(), "");

        patient.update_medical_history_on(date(2024, 10, 5), "Initial consultation.");
        patient.update_medical_history_on(date(2024, 11, 2), "Follow-up.");

        assert_eq!(
            patient.medical_history(),
            "\n2024-10-05: Initial consultation.\n2024-11-02: Follow-up."
        );
    }

    #[test]
    fn medical_history_without_date_uses_today() {
        let mut patient = jane();
        let before = chrono::Local::now().date_naive();
        patient.update_medical_history("note");
        let after = chrono::Local::now().date_naive();

        let entry = patient.medical_history();
        let expected_before = format!("\n{}: note", before.format(DATE_FORMAT));
        let expected_after = format!("\n{}: note", after.format(DATE_FORMAT));
        assert!(entry == expected_before || entry == expected_after);
    }

    #[test]
    fn display_is_base_form() {
        assert_eq!(jane().to_string(), "Jane Smith");
    }
}
