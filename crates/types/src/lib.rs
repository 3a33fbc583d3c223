//! Leaf value types shared across the clinic workspace.
//!
//! - [`UserId`] and [`AppointmentId`] keep user and appointment identifiers apart.
//! - [`MentalHealthIssue`] is the closed set of diagnosis categories a patient can carry.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Errors that can occur when interpreting diagnosis text.
#[derive(Debug, thiserror::Error)]
pub enum IssueError {
    /// The input matched neither a variant code nor a display label
    #[error("unknown mental health issue: '{0}'")]
    Unknown(String),
}

/// Identifier carried by every psychiatrist and patient.
///
/// Identifiers are supplied by the caller; nothing enforces uniqueness between bare users.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u32);

impl UserId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for UserId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sequential appointment identifier.
///
/// Allocated in construction order starting at 0 and never reused within one allocator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(u64);

impl AppointmentId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Diagnosis categories recognised by the clinic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MentalHealthIssue {
    Depression,
    Anxiety,
    Bipolar,
    Schizophrenia,
    Ptsd,
    Ocd,
}

impl MentalHealthIssue {
    /// Every variant, in declaration order.
    pub const ALL: [MentalHealthIssue; 6] = [
        Self::Depression,
        Self::Anxiety,
        Self::Bipolar,
        Self::Schizophrenia,
        Self::Ptsd,
        Self::Ocd,
    ];

    /// Human-readable label shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Depression => "Depression",
            Self::Anxiety => "Anxiety",
            Self::Bipolar => "Bipolar Disorder",
            Self::Schizophrenia => "Schizophrenia",
            Self::Ptsd => "Post-Traumatic Stress Disorder",
            Self::Ocd => "Obsessive-Compulsive Disorder",
        }
    }

    /// Upper-case code, matching the serialised form.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Depression => "DEPRESSION",
            Self::Anxiety => "ANXIETY",
            Self::Bipolar => "BIPOLAR",
            Self::Schizophrenia => "SCHIZOPHRENIA",
            Self::Ptsd => "PTSD",
            Self::Ocd => "OCD",
        }
    }
}

impl fmt::Display for MentalHealthIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MentalHealthIssue {
    type Err = IssueError;

    /// Accepts either the code (any case) or the exact display label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|issue| issue.code().eq_ignore_ascii_case(trimmed) || issue.label() == trimmed)
            .ok_or_else(|| IssueError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_unique() {
        let mut labels: Vec<&str> = MentalHealthIssue::ALL.iter().map(|i| i.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), MentalHealthIssue::ALL.len());
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(MentalHealthIssue::Bipolar.to_string(), "Bipolar Disorder");
        assert_eq!(
            MentalHealthIssue::Ptsd.to_string(),
            "Post-Traumatic Stress Disorder"
        );
    }

    #[test]
    fn parse_accepts_code_and_label() {
        assert_eq!(
            "ocd".parse::<MentalHealthIssue>().unwrap(),
            MentalHealthIssue::Ocd
        );
        assert_eq!(
            "Schizophrenia".parse::<MentalHealthIssue>().unwrap(),
            MentalHealthIssue::Schizophrenia
        );
        assert_eq!(
            "Bipolar Disorder".parse::<MentalHealthIssue>().unwrap(),
            MentalHealthIssue::Bipolar
        );
    }

    #[test]
    fn parse_rejects_unknown_text() {
        let err = "insomnia"
            .parse::<MentalHealthIssue>()
            .expect_err("expected parse failure");
        assert!(matches!(err, IssueError::Unknown(ref s) if s == "insomnia"));
    }

    #[test]
    fn serialises_as_code() {
        let json = serde_json::to_string(&MentalHealthIssue::Anxiety).unwrap();
        assert_eq!(json, "\"ANXIETY\"");

        let id = serde_json::to_string(&AppointmentId::new(7)).unwrap();
        assert_eq!(id, "7");
    }
}
