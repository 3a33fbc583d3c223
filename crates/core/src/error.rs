use clinic_types::{AppointmentId, UserId};

#[derive(Debug, thiserror::Error)]
pub enum ClinicError {
    #[error("invalid date '{value}' (expected YYYY-MM-DD): {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("psychiatrist {0} is already registered")]
    DuplicatePsychiatrist(UserId),
    #[error("patient {0} is already registered")]
    DuplicatePatient(UserId),
    #[error("no psychiatrist registered with id {0}")]
    UnknownPsychiatrist(UserId),
    #[error("no patient registered with id {0}")]
    UnknownPatient(UserId),
    #[error("no appointment with id {0}")]
    UnknownAppointment(AppointmentId),

    #[error("failed to serialize clinic snapshot: {0}")]
    Serialization(serde_json::Error),
}

pub type ClinicResult<T> = std::result::Result<T, ClinicError>;
