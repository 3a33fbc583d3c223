//! Constants used throughout the clinic core crate.

/// Calendar date format accepted on input and used when rendering dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Environment variable that pins "today" for age and history calculations.
pub const TODAY_ENV_VAR: &str = "CLINIC_TODAY";

/// Default tracing directive installed by the binaries.
pub const DEFAULT_LOG_DIRECTIVE: &str = "clinic=info";

/// Prefix used when rendering a psychiatrist's name.
pub const DOCTOR_PREFIX: &str = "Dr.";

/// Separator between labels when a diagnosis list is rendered on one line.
pub const DIAGNOSIS_SEPARATOR: &str = ", ";
