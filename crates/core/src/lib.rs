//! # Clinic Core
//!
//! Core domain model for the clinic system.
//!
//! This crate contains pure in-memory data operations:
//! - Users ([`User`]) and the two roles built on them ([`Psychiatrist`], [`Patient`])
//! - Appointments and their identifier allocator ([`AppointmentBook`])
//! - A registry ([`Clinic`]) that links participants and appointments
//! - The reference demonstration scenario ([`demo`])
//!
//! **No I/O concerns**: argument parsing, environment loading and logging setup belong in the
//! `clinic-cli` and `clinic-run` binaries.

pub mod appointment;
pub mod clinic;
pub mod config;
pub mod constants;
pub mod demo;
pub mod error;
pub mod patient;
pub mod psychiatrist;
pub mod user;

pub use appointment::{Appointment, AppointmentBook};
pub use clinic::Clinic;
pub use config::CoreConfig;
pub use error::{ClinicError, ClinicResult};
pub use patient::Patient;
pub use psychiatrist::Psychiatrist;
pub use user::{ClinicUser, User};

// Re-export the shared leaf types so callers need only one dependency.
pub use clinic_types::{AppointmentId, IssueError, MentalHealthIssue, UserId};
