//! Base identity record shared by psychiatrists and patients.
//!
//! [`User`] carries the identity and credential fields; [`ClinicUser`] is the capability every
//! concrete role exposes on top of it (display, login, age, appointment list).

use chrono::{Datelike, NaiveDate};
use clinic_types::{AppointmentId, UserId};
use serde::Serialize;
use std::fmt;

/// Identity record for anyone who can log in to the clinic.
#[derive(Clone, Debug, Serialize)]
pub struct User {
    id: UserId,
    first_name: String,
    last_name: String,
    username: String,
    email: String,
    #[serde(skip_serializing)]
    password: String,
    birth_date: NaiveDate,
    appointments: Vec<AppointmentId>,
}

impl User {
    /// Creates a user with an empty appointment list.
    ///
    /// No field is validated. The password is kept verbatim and only ever compared by
    /// [`User::login`].
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        birth_date: NaiveDate,
        id: UserId,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            username: username.into(),
            email: email.into(),
            password: password.into(),
            birth_date,
            appointments: Vec::new(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Appointment identifiers in the order they were added.
    pub fn appointments(&self) -> &[AppointmentId] {
        &self.appointments
    }

    /// Returns true iff both the username and password match exactly.
    pub fn login(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }

    /// Appends an appointment reference.
    ///
    /// There is no duplicate check and no check that this user takes part in the appointment.
    pub fn add_appointment(&mut self, appointment: AppointmentId) {
        self.appointments.push(appointment);
    }

    /// Whole years between the birth date and `today`.
    ///
    /// One year is subtracted while `today`'s (month, day) is before the birthday. A birth date
    /// after `today` yields a negative age.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        years_between(self.birth_date, today)
    }

    /// Age against the local calendar date.
    pub fn age(&self) -> i32 {
        self.age_on(chrono::Local::now().date_naive())
    }
}

/// Whole years from `birth_date` to `today`, counting a year only once its birthday is reached.
pub fn years_between(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let before_birthday = (today.month(), today.day()) < (birth_date.month(), birth_date.day());
    today.year() - birth_date.year() - i32::from(before_birthday)
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Behaviour common to every role built on a [`User`].
pub trait ClinicUser: fmt::Display {
    fn user(&self) -> &User;

    fn user_mut(&mut self) -> &mut User;

    fn id(&self) -> UserId {
        self.user().id()
    }

    fn login(&self, username: &str, password: &str) -> bool {
        self.user().login(username, password)
    }

    fn add_appointment(&mut self, appointment: AppointmentId) {
        self.user_mut().add_appointment(appointment);
    }

    fn appointments(&self) -> &[AppointmentId] {
        self.user().appointments()
    }

    fn age_on(&self, today: NaiveDate) -> i32 {
        self.user().age_on(today)
    }

    fn age(&self) -> i32 {
        self.user().age()
    }
}

impl ClinicUser for User {
    fn user(&self) -> &User {
        self
    }

    fn user_mut(&mut self) -> &mut User {
        self
    }
}
