//! Appointment date checks and display formatting

use crate::result::ValidationResult;
use chrono::{DateTime, Local, NaiveDate};

pub const PAST_DATE_MESSAGE: &str = "La fecha de la cita no puede ser anterior a hoy.";
pub const INVALID_DATE_MESSAGE: &str = "La fecha de la cita no es válida.";

/// Source of "today" for date checks
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Today according to the local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always answers the same day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Parses a date as sent by a date input (`YYYY-MM-DD`).
///
/// RFC 3339 timestamps are accepted too; only their date part is kept.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|timestamp| timestamp.date_naive())
}

/// Rejects appointment dates earlier than `today`. Today itself is fine.
pub fn validate_appointment_date(input: &str, today: NaiveDate) -> ValidationResult {
    match parse_date(input) {
        Some(date) if date < today => ValidationResult::invalid(PAST_DATE_MESSAGE),
        Some(_) => ValidationResult::valid(),
        None => ValidationResult::invalid(INVALID_DATE_MESSAGE),
    }
}

/// Same as [`validate_appointment_date`], reading today from `clock`
pub fn validate_appointment_date_with<C: Clock + ?Sized>(input: &str, clock: &C) -> ValidationResult {
    validate_appointment_date(input, clock.today())
}

/// Formats a date as `dd/mm/yyyy`.
///
/// Input that cannot be parsed is returned as is.
///
/// # Examples
/// ```
/// use taller_validation::format_date;
/// assert_eq!(format_date("2024-03-05"), "05/03/2024");
/// ```
pub fn format_date(input: &str) -> String {
    match parse_date(input) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => input.to_string(),
    }
}
