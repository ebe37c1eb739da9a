use crate::utils::error::{HotelError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.+@.+$").expect("email pattern is a valid regex"));

// Year, month 01-12, day 01-31. Whether the day exists in that month is left to chrono.
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$")
        .expect("date pattern is a valid regex")
});

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> HotelError {
    HotelError::InvalidValue {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            format!("{} must not be empty.", field_name),
        ));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(invalid(
            field_name,
            value,
            format!("{} must be at least {}.", field_name, min_value),
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(
            field_name,
            value,
            format!("Please enter a number between {} and {}.", min, max),
        ));
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if !EMAIL_PATTERN.is_match(value) {
        return Err(invalid(
            field_name,
            value,
            format!("{} must have content before and after '@'.", field_name),
        ));
    }
    Ok(())
}

pub fn parse_number(field_name: &str, input: &str) -> Result<u32> {
    validate_non_empty_string(field_name, input)?;

    input
        .parse::<u32>()
        .map_err(|_| invalid(field_name, input, format!("{} must be a valid integer.", field_name)))
}

/// Parses a strict `YYYY-MM-DD` date that exists in the calendar.
pub fn parse_calendar_date(field_name: &str, input: &str) -> Result<NaiveDate> {
    validate_non_empty_string(field_name, input)?;

    if !DATE_PATTERN.is_match(input) {
        return Err(invalid(
            field_name,
            input,
            "Invalid date format. Please use YYYY-MM-DD.",
        ));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        invalid(
            field_name,
            input,
            "Invalid date. Please check if the date exists.",
        )
    })
}

pub fn ensure_not_past(field_name: &str, date: NaiveDate, today: NaiveDate) -> Result<()> {
    if date < today {
        return Err(invalid(
            field_name,
            date,
            "Date cannot be in the past. Please enter a future date.",
        ));
    }
    Ok(())
}
