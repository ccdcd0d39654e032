use thiserror::Error;

use crate::currency;
use crate::row::{Office, Row};

/// Raw form input as the user typed it. Text fields carry free text,
/// the office select carries a chosen entry or nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    pub name: String,
    pub position: String,
    pub office: Option<Office>,
    pub age: String,
    pub salary: String,
}

/// Why a submission was rejected. All recoverable; surfaced only as
/// error notifications, never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required!")]
    MissingFields,
    #[error("Name must be at least 4 letters")]
    NameTooShort,
    #[error("Age must be 18 - 90")]
    AgeOutOfRange,
    #[error("Salary must be a positive number")]
    SalaryNotPositive,
}

/// Validate form input and build a row from it.
///
/// Checks run in a fixed order and the first failure wins: presence,
/// name length, age range, salary positivity. On success the salary cell
/// is formatted for display (`$` + thousands-grouped).
pub fn build_row(values: &FormValues) -> Result<Row, ValidationError> {
    let name = values.name.trim();
    let position = values.position.trim();
    let age_raw = values.age.trim();
    let salary_raw = values.salary.trim();

    if name.is_empty()
        || position.is_empty()
        || values.office.is_none()
        || age_raw.is_empty()
        || salary_raw.is_empty()
    {
        return Err(ValidationError::MissingFields);
    }
    let office = values.office.unwrap_or_default();

    if name.chars().count() < 4 {
        return Err(ValidationError::NameTooShort);
    }

    let age: f64 = age_raw
        .parse()
        .map_err(|_| ValidationError::AgeOutOfRange)?;
    if !(18.0..=90.0).contains(&age) {
        return Err(ValidationError::AgeOutOfRange);
    }

    let salary = currency::parse_amount(salary_raw).ok_or(ValidationError::SalaryNotPositive)?;
    if salary <= 0.0 {
        return Err(ValidationError::SalaryNotPositive);
    }

    Ok(Row::new([
        name.to_string(),
        position.to_string(),
        office.to_string(),
        age.to_string(),
        currency::display(salary),
    ]))
}
