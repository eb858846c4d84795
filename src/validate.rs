//! Field validation rules: numeric unique ID, non-negative salary, email shape.

use crate::error::{Result, RosterError};
use once_cell::sync::Lazy;
use regex::Regex;

// Non-empty local part, exactly one '@', domain with a dot.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Parses an employee ID: digits only, no sign, no whitespace inside.
pub fn parse_id(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(RosterError::InvalidNumber(input.trim().to_string()));
    }
    trimmed
        .parse()
        .map_err(|_| RosterError::InvalidNumber(trimmed.to_string()))
}

/// Parses a salary and rejects negative or non-finite values.
pub fn parse_salary(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| RosterError::InvalidNumber(input.trim().to_string()))?;
    check_salary(value)?;
    Ok(value)
}

pub fn check_salary(value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(RosterError::InvalidNumber(value.to_string()))
    }
}

pub fn check_email(email: &str) -> Result<()> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(RosterError::InvalidEmail(email.to_string()))
    }
}

pub fn check_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        Err(RosterError::EmptyField("name"))
    } else {
        Ok(())
    }
}
