//! Field validation and normalization.
//!
//! All functions here are pure: malformed input is an ordinary `Err`, never a panic.

use crate::error::ValidationError;
use crate::types::{Birthdate, Phone, BIRTHDATE_FORMAT};
use chrono::NaiveDate;

pub const PHONE_DIGITS: usize = 11;

/// Stored field separator in the backing file.
pub const FIELD_SEPARATOR: &str = ", ";

/// Validate an 11-digit phone number, rewriting a leading `7` to `8`.
pub fn validate_phone(input: &str) -> Result<Phone, ValidationError> {
    if input.len() != PHONE_DIGITS || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::Phone(input.to_string()));
    }

    let phone = match input.strip_prefix('7') {
        Some(rest) => format!("8{}", rest),
        None => input.to_string(),
    };
    Ok(Phone(phone))
}

/// Validate a `dd-mm-yyyy` birthdate. Dots are accepted in place of dashes.
pub fn validate_birthdate(input: &str) -> Result<Birthdate, ValidationError> {
    let candidate = input.replace('.', "-");
    if !has_birthdate_shape(&candidate) {
        return Err(ValidationError::Birthdate(input.to_string()));
    }

    NaiveDate::parse_from_str(&candidate, BIRTHDATE_FORMAT)
        .map(Birthdate)
        .map_err(|_| ValidationError::Birthdate(input.to_string()))
}

// chrono accepts unpadded days and signed years; require the strict layout first.
fn has_birthdate_shape(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Capitalize a name: first character upper case, the rest lower case.
pub fn normalize_name(input: &str) -> String {
    let mut chars = input.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Check that a name or surname can be stored in the line format.
pub fn validate_name_field(label: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Field(format!("{} cannot be empty", label)));
    }
    if !is_storable(value) {
        return Err(ValidationError::Field(format!(
            "{} must not contain {:?} or line breaks",
            label, FIELD_SEPARATOR
        )));
    }
    Ok(())
}

pub(crate) fn is_storable(value: &str) -> bool {
    !value.contains(FIELD_SEPARATOR) && !value.contains(['\n', '\r'])
}
