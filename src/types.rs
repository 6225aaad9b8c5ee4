//! Core types for the phonebook.

use crate::validation::normalize_name;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical textual birthdate format: `dd-mm-yyyy`.
pub const BIRTHDATE_FORMAT: &str = "%d-%m-%Y";

/// A single directory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub surname: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
}

impl Contact {
    /// Parsed birthdate, if present and well-formed.
    pub fn birthdate_date(&self) -> Option<NaiveDate> {
        self.birthdate
            .as_deref()
            .and_then(|raw| NaiveDate::parse_from_str(raw, BIRTHDATE_FORMAT).ok())
    }

    /// Compare against an already normalized name and surname. Stored values
    /// are normalized too, since hand-edited files may hold any casing.
    pub fn matches(&self, name: &str, surname: &str) -> bool {
        normalize_name(&self.name) == name && normalize_name(&self.surname) == surname
    }
}

/// Validated, normalized phone number (11 digits, leading `7` rewritten to `8`).
///
/// Only produced by [`crate::validation::validate_phone`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(pub(crate) String);

impl Phone {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated calendar birthdate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Birthdate(pub(crate) NaiveDate);

impl fmt::Display for Birthdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDATE_FORMAT))
    }
}

/// Field changes requested by an update. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ContactUpdate {
    pub phone: Option<Phone>,
    pub birthdate: Option<Birthdate>,
}

impl ContactUpdate {
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.birthdate.is_none()
    }
}
