//! Contact Store
//!
//! Durable mirror of the in-memory contact list. The directory reads it once
//! on open and rewrites it in full after every mutation.

pub mod persistence;

use crate::error::StorageError;
use crate::types::Contact;
use serde::{Deserialize, Serialize};

pub use persistence::TextFileStore;

/// How a store treats lines it cannot parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Skip malformed lines without reporting them.
    #[default]
    Lenient,
    /// Fail the load on the first malformed line.
    Strict,
}

/// Contact store interface
pub trait ContactStore {
    fn load(&self) -> Result<Vec<Contact>, StorageError>;
    fn save(&self, contacts: &[Contact]) -> Result<(), StorageError>;
}
