//! Phonebook: Personal Contact Directory
//!
//! Keeps a list of contacts (name, surname, phone, optional birthdate) in a
//! flat text file, with validated edits through an interactive menu or
//! one-shot CLI commands.

pub mod clock;
pub mod config;
pub mod directory;
pub mod error;
pub mod logging;
pub mod store;
pub mod tooling;
pub mod types;
pub mod validation;
pub mod views;

pub use directory::Directory;
pub use error::{ApiError, StorageError, ValidationError};
pub use types::{Birthdate, Contact, ContactUpdate, Phone};
