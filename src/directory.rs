//! Contact Directory
//!
//! Owns the ordered contact list and its backing store. Every successful
//! mutation is persisted before the call returns, so the store is never more
//! than one operation behind.

use crate::error::ApiError;
use crate::store::ContactStore;
use crate::types::{Birthdate, Contact, ContactUpdate, Phone};
use crate::validation::{normalize_name, validate_name_field};
use chrono::NaiveDate;
use tracing::{info, warn};

pub struct Directory {
    contacts: Vec<Contact>,
    store: Box<dyn ContactStore>,
}

impl Directory {
    /// Load the directory from its store.
    pub fn open(store: Box<dyn ContactStore>) -> Result<Self, ApiError> {
        let contacts = store.load()?;
        info!(count = contacts.len(), "Directory opened");
        Ok(Self { contacts, store })
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Look up a contact by name and surname, normalizing both.
    pub fn find(&self, name: &str, surname: &str) -> Option<&Contact> {
        self.position(name, surname).map(|i| &self.contacts[i])
    }

    pub fn contains(&self, name: &str, surname: &str) -> bool {
        self.position(name, surname).is_some()
    }

    /// Whether any contact already uses `phone`.
    pub fn phone_in_use(&self, phone: &Phone) -> bool {
        self.contacts.iter().any(|c| c.phone == phone.as_str())
    }

    fn position(&self, name: &str, surname: &str) -> Option<usize> {
        let name = normalize_name(name);
        let surname = normalize_name(surname);
        self.contacts.iter().position(|c| c.matches(&name, &surname))
    }

    fn persist(&self) -> Result<(), ApiError> {
        self.store.save(&self.contacts)?;
        Ok(())
    }

    /// Add a new contact. Rejects duplicate names and phones without mutating.
    pub fn add(
        &mut self,
        name: &str,
        surname: &str,
        phone: Phone,
        birthdate: Option<Birthdate>,
    ) -> Result<&Contact, ApiError> {
        validate_name_field("Name", name)?;
        validate_name_field("Surname", surname)?;
        let name = normalize_name(name);
        let surname = normalize_name(surname);

        if self.contacts.iter().any(|c| c.matches(&name, &surname)) {
            warn!(%name, %surname, "Rejected duplicate contact");
            return Err(ApiError::DuplicateContact { name, surname });
        }
        if self.phone_in_use(&phone) {
            warn!(phone = %phone, "Rejected duplicate phone");
            return Err(ApiError::DuplicatePhone(phone.into_string()));
        }

        self.contacts.push(Contact {
            name,
            surname,
            phone: phone.into_string(),
            birthdate: birthdate.map(|b| b.to_string()),
        });
        if let Err(e) = self.persist() {
            self.contacts.pop();
            return Err(e);
        }

        let added = &self.contacts[self.contacts.len() - 1];
        info!(name = %added.name, surname = %added.surname, "Contact added");
        Ok(added)
    }

    /// Remove a contact, returning it.
    pub fn delete(&mut self, name: &str, surname: &str) -> Result<Contact, ApiError> {
        let index = self
            .position(name, surname)
            .ok_or_else(|| not_found(name, surname))?;

        let removed = self.contacts.remove(index);
        if let Err(e) = self.persist() {
            self.contacts.insert(index, removed);
            return Err(e);
        }

        info!(name = %removed.name, surname = %removed.surname, "Contact deleted");
        Ok(removed)
    }

    /// Overwrite the phone and/or birthdate of an existing contact.
    pub fn update(
        &mut self,
        name: &str,
        surname: &str,
        update: ContactUpdate,
    ) -> Result<&Contact, ApiError> {
        let index = self
            .position(name, surname)
            .ok_or_else(|| not_found(name, surname))?;

        if let Some(phone) = &update.phone {
            let taken = self
                .contacts
                .iter()
                .enumerate()
                .any(|(i, c)| i != index && c.phone == phone.as_str());
            if taken {
                warn!(phone = %phone, "Rejected duplicate phone on update");
                return Err(ApiError::DuplicatePhone(phone.to_string()));
            }
        }

        let previous = self.contacts[index].clone();
        let contact = &mut self.contacts[index];
        if let Some(phone) = update.phone {
            contact.phone = phone.into_string();
        }
        if let Some(birthdate) = update.birthdate {
            contact.birthdate = Some(birthdate.to_string());
        }
        if let Err(e) = self.persist() {
            self.contacts[index] = previous;
            return Err(e);
        }

        let updated = &self.contacts[index];
        info!(name = %updated.name, surname = %updated.surname, "Contact updated");
        Ok(updated)
    }

    /// Case-insensitive substring search. Empty or missing filters match everything.
    pub fn search(&self, name: Option<&str>, surname: Option<&str>) -> Vec<&Contact> {
        let name = name.map(str::to_lowercase).filter(|s| !s.is_empty());
        let surname = surname.map(str::to_lowercase).filter(|s| !s.is_empty());
        self.contacts
            .iter()
            .filter(|c| {
                name.as_deref()
                    .map_or(true, |n| c.name.to_lowercase().contains(n))
                    && surname
                        .as_deref()
                        .map_or(true, |s| c.surname.to_lowercase().contains(s))
            })
            .collect()
    }

    /// Age in whole 365-day years as of `today`.
    pub fn age(&self, name: &str, surname: &str, today: NaiveDate) -> Result<i64, ApiError> {
        let contact = self
            .find(name, surname)
            .ok_or_else(|| not_found(name, surname))?;
        let birthdate = contact
            .birthdate_date()
            .ok_or_else(|| ApiError::BirthdateUnknown {
                name: contact.name.clone(),
                surname: contact.surname.clone(),
            })?;
        Ok(crate::clock::age_in_years(birthdate, today))
    }
}

fn not_found(name: &str, surname: &str) -> ApiError {
    ApiError::ContactNotFound {
        name: normalize_name(name),
        surname: normalize_name(surname),
    }
}
