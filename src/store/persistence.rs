//! Line-oriented text file store.
//!
//! One contact per line: `name, surname, phone, birthdate`, with an empty
//! birthdate field when it is unknown.

use super::{ContactStore, ParsePolicy};
use crate::error::StorageError;
use crate::types::Contact;
use crate::validation::{validate_birthdate, validate_phone, FIELD_SEPARATOR};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

pub struct TextFileStore {
    path: PathBuf,
    policy: ParsePolicy,
}

impl TextFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_policy(path, ParsePolicy::default())
    }

    pub fn with_policy(path: impl Into<PathBuf>, policy: ParsePolicy) -> Self {
        Self {
            path: path.into(),
            policy,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> ParsePolicy {
        self.policy
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ContactStore for TextFileStore {
    fn load(&self) -> Result<Vec<Contact>, StorageError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Store file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StorageError::IoError(e)),
        };

        let mut contacts = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            let line_no = index + 1;
            let line = line.trim_end_matches('\r').trim_start();
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(line, self.policy) {
                Ok(contact) => contacts.push(contact),
                Err(reason) => match self.policy {
                    ParsePolicy::Strict => {
                        return Err(StorageError::MalformedLine {
                            line: line_no,
                            reason,
                        })
                    }
                    ParsePolicy::Lenient => {
                        tracing::debug!(line = line_no, %reason, "Skipping malformed store line");
                    }
                },
            }
        }

        tracing::debug!(
            path = %self.path.display(),
            count = contacts.len(),
            "Loaded contacts"
        );
        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        // Write a sibling file and rename so a crash never truncates the store.
        let temp_path = self.temp_path();
        {
            let mut writer = BufWriter::new(File::create(&temp_path)?);
            for contact in contacts {
                writeln!(writer, "{}", format_line(contact))?;
            }
            writer.flush()?;
            writer.get_ref().sync_all()?;
        }
        std::fs::rename(&temp_path, &self.path)?;

        tracing::debug!(
            path = %self.path.display(),
            count = contacts.len(),
            "Saved contacts"
        );
        Ok(())
    }
}

/// Render one contact as a store line, without the terminator.
pub fn format_line(contact: &Contact) -> String {
    [
        contact.name.as_str(),
        contact.surname.as_str(),
        contact.phone.as_str(),
        contact.birthdate.as_deref().unwrap_or(""),
    ]
    .join(FIELD_SEPARATOR)
}

/// Parse one non-empty store line.
///
/// Fields past the fourth are ignored in lenient mode and rejected in strict mode.
pub fn parse_line(line: &str, policy: ParsePolicy) -> Result<Contact, String> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < 3 {
        return Err(format!("expected at least 3 fields, found {}", fields.len()));
    }

    let birthdate = fields
        .get(3)
        .filter(|raw| !raw.is_empty())
        .map(|raw| raw.to_string());

    if policy == ParsePolicy::Strict {
        if fields.len() > 4 {
            return Err(format!("expected at most 4 fields, found {}", fields.len()));
        }
        validate_phone(fields[2]).map_err(|e| e.to_string())?;
        if let Some(raw) = &birthdate {
            validate_birthdate(raw).map_err(|e| e.to_string())?;
        }
    }

    Ok(Contact {
        name: fields[0].to_string(),
        surname: fields[1].to_string(),
        phone: fields[2].to_string(),
        birthdate,
    })
}
