//! CLI Tooling
//!
//! Command-line interface for the phonebook. With no subcommand the
//! interactive menu starts; the other subcommands run a single operation and
//! never prompt.

use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigLoader, PhonebookConfig};
use crate::directory::Directory;
use crate::error::{ApiError, ValidationError};
use crate::store::ParsePolicy;
use crate::tooling::messages::Messages;
use crate::tooling::prompt::TerminalPrompter;
use crate::tooling::shell::Shell;
use crate::types::ContactUpdate;
use crate::validation::{normalize_name, validate_birthdate, validate_phone};
use crate::views::{format_contacts_json, format_contacts_table};
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::info;

/// Phonebook CLI - personal contact directory
#[derive(Parser, Debug)]
#[command(name = "phonebook")]
#[command(about = "Personal contact directory backed by a flat text file")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Workspace directory; relative store paths resolve against it
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Backing file (overrides storage.path)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Fail on malformed store lines instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive menu (default)
    Shell,
    /// List all contacts
    List {
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Add a contact
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        surname: String,
        #[arg(long)]
        phone: String,
        /// dd-mm-yyyy (dots allowed)
        #[arg(long)]
        birthdate: Option<String>,
    },
    /// Delete a contact
    Delete {
        #[arg(long)]
        name: String,
        #[arg(long)]
        surname: String,
    },
    /// Change the phone and/or birthdate of a contact
    Update {
        #[arg(long)]
        name: String,
        #[arg(long)]
        surname: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        birthdate: Option<String>,
    },
    /// Search by name and/or surname substring
    Search {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        surname: Option<String>,
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Show the age of a contact
    Age {
        #[arg(long)]
        name: String,
        #[arg(long)]
        surname: String,
    },
}

impl Cli {
    /// Load configuration and fold command-line overrides into it.
    pub fn resolve_config(&self) -> Result<PhonebookConfig, ApiError> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&self.workspace)?,
        };
        if let Some(file) = &self.file {
            config.storage.path = file.clone();
        }
        if self.strict {
            config.storage.parse_policy = ParsePolicy::Strict;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.logging.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.logging.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        Ok(config)
    }
}

/// CLI context owning the opened directory
pub struct CliContext {
    directory: Directory,
    config: PhonebookConfig,
    clock: Box<dyn Clock>,
}

impl CliContext {
    /// Open the directory described by `config`.
    pub fn new(workspace_root: PathBuf, config: PhonebookConfig) -> Result<Self, ApiError> {
        let store = config.storage.open_store(&workspace_root);
        info!(path = %store.path().display(), policy = ?store.policy(), "Opening store");
        let directory = Directory::open(Box::new(store))?;
        Ok(Self {
            directory,
            config,
            clock: Box::new(SystemClock),
        })
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    fn messages(&self) -> &'static Messages {
        Messages::for_language(self.config.ui.language)
    }

    /// Execute a CLI command, returning text for stdout.
    pub fn execute(&mut self, command: &Commands) -> Result<String, ApiError> {
        let messages = self.messages();
        match command {
            Commands::Shell => {
                let mut ui = self.config.ui.clone();
                ui.color = ui.color && std::io::stdout().is_terminal();
                Shell::new(&mut self.directory, TerminalPrompter, std::io::stdout(), &ui)
                    .run()?;
                Ok(String::new())
            }
            Commands::List { format } => {
                let contacts: Vec<_> = self.directory.contacts().iter().collect();
                render_contacts(&contacts, format, messages, messages.empty_directory)
            }
            Commands::Add {
                name,
                surname,
                phone,
                birthdate,
            } => {
                let phone = validate_phone(phone.trim())?;
                let birthdate = birthdate
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(validate_birthdate)
                    .transpose()?;
                self.directory.add(name, surname, phone, birthdate)?;
                Ok(messages.added.to_string())
            }
            Commands::Delete { name, surname } => {
                self.directory.delete(name, surname)?;
                Ok(messages.deleted.to_string())
            }
            Commands::Update {
                name,
                surname,
                phone,
                birthdate,
            } => {
                let update = ContactUpdate {
                    phone: phone.as_deref().map(|p| validate_phone(p.trim())).transpose()?,
                    birthdate: birthdate
                        .as_deref()
                        .map(|b| validate_birthdate(b.trim()))
                        .transpose()?,
                };
                if update.is_empty() {
                    return Err(ValidationError::Field(
                        "nothing to update: pass --phone and/or --birthdate".to_string(),
                    )
                    .into());
                }
                self.directory.update(name, surname, update)?;
                Ok(messages.updated.to_string())
            }
            Commands::Search {
                name,
                surname,
                format,
            } => {
                let results = self.directory.search(name.as_deref(), surname.as_deref());
                render_contacts(&results, format, messages, messages.no_results)
            }
            Commands::Age { name, surname } => {
                let age = self.directory.age(name, surname, self.clock.today())?;
                Ok(messages.format_age(&normalize_name(name), &normalize_name(surname), age))
            }
        }
    }
}

fn render_contacts(
    contacts: &[&crate::types::Contact],
    format: &str,
    messages: &Messages,
    when_empty: &str,
) -> Result<String, ApiError> {
    if format == "json" {
        return format_contacts_json(contacts)
            .map_err(|e| ApiError::InputError(format!("Failed to serialize contacts: {}", e)));
    }
    if contacts.is_empty() {
        return Ok(when_empty.to_string());
    }
    Ok(format_contacts_table(contacts, messages))
}
