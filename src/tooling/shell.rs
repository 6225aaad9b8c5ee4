//! Interactive menu shell.
//!
//! Reads numbered commands until Exit (or end of input), delegating every
//! operation to the [`Directory`]. Domain errors are reported and the menu is
//! shown again; storage and I/O failures end the session.

use crate::clock::{Clock, SystemClock};
use crate::config::UiConfig;
use crate::directory::Directory;
use crate::error::{ApiError, ValidationError};
use crate::tooling::messages::Messages;
use crate::tooling::prompt::{output_error, write_error, Acquirer, Acquisition, Prompter};
use crate::types::ContactUpdate;
use crate::validation::{normalize_name, validate_name_field};
use crate::views::format_contacts_table;
use owo_colors::OwoColorize;
use std::io::Write;

/// Menu commands, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    List,
    Add,
    Delete,
    Update,
    Search,
    Age,
    Exit,
}

impl MenuCommand {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" => Some(Self::List),
            "2" => Some(Self::Add),
            "3" => Some(Self::Delete),
            "4" => Some(Self::Update),
            "5" => Some(Self::Search),
            "6" => Some(Self::Age),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

pub struct Shell<'d, P: Prompter, W: Write> {
    directory: &'d mut Directory,
    prompter: P,
    out: W,
    clock: Box<dyn Clock>,
    messages: &'static Messages,
    abort_input: String,
    color: bool,
}

impl<'d, P: Prompter, W: Write> Shell<'d, P, W> {
    pub fn new(directory: &'d mut Directory, prompter: P, out: W, ui: &UiConfig) -> Self {
        Self {
            directory,
            prompter,
            out,
            clock: Box::new(SystemClock),
            messages: Messages::for_language(ui.language),
            abort_input: ui.abort_input.clone(),
            color: ui.color,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Give back the prompter and output sink.
    pub fn into_parts(self) -> (P, W) {
        (self.prompter, self.out)
    }

    /// Run the menu loop until Exit or end of input.
    pub fn run(&mut self) -> Result<(), ApiError> {
        tracing::info!("Interactive session started");
        loop {
            self.print_menu()?;
            let Some(input) = self.prompter.ask(self.messages.command_prompt)? else {
                break;
            };
            let Some(command) = MenuCommand::parse(&input) else {
                self.say(self.messages.unknown_command)?;
                continue;
            };
            tracing::debug!(?command, "Menu command");
            match command {
                MenuCommand::List => self.list()?,
                MenuCommand::Add => self.add()?,
                MenuCommand::Delete => self.delete()?,
                MenuCommand::Update => self.update()?,
                MenuCommand::Search => self.search()?,
                MenuCommand::Age => self.age()?,
                MenuCommand::Exit => {
                    self.say(self.messages.goodbye)?;
                    break;
                }
            }
        }
        tracing::info!("Interactive session ended");
        Ok(())
    }

    fn print_menu(&mut self) -> Result<(), ApiError> {
        let title = if self.color {
            self.messages.menu_title.bold().to_string()
        } else {
            self.messages.menu_title.to_string()
        };
        writeln!(self.out, "\n{}", title).map_err(output_error)?;
        for (i, item) in self.messages.menu_items.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, item).map_err(output_error)?;
        }
        Ok(())
    }

    fn say(&mut self, message: &str) -> Result<(), ApiError> {
        writeln!(self.out, "{}", message).map_err(output_error)
    }

    fn ask_trimmed(&mut self, prompt: &str) -> Result<Option<String>, ApiError> {
        Ok(self.prompter.ask(prompt)?.map(|s| s.trim().to_string()))
    }

    /// Name and surname, or `None` when input ended.
    fn ask_full_name(&mut self) -> Result<Option<(String, String)>, ApiError> {
        let Some(name) = self.ask_trimmed(self.messages.name_prompt)? else {
            return Ok(None);
        };
        let Some(surname) = self.ask_trimmed(self.messages.surname_prompt)? else {
            return Ok(None);
        };
        Ok(Some((name, surname)))
    }

    /// The directory plus an acquirer over the shell's own prompter and output.
    fn acquirer(&mut self) -> (&Directory, Acquirer<'_>) {
        let acquirer = Acquirer {
            prompter: &mut self.prompter,
            out: &mut self.out,
            messages: self.messages,
            abort_input: &self.abort_input,
            color: self.color,
        };
        (&*self.directory, acquirer)
    }

    /// Report a domain error, or pass through anything fatal.
    fn report(&mut self, err: ApiError) -> Result<(), ApiError> {
        if !err.is_recoverable() {
            return Err(err);
        }
        let message = match &err {
            ApiError::DuplicateContact { name, surname } => {
                self.messages.format_duplicate(name, surname)
            }
            ApiError::DuplicatePhone(_) => self.messages.phone_taken.to_string(),
            ApiError::ContactNotFound { .. } => self.messages.not_found.to_string(),
            ApiError::BirthdateUnknown { .. } => self.messages.age_unknown.to_string(),
            ApiError::Validation(ValidationError::Phone(_)) => {
                self.messages.invalid_phone.to_string()
            }
            ApiError::Validation(ValidationError::Birthdate(_)) => {
                self.messages.invalid_birthdate.to_string()
            }
            other => other.to_string(),
        };
        write_error(&mut self.out, &message, self.color)
    }

    fn list(&mut self) -> Result<(), ApiError> {
        if self.directory.is_empty() {
            return self.say(self.messages.empty_directory);
        }
        let table = {
            let contacts: Vec<_> = self.directory.contacts().iter().collect();
            format_contacts_table(&contacts, self.messages)
        };
        self.say(&table)
    }

    fn add(&mut self) -> Result<(), ApiError> {
        let Some((name, surname)) = self.ask_full_name()? else {
            return self.say(self.messages.cancelled);
        };
        if let Err(e) = validate_name_field(self.messages.column_name, &name)
            .and_then(|_| validate_name_field(self.messages.column_surname, &surname))
        {
            return self.report(e.into());
        }
        if self.directory.contains(&name, &surname) {
            let message = self
                .messages
                .format_duplicate(&normalize_name(&name), &normalize_name(&surname));
            return write_error(&mut self.out, &message, self.color);
        }

        let (directory, mut acquirer) = self.acquirer();
        let phone = match acquirer.phone(directory)? {
            Acquisition::Value(phone) => phone,
            Acquisition::Aborted => return self.say(self.messages.cancelled),
        };
        let birthdate = match self.acquirer().1.birthdate(true)? {
            Acquisition::Value(birthdate) => birthdate,
            Acquisition::Aborted => return self.say(self.messages.cancelled),
        };

        let added = self.directory.add(&name, &surname, phone, birthdate).map(|_| ());
        match added {
            Ok(()) => self.say(self.messages.added),
            Err(e) => self.report(e),
        }
    }

    fn delete(&mut self) -> Result<(), ApiError> {
        let Some((name, surname)) = self.ask_full_name()? else {
            return self.say(self.messages.cancelled);
        };
        match self.directory.delete(&name, &surname) {
            Ok(_) => self.say(self.messages.deleted),
            Err(e) => self.report(e),
        }
    }

    fn update(&mut self) -> Result<(), ApiError> {
        let Some((name, surname)) = self.ask_full_name()? else {
            return self.say(self.messages.cancelled);
        };
        if !self.directory.contains(&name, &surname) {
            return self.say(self.messages.not_found);
        }

        // A non-empty answer only flags the field; the value comes from a fresh acquisition.
        let change_phone = self
            .ask_trimmed(self.messages.change_phone_prompt)?
            .is_some_and(|s| !s.is_empty());
        let change_birthdate = self
            .ask_trimmed(self.messages.change_birthdate_prompt)?
            .is_some_and(|s| !s.is_empty());

        let mut update = ContactUpdate::default();
        if change_phone {
            let (directory, mut acquirer) = self.acquirer();
            match acquirer.phone(directory)? {
                Acquisition::Value(phone) => update.phone = Some(phone),
                Acquisition::Aborted => return self.say(self.messages.cancelled),
            }
        }
        if change_birthdate {
            match self.acquirer().1.birthdate(false)? {
                Acquisition::Value(birthdate) => update.birthdate = birthdate,
                Acquisition::Aborted => return self.say(self.messages.cancelled),
            }
        }

        let updated = self.directory.update(&name, &surname, update).map(|_| ());
        match updated {
            Ok(()) => self.say(self.messages.updated),
            Err(e) => self.report(e),
        }
    }

    fn search(&mut self) -> Result<(), ApiError> {
        let name = self.ask_trimmed(self.messages.search_name_prompt)?;
        let surname = self.ask_trimmed(self.messages.search_surname_prompt)?;
        let table = {
            let results = self.directory.search(name.as_deref(), surname.as_deref());
            (!results.is_empty()).then(|| format_contacts_table(&results, self.messages))
        };
        match table {
            Some(table) => self.say(&table),
            None => self.say(self.messages.no_results),
        }
    }

    fn age(&mut self) -> Result<(), ApiError> {
        let Some((name, surname)) = self.ask_full_name()? else {
            return self.say(self.messages.cancelled);
        };
        let today = self.clock.today();
        match self.directory.age(&name, &surname, today) {
            Ok(age) => {
                let report =
                    self.messages
                        .format_age(&normalize_name(&name), &normalize_name(&surname), age);
                self.say(&report)
            }
            Err(ApiError::ContactNotFound { .. } | ApiError::BirthdateUnknown { .. }) => {
                write_error(&mut self.out, self.messages.age_unknown, self.color)
            }
            Err(e) => self.report(e),
        }
    }
}
