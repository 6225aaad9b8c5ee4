//! Interactive input: line prompters and the validated acquisition loops.
//!
//! Validation itself lives in [`crate::validation`]; this module only owns
//! the re-prompting around it.

use crate::directory::Directory;
use crate::error::ApiError;
use crate::tooling::messages::Messages;
use crate::types::{Birthdate, Phone};
use crate::validation::{validate_birthdate, validate_phone};
use owo_colors::OwoColorize;
use std::collections::VecDeque;
use std::io::{BufRead, IsTerminal, Write};

/// Source of free-text answers. `Ok(None)` means input is exhausted.
pub trait Prompter {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, ApiError>;
}

/// Prompts on the terminal through `dialoguer`, or reads plain lines from
/// stdin when it is not a TTY.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, ApiError> {
        if std::io::stdin().is_terminal() {
            return dialoguer::Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .map(Some)
                .map_err(|e| ApiError::InputError(format!("Failed to get user input: {}", e)));
        }

        let mut stdout = std::io::stdout();
        write!(stdout, "{}: ", prompt).and_then(|_| stdout.flush()).map_err(output_error)?;
        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| ApiError::InputError(format!("Failed to read input: {}", e)))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Replays a fixed list of answers, then reports end of input.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts shown so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, ApiError> {
        self.asked.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}

/// Outcome of an acquisition loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acquisition<T> {
    Value(T),
    /// The user typed the abort input or input ended.
    Aborted,
}

/// Re-prompting loops that only return validated values.
pub struct Acquirer<'a> {
    pub prompter: &'a mut dyn Prompter,
    pub out: &'a mut dyn Write,
    pub messages: &'static Messages,
    pub abort_input: &'a str,
    pub color: bool,
}

impl Acquirer<'_> {
    /// Ask until the answer is a valid phone not used by any contact.
    pub fn phone(&mut self, directory: &Directory) -> Result<Acquisition<Phone>, ApiError> {
        loop {
            let Some(answer) = self.next_answer(self.messages.phone_prompt)? else {
                return Ok(Acquisition::Aborted);
            };
            match validate_phone(&answer) {
                Ok(phone) if directory.phone_in_use(&phone) => {
                    self.error(self.messages.phone_taken)?;
                }
                Ok(phone) => return Ok(Acquisition::Value(phone)),
                Err(_) => self.error(self.messages.invalid_phone)?,
            }
        }
    }

    /// Ask until the answer is a valid birthdate. With `allow_empty`, an empty
    /// answer yields `Value(None)`.
    pub fn birthdate(
        &mut self,
        allow_empty: bool,
    ) -> Result<Acquisition<Option<Birthdate>>, ApiError> {
        let prompt = if allow_empty {
            self.messages.optional_birthdate_prompt
        } else {
            self.messages.birthdate_prompt
        };
        loop {
            let Some(answer) = self.next_answer(prompt)? else {
                return Ok(Acquisition::Aborted);
            };
            if allow_empty && answer.is_empty() {
                return Ok(Acquisition::Value(None));
            }
            match validate_birthdate(&answer) {
                Ok(date) => return Ok(Acquisition::Value(Some(date))),
                Err(_) => self.error(self.messages.invalid_birthdate)?,
            }
        }
    }

    /// Trimmed answer, or `None` on abort input or end of input.
    fn next_answer(&mut self, prompt: &str) -> Result<Option<String>, ApiError> {
        let prompt = format!("{} [{} = cancel]", prompt, self.abort_input);
        match self.prompter.ask(&prompt)? {
            Some(answer) => {
                let answer = answer.trim();
                if !self.abort_input.is_empty() && answer == self.abort_input {
                    Ok(None)
                } else {
                    Ok(Some(answer.to_string()))
                }
            }
            None => Ok(None),
        }
    }

    fn error(&mut self, message: &str) -> Result<(), ApiError> {
        write_error(self.out, message, self.color)
    }
}

pub(crate) fn write_error(out: &mut dyn Write, message: &str, color: bool) -> Result<(), ApiError> {
    let written = if color {
        writeln!(out, "{}", message.red())
    } else {
        writeln!(out, "{}", message)
    };
    written.map_err(output_error)
}

pub(crate) fn output_error(e: std::io::Error) -> ApiError {
    ApiError::InputError(format!("Failed to write output: {}", e))
}
