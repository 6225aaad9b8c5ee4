use chrono::NaiveDate;
use phonebook::clock::FixedClock;
use phonebook::config::UiConfig;
use phonebook::store::{ParsePolicy, TextFileStore};
use phonebook::tooling::{ScriptedPrompter, Shell};
use phonebook::Directory;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn store_path(temp: &TempDir) -> PathBuf {
    temp.path().join("phonebook.txt")
}

pub fn open_directory(path: &Path) -> Directory {
    Directory::open(Box::new(TextFileStore::new(path))).unwrap()
}

pub fn open_strict(path: &Path) -> Result<Directory, phonebook::ApiError> {
    Directory::open(Box::new(TextFileStore::with_policy(path, ParsePolicy::Strict)))
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn plain_ui() -> UiConfig {
    UiConfig {
        color: false,
        ..UiConfig::default()
    }
}

/// Run a scripted shell session; returns the transcript and the prompter.
pub fn run_session(directory: &mut Directory, answers: &[&str]) -> (String, ScriptedPrompter) {
    let prompter = ScriptedPrompter::new(answers.iter().copied());
    let mut shell = Shell::new(directory, prompter, Vec::new(), &plain_ui())
        .with_clock(FixedClock(date(2020, 1, 1)));
    shell.run().unwrap();
    let (prompter, out) = shell.into_parts();
    (String::from_utf8(out).unwrap(), prompter)
}

/// Whitespace/border-separated cells of the first output line containing `needle`.
pub fn row_cells<'a>(output: &'a str, needle: &str) -> Vec<&'a str> {
    output
        .lines()
        .find(|line| line.contains(needle))
        .map(|line| {
            line.split(|c: char| c.is_whitespace() || c == '│')
                .filter(|cell| !cell.is_empty())
                .collect()
        })
        .unwrap_or_default()
}
