//! One-shot CLI commands.

use super::support::date;
use clap::Parser;
use phonebook::clock::FixedClock;
use phonebook::config::PhonebookConfig;
use phonebook::store::ParsePolicy;
use phonebook::tooling::cli::{Cli, CliContext, Commands};
use phonebook::{ApiError, ValidationError};
use tempfile::TempDir;

fn context(temp: &TempDir) -> CliContext {
    let mut config = PhonebookConfig::default();
    config.storage.path = "book.txt".into();
    CliContext::new(temp.path().to_path_buf(), config)
        .unwrap()
        .with_clock(FixedClock(date(2020, 1, 1)))
}

fn add(name: &str, surname: &str, phone: &str, birthdate: Option<&str>) -> Commands {
    Commands::Add {
        name: name.to_string(),
        surname: surname.to_string(),
        phone: phone.to_string(),
        birthdate: birthdate.map(str::to_string),
    }
}

#[test]
fn add_list_and_age() {
    let temp = TempDir::new().unwrap();
    let mut cli = context(&temp);

    assert_eq!(
        cli.execute(&add("ivan", "petrov", "79991234567", Some("01.01.2000")))
            .unwrap(),
        "Contact added."
    );
    let listed = cli
        .execute(&Commands::List {
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&listed).unwrap();
    assert_eq!(parsed[0]["phone"], "89991234567");
    assert_eq!(parsed[0]["birthdate"], "01-01-2000");

    let age = cli
        .execute(&Commands::Age {
            name: "IVAN".to_string(),
            surname: "petrov".to_string(),
        })
        .unwrap();
    assert_eq!(age, "Age of Ivan Petrov: 20");
    assert!(temp.path().join("book.txt").exists());
}

#[test]
fn invalid_values_are_errors() {
    let temp = TempDir::new().unwrap();
    let mut cli = context(&temp);

    let err = cli
        .execute(&add("ivan", "petrov", "+7999123456", None))
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(ValidationError::Phone(_))));

    let err = cli
        .execute(&add("ivan", "petrov", "89991234567", Some("30-02-2000")))
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(ValidationError::Birthdate(_))));
    assert!(cli.directory().is_empty());
}

#[test]
fn update_requires_a_field() {
    let temp = TempDir::new().unwrap();
    let mut cli = context(&temp);
    cli.execute(&add("ivan", "petrov", "89991234567", None))
        .unwrap();

    let err = cli
        .execute(&Commands::Update {
            name: "ivan".to_string(),
            surname: "petrov".to_string(),
            phone: None,
            birthdate: None,
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(ValidationError::Field(_))));

    cli.execute(&Commands::Update {
        name: "ivan".to_string(),
        surname: "petrov".to_string(),
        phone: None,
        birthdate: Some("15-06-1990".to_string()),
    })
    .unwrap();
    assert_eq!(
        cli.directory().contacts()[0].birthdate.as_deref(),
        Some("15-06-1990")
    );
}

#[test]
fn search_and_delete() {
    let temp = TempDir::new().unwrap();
    let mut cli = context(&temp);
    cli.execute(&add("ivan", "petrov", "89991234567", None))
        .unwrap();
    cli.execute(&add("anna", "ivanova", "89990000000", None))
        .unwrap();

    let found = cli
        .execute(&Commands::Search {
            name: None,
            surname: Some("pet".to_string()),
            format: "text".to_string(),
        })
        .unwrap();
    assert!(found.contains("Petrov"));
    assert!(!found.contains("Ivanova"));

    let err = cli
        .execute(&Commands::Delete {
            name: "oleg".to_string(),
            surname: "sidorov".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::ContactNotFound { .. }));
    assert_eq!(cli.directory().len(), 2);
}

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["phonebook"],
        vec!["phonebook", "shell"],
        vec!["phonebook", "list", "--format", "json"],
        vec!["phonebook", "--strict", "--file", "/tmp/x.txt", "list"],
        vec![
            "phonebook", "add", "--name", "ivan", "--surname", "petrov", "--phone", "89991234567",
        ],
        vec!["phonebook", "update", "--name", "a", "--surname", "b", "--birthdate", "01-01-2000"],
        vec!["phonebook", "search", "--surname", "pet"],
        vec!["phonebook", "age", "--name", "a", "--surname", "b"],
        vec!["phonebook", "delete", "--name", "a", "--surname", "b"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn command_line_overrides_config() {
    let temp = TempDir::new().unwrap();
    let cli = Cli::try_parse_from([
        "phonebook",
        "--workspace",
        temp.path().to_str().unwrap(),
        "--file",
        "other.txt",
        "--strict",
        "--log-level",
        "debug",
    ])
    .unwrap();

    let config = cli.resolve_config().unwrap();
    assert_eq!(config.storage.path, std::path::PathBuf::from("other.txt"));
    assert_eq!(config.storage.parse_policy, ParsePolicy::Strict);
    assert_eq!(config.logging.level, "debug");
}
