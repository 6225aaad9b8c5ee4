//! End-to-end directory scenarios against a real text file store.

use super::support::{date, open_directory, open_strict, row_cells, run_session, store_path};
use phonebook::store::{ContactStore, TextFileStore};
use phonebook::validation::{validate_birthdate, validate_phone};
use phonebook::{ApiError, Contact, StorageError};
use tempfile::TempDir;

#[test]
fn add_then_view_shows_single_row() {
    let temp = TempDir::new().unwrap();
    let mut dir = open_directory(&store_path(&temp));
    dir.add(
        "ivan",
        "petrov",
        validate_phone("89991234567").unwrap(),
        Some(validate_birthdate("15-06-1990").unwrap()),
    )
    .unwrap();

    let (output, _) = run_session(&mut dir, &["1", "7"]);
    assert_eq!(
        row_cells(&output, "Ivan"),
        vec!["Ivan", "Petrov", "89991234567", "15-06-1990"]
    );
    assert_eq!(output.lines().filter(|l| l.contains("8999")).count(), 1);
}

#[test]
fn duplicate_add_keeps_one_contact() {
    let temp = TempDir::new().unwrap();
    let mut dir = open_directory(&store_path(&temp));
    dir.add("ivan", "petrov", validate_phone("89991234567").unwrap(), None)
        .unwrap();
    let err = dir
        .add("Ivan", "PETROV", validate_phone("89990000000").unwrap(), None)
        .unwrap_err();

    assert!(matches!(err, ApiError::DuplicateContact { .. }));
    assert_eq!(dir.len(), 1);
    assert_eq!(open_directory(&store_path(&temp)).len(), 1);
}

#[test]
fn age_on_fixed_date() {
    let temp = TempDir::new().unwrap();
    let mut dir = open_directory(&store_path(&temp));
    dir.add(
        "ivan",
        "petrov",
        validate_phone("89991234567").unwrap(),
        Some(validate_birthdate("01-01-2000").unwrap()),
    )
    .unwrap();

    assert_eq!(dir.age("ivan", "petrov", date(2020, 1, 1)).unwrap(), 20);
}

#[test]
fn search_by_surname_substring() {
    let temp = TempDir::new().unwrap();
    let mut dir = open_directory(&store_path(&temp));
    dir.add("ivan", "petrov", validate_phone("89991234567").unwrap(), None)
        .unwrap();
    dir.add("anna", "ivanova", validate_phone("89990000000").unwrap(), None)
        .unwrap();

    let found = dir.search(None, Some("pet"));
    assert_eq!(found.len(), 1);
    assert_eq!((found[0].name.as_str(), found[0].surname.as_str()), ("Ivan", "Petrov"));
}

#[test]
fn delete_missing_contact_leaves_file_untouched() {
    let temp = TempDir::new().unwrap();
    let path = store_path(&temp);
    let mut dir = open_directory(&path);
    dir.add("ivan", "petrov", validate_phone("89991234567").unwrap(), None)
        .unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    let err = dir.delete("anna", "ivanova").unwrap_err();
    assert!(matches!(err, ApiError::ContactNotFound { .. }));
    assert_eq!(dir.len(), 1);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn mutations_survive_reopen() {
    let temp = TempDir::new().unwrap();
    let path = store_path(&temp);
    {
        let mut dir = open_directory(&path);
        dir.add("ivan", "petrov", validate_phone("79991234567").unwrap(), None)
            .unwrap();
        dir.add(
            "anna",
            "ivanova",
            validate_phone("89990000000").unwrap(),
            Some(validate_birthdate("02.03.1985").unwrap()),
        )
        .unwrap();
        dir.delete("ivan", "petrov").unwrap();
    }

    let reopened = open_directory(&path);
    assert_eq!(
        reopened.contacts(),
        &[Contact {
            name: "Anna".to_string(),
            surname: "Ivanova".to_string(),
            phone: "89990000000".to_string(),
            birthdate: Some("02-03-1985".to_string()),
        }]
    );
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Anna, Ivanova, 89990000000, 02-03-1985\n"
    );
}

#[test]
fn save_load_save_is_stable() {
    let temp = TempDir::new().unwrap();
    let store = TextFileStore::new(store_path(&temp));
    let entries = vec![
        Contact {
            name: "Ivan".to_string(),
            surname: "Petrov".to_string(),
            phone: "89991234567".to_string(),
            birthdate: None,
        },
        Contact {
            name: "Анна".to_string(),
            surname: "Иванова".to_string(),
            phone: "89990000000".to_string(),
            birthdate: Some("29-02-2020".to_string()),
        },
    ];

    store.save(&entries).unwrap();
    let first = std::fs::read_to_string(store.path()).unwrap();
    store.save(&store.load().unwrap()).unwrap();
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), first);
    assert_eq!(store.load().unwrap(), entries);
}

#[test]
fn lenient_and_strict_policies_diverge_on_bad_lines() {
    let temp = TempDir::new().unwrap();
    let path = store_path(&temp);
    std::fs::write(
        &path,
        "Ivan, Petrov, 89991234567, 15-06-1990\nbroken line\nAnna, Ivanova, 89990000000, \n",
    )
    .unwrap();

    assert_eq!(open_directory(&path).len(), 2);
    let err = open_strict(&path).err().unwrap();
    assert!(matches!(
        err,
        ApiError::StorageError(StorageError::MalformedLine { line: 2, .. })
    ));
}

#[test]
fn extra_fields_keep_fourth_as_birthdate() {
    let temp = TempDir::new().unwrap();
    let path = store_path(&temp);
    std::fs::write(&path, "Ivan, Petrov, 89991234567, 01-01-2000, note, more\n").unwrap();

    let dir = open_directory(&path);
    assert_eq!(dir.contacts()[0].birthdate.as_deref(), Some("01-01-2000"));
    assert_eq!(dir.age("Ivan", "Petrov", date(2020, 1, 1)).unwrap(), 20);
}

#[test]
fn hand_edited_lowercase_names_still_match() {
    let temp = TempDir::new().unwrap();
    let path = store_path(&temp);
    std::fs::write(&path, "ivan, petrov, 89991234567, 01-01-2000\n").unwrap();

    let mut dir = open_directory(&path);
    assert!(dir.find("Ivan", "Petrov").is_some());
    assert_eq!(dir.age("IVAN", "petrov", date(2020, 1, 1)).unwrap(), 20);

    let err = dir
        .add("Ivan", "Petrov", validate_phone("89990000000").unwrap(), None)
        .unwrap_err();
    assert!(matches!(err, ApiError::DuplicateContact { .. }));
    assert_eq!(dir.len(), 1);

    dir.delete("ivan", "PETROV").unwrap();
    assert!(open_directory(&path).is_empty());
}
