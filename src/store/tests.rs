// envswitch: Environment Switcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{CURRENT_KEY, ConfigStore, MemoryStore, OVERRIDE_KEY, TomlFileStore};
use crate::error::{EnvError, StoreError};

#[test]
fn test_memory_store_get_set() {
    let store = MemoryStore::with_values([(CURRENT_KEY, "dev")]);
    assert_eq!(store.get(CURRENT_KEY).unwrap().as_deref(), Some("dev"));
    assert_eq!(store.get(OVERRIDE_KEY).unwrap(), None);

    store.set(CURRENT_KEY, "prod").unwrap();
    assert_eq!(store.get(CURRENT_KEY).unwrap().as_deref(), Some("prod"));

    assert_eq!(store.remove(CURRENT_KEY).as_deref(), Some("prod"));
    assert_eq!(store.get(CURRENT_KEY).unwrap(), None);
}

#[test]
fn test_file_store_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = TomlFileStore::new(dir.path().join("settings.toml"));
    assert_eq!(store.get(CURRENT_KEY).unwrap(), None);
}

#[test]
fn test_file_store_set_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.toml");

    let store = TomlFileStore::new(&path);
    store.set(CURRENT_KEY, "stage").unwrap();
    store.set(OVERRIDE_KEY, "").unwrap();

    // A second instance sees the durable value.
    let reopened = TomlFileStore::new(&path);
    assert_eq!(reopened.get(CURRENT_KEY).unwrap().as_deref(), Some("stage"));
    assert_eq!(reopened.get(OVERRIDE_KEY).unwrap().as_deref(), Some(""));

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("environment = \"stage\""), "{content}");
}

#[test]
fn test_file_store_keeps_unrelated_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "site_name = \"Example\"\nenvironment = \"dev\"\n").unwrap();

    let store = TomlFileStore::new(&path);
    store.set(CURRENT_KEY, "prod").unwrap();

    assert_eq!(store.get("site_name").unwrap().as_deref(), Some("Example"));
    assert_eq!(store.get(CURRENT_KEY).unwrap().as_deref(), Some("prod"));
}

#[test]
fn test_file_store_observes_external_edits() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");

    let store = TomlFileStore::new(&path);
    store.set(CURRENT_KEY, "dev").unwrap();
    assert_eq!(store.get(OVERRIDE_KEY).unwrap(), None);

    std::fs::write(
        &path,
        "environment = \"dev\"\nenvironment_override = \"maintenance\"\n",
    )
    .unwrap();
    assert_eq!(
        store.get(OVERRIDE_KEY).unwrap().as_deref(),
        Some("maintenance")
    );
}

#[test]
fn test_file_store_rejects_invalid_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "environment = [unterminated").unwrap();

    let err = TomlFileStore::new(&path).get(CURRENT_KEY).unwrap_err();
    match err {
        EnvError::Store(inner) => assert!(matches!(*inner, StoreError::ParseError { .. })),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_file_store_rejects_non_string_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "environment = 42\n").unwrap();

    let err = TomlFileStore::new(&path).get(CURRENT_KEY).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"store error: settings key 'environment' is not a string");
}
