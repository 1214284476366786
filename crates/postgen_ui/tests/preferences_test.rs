//! Tests for the file-backed preference store and theme persistence.

use postgen_error::{PostgenErrorKind, StorageErrorKind};
use postgen_ui::{FilePreferences, PreferenceStore, THEME_KEY, Theme, load_theme, toggle_theme};

#[test]
fn test_missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FilePreferences::new(dir.path().join("preferences.json"));

    assert_eq!(store.get(THEME_KEY).unwrap(), None);
    assert_eq!(load_theme(&store), Theme::Dark);
}

#[test]
fn test_set_creates_directories_and_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("postgen").join("preferences.json");

    let mut store = FilePreferences::new(&path);
    store.set(THEME_KEY, "light").unwrap();
    store.set("other", "value").unwrap();

    let reopened = FilePreferences::new(&path);
    assert_eq!(reopened.get(THEME_KEY).unwrap().as_deref(), Some("light"));
    assert_eq!(reopened.get("other").unwrap().as_deref(), Some("value"));
    assert_eq!(load_theme(&reopened), Theme::Light);
}

#[test]
fn test_toggle_persists_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    let mut store = FilePreferences::new(&path);

    let theme = toggle_theme(Theme::Dark, &mut store);
    assert_eq!(theme, Theme::Light);
    assert_eq!(load_theme(&FilePreferences::new(&path)), Theme::Light);

    let theme = toggle_theme(theme, &mut store);
    assert_eq!(theme, Theme::Dark);
    assert_eq!(load_theme(&FilePreferences::new(&path)), Theme::Dark);
}

#[test]
fn test_corrupt_file_is_storage_error_and_theme_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, "not json").unwrap();
    let store = FilePreferences::new(&path);

    let err = store.get(THEME_KEY).unwrap_err();
    let PostgenErrorKind::Storage(storage) = err.kind() else {
        panic!("Expected storage error, got {}", err);
    };
    assert!(matches!(storage.kind(), StorageErrorKind::Corrupt(_)));
    assert_eq!(load_theme(&store), Theme::Dark);
}

#[test]
fn test_unrecognised_theme_falls_back_to_dark() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FilePreferences::new(dir.path().join("preferences.json"));
    store.set(THEME_KEY, "sepia").unwrap();

    assert_eq!(load_theme(&store), Theme::Dark);
}

#[test]
fn test_failed_write_still_toggles() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should be makes every write fail
    let path = dir.path().join("preferences.json");
    std::fs::create_dir(&path).unwrap();
    let mut store = FilePreferences::new(&path);

    assert_eq!(toggle_theme(Theme::Dark, &mut store), Theme::Light);
}
