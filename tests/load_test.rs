//! Tests for loading catalogs from configuration and external files

use std::io::Write;

use tracker_i18n::{AppConfig, Catalog, CatalogError, I18nConfig, Translator};

const PARTIAL_CATALOG: &str = r#"{
    "default_locale": "en",
    "locales": [
        { "code": "en", "name": "English", "messages": { "sign_in": "Sign In", "logout": "Logout" } },
        { "code": "fi", "name": "Suomi", "messages": { "sign_in": "Kirjaudu" } }
    ]
}"#;

fn write_catalog(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_bundled_by_default() {
    let catalog = Catalog::load(&I18nConfig::default()).unwrap();
    assert_eq!(catalog.len(), 13);
    assert_eq!(catalog.get("ru", "logout"), "Выйти");
}

#[test]
fn test_load_bundled_strict() {
    let config = I18nConfig {
        strict: true,
        ..I18nConfig::default()
    };
    assert!(Catalog::load(&config).is_ok());
}

#[test]
fn test_load_external_catalog() {
    let file = write_catalog(PARTIAL_CATALOG);
    let config = I18nConfig {
        catalog_path: Some(file.path().to_path_buf()),
        ..I18nConfig::default()
    };

    let catalog = Catalog::load(&config).unwrap();
    assert_eq!(catalog.get("fi", "sign_in"), "Kirjaudu");
    assert_eq!(catalog.get("fi", "logout"), "Logout");
}

#[test]
fn test_load_external_catalog_strict_fails() {
    let file = write_catalog(PARTIAL_CATALOG);
    let config = I18nConfig {
        catalog_path: Some(file.path().to_path_buf()),
        strict: true,
        ..I18nConfig::default()
    };

    match Catalog::load(&config) {
        Err(CatalogError::IncompleteLocale { locale, missing }) => {
            assert_eq!(locale, "fi");
            assert_eq!(missing, vec!["logout".to_string()]);
        }
        other => panic!("expected IncompleteLocale, got {other:?}"),
    }
}

#[test]
fn test_load_missing_file() {
    let config = I18nConfig {
        catalog_path: Some("/nonexistent/messages.json".into()),
        ..I18nConfig::default()
    };
    let err = Catalog::load(&config).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn test_load_malformed_file() {
    let file = write_catalog("{ \"locales\": [ ");
    let err = Catalog::from_path(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn test_config_file_drives_translator() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[i18n]\nlocale = \"bg\"\n").unwrap();

    let config = AppConfig::load_from_file(&path).unwrap();
    let translator = Translator::from_config(&config.i18n);
    assert_eq!(translator.locale(), "bg");
    assert_eq!(translator.t("sign_in"), "Вход");
    assert_eq!(translator.display_name(), Some("Български"));
}
