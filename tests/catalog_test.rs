//! Tests for the bundled catalog through the public API

use pretty_assertions::assert_eq;
use tracker_i18n::{keys, Catalog};

#[test]
fn test_every_locale_translates_every_key() {
    let catalog = Catalog::bundled().unwrap();
    for (code, _) in catalog.list_locales() {
        for key in catalog.keys() {
            let text = catalog.get(code, key);
            assert!(!text.is_empty(), "{code}/{key} is empty");
        }
    }
}

#[test]
fn test_key_constants_match_default_locale() {
    let catalog = Catalog::bundled().unwrap();
    let mut expected: Vec<&str> = keys::ALL.to_vec();
    expected.sort_unstable();
    assert_eq!(catalog.keys(), expected);
}

#[test]
fn test_known_translations() {
    assert_eq!(tracker_i18n::get("en", keys::SIGN_IN), "Sign In");
    assert_eq!(tracker_i18n::get("bg", keys::SIGN_IN), "Вход");
    assert_eq!(tracker_i18n::get("de", keys::SPEED), "Geschw.");
    assert_eq!(tracker_i18n::get("pl", keys::USERNAME), "Użytkownik");
    assert_eq!(tracker_i18n::get("sv_SE", keys::FOLLOW), "Följ");
    assert_eq!(tracker_i18n::get("ru", keys::GEO_FENCE), "Геозона");
}

#[test]
fn test_unknown_locale_falls_back_to_english() {
    assert_eq!(tracker_i18n::get("xx-unknown", keys::SIGN_IN), "Sign In");
    assert_eq!(tracker_i18n::get("", keys::LOGOUT), "Logout");
}

#[test]
fn test_missing_key_is_visible() {
    assert_eq!(tracker_i18n::get("en", "no_such_key"), "no_such_key");
    assert_eq!(tracker_i18n::get("xx-unknown", "no_such_key"), "no_such_key");
}

#[test]
fn test_region_separator_is_normalized() {
    assert_eq!(tracker_i18n::get("pt-PT", keys::SIGN_IN), "Aceder");
    assert_eq!(tracker_i18n::get("sv-se", keys::LOGOUT), "Logga ut");
}

#[test]
fn test_list_locales_in_declaration_order() {
    let locales: Vec<(&str, &str)> = tracker_i18n::list_locales().collect();
    assert_eq!(
        locales,
        vec![
            ("en", "English"),
            ("bg", "Български"),
            ("de", "German"),
            ("es", "Spanish"),
            ("hu", "Hungarian"),
            ("it", "Italian"),
            ("lt", "Latvian"),
            ("nl", "Danish"),
            ("pl", "Polish"),
            ("pt_PT", "Portuguese"),
            ("ru", "Russian"),
            ("tl", "Tagalog"),
            ("sv_SE", "Svenska"),
        ]
    );
    assert!(locales.iter().all(|(_, name)| !name.is_empty()));
}

#[test]
fn test_list_locales_is_restartable() {
    let first: Vec<_> = tracker_i18n::list_locales().collect();
    let second: Vec<_> = tracker_i18n::list_locales().collect();
    assert_eq!(first, second);
}

#[test]
fn test_get_is_idempotent() {
    for _ in 0..3 {
        assert_eq!(tracker_i18n::get("it", keys::ADDRESS), "Indirizzo");
        assert_eq!(tracker_i18n::get("xx-unknown", keys::ADDRESS), "Address");
    }
}

#[test]
fn test_bundled_catalog_is_complete() {
    let catalog = Catalog::bundled().unwrap();
    let report = catalog.coverage_report();
    assert_eq!(report.default_locale, "en");
    assert_eq!(report.total_keys, keys::ALL.len());
    assert!(report.is_complete());
    assert!(report.locales.iter().all(|c| c.extra.is_empty()));
    assert!(catalog.ensure_complete().is_ok());
}

#[test]
fn test_english_placeholders_are_reported_untranslated() {
    let report = Catalog::bundled().unwrap().coverage_report();

    let bg = report.locale("bg").unwrap();
    assert!(bg.untranslated.contains(&keys::STOP_FOLLOWING.to_string()));
    assert!(bg.untranslated.contains(&keys::GEO_FENCE.to_string()));

    let ru = report.locale("ru").unwrap();
    assert!(ru.untranslated.is_empty());

    let tl = report.locale("tl").unwrap();
    assert_eq!(tl.untranslated.len(), keys::ALL.len() - 1);
    assert!(!tl.untranslated.contains(&keys::FOLLOW.to_string()));
}

#[test]
fn test_global_matches_bundled() {
    let bundled = Catalog::bundled().unwrap();
    let global = tracker_i18n::global();
    assert_eq!(global.len(), bundled.len());
    assert_eq!(global.default_locale(), "en");
}
