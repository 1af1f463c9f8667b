use std::sync::Arc;

use pretty_assertions::assert_eq;
use taskboard_i18n::{
    board, ArgValue, Catalog, I18nError, LocaleMessages, MessageKey, Resolver,
};

fn greeting_catalog() -> Catalog {
    Catalog::builder()
        .locale("en", [("greeting", "Hello")].into_iter().collect())
        .locale("fr", [("greeting", "Bonjour")].into_iter().collect())
        .build()
}

#[test]
fn greeting_scenario() {
    let mut r = Resolver::new(greeting_catalog(), "en", "en").unwrap();
    assert_eq!(r.resolve("greeting"), "Hello");

    r.set_locale("fr").unwrap();
    assert_eq!(r.resolve("greeting"), "Bonjour");
    assert_eq!(r.resolve("missingKey"), "missingKey");
}

#[test]
fn default_locale_returns_configured_values() {
    let catalog = Arc::new(board::catalog().unwrap());
    let r = Resolver::new(
        Arc::clone(&catalog),
        board::DEFAULT_LOCALE,
        board::FALLBACK_LOCALE,
    )
    .unwrap();
    let en = catalog.messages(board::DEFAULT_LOCALE).unwrap();

    for (key, value) in en.iter() {
        let resolved = r.resolve(key);
        assert!(!resolved.is_empty());
        assert_eq!(resolved, value);
    }
}

#[test]
fn keys_missing_in_active_come_from_fallback() {
    let en: LocaleMessages = [("a", "A-en"), ("b", "B-en"), ("c", "C-en")]
        .into_iter()
        .collect();
    let fr: LocaleMessages = [("a", "A-fr")].into_iter().collect();
    let catalog = Catalog::builder().locale("en", en).locale("fr", fr).build();

    let r = Resolver::new(catalog, "fr", "en").unwrap();
    assert_eq!(r.resolve("a"), "A-fr");
    for key in ["b", "c"] {
        assert_eq!(r.resolve(key), r.catalog().lookup("en", key).unwrap());
    }
    for key in ["d", "some.dotted-key", ""] {
        assert_eq!(r.resolve(key), key);
    }
}

#[test]
fn switching_locale_changes_every_shared_key() {
    let mut r = board::resolver().unwrap();
    r.set_locale("fr").unwrap();
    let catalog = Arc::clone(r.catalog());

    for key in MessageKey::ALL {
        assert_eq!(
            r.resolve_key(key),
            catalog.lookup("fr", key.as_str()).unwrap(),
            "{key}"
        );
    }
}

#[test]
fn switching_to_fallback_reads_fallback_catalog() {
    let mut r = Resolver::new(board::catalog().unwrap(), "fr", "en").unwrap();
    let fallback = r.fallback_locale().to_string();
    r.set_locale(&fallback).unwrap();

    let catalog = Arc::clone(r.catalog());
    for key in MessageKey::ALL {
        assert_eq!(
            r.resolve(key.as_str()),
            catalog.lookup("en", key.as_str()).unwrap()
        );
    }
}

#[test]
fn unknown_locale_is_rejected_and_ignored() {
    let mut r = board::resolver().unwrap();
    assert!(matches!(
        r.set_locale("klingon"),
        Err(I18nError::UnknownLocale(ref l)) if l == "klingon"
    ));
    assert_eq!(r.locale(), "en");
    assert_eq!(r.resolve_key(MessageKey::DeleteButton), "Delete");
}

#[test]
fn configuration_errors_are_reported_up_front() {
    let err = Resolver::new(greeting_catalog(), "de", "en").unwrap_err();
    assert!(matches!(err, I18nError::Configuration(_)));
    assert!(err.to_string().contains("`de`"));
}

#[test]
fn interpolation_leaves_unknown_markers() {
    let catalog = Catalog::builder()
        .simple_str("en", "moved: \"{title} moved to {column}\"\n")
        .unwrap()
        .build();
    let r = Resolver::new(catalog, "en", "en").unwrap();
    assert_eq!(
        r.resolve_with("moved", &[("title", ArgValue::from("Fix login"))]),
        "Fix login moved to {column}"
    );
}

#[test]
fn plain_resolve_returns_stored_text() {
    let catalog = Catalog::builder()
        .locale(
            "en",
            [
                ("braces", "Use {{x}} and }} here"),
                ("spaced", "Hi { who }, I am {name}!"),
            ]
            .into_iter()
            .collect(),
        )
        .build();
    let r = Resolver::new(catalog, "en", "en").unwrap();

    assert_eq!(r.resolve("braces"), "Use {{x}} and }} here");
    assert_eq!(
        r.resolve_with("braces", &[("x", ArgValue::from(1))]),
        "Use {x} and } here"
    );
    assert_eq!(
        r.resolve_with("spaced", &[("name", ArgValue::from("Ada"))]),
        "Hi { who }, I am Ada!"
    );
}

#[test]
fn request_scoped_resolvers_do_not_leak() {
    let shared = board::resolver().unwrap();
    let handles: Vec<_> = ["en", "fr", "en", "fr"]
        .into_iter()
        .map(|loc| {
            let r = shared.scoped(loc).unwrap();
            std::thread::spawn(move || (loc, r.resolve_key(MessageKey::Done)))
        })
        .collect();

    for h in handles {
        let (loc, done) = h.join().unwrap();
        let expected = if loc == "fr" { "Terminé" } else { "Done" };
        assert_eq!(done, expected);
    }
    assert_eq!(shared.locale(), "en");
}
