//! Integration tests for the translation engine.

use std::sync::Arc;
use std::thread;

use glossa::{
    Catalog, ConfigError, EngineConfig, EngineOptions, LoadError, LoadWarning, Locale,
    PluralCategory, SharedEngine, TranslationEngine, Value, compute_suggestions, params,
};
use serde_json::json;

fn engine(config: &str) -> TranslationEngine {
    TranslationEngine::from_json_config(config).unwrap()
}

fn locale(tag: &str) -> Locale {
    Locale::parse(tag).unwrap()
}

/// English, German and French, with fr-CA redirected to French.
fn sample_engine() -> TranslationEngine {
    engine(r#"{"locales": ["en", "de", "fr"], "fallbacks": {"fr-CA": "fr"}}"#)
        .load_translations(
            "en",
            &json!({
                "home": {"title": "Welcome", "subtitle": "Glad you're here"},
                "greeting": "Hello, {{ name }}!",
                "only_english": "English only",
                "cat": {"one": "%s cat", "other": "%s cats"},
                "apple": "an apple",
                "apples": "%d apples",
            }),
        )
        .unwrap()
        .load_translations(
            "de",
            &json!({
                "home": {"title": "Willkommen"},
                "greeting": "Hallo, {{name}}!",
            }),
        )
        .unwrap()
}

// =========================================================================
// Configuration
// =========================================================================

#[test]
fn config_defaults_to_first_locale() {
    let config = EngineConfig::from_json(r#"{"locales": ["de", "en"]}"#).unwrap();
    assert_eq!(config.default_locale().as_str(), "de");
    assert!(config.object_notation());
    assert_eq!(config.locales(), [locale("de"), locale("en")]);
}

#[test]
fn config_normalizes_and_deduplicates_locales() {
    let config = EngineConfig::from_json(r#"{"locales": ["en-us", "EN-US", "fr"]}"#).unwrap();
    assert_eq!(config.locales(), [locale("en-US"), locale("fr")]);
}

#[test]
fn config_requires_a_locale() {
    let err = EngineConfig::from_json(r#"{"locales": []}"#).unwrap_err();
    assert!(matches!(err, ConfigError::NoLocales));
}

#[test]
fn config_rejects_invalid_locale() {
    let err = EngineConfig::from_json(r#"{"locales": ["en", "not a locale"]}"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidLocale(_)));
}

#[test]
fn config_rejects_unconfigured_default() {
    let err =
        EngineConfig::from_json(r#"{"locales": ["en"], "defaultLocale": "de"}"#).unwrap_err();
    match err {
        ConfigError::DefaultNotConfigured { locale } => assert_eq!(locale, "de"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_rejects_fallback_to_unconfigured_locale() {
    let err = EngineConfig::from_json(r#"{"locales": ["en"], "fallbacks": {"pt-BR": "pt"}}"#)
        .unwrap_err();
    match err {
        ConfigError::FallbackTargetNotConfigured { locale, target } => {
            assert_eq!(locale, "pt-BR");
            assert_eq!(target, "pt");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_rejects_malformed_json() {
    let err = EngineConfig::from_json(r#"{"locales": "en"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn options_builder_validates() {
    let options = EngineOptions::builder()
        .locales(vec!["en".to_string(), "ja".to_string()])
        .default_locale("ja".to_string())
        .object_notation(false)
        .build();
    let engine = TranslationEngine::from_options(options).unwrap();
    assert_eq!(engine.locale().as_str(), "ja");
    assert!(!engine.config().object_notation());
}

// =========================================================================
// Locale Resolution
// =========================================================================

#[test]
fn engine_starts_at_default_locale() {
    assert_eq!(sample_engine().locale().as_str(), "en");
}

#[test]
fn set_locale_adopts_configured_locale() {
    let engine = sample_engine();
    let german = engine.set_locale("DE");
    assert_eq!(german.locale().as_str(), "de");
    assert_eq!(engine.locale().as_str(), "en");
}

#[test]
fn set_locale_uses_fallback_map() {
    assert_eq!(sample_engine().set_locale("fr-CA").locale().as_str(), "fr");
}

#[test]
fn set_locale_uses_closest_configured_ancestor() {
    assert_eq!(sample_engine().set_locale("de-CH").locale().as_str(), "de");
}

#[test]
fn set_locale_falls_back_to_default() {
    let engine = sample_engine().set_locale("de");
    assert_eq!(engine.set_locale("ja").locale().as_str(), "en");
    assert_eq!(engine.set_locale("").locale().as_str(), "en");
    assert_eq!(engine.set_locale("!!").locale().as_str(), "en");
}

#[test]
fn set_locale_is_total() {
    let engine = sample_engine();
    for tag in ["en", "fr-CA", "de-AT-1996", "zz", "", "en_US", "x-private", "🦀"] {
        let resolved = engine.set_locale(tag);
        assert!(
            engine.config().is_configured(resolved.locale()),
            "{tag} resolved to {}",
            resolved.locale()
        );
    }
}

#[test]
fn with_locale_resolves_like_set_locale() {
    let engine = sample_engine();
    assert_eq!(engine.with_locale(&locale("fr-CA")).locale().as_str(), "fr");
    assert_eq!(engine.resolve_locale("de-LU").as_str(), "de");
}

// =========================================================================
// Loading
// =========================================================================

#[test]
fn load_translations_returns_new_engine() {
    let empty = engine(r#"{"locales": ["en"]}"#);
    let loaded = empty.load_translations("en", &json!({"a": "A"})).unwrap();
    assert_eq!(loaded.translate("a"), "A");
    assert_eq!(empty.translate("a"), "a");
}

#[test]
fn load_translations_merges_into_existing_catalog() {
    let engine = sample_engine()
        .load_translations("en", &json!({"home": {"title": "Hi"}, "new": "New"}))
        .unwrap();
    assert_eq!(engine.translate("home.title"), "Hi");
    assert_eq!(engine.translate("home.subtitle"), "Glad you're here");
    assert_eq!(engine.translate("new"), "New");
}

#[test]
fn load_translations_normalizes_locale_tag() {
    let engine = engine(r#"{"locales": ["pt-BR"]}"#)
        .load_translations("pt-br", &json!({"ok": "Certo"}))
        .unwrap();
    assert_eq!(engine.translate("ok"), "Certo");
}

#[test]
fn load_translations_rejects_non_object_root() {
    let err = sample_engine()
        .load_translations("en", &json!(["not", "a", "catalog"]))
        .unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
    assert!(err.to_string().contains("JSON object"), "{err}");
}

#[test]
fn load_translations_rejects_unconfigured_locale() {
    let err = sample_engine()
        .load_translations("ja", &json!({"a": "A"}))
        .unwrap_err();
    match err {
        LoadError::UnconfiguredLocale { locale } => assert_eq!(locale, "ja"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_translations_rejects_invalid_locale() {
    let err = sample_engine()
        .load_translations("", &json!({"a": "A"}))
        .unwrap_err();
    assert!(matches!(err, LoadError::InvalidLocale(_)));
}

#[test]
fn load_translations_str_parses_text() {
    let engine = sample_engine()
        .load_translations_str("fr", r#"{"home": {"title": "Bienvenue"}}"#)
        .unwrap()
        .set_locale("fr");
    assert_eq!(engine.translate("home.title"), "Bienvenue");

    let err = sample_engine()
        .load_translations_str("fr", "{oops")
        .unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
}

#[test]
fn load_translations_strict_rejects_unsupported_leaves() {
    let err = sample_engine()
        .load_translations_strict("fr", &json!({"menu": {"count": 3, "open": "Ouvrir"}}))
        .unwrap_err();
    match err {
        LoadError::Parse { locale, source } => {
            assert_eq!(locale, "fr");
            assert!(source.to_string().contains("menu.count"), "{source}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_translations_strict_merges_well_formed_catalog() {
    let engine = sample_engine()
        .load_translations_strict("fr", &json!({"home": {"title": "Accueil"}}))
        .unwrap()
        .set_locale("fr");
    assert_eq!(engine.translate("home.title"), "Accueil");

    let lenient = sample_engine()
        .load_translations("fr", &json!({"home": {"title": "Accueil"}, "count": 3}))
        .unwrap()
        .set_locale("fr");
    assert_eq!(lenient.catalog_size(), 1);
}

#[test]
fn load_catalog_merges_prebuilt_catalog() {
    let catalog = Catalog::empty(locale("fr")).set("home.title", "Accueil");
    let engine = sample_engine().load_catalog(catalog).unwrap().set_locale("fr");
    assert_eq!(engine.translate("home.title"), "Accueil");

    let stray = Catalog::empty(locale("ja")).set("a", "A");
    assert!(matches!(
        sample_engine().load_catalog(stray),
        Err(LoadError::UnconfiguredLocale { .. })
    ));
}

// =========================================================================
// Translation
// =========================================================================

#[test]
fn translate_nested_key() {
    let engine = sample_engine();
    assert_eq!(engine.translate("home.title"), "Welcome");
    assert_eq!(engine.set_locale("de").translate("home.title"), "Willkommen");
}

#[test]
fn translate_falls_back_to_default_locale() {
    let german = sample_engine().set_locale("de");
    assert_eq!(german.translate("home.subtitle"), "Glad you're here");
    assert_eq!(german.translate("only_english"), "English only");
}

#[test]
fn translate_consults_configured_fallback_before_default() {
    let engine = engine(
        r#"{"locales": ["en", "pt", "pt-BR"], "fallbacks": {"pt-BR": "pt"}}"#,
    )
    .load_translations("en", &json!({"color": "color", "bye": "bye"}))
    .unwrap()
    .load_translations("pt", &json!({"color": "cor"}))
    .unwrap()
    .set_locale("pt-BR");
    assert_eq!(engine.locale().as_str(), "pt-BR");
    assert_eq!(engine.translate("color"), "cor");
    assert_eq!(engine.translate("bye"), "bye");
}

#[test]
fn translate_consults_configured_ancestors() {
    let engine = engine(r#"{"locales": ["en", "fr", "fr-CA"]}"#)
        .load_translations("fr", &json!({"car": "voiture"}))
        .unwrap()
        .load_translations("fr-CA", &json!({"car": "char"}))
        .unwrap()
        .load_translations("fr", &json!({"bus": "autobus"}))
        .unwrap()
        .set_locale("fr-CA");
    assert_eq!(engine.translate("car"), "char");
    assert_eq!(engine.translate("bus"), "autobus");
}

#[test]
fn translate_missing_key_returns_key() {
    let engine = sample_engine();
    assert_eq!(engine.translate("does.not.exist"), "does.not.exist");
    assert_eq!(engine.translate(""), "");
}

#[test]
fn translate_nested_level_is_not_a_translation() {
    assert_eq!(sample_engine().translate("home"), "home");
}

#[test]
fn translate_plural_entry_without_count_is_other_form() {
    assert_eq!(sample_engine().translate("cat"), "%s cats");
}

#[test]
fn missing_key_handler_is_consulted() {
    let options = EngineOptions::builder()
        .locales(vec!["en".to_string(), "de".to_string()])
        .missing_key_handler(Arc::new(|locale: &Locale, key: &str| format!("[{locale}] {key}")))
        .build();
    let engine = TranslationEngine::from_options(options)
        .unwrap()
        .set_locale("de");
    assert_eq!(engine.translate("nope"), "[de] nope");
}

#[test]
fn object_notation_off_treats_dots_literally() {
    let engine = engine(r#"{"locales": ["en"], "objectNotation": false}"#)
        .load_translations("en", &json!({"home.title": "Flat", "home": {"title": "Nested"}}))
        .unwrap();
    assert_eq!(engine.translate("home.title"), "Flat");
}

// =========================================================================
// Interpolation
// =========================================================================

#[test]
fn translate_with_named_params() {
    let engine = sample_engine();
    assert_eq!(
        engine.translate_with("greeting", &params! { "name" => "Ada" }),
        "Hello, Ada!"
    );
    assert_eq!(
        engine
            .set_locale("de")
            .translate_with("greeting", &params! { "name" => "Ada" }),
        "Hallo, Ada!"
    );
}

#[test]
fn translate_with_leaves_unknown_names() {
    assert_eq!(
        sample_engine().translate_with("greeting", &params! { "other" => 1 }),
        "Hello, {{ name }}!"
    );
}

#[test]
fn translate_with_replaces_every_occurrence() {
    let engine = engine(r#"{"locales": ["en"]}"#)
        .load_translations("en", &json!({"echo": "{{w}}, {{ w }}, {{w}}!"}))
        .unwrap();
    assert_eq!(engine.translate_with("echo", &params! { "w" => "hey" }), "hey, hey, hey!");
}

#[test]
fn translate_args_positional() {
    let engine = engine(r#"{"locales": ["en"]}"#)
        .load_translations(
            "en",
            &json!({
                "score": "%s scored %d points (100%%)",
                "pair": "%s and %s",
            }),
        )
        .unwrap();
    assert_eq!(
        engine.translate_args("score", &[Value::from("Ada"), Value::from(42.9)]),
        "Ada scored 42 points (100%)"
    );
    assert_eq!(engine.translate_args("pair", &[Value::from("a")]), "a and %s");
    assert_eq!(
        engine.translate_args("pair", &["a".into(), "b".into(), "c".into()]),
        "a and b"
    );
}

#[test]
fn unsigned_values_beyond_i64_stay_positive() {
    assert_eq!(Value::from(42_u64), Value::Number(42));
    assert_eq!(Value::from(u64::MAX), Value::Float(u64::MAX as f64));
    assert!(!Value::from(u64::MAX).to_string().starts_with('-'));
    assert_eq!(Value::from(7_usize), Value::Number(7));

    let engine = engine(r#"{"locales": ["en"]}"#)
        .load_translations("en", &json!({"big": "%s items"}))
        .unwrap();
    assert_eq!(
        engine.translate_args("big", &[Value::from(u64::MAX)]),
        "18446744073709552000 items"
    );
}

#[test]
fn translate_with_leaves_percent_placeholders() {
    let engine = engine(r#"{"locales": ["en"]}"#)
        .load_translations("en", &json!({"mixed": "{{name}}: %s (%%)"}))
        .unwrap();
    assert_eq!(
        engine.translate_with("mixed", &params! { "name" => "x" }),
        "x: %s (%%)"
    );
}

// =========================================================================
// Plurals
// =========================================================================

#[test]
fn translate_plural_uses_plural_entry() {
    let engine = sample_engine();
    assert_eq!(engine.translate_plural("cat", "cats", 1), "1 cat");
    assert_eq!(engine.translate_plural("cat", "cats", 3), "3 cats");
    assert_eq!(engine.translate_plural("cat", "cats", 0), "0 cats");
}

#[test]
fn translate_plural_falls_back_to_singular_and_plural_keys() {
    let engine = sample_engine();
    assert_eq!(engine.translate_plural("apple", "apples", 1), "an apple");
    assert_eq!(engine.translate_plural("apple", "apples", 5), "5 apples");
}

#[test]
fn translate_plural_untranslated_keys_are_used_verbatim() {
    let engine = sample_engine();
    assert_eq!(
        engine.translate_plural("{{count}} item", "{{count}} items", 1),
        "1 item"
    );
    assert_eq!(
        engine.translate_plural("{{count}} item", "{{count}} items", 7),
        "7 items"
    );
}

#[test]
fn translate_plural_untranslated_positional_keys() {
    let engine = sample_engine();
    assert_eq!(engine.translate_plural("%s dog", "%s dogs", 1), "1 dog");
    assert_eq!(engine.translate_plural("%s dog", "%s dogs", 3), "3 dogs");
}

#[test]
fn translate_plural_selects_by_catalog_language() {
    let engine = engine(r#"{"locales": ["en", "ru"]}"#)
        .load_translations(
            "ru",
            &json!({"file": {"one": "%d файл", "few": "%d файла", "many": "%d файлов", "other": "%d файла"}}),
        )
        .unwrap()
        .set_locale("ru");
    assert_eq!(engine.translate_plural("file", "files", 1), "1 файл");
    assert_eq!(engine.translate_plural("file", "files", 3), "3 файла");
    assert_eq!(engine.translate_plural("file", "files", 5), "5 файлов");
    assert_eq!(engine.translate_plural("file", "files", 21), "21 файл");
}

#[test]
fn translate_plural_string_count_keeps_fraction_digits() {
    let engine = sample_engine();
    assert_eq!(engine.translate_plural("cat", "cats", "1"), "1 cat");
    assert_eq!(engine.translate_plural("cat", "cats", "1.0"), "1.0 cats");
}

#[test]
fn translate_plural_missing_category_uses_other() {
    let engine = engine(r#"{"locales": ["ar"]}"#)
        .load_translations("ar", &json!({"book": {"one": "كتاب", "other": "{{count}} كتب"}}))
        .unwrap();
    assert_eq!(engine.translate_plural("book", "books", 2), "2 كتب");
}

// =========================================================================
// Inspection
// =========================================================================

#[test]
fn has_key_checks_current_locale_only() {
    let engine = sample_engine();
    assert!(engine.has_key("home.title"));
    assert!(!engine.has_key("home"));
    let german = engine.set_locale("de");
    assert!(german.has_key("home.title"));
    assert!(!german.has_key("only_english"));
}

#[test]
fn catalog_size_counts_current_locale_entries() {
    let engine = sample_engine();
    assert_eq!(engine.catalog_size(), 7);
    assert_eq!(engine.set_locale("de").catalog_size(), 2);
    assert_eq!(engine.set_locale("fr").catalog_size(), 0);
}

#[test]
fn export_translations_round_trips() {
    let engine = sample_engine();
    let exported = engine.export_translations(&locale("de")).unwrap();
    assert_eq!(
        exported,
        json!({"home": {"title": "Willkommen"}, "greeting": "Hallo, {{name}}!"})
    );
    assert_eq!(engine.export_translations(&locale("ja")), None);
    assert_eq!(engine.catalog(&locale("de")).unwrap().len(), 2);
}

// =========================================================================
// Validation
// =========================================================================

#[test]
fn validate_reports_missing_and_unknown_keys() {
    let engine = engine(r#"{"locales": ["en", "de"]}"#)
        .load_translations("en", &json!({"title": "Title", "menu": {"open": "Open"}}))
        .unwrap()
        .load_translations("de", &json!({"title": "Titel", "menu": {"opn": "Öffnen"}}))
        .unwrap();
    let warnings = engine.validate_translations(&locale("en"), &locale("de"));
    assert_eq!(
        warnings,
        [
            LoadWarning::MissingKey {
                key: "menu.open".to_string(),
                locale: "de".to_string(),
            },
            LoadWarning::UnknownKey {
                key: "menu.opn".to_string(),
                locale: "de".to_string(),
                suggestions: vec!["menu.open".to_string()],
            },
        ]
    );
}

#[test]
fn validate_reports_missing_plural_categories() {
    let engine = engine(r#"{"locales": ["en", "ru"]}"#)
        .load_translations("en", &json!({"file": {"one": "file", "other": "files"}}))
        .unwrap()
        .load_translations("ru", &json!({"file": {"one": "файл", "other": "файла"}}))
        .unwrap();
    let warnings = engine.validate_translations(&locale("en"), &locale("ru"));
    let missing: Vec<PluralCategory> = warnings
        .iter()
        .filter_map(|warning| match warning {
            LoadWarning::MissingPluralCategory { category, .. } => Some(*category),
            _ => None,
        })
        .collect();
    assert_eq!(missing, [PluralCategory::Few, PluralCategory::Many]);
}

#[test]
fn validate_unconfigured_locale_is_empty() {
    let engine = sample_engine();
    assert!(engine.validate_translations(&locale("en"), &locale("ja")).is_empty());
}

#[test]
fn load_warning_display() {
    let warning = LoadWarning::UnknownKey {
        key: "tilte".to_string(),
        locale: "de".to_string(),
        suggestions: vec!["title".to_string()],
    };
    assert_eq!(
        warning.to_string(),
        "unknown key 'tilte' in 'de'; did you mean: title?"
    );
}

#[test]
fn compute_suggestions_finds_similar_keys() {
    let available = vec![
        "one".to_string(),
        "other".to_string(),
        "few".to_string(),
        "many".to_string(),
    ];

    assert_eq!(compute_suggestions("on", &available), vec!["one"]);

    let suggestions = compute_suggestions("oter", &available);
    assert_eq!(suggestions[0], "other");

    assert!(compute_suggestions("xyz", &available).is_empty());
}

#[test]
fn compute_suggestions_limits_to_three() {
    let available: Vec<String> = (0..10).map(|i| format!("item{i}")).collect();
    assert_eq!(compute_suggestions("item", &available).len(), 3);
}

// =========================================================================
// Sharing
// =========================================================================

#[test]
fn engine_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TranslationEngine>();
    assert_send_sync::<SharedEngine>();
    assert_send_sync::<Catalog>();
    assert_send_sync::<EngineConfig>();
}

#[test]
fn shared_engine_snapshots_are_stable() {
    let shared = SharedEngine::new(sample_engine());
    let before = shared.snapshot();

    shared
        .try_update(|engine| engine.load_translations("en", &json!({"home": {"title": "Hi"}})))
        .unwrap();

    assert_eq!(before.translate("home.title"), "Welcome");
    assert_eq!(shared.snapshot().translate("home.title"), "Hi");
}

#[test]
fn shared_engine_failed_update_keeps_current() {
    let shared = SharedEngine::new(sample_engine());
    let result = shared.try_update(|engine| engine.load_translations("ja", &json!({})));
    assert!(result.is_err());
    assert_eq!(shared.snapshot().translate("home.title"), "Welcome");
}

#[test]
fn shared_engine_across_threads() {
    let shared = Arc::new(SharedEngine::new(sample_engine()));
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                let title = shared.snapshot().translate("home.title");
                assert!(title == "Welcome" || title == "Willkommen", "{title}");
            })
        })
        .collect();
    shared.update(|engine| engine.set_locale("de"));
    for reader in readers {
        reader.join().unwrap();
    }
    let replaced = shared.replace(sample_engine());
    assert_eq!(replaced.locale().as_str(), "de");
}
