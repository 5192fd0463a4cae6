//! Integration tests for locale identifiers.

use glossa::{InvalidLocale, Locale};
use proptest::prelude::*;

fn tags(locales: &[Locale]) -> Vec<&str> {
    locales.iter().map(Locale::as_str).collect()
}

// =========================================================================
// Parsing and Normalization
// =========================================================================

#[test]
fn parse_bare_language() {
    let locale = Locale::parse("en").unwrap();
    assert_eq!(locale.language(), "en");
    assert_eq!(locale.script(), None);
    assert_eq!(locale.region(), None);
    assert!(locale.variants().is_empty());
}

#[test]
fn parse_normalizes_case() {
    let locale = Locale::parse("EN-us").unwrap();
    assert_eq!(locale.as_str(), "en-US");
    assert_eq!(locale.region(), Some("US"));
}

#[test]
fn parse_script_and_region() {
    let locale = Locale::parse("sr-LATN-rs").unwrap();
    assert_eq!(locale.language(), "sr");
    assert_eq!(locale.script(), Some("Latn"));
    assert_eq!(locale.region(), Some("RS"));
    assert_eq!(locale.to_string(), "sr-Latn-RS");
}

#[test]
fn parse_numeric_region() {
    let locale = Locale::parse("es-419").unwrap();
    assert_eq!(locale.region(), Some("419"));
}

#[test]
fn parse_variants() {
    let locale = Locale::parse("de-DE-1996").unwrap();
    assert_eq!(locale.region(), Some("DE"));
    assert_eq!(locale.variants(), ["1996"]);
    assert_eq!(locale.as_str(), "de-DE-1996");
}

#[test]
fn canonicalize_matches_as_str() {
    let locale = Locale::parse("zh-hant-tw").unwrap();
    assert_eq!(locale.canonicalize(), "zh-Hant-TW");
    assert_eq!(locale.canonicalize(), locale.as_str());
}

#[test]
fn equal_after_normalization() {
    assert_eq!(Locale::parse("pt-br").unwrap(), Locale::parse("PT-BR").unwrap());
}

// =========================================================================
// Rejection
// =========================================================================

#[test]
fn parse_rejects_empty() {
    assert_eq!(Locale::parse(""), Err(InvalidLocale::Empty));
}

#[test]
fn parse_rejects_bad_language() {
    assert!(matches!(
        Locale::parse("english"),
        Err(InvalidLocale::Language { .. })
    ));
    assert!(matches!(
        Locale::parse("e1"),
        Err(InvalidLocale::Language { .. })
    ));
    assert!(matches!(
        Locale::parse("en_US"),
        Err(InvalidLocale::Language { .. })
    ));
}

#[test]
fn parse_rejects_empty_segment() {
    let err = Locale::parse("en--US").unwrap_err();
    assert_eq!(
        err,
        InvalidLocale::Subtag {
            tag: "en--US".to_string(),
            subtag: String::new(),
        }
    );
}

#[test]
fn parse_rejects_overlong_variant() {
    assert!(matches!(
        Locale::parse("en-US-waytoolongvariant"),
        Err(InvalidLocale::Subtag { .. })
    ));
}

#[test]
fn invalid_locale_message_names_tag() {
    let err = Locale::parse("x").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("'x'"), "{message}");
}

// =========================================================================
// Parents and Fallback Chains
// =========================================================================

#[test]
fn parent_drops_most_specific_component() {
    let locale = Locale::parse("zh-Hant-TW").unwrap();
    let parent = locale.parent().unwrap();
    assert_eq!(parent.as_str(), "zh-Hant");
    assert_eq!(parent.parent().unwrap().as_str(), "zh");
    assert_eq!(parent.parent().unwrap().parent(), None);
}

#[test]
fn parent_drops_variants_first() {
    let locale = Locale::parse("ca-ES-valencia").unwrap();
    assert_eq!(locale.parent().unwrap().as_str(), "ca-ES");
}

#[test]
fn fallback_chain_ends_at_language() {
    let locale = Locale::parse("en-Latn-GB-oxendict").unwrap();
    assert_eq!(
        tags(&locale.fallback_chain()),
        ["en-Latn-GB-oxendict", "en-Latn-GB", "en-Latn", "en"]
    );
}

#[test]
fn fallback_chain_of_language_is_itself() {
    let locale = Locale::parse("fr").unwrap();
    assert_eq!(tags(&locale.fallback_chain()), ["fr"]);
}

#[test]
fn base_is_bare_language() {
    assert_eq!(Locale::parse("fr-CA").unwrap().base().as_str(), "fr");
}

// =========================================================================
// Conversions
// =========================================================================

#[test]
fn from_str_and_try_from() {
    let parsed: Locale = "de-at".parse().unwrap();
    let converted = Locale::try_from("de-AT").unwrap();
    assert_eq!(parsed, converted);
    assert_eq!(String::from(parsed), "de-AT");
}

#[test]
fn serde_uses_canonical_string() {
    let locale: Locale = serde_json::from_str(r#""en-gb""#).unwrap();
    assert_eq!(locale.as_str(), "en-GB");
    assert_eq!(serde_json::to_string(&locale).unwrap(), r#""en-GB""#);
    assert!(serde_json::from_str::<Locale>(r#""not a tag""#).is_err());
}

// =========================================================================
// Properties
// =========================================================================

proptest! {
    #[test]
    fn canonical_form_is_a_fixed_point(
        language in "[a-zA-Z]{2,3}",
        region in proptest::option::of("[a-zA-Z]{2}"),
    ) {
        let tag = match &region {
            Some(region) => format!("{language}-{region}"),
            None => language.clone(),
        };
        let locale = Locale::parse(&tag).unwrap();
        let reparsed = Locale::parse(locale.as_str()).unwrap();
        prop_assert_eq!(reparsed.as_str(), locale.as_str());
        prop_assert_eq!(locale.language(), language.to_ascii_lowercase());
    }

    #[test]
    fn fallback_chain_shrinks_by_one_component(tag in "[a-z]{2}(-[A-Z][a-z]{3})?(-[A-Z]{2})?") {
        let locale = Locale::parse(&tag).unwrap();
        let chain = locale.fallback_chain();
        prop_assert_eq!(&chain[0], &locale);
        prop_assert_eq!(chain.last().unwrap().as_str(), locale.language());
        for pair in chain.windows(2) {
            let parent = pair[0].parent();
            prop_assert_eq!(parent.as_ref(), Some(&pair[1]));
        }
    }
}
