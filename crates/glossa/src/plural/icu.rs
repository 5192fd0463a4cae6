//! ICU4X-backed plural evaluator.
//!
//! `PluralRules` instances are cached per thread per language to avoid
//! rebuilding them on every call. The cache is initialized lazily on first
//! access within each thread.
//!
//! Only integral operands are answered here: the evaluator declines
//! fractional input and languages outside [`SUPPORTED_LANGUAGES`], leaving
//! those to the reference rules.

use std::cell::RefCell;

use icu_locale_core::locale;
use icu_plurals::{PluralCategory as IcuCategory, PluralRuleType, PluralRules};

use super::category::PluralCategory;
use super::operands::PluralOperands;
use super::PluralEvaluator;

/// Languages this evaluator answers for. Every entry also has a family in
/// the reference table.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "ar", "be", "ca", "cs", "de", "en", "es", "et", "fi", "fr", "id", "it", "ja", "ko", "ms", "nb",
    "nl", "pl", "pt", "ru", "sk", "sv", "th", "uk", "vi", "zh",
];

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by language code.
    static PLURAL_RULES_CACHE: RefCell<Vec<(&'static str, PluralRules)>> = const { RefCell::new(Vec::new()) };
}

/// Plural evaluator backed by `icu_plurals` compiled CLDR data.
#[derive(Debug, Clone, Copy, Default)]
pub struct IcuRules;

/// Map a language code to its static entry in the supported list.
fn supported(language: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|&&code| code == language)
        .copied()
}

/// Build `PluralRules` for a supported language code.
fn build_rules(language: &'static str) -> Option<PluralRules> {
    let loc = match language {
        "ar" => locale!("ar"),
        "be" => locale!("be"),
        "ca" => locale!("ca"),
        "cs" => locale!("cs"),
        "de" => locale!("de"),
        "en" => locale!("en"),
        "es" => locale!("es"),
        "et" => locale!("et"),
        "fi" => locale!("fi"),
        "fr" => locale!("fr"),
        "id" => locale!("id"),
        "it" => locale!("it"),
        "ja" => locale!("ja"),
        "ko" => locale!("ko"),
        "ms" => locale!("ms"),
        "nb" => locale!("nb"),
        "nl" => locale!("nl"),
        "pl" => locale!("pl"),
        "pt" => locale!("pt"),
        "ru" => locale!("ru"),
        "sk" => locale!("sk"),
        "sv" => locale!("sv"),
        "th" => locale!("th"),
        "uk" => locale!("uk"),
        "vi" => locale!("vi"),
        "zh" => locale!("zh"),
        _ => return None,
    };
    match PluralRules::try_new(loc.into(), PluralRuleType::Cardinal.into()) {
        Ok(rules) => Some(rules),
        Err(error) => {
            tracing::warn!(language, %error, "ICU plural rules unavailable");
            None
        }
    }
}

fn from_icu(category: IcuCategory) -> PluralCategory {
    match category {
        IcuCategory::Zero => PluralCategory::Zero,
        IcuCategory::One => PluralCategory::One,
        IcuCategory::Two => PluralCategory::Two,
        IcuCategory::Few => PluralCategory::Few,
        IcuCategory::Many => PluralCategory::Many,
        IcuCategory::Other => PluralCategory::Other,
    }
}

impl PluralEvaluator for IcuRules {
    fn evaluate(&self, language: &str, operands: &PluralOperands) -> Option<PluralCategory> {
        if !operands.is_integer() || !operands.n.is_finite() {
            return None;
        }
        let language = supported(language)?;
        let n = i64::try_from(operands.i).ok()?;
        PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
            if let Some((_, rules)) = cache.iter().find(|(code, _)| *code == language) {
                return Some(from_icu(rules.category_for(n)));
            }
            let rules = build_rules(language)?;
            let category = from_icu(rules.category_for(n));
            cache.push((language, rules));
            Some(category)
        })
    }
}
