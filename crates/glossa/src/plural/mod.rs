//! CLDR plural category resolution.
//!
//! Different languages have different plural rules. English has "one" and
//! "other", Russian has "one", "few", "many" and "other", and Arabic uses all
//! six categories.
//!
//! Two evaluators implement [`PluralEvaluator`]: [`ReferenceRules`], a pure
//! table that always answers, and (with the `icu` feature) [`IcuRules`], an
//! ICU4X-backed evaluator that answers the inputs it supports. [`select`]
//! consults the ICU evaluator first and falls back to the reference table.

mod category;
#[cfg(feature = "icu")]
mod icu;
mod operands;
mod rules;

pub use category::{ParsePluralCategoryError, PluralCategory};
#[cfg(feature = "icu")]
pub use icu::{IcuRules, SUPPORTED_LANGUAGES};
pub use operands::{ParseOperandsError, PluralOperands, get_operands};
pub use rules::{PluralFamily, ReferenceRules};

use crate::types::Locale;

/// A source of plural categories.
///
/// Returning `None` means the evaluator does not cover the input; callers
/// then defer to [`ReferenceRules`]. Implementations must be stateless from
/// the caller's point of view and agree with the reference table on every
/// input they do answer.
pub trait PluralEvaluator: Send + Sync {
    /// Select a category for `operands` in the bare `language` code.
    fn evaluate(&self, language: &str, operands: &PluralOperands) -> Option<PluralCategory>;
}

/// The accelerated evaluator compiled into this build, if any.
pub fn accelerated() -> Option<&'static dyn PluralEvaluator> {
    #[cfg(feature = "icu")]
    {
        Some(&IcuRules as &dyn PluralEvaluator)
    }
    #[cfg(not(feature = "icu"))]
    {
        None
    }
}

/// Get the CLDR plural category of `n` in `locale`.
///
/// Non-finite numbers are `Other`. Languages without rules are `Other`.
///
/// # Examples
///
/// ```
/// use glossa::Locale;
/// use glossa::plural::{PluralCategory, select};
///
/// let en = Locale::parse("en-US").unwrap();
/// assert_eq!(select(1.0, &en), PluralCategory::One);
/// assert_eq!(select(2.0, &en), PluralCategory::Other);
///
/// let ru = Locale::parse("ru").unwrap();
/// assert_eq!(select(2.0, &ru), PluralCategory::Few);
/// assert_eq!(select(5.0, &ru), PluralCategory::Many);
/// ```
pub fn select(n: f64, locale: &Locale) -> PluralCategory {
    select_with(accelerated(), n, locale)
}

/// [`select`] with an explicit accelerated evaluator.
pub fn select_with(
    accelerated: Option<&dyn PluralEvaluator>,
    n: f64,
    locale: &Locale,
) -> PluralCategory {
    if !n.is_finite() {
        return PluralCategory::Other;
    }
    select_operands(accelerated, &get_operands(n), locale.language())
}

/// Select from precomputed operands, e.g. ones parsed from a decimal string.
pub fn select_operands(
    accelerated: Option<&dyn PluralEvaluator>,
    operands: &PluralOperands,
    language: &str,
) -> PluralCategory {
    accelerated
        .and_then(|evaluator| evaluator.evaluate(language, operands))
        .unwrap_or_else(|| ReferenceRules.category(language, operands))
}
