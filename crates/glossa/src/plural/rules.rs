//! Reference plural rules, one pure function per language family.
//!
//! Rules follow the CLDR cardinal definitions. Each family is a closed enum
//! arm; languages without a family land on [`PluralFamily::Unsupported`],
//! which always answers `Other`.

use super::category::PluralCategory;
use super::operands::PluralOperands;
use super::PluralEvaluator;

/// Languages grouped by shared cardinal plural rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralFamily {
    /// one: `i = 1 and v = 0` (en, de, nl, sv, nb, fi, et).
    Germanic,
    /// one: `i = 0,1`; many: exact non-zero millions (fr, pt).
    FrenchZeroOne,
    /// one: `i = 1 and v = 0`; many: exact non-zero millions (es, it, ca).
    Romance,
    /// one/few/many from `i % 10` and `i % 100` (ru, uk, be).
    EastSlavic,
    /// one: `i = 1`; few/many from `i % 10` and `i % 100` (pl).
    Polish,
    /// one: `i = 1`; few: `i = 2..4`; many: fractions (cs, sk).
    Czech,
    /// All six categories from `n` and `n % 100` (ar).
    Arabic,
    /// No plural distinction (ja, zh, ko, vi, th, id, ms).
    NoPlural,
    /// Languages without rules. Everything is `Other`.
    Unsupported,
}

impl PluralFamily {
    /// Dispatch a bare language code to its family.
    pub fn for_language(language: &str) -> PluralFamily {
        match language {
            "en" | "de" | "nl" | "sv" | "nb" | "fi" | "et" => PluralFamily::Germanic,
            "fr" | "pt" => PluralFamily::FrenchZeroOne,
            "es" | "it" | "ca" => PluralFamily::Romance,
            "ru" | "uk" | "be" => PluralFamily::EastSlavic,
            "pl" => PluralFamily::Polish,
            "cs" | "sk" => PluralFamily::Czech,
            "ar" => PluralFamily::Arabic,
            "ja" | "zh" | "ko" | "vi" | "th" | "id" | "ms" => PluralFamily::NoPlural,
            _ => PluralFamily::Unsupported,
        }
    }

    /// Select the category for a set of operands.
    pub fn category(self, ops: &PluralOperands) -> PluralCategory {
        match self {
            PluralFamily::Germanic => germanic(ops),
            PluralFamily::FrenchZeroOne => french(ops),
            PluralFamily::Romance => romance(ops),
            PluralFamily::EastSlavic => east_slavic(ops),
            PluralFamily::Polish => polish(ops),
            PluralFamily::Czech => czech(ops),
            PluralFamily::Arabic => arabic(ops),
            PluralFamily::NoPlural | PluralFamily::Unsupported => PluralCategory::Other,
        }
    }

    /// The categories this family can produce, in CLDR order.
    pub fn categories(self) -> &'static [PluralCategory] {
        use PluralCategory::{Few, Many, One, Other, Two, Zero};
        match self {
            PluralFamily::Germanic => &[One, Other],
            PluralFamily::FrenchZeroOne | PluralFamily::Romance => &[One, Many, Other],
            PluralFamily::EastSlavic | PluralFamily::Polish | PluralFamily::Czech => {
                &[One, Few, Many, Other]
            }
            PluralFamily::Arabic => &[Zero, One, Two, Few, Many, Other],
            PluralFamily::NoPlural | PluralFamily::Unsupported => &[Other],
        }
    }
}

/// The pure rule table. Always answers, so it doubles as the oracle for
/// accelerated evaluators.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceRules;

impl ReferenceRules {
    /// Select the category for `ops` in `language`.
    pub fn category(self, language: &str, ops: &PluralOperands) -> PluralCategory {
        PluralFamily::for_language(language).category(ops)
    }
}

impl PluralEvaluator for ReferenceRules {
    fn evaluate(&self, language: &str, operands: &PluralOperands) -> Option<PluralCategory> {
        Some(self.category(language, operands))
    }
}

fn germanic(ops: &PluralOperands) -> PluralCategory {
    if ops.i == 1 && ops.v == 0 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

fn is_exact_million(ops: &PluralOperands) -> bool {
    ops.v == 0 && ops.i != 0 && ops.i % 1_000_000 == 0
}

fn french(ops: &PluralOperands) -> PluralCategory {
    if ops.i <= 1 {
        PluralCategory::One
    } else if is_exact_million(ops) {
        PluralCategory::Many
    } else {
        PluralCategory::Other
    }
}

fn romance(ops: &PluralOperands) -> PluralCategory {
    if ops.i == 1 && ops.v == 0 {
        PluralCategory::One
    } else if is_exact_million(ops) {
        PluralCategory::Many
    } else {
        PluralCategory::Other
    }
}

fn east_slavic(ops: &PluralOperands) -> PluralCategory {
    if ops.v != 0 {
        return PluralCategory::Other;
    }
    let (mod10, mod100) = (ops.i % 10, ops.i % 100);
    if mod10 == 1 && mod100 != 11 {
        PluralCategory::One
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        PluralCategory::Few
    } else {
        PluralCategory::Many
    }
}

fn polish(ops: &PluralOperands) -> PluralCategory {
    if ops.v != 0 {
        return PluralCategory::Other;
    }
    let (mod10, mod100) = (ops.i % 10, ops.i % 100);
    if ops.i == 1 {
        PluralCategory::One
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        PluralCategory::Few
    } else {
        PluralCategory::Many
    }
}

fn czech(ops: &PluralOperands) -> PluralCategory {
    if ops.v != 0 {
        PluralCategory::Many
    } else if ops.i == 1 {
        PluralCategory::One
    } else if (2..=4).contains(&ops.i) {
        PluralCategory::Few
    } else {
        PluralCategory::Other
    }
}

fn arabic(ops: &PluralOperands) -> PluralCategory {
    // Rules on `n` only match when the number has no fraction.
    let whole = (ops.n.fract() == 0.0).then_some(ops.i);
    match whole {
        Some(0) => PluralCategory::Zero,
        Some(1) => PluralCategory::One,
        Some(2) => PluralCategory::Two,
        Some(n) if (3..=10).contains(&(n % 100)) => PluralCategory::Few,
        Some(n) if (11..=99).contains(&(n % 100)) => PluralCategory::Many,
        _ => PluralCategory::Other,
    }
}
