//! Error and warning types for loading translations.

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

use crate::catalog::CatalogParseError;
use crate::plural::PluralCategory;
use crate::types::InvalidLocale;

/// Errors that occur during translation loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The locale tag does not parse.
    #[error("cannot load translations: {0}")]
    InvalidLocale(#[from] InvalidLocale),

    /// The locale parses but the engine is not configured to serve it.
    #[error("cannot load translations for '{locale}': locale is not configured")]
    UnconfiguredLocale { locale: String },

    /// The catalog document is malformed.
    #[error("cannot load translations for '{locale}': {source}")]
    Parse {
        locale: String,
        #[source]
        source: CatalogParseError,
    },
}

/// A non-fatal problem found by comparing two locales' catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// The source locale has a key the target locale lacks.
    MissingKey { key: String, locale: String },

    /// The target locale has a key the source locale does not define.
    UnknownKey {
        key: String,
        locale: String,
        suggestions: Vec<String>,
    },

    /// A plural entry lacks a form the target language distinguishes.
    MissingPluralCategory {
        key: String,
        locale: String,
        category: PluralCategory,
    },
}

impl Display for LoadWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            LoadWarning::MissingKey { key, locale } => {
                write!(f, "key '{key}' has no translation in '{locale}'")
            }
            LoadWarning::UnknownKey {
                key,
                locale,
                suggestions,
            } => {
                write!(f, "unknown key '{key}' in '{locale}'")?;
                if !suggestions.is_empty() {
                    write!(f, "; did you mean: {}?", suggestions.join(", "))?;
                }
                Ok(())
            }
            LoadWarning::MissingPluralCategory {
                key,
                locale,
                category,
            } => {
                write!(f, "plural entry '{key}' in '{locale}' has no '{category}' form")
            }
        }
    }
}
