use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::plural::PluralCategory;

/// Child entries of a nested catalog node, keyed by path segment.
pub type Translations = BTreeMap<String, TranslationValue>;

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationValue {
    /// A plain string.
    Simple(String),
    /// Plural forms keyed by CLDR category.
    Plural(PluralForms),
    /// A further level of nesting.
    Nested(Translations),
}

impl TranslationValue {
    /// The string this entry renders as without a count: the text of a
    /// simple entry or the `other` form of a plural one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TranslationValue::Simple(text) => Some(text),
            TranslationValue::Plural(forms) => Some(&forms.other),
            TranslationValue::Nested(_) => None,
        }
    }

    /// The plural forms, if this is a plural entry.
    pub fn as_plural(&self) -> Option<&PluralForms> {
        match self {
            TranslationValue::Plural(forms) => Some(forms),
            _ => None,
        }
    }
}

impl From<&str> for TranslationValue {
    fn from(text: &str) -> Self {
        TranslationValue::Simple(text.to_string())
    }
}

impl From<String> for TranslationValue {
    fn from(text: String) -> Self {
        TranslationValue::Simple(text)
    }
}

impl From<PluralForms> for TranslationValue {
    fn from(forms: PluralForms) -> Self {
        TranslationValue::Plural(forms)
    }
}

/// Plural forms of one message. `other` is mandatory; every other category
/// falls back to it.
///
/// # Example
///
/// ```
/// use glossa::PluralForms;
/// use glossa::plural::PluralCategory;
///
/// let forms = PluralForms::new("%s files").with(PluralCategory::One, "%s file");
/// assert_eq!(forms.select(PluralCategory::One), "%s file");
/// assert_eq!(forms.select(PluralCategory::Few), "%s files");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluralForms {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zero: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub few: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub many: Option<String>,
    pub other: String,
}

impl PluralForms {
    /// Forms with only the mandatory `other` text.
    pub fn new(other: impl Into<String>) -> Self {
        PluralForms {
            zero: None,
            one: None,
            two: None,
            few: None,
            many: None,
            other: other.into(),
        }
    }

    /// Returns these forms with `category` set to `text`.
    pub fn with(mut self, category: PluralCategory, text: impl Into<String>) -> Self {
        let text = text.into();
        match category {
            PluralCategory::Zero => self.zero = Some(text),
            PluralCategory::One => self.one = Some(text),
            PluralCategory::Two => self.two = Some(text),
            PluralCategory::Few => self.few = Some(text),
            PluralCategory::Many => self.many = Some(text),
            PluralCategory::Other => self.other = text,
        }
        self
    }

    /// The form for `category`, if present.
    pub fn get(&self, category: PluralCategory) -> Option<&str> {
        match category {
            PluralCategory::Zero => self.zero.as_deref(),
            PluralCategory::One => self.one.as_deref(),
            PluralCategory::Two => self.two.as_deref(),
            PluralCategory::Few => self.few.as_deref(),
            PluralCategory::Many => self.many.as_deref(),
            PluralCategory::Other => Some(&self.other),
        }
    }

    /// The form for `category`, falling back to `other`.
    pub fn select(&self, category: PluralCategory) -> &str {
        self.get(category).unwrap_or(&self.other)
    }

    /// Categories with a form present, in CLDR order.
    pub fn categories(&self) -> Vec<PluralCategory> {
        PluralCategory::ALL
            .into_iter()
            .filter(|category| self.get(*category).is_some())
            .collect()
    }
}
