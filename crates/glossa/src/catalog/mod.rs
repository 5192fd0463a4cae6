//! Immutable per-locale translation catalogs.
//!
//! # Invariants
//!
//! 1. **Persistent values**: `set` and `merge` return a new catalog; the
//!    receiver and every earlier clone keep their contents.
//!
//! 2. **Plural entries are complete**: every [`PluralForms`] carries an
//!    `other` form, so projecting any category always yields text.
//!
//! 3. **Lookups are structural**: `get` walks one nesting level per dot
//!    segment and stops at the first non-nested intermediate.

mod error;
mod json;
mod value;

use std::sync::Arc;

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

pub use error::CatalogParseError;
pub use value::{PluralForms, TranslationValue, Translations};

use crate::types::Locale;
use json::ParseMode;

/// Bookkeeping carried alongside a catalog's entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct CatalogMetadata {
    /// Revision counter, bumped by every `set` and `merge`.
    #[builder(default)]
    #[serde(default)]
    pub version: u64,

    /// When the catalog content last changed, as reported by the caller.
    pub last_modified: Option<DateTime<Utc>>,

    /// Free-form origin label such as a file name or bundle id.
    pub source: Option<String>,
}

/// The translations for one locale.
///
/// # Example
///
/// ```
/// use glossa::{Catalog, Locale};
///
/// let en = Locale::parse("en").unwrap();
/// let base = Catalog::empty(en.clone()).set("home.title", "Welcome");
/// let overlay = Catalog::empty(en).set("home.subtitle", "Glad you're here");
///
/// let merged = base.merge(&overlay);
/// assert_eq!(merged.get_string("home.title"), Some("Welcome"));
/// assert_eq!(merged.get_string("home.subtitle"), Some("Glad you're here"));
/// assert_eq!(base.get_string("home.subtitle"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    locale: Locale,
    translations: Arc<Translations>,
    metadata: CatalogMetadata,
}

impl Catalog {
    /// A catalog with no entries.
    pub fn empty(locale: Locale) -> Catalog {
        Catalog {
            locale,
            translations: Arc::new(Translations::new()),
            metadata: CatalogMetadata::default(),
        }
    }

    /// Import a catalog, dropping leaves that are neither strings nor objects.
    pub fn from_json(locale: Locale, json: &Json) -> Result<Catalog, CatalogParseError> {
        Self::from_json_with(locale, json, ParseMode::Lenient)
    }

    /// Import a catalog, rejecting leaves that are neither strings nor objects.
    pub fn from_json_strict(locale: Locale, json: &Json) -> Result<Catalog, CatalogParseError> {
        Self::from_json_with(locale, json, ParseMode::Strict)
    }

    /// Parse JSON text, then import it as [`Catalog::from_json`] does.
    pub fn from_json_str(locale: Locale, text: &str) -> Result<Catalog, CatalogParseError> {
        let json: Json = serde_json::from_str(text)?;
        Self::from_json(locale, &json)
    }

    fn from_json_with(
        locale: Locale,
        json: &Json,
        mode: ParseMode,
    ) -> Result<Catalog, CatalogParseError> {
        let translations = json::parse_root(json, mode)?;
        Ok(Catalog {
            locale,
            translations: Arc::new(translations),
            metadata: CatalogMetadata::default(),
        })
    }

    /// Export to the JSON shape accepted by [`Catalog::from_json`].
    ///
    /// The export is not lossless for nested levels that hold a text entry
    /// named `other`: their JSON object reads back as plural forms, and the
    /// siblings that are not category names are dropped. Such levels are
    /// logged as warnings and listed by [`Catalog::plural_shaped_levels`].
    pub fn to_json(&self) -> Json {
        json::to_json(&self.translations)
    }

    /// Dotted paths of nested levels that [`Catalog::to_json`] cannot export
    /// faithfully because they hold a text entry named `other`.
    ///
    /// ```
    /// use glossa::{Catalog, Locale};
    ///
    /// let catalog = Catalog::empty(Locale::parse("en").unwrap())
    ///     .set("menu.other", "Other")
    ///     .set("menu.open", "Open");
    /// assert_eq!(catalog.plural_shaped_levels(), ["menu"]);
    /// ```
    pub fn plural_shaped_levels(&self) -> Vec<String> {
        json::plural_shaped_levels(&self.translations)
    }

    /// The locale these translations are for.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Catalog bookkeeping.
    pub fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }

    /// The root of the translation tree.
    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    /// Returns this catalog with its metadata replaced.
    pub fn with_metadata(&self, metadata: CatalogMetadata) -> Catalog {
        Catalog {
            locale: self.locale.clone(),
            translations: Arc::clone(&self.translations),
            metadata,
        }
    }

    /// Look up a dot-separated key.
    pub fn get(&self, key: &str) -> Option<&TranslationValue> {
        self.get_path(key.split('.'))
    }

    /// Look up an explicit sequence of path segments.
    pub fn get_path<'k>(
        &self,
        segments: impl IntoIterator<Item = &'k str>,
    ) -> Option<&TranslationValue> {
        let mut segments = segments.into_iter();
        let mut current = self.translations.get(segments.next()?)?;
        for segment in segments {
            let TranslationValue::Nested(children) = current else {
                return None;
            };
            current = children.get(segment)?;
        }
        Some(current)
    }

    /// The text at `key`: a simple entry, or a plural entry's `other` form.
    ///
    /// This does not apply plural rules; use the translation engine for that.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(TranslationValue::as_text)
    }

    /// Whether any entry exists at `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns a catalog with `value` stored at the dot-separated `key`.
    ///
    /// A text entry whose last segment is `other` makes its parent level
    /// export as plural forms; see [`Catalog::to_json`].
    pub fn set(&self, key: &str, value: impl Into<TranslationValue>) -> Catalog {
        let segments: Vec<&str> = key.split('.').collect();
        self.set_path(&segments, value)
    }

    /// Returns a catalog with `value` stored under the given path segments.
    ///
    /// Missing intermediate levels are created; intermediate entries that are
    /// not nested are replaced by nested ones.
    pub fn set_path(&self, segments: &[&str], value: impl Into<TranslationValue>) -> Catalog {
        let mut translations = Translations::clone(&self.translations);
        insert_path(&mut translations, segments, value.into());
        Catalog {
            locale: self.locale.clone(),
            translations: Arc::new(translations),
            metadata: CatalogMetadata {
                version: self.metadata.version + 1,
                ..self.metadata.clone()
            },
        }
    }

    /// Key-wise union of `self` and `overlay`; `overlay` wins on conflicts.
    ///
    /// Nested entries present on both sides are merged recursively. The
    /// locale and metadata come from the overlay.
    pub fn merge(&self, overlay: &Catalog) -> Catalog {
        let mut translations = Translations::clone(&self.translations);
        merge_into(&mut translations, &overlay.translations);
        Catalog {
            locale: overlay.locale.clone(),
            translations: Arc::new(translations),
            metadata: CatalogMetadata {
                version: self.metadata.version.max(overlay.metadata.version) + 1,
                ..overlay.metadata.clone()
            },
        }
    }

    /// Dot-separated keys of every non-nested entry, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_keys(&self.translations, "", &mut keys);
        keys
    }

    /// Number of non-nested entries.
    pub fn len(&self) -> usize {
        count_leaves(&self.translations)
    }

    /// Whether the catalog has no non-nested entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn insert_path(translations: &mut Translations, segments: &[&str], value: TranslationValue) {
    let Some((first, rest)) = segments.split_first() else {
        return;
    };
    if rest.is_empty() {
        translations.insert((*first).to_string(), value);
        return;
    }
    let entry = translations
        .entry((*first).to_string())
        .or_insert_with(|| TranslationValue::Nested(Translations::new()));
    if !matches!(entry, TranslationValue::Nested(_)) {
        *entry = TranslationValue::Nested(Translations::new());
    }
    if let TranslationValue::Nested(children) = entry {
        insert_path(children, rest, value);
    }
}

fn merge_into(base: &mut Translations, overlay: &Translations) {
    for (key, value) in overlay {
        match (base.get_mut(key), value) {
            (Some(TranslationValue::Nested(existing)), TranslationValue::Nested(incoming)) => {
                merge_into(existing, incoming);
            }
            _ => {
                base.insert(key.clone(), value.clone());
            }
        }
    }
}

fn collect_keys(translations: &Translations, prefix: &str, keys: &mut Vec<String>) {
    for (key, value) in translations {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            TranslationValue::Nested(children) => collect_keys(children, &path, keys),
            TranslationValue::Simple(_) | TranslationValue::Plural(_) => keys.push(path),
        }
    }
}

fn count_leaves(translations: &Translations) -> usize {
    translations
        .values()
        .map(|value| match value {
            TranslationValue::Nested(children) => count_leaves(children),
            TranslationValue::Simple(_) | TranslationValue::Plural(_) => 1,
        })
        .sum()
}
