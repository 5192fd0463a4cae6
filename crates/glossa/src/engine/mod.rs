//! Locale-aware translation lookup.
//!
//! [`TranslationEngine`] pairs a validated [`EngineConfig`] with one catalog
//! per configured locale and a current locale. Every operation that changes
//! state returns a new engine; the receiver is never modified.

mod config;
mod error;
mod shared;
mod template;
mod validate;

use std::collections::{BTreeMap, HashMap};
use std::iter;
use std::sync::Arc;

use serde_json::Value as Json;

pub use config::{ConfigError, EngineConfig, EngineOptions, MissingKeyHandler};
pub use error::{LoadError, LoadWarning};
pub use shared::SharedEngine;
pub use validate::compute_suggestions;

use crate::catalog::{Catalog, CatalogParseError, TranslationValue};
use crate::plural::{self, PluralCategory, PluralOperands};
use crate::types::{Locale, Value};
use template::Template;

/// Translation lookup over a fixed set of locales.
///
/// Lookups never fail: a key that no catalog along the lookup order has
/// resolves to the missing-key handler's text, or to the key itself.
///
/// # Example
///
/// ```
/// use glossa::{EngineConfig, TranslationEngine, params};
/// use serde_json::json;
///
/// let config = EngineConfig::from_json(r#"{"locales": ["en", "de"]}"#).unwrap();
/// let engine = TranslationEngine::new(config)
///     .load_translations("en", &json!({"greeting": "Hello, {{name}}!"}))
///     .unwrap()
///     .load_translations("de", &json!({"greeting": "Hallo, {{name}}!"}))
///     .unwrap();
///
/// let german = engine.set_locale("de-AT");
/// assert_eq!(german.locale().as_str(), "de");
/// assert_eq!(
///     german.translate_with("greeting", &params! { "name" => "Ada" }),
///     "Hallo, Ada!"
/// );
/// assert_eq!(engine.translate("missing.key"), "missing.key");
/// ```
#[derive(Debug, Clone)]
pub struct TranslationEngine {
    config: Arc<EngineConfig>,
    current: Locale,
    catalogs: Arc<BTreeMap<Locale, Catalog>>,
}

impl TranslationEngine {
    /// An engine with one empty catalog per configured locale, starting at
    /// the default locale.
    pub fn new(config: EngineConfig) -> Self {
        let catalogs = config
            .locales()
            .iter()
            .map(|locale| (locale.clone(), Catalog::empty(locale.clone())))
            .collect();
        TranslationEngine {
            current: config.default_locale().clone(),
            config: Arc::new(config),
            catalogs: Arc::new(catalogs),
        }
    }

    /// Validate `options` and build an engine from them.
    pub fn from_options(options: EngineOptions) -> Result<Self, ConfigError> {
        Ok(Self::new(EngineConfig::try_from(options)?))
    }

    /// Parse and validate a JSON configuration document and build an engine.
    pub fn from_json_config(text: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(EngineConfig::from_json(text)?))
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // =========================================================================
    // Locale Management
    // =========================================================================

    /// The current locale. Always a configured locale.
    pub fn locale(&self) -> &Locale {
        &self.current
    }

    /// Map a tag to the configured locale it would select.
    ///
    /// Unparseable tags resolve to the default locale.
    pub fn resolve_locale(&self, tag: &str) -> Locale {
        match Locale::parse(tag) {
            Ok(requested) => self.config.resolve(&requested),
            Err(error) => {
                tracing::debug!(tag, %error, "unparseable locale, using default");
                self.config.default_locale().clone()
            }
        }
    }

    /// Returns an engine whose current locale is the resolution of `tag`.
    pub fn set_locale(&self, tag: &str) -> Self {
        let resolved = self.resolve_locale(tag);
        tracing::debug!(requested = tag, resolved = %resolved, "switching locale");
        self.with_current(resolved)
    }

    /// Returns an engine whose current locale is the resolution of `locale`.
    pub fn with_locale(&self, locale: &Locale) -> Self {
        let resolved = self.config.resolve(locale);
        tracing::debug!(requested = %locale, resolved = %resolved, "switching locale");
        self.with_current(resolved)
    }

    fn with_current(&self, current: Locale) -> Self {
        TranslationEngine {
            config: Arc::clone(&self.config),
            current,
            catalogs: Arc::clone(&self.catalogs),
        }
    }

    // =========================================================================
    // Translation Loading
    // =========================================================================

    /// Merge a JSON catalog into `locale`'s catalog.
    ///
    /// Keys in `json` override existing keys; nested objects merge
    /// recursively. Leaves that are neither strings nor objects are dropped.
    pub fn load_translations(&self, locale: &str, json: &Json) -> Result<Self, LoadError> {
        self.load_with(locale, json, Catalog::from_json)
    }

    /// Like [`TranslationEngine::load_translations`], but leaves that are
    /// neither strings nor objects are a [`LoadError::Parse`] instead of
    /// being dropped.
    ///
    /// ```
    /// use glossa::{LoadError, TranslationEngine};
    /// use serde_json::json;
    ///
    /// let engine = TranslationEngine::from_json_config(r#"{"locales": ["en"]}"#).unwrap();
    /// let err = engine
    ///     .load_translations_strict("en", &json!({"count": 3}))
    ///     .unwrap_err();
    /// assert!(matches!(err, LoadError::Parse { .. }));
    /// ```
    pub fn load_translations_strict(&self, locale: &str, json: &Json) -> Result<Self, LoadError> {
        self.load_with(locale, json, Catalog::from_json_strict)
    }

    fn load_with(
        &self,
        locale: &str,
        json: &Json,
        import: fn(Locale, &Json) -> Result<Catalog, CatalogParseError>,
    ) -> Result<Self, LoadError> {
        let target = self.configured(locale)?;
        let incoming = import(target.clone(), json).map_err(|source| LoadError::Parse {
            locale: target.to_string(),
            source,
        })?;
        Ok(self.merge_catalog(incoming))
    }

    /// Parse JSON text and merge it into `locale`'s catalog.
    pub fn load_translations_str(&self, locale: &str, text: &str) -> Result<Self, LoadError> {
        let target = self.configured(locale)?;
        let json: Json = serde_json::from_str(text).map_err(|error| LoadError::Parse {
            locale: target.to_string(),
            source: CatalogParseError::Syntax(error),
        })?;
        self.load_translations(target.as_str(), &json)
    }

    /// Merge an already-built catalog into the catalog for its locale.
    pub fn load_catalog(&self, catalog: Catalog) -> Result<Self, LoadError> {
        if !self.config.is_configured(catalog.locale()) {
            return Err(LoadError::UnconfiguredLocale {
                locale: catalog.locale().to_string(),
            });
        }
        Ok(self.merge_catalog(catalog))
    }

    fn configured(&self, tag: &str) -> Result<Locale, LoadError> {
        let locale = Locale::parse(tag)?;
        if self.config.is_configured(&locale) {
            Ok(locale)
        } else {
            Err(LoadError::UnconfiguredLocale {
                locale: locale.to_string(),
            })
        }
    }

    fn merge_catalog(&self, incoming: Catalog) -> Self {
        let locale = incoming.locale().clone();
        let merged = match self.catalogs.get(&locale) {
            Some(existing) => existing.merge(&incoming),
            None => incoming,
        };
        tracing::debug!(
            locale = %locale,
            entries = merged.len(),
            version = merged.metadata().version,
            "loaded translations"
        );
        let mut catalogs = BTreeMap::clone(&self.catalogs);
        catalogs.insert(locale, merged);
        TranslationEngine {
            config: Arc::clone(&self.config),
            current: self.current.clone(),
            catalogs: Arc::new(catalogs),
        }
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Translate `key` in the current locale.
    ///
    /// Consults the current locale, its configured fallback, its configured
    /// ancestors, then the default locale. Only text entries satisfy a
    /// lookup; nested levels do not.
    pub fn translate(&self, key: &str) -> String {
        match self.lookup(key) {
            Some((_, value)) => value.as_text().unwrap_or(key).to_string(),
            None => self.missing(key),
        }
    }

    /// Translate `key` and replace each `{{name}}` with the matching value.
    ///
    /// Names without a value are left as written.
    pub fn translate_with(&self, key: &str, named: &HashMap<String, Value>) -> String {
        Template::parse(&self.translate(key)).render(named, None)
    }

    /// Translate `key` and fill `%s` and `%d` placeholders in order.
    ///
    /// `%%` renders as `%`. Placeholders beyond the last argument are left as
    /// written and extra arguments are ignored.
    pub fn translate_args(&self, key: &str, args: &[Value]) -> String {
        Template::parse(&self.translate(key)).render(&HashMap::new(), Some(args))
    }

    /// Translate a message that varies with `count`.
    ///
    /// If the lookup for `singular` finds plural forms, the form for
    /// `count`'s category in that catalog's language is used. Otherwise the
    /// `singular` key is translated when `count` is `One` in the current
    /// locale and the `plural` key in every other case. The count fills the
    /// first positional placeholder and every `{{count}}`.
    ///
    /// String counts are read as decimals, so `"1.0"` keeps its visible
    /// fraction digit.
    pub fn translate_plural(&self, singular: &str, plural: &str, count: impl Into<Value>) -> String {
        let count = count.into();
        let text = match self.lookup(singular) {
            Some((catalog, TranslationValue::Plural(forms))) => {
                let category = plural_category(&count, catalog.locale().language());
                forms.select(category).to_string()
            }
            _ => {
                let category = plural_category(&count, self.current.language());
                if category == PluralCategory::One {
                    self.translate(singular)
                } else {
                    self.translate(plural)
                }
            }
        };
        let named = HashMap::from([("count".to_string(), count.clone())]);
        Template::parse(&text).render(&named, Some(&[count][..]))
    }

    /// Whether the current locale's catalog has a text entry for `key`.
    ///
    /// Fallback locales are not consulted.
    pub fn has_key(&self, key: &str) -> bool {
        self.catalogs
            .get(&self.current)
            .and_then(|catalog| self.entry(catalog, key))
            .is_some()
    }

    /// The catalog for a configured locale.
    pub fn catalog(&self, locale: &Locale) -> Option<&Catalog> {
        self.catalogs.get(locale)
    }

    /// Number of text entries in the current locale's catalog.
    pub fn catalog_size(&self) -> usize {
        self.catalogs.get(&self.current).map_or(0, Catalog::len)
    }

    /// The JSON form of a configured locale's catalog.
    pub fn export_translations(&self, locale: &Locale) -> Option<Json> {
        self.catalogs.get(locale).map(Catalog::to_json)
    }

    /// Compare `target`'s catalog against `source`'s.
    ///
    /// Returns an empty list if either locale is not configured.
    ///
    /// # Example
    ///
    /// ```
    /// use glossa::{LoadWarning, Locale, TranslationEngine};
    /// use serde_json::json;
    ///
    /// let engine = TranslationEngine::from_json_config(r#"{"locales": ["en", "fr"]}"#)
    ///     .unwrap()
    ///     .load_translations("en", &json!({"title": "Title", "save": "Save"}))
    ///     .unwrap()
    ///     .load_translations("fr", &json!({"title": "Titre", "sav": "Enregistrer"}))
    ///     .unwrap();
    ///
    /// let en = Locale::parse("en").unwrap();
    /// let fr = Locale::parse("fr").unwrap();
    /// let warnings = engine.validate_translations(&en, &fr);
    /// assert_eq!(warnings.len(), 2);
    /// assert!(matches!(&warnings[1], LoadWarning::UnknownKey { suggestions, .. } if suggestions == &["save"]));
    /// ```
    pub fn validate_translations(&self, source: &Locale, target: &Locale) -> Vec<LoadWarning> {
        let (Some(source), Some(target)) = (self.catalogs.get(source), self.catalogs.get(target))
        else {
            return Vec::new();
        };
        validate::compare(source, target)
    }

    /// Locales consulted for a lookup, in order, without duplicates.
    fn lookup_order(&self) -> Vec<&Locale> {
        let mut order: Vec<&Locale> = vec![&self.current];
        let ancestors = self.current.fallback_chain();
        let candidates = self
            .config
            .fallback_for(&self.current)
            .into_iter()
            .chain(
                ancestors
                    .iter()
                    .skip(1)
                    .filter_map(|ancestor| self.catalogs.get_key_value(ancestor).map(|(k, _)| k)),
            )
            .chain(iter::once(self.config.default_locale()));
        for locale in candidates {
            if !order.contains(&locale) {
                order.push(locale);
            }
        }
        order
    }

    /// The first text entry for `key` along the lookup order.
    fn lookup(&self, key: &str) -> Option<(&Catalog, &TranslationValue)> {
        self.lookup_order()
            .into_iter()
            .filter_map(|locale| self.catalogs.get(locale))
            .find_map(|catalog| self.entry(catalog, key).map(|value| (catalog, value)))
    }

    fn entry<'c>(&self, catalog: &'c Catalog, key: &str) -> Option<&'c TranslationValue> {
        let value = if self.config.object_notation() {
            catalog.get(key)
        } else {
            catalog.get_path(iter::once(key))
        };
        value.filter(|value| value.as_text().is_some())
    }

    fn missing(&self, key: &str) -> String {
        tracing::trace!(key, locale = %self.current, "missing translation");
        match self.config.missing_key_handler() {
            Some(handler) => handler(&self.current, key),
            None => key.to_string(),
        }
    }
}

/// The plural category of `count` in `language`. Counts that are not numbers
/// fall into `Other`.
fn plural_category(count: &Value, language: &str) -> PluralCategory {
    let operands = match count {
        Value::String(text) => text.trim().parse::<PluralOperands>().ok(),
        number => number
            .as_float()
            .filter(|n| n.is_finite())
            .map(plural::get_operands),
    };
    operands.map_or(PluralCategory::Other, |operands| {
        plural::select_operands(plural::accelerated(), &operands, language)
    })
}
