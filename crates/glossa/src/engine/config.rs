//! Engine configuration.
//!
//! [`EngineOptions`] is the raw, user-supplied shape, built with a builder or
//! deserialized from JSON. [`EngineConfig`] is the validated, immutable form
//! the engine runs on.

use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use bon::Builder;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{InvalidLocale, Locale};

/// Produces the text for a key that no catalog along the lookup order has.
///
/// Receives the engine's current locale and the requested key.
pub type MissingKeyHandler = Arc<dyn Fn(&Locale, &str) -> String + Send + Sync>;

/// Raw engine settings.
///
/// # Example
///
/// ```
/// use glossa::{EngineConfig, EngineOptions};
///
/// let options = EngineOptions::builder()
///     .locales(vec!["en".to_string(), "fr".to_string(), "fr-CA".to_string()])
///     .default_locale("en".to_string())
///     .build();
/// let config = EngineConfig::try_from(options).unwrap();
/// assert_eq!(config.default_locale().as_str(), "en");
/// ```
#[derive(Clone, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct EngineOptions {
    /// Tags of the locales the engine serves. Must not be empty.
    #[builder(default)]
    #[serde(default)]
    pub locales: Vec<String>,

    /// The locale of last resort. Defaults to the first configured locale.
    pub default_locale: Option<String>,

    /// Explicit redirects from a requested locale to a configured one.
    #[builder(default)]
    #[serde(default)]
    pub fallbacks: BTreeMap<String, String>,

    /// Whether dots in keys address nested catalog levels.
    #[builder(default = true)]
    #[serde(default = "object_notation_default")]
    pub object_notation: bool,

    #[serde(skip)]
    pub missing_key_handler: Option<MissingKeyHandler>,
}

fn object_notation_default() -> bool {
    true
}

impl Debug for EngineOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("EngineOptions")
            .field("locales", &self.locales)
            .field("default_locale", &self.default_locale)
            .field("fallbacks", &self.fallbacks)
            .field("object_notation", &self.object_notation)
            .field("missing_key_handler", &self.missing_key_handler.is_some())
            .finish()
    }
}

/// Errors from validating engine settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No locales were configured.
    #[error("at least one locale must be configured")]
    NoLocales,

    /// A configured locale, the default locale or a fallback tag does not parse.
    #[error("invalid locale in engine configuration: {0}")]
    InvalidLocale(#[from] InvalidLocale),

    /// The default locale is not one of the configured locales.
    #[error("default locale '{locale}' is not a configured locale")]
    DefaultNotConfigured { locale: String },

    /// A fallback redirects to a locale that is not configured.
    #[error("fallback for '{locale}' targets '{target}', which is not a configured locale")]
    FallbackTargetNotConfigured { locale: String, target: String },

    /// The configuration document is not valid JSON of the expected shape.
    #[error("invalid engine configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validated engine settings.
///
/// Every locale is parsed, the default locale is configured, and every
/// fallback target is configured.
#[derive(Clone)]
pub struct EngineConfig {
    locales: Vec<Locale>,
    default_locale: Locale,
    fallbacks: BTreeMap<Locale, Locale>,
    object_notation: bool,
    missing_key_handler: Option<MissingKeyHandler>,
}

impl EngineConfig {
    /// Deserialize [`EngineOptions`] from JSON text and validate them.
    ///
    /// ```
    /// use glossa::EngineConfig;
    ///
    /// let config = EngineConfig::from_json(
    ///     r#"{"locales": ["en", "de"], "defaultLocale": "de", "fallbacks": {"de-AT": "de"}}"#,
    /// )
    /// .unwrap();
    /// assert_eq!(config.default_locale().as_str(), "de");
    /// assert!(config.object_notation());
    /// ```
    pub fn from_json(text: &str) -> Result<EngineConfig, ConfigError> {
        let options: EngineOptions = serde_json::from_str(text)?;
        EngineConfig::try_from(options)
    }

    /// Configured locales, in configuration order without duplicates.
    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    /// The locale of last resort.
    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Explicit locale redirects.
    pub fn fallbacks(&self) -> &BTreeMap<Locale, Locale> {
        &self.fallbacks
    }

    /// Whether dots in keys address nested catalog levels.
    pub fn object_notation(&self) -> bool {
        self.object_notation
    }

    /// The handler consulted for keys no catalog has.
    pub fn missing_key_handler(&self) -> Option<&MissingKeyHandler> {
        self.missing_key_handler.as_ref()
    }

    /// Whether `locale` is one of the configured locales.
    pub fn is_configured(&self, locale: &Locale) -> bool {
        self.locales.contains(locale)
    }

    /// The configured fallback for `locale`, if any.
    pub fn fallback_for(&self, locale: &Locale) -> Option<&Locale> {
        self.fallbacks.get(locale)
    }

    /// Map any locale to a configured one.
    ///
    /// Tries the locale itself, then its explicit fallback, then its closest
    /// configured ancestor, then the default locale.
    pub fn resolve(&self, requested: &Locale) -> Locale {
        if self.is_configured(requested) {
            return requested.clone();
        }
        if let Some(target) = self.fallback_for(requested) {
            return target.clone();
        }
        requested
            .fallback_chain()
            .into_iter()
            .skip(1)
            .find(|ancestor| self.is_configured(ancestor))
            .unwrap_or_else(|| self.default_locale.clone())
    }
}

impl TryFrom<EngineOptions> for EngineConfig {
    type Error = ConfigError;

    fn try_from(options: EngineOptions) -> Result<Self, Self::Error> {
        let mut locales = Vec::<Locale>::with_capacity(options.locales.len());
        for tag in &options.locales {
            let locale = Locale::parse(tag)?;
            if !locales.contains(&locale) {
                locales.push(locale);
            }
        }
        let Some(first) = locales.first().cloned() else {
            return Err(ConfigError::NoLocales);
        };

        let default_locale = match &options.default_locale {
            Some(tag) => Locale::parse(tag)?,
            None => first,
        };
        if !locales.contains(&default_locale) {
            return Err(ConfigError::DefaultNotConfigured {
                locale: default_locale.to_string(),
            });
        }

        let mut fallbacks = BTreeMap::new();
        for (from, to) in &options.fallbacks {
            let from = Locale::parse(from)?;
            let to = Locale::parse(to)?;
            if !locales.contains(&to) {
                return Err(ConfigError::FallbackTargetNotConfigured {
                    locale: from.to_string(),
                    target: to.to_string(),
                });
            }
            fallbacks.insert(from, to);
        }

        Ok(EngineConfig {
            locales,
            default_locale,
            fallbacks,
            object_notation: options.object_notation,
            missing_key_handler: options.missing_key_handler,
        })
    }
}

impl Debug for EngineConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("EngineConfig")
            .field("locales", &self.locales)
            .field("default_locale", &self.default_locale)
            .field("fallbacks", &self.fallbacks)
            .field("object_notation", &self.object_notation)
            .field("missing_key_handler", &self.missing_key_handler.is_some())
            .finish()
    }
}
