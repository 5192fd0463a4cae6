use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A validated language tag of the form `language[-Script][-REGION][-variant...]`.
///
/// A `Locale` can only be obtained through [`Locale::parse`], so every value
/// in circulation is well-formed. Subtags are normalized on parse: the
/// language and variants are lowercased, the script is title-cased and the
/// region is uppercased. Equality, hashing and ordering all use the canonical
/// string.
///
/// # Example
///
/// ```
/// use glossa::Locale;
///
/// let locale = Locale::parse("zh-hant-tw").unwrap();
/// assert_eq!(locale.as_str(), "zh-Hant-TW");
/// assert_eq!(locale.language(), "zh");
/// assert_eq!(locale.script(), Some("Hant"));
/// assert_eq!(locale.region(), Some("TW"));
///
/// let chain: Vec<String> = locale.fallback_chain().iter().map(ToString::to_string).collect();
/// assert_eq!(chain, ["zh-Hant-TW", "zh-Hant", "zh"]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    language: String,
    script: Option<String>,
    region: Option<String>,
    variants: Vec<String>,
    canonical: String,
}

/// A language tag that does not match the locale grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidLocale {
    /// The tag was empty.
    #[error("empty locale tag")]
    Empty,

    /// The first subtag is not a 2-3 letter language code.
    #[error("invalid language subtag '{subtag}' in locale tag '{tag}'")]
    Language { tag: String, subtag: String },

    /// A later subtag is empty or is not a valid script, region or variant.
    #[error("invalid subtag '{subtag}' in locale tag '{tag}'")]
    Subtag { tag: String, subtag: String },
}

impl Locale {
    /// Parse and normalize a language tag.
    ///
    /// Segments after the language are classified greedily: a 4-letter
    /// segment becomes the script, then a 2-letter or 3-digit segment becomes
    /// the region, and everything after that is a variant.
    pub fn parse(tag: &str) -> Result<Locale, InvalidLocale> {
        if tag.is_empty() {
            return Err(InvalidLocale::Empty);
        }

        let mut segments = tag.split('-');
        let first = segments.next().unwrap_or_default();
        if !is_language(first) {
            return Err(InvalidLocale::Language {
                tag: tag.to_string(),
                subtag: first.to_string(),
            });
        }

        let mut locale = Locale {
            language: first.to_ascii_lowercase(),
            script: None,
            region: None,
            variants: Vec::new(),
            canonical: String::new(),
        };

        for segment in segments {
            let in_variants = !locale.variants.is_empty();
            let before_region = !in_variants && locale.region.is_none();
            if before_region && locale.script.is_none() && is_script(segment) {
                locale.script = Some(title_case(segment));
            } else if before_region && is_region(segment) {
                locale.region = Some(segment.to_ascii_uppercase());
            } else if is_variant(segment) {
                locale.variants.push(segment.to_ascii_lowercase());
            } else {
                return Err(InvalidLocale::Subtag {
                    tag: tag.to_string(),
                    subtag: segment.to_string(),
                });
            }
        }

        locale.canonical = locale.canonicalize();
        Ok(locale)
    }

    /// Join the components in canonical order: language, script, region, variants.
    pub fn canonicalize(&self) -> String {
        let mut parts = vec![self.language.as_str()];
        parts.extend(self.script.as_deref());
        parts.extend(self.region.as_deref());
        parts.extend(self.variants.iter().map(String::as_str));
        parts.join("-")
    }

    /// The locale with its most specific component removed.
    ///
    /// Variants go first, then the region, then the script. A bare language
    /// has no parent.
    pub fn parent(&self) -> Option<Locale> {
        let mut parent = self.clone();
        if !parent.variants.is_empty() {
            parent.variants.clear();
        } else if parent.region.is_some() {
            parent.region = None;
        } else if parent.script.is_some() {
            parent.script = None;
        } else {
            return None;
        }
        parent.canonical = parent.canonicalize();
        Some(parent)
    }

    /// This locale followed by each successive parent, ending at the bare language.
    pub fn fallback_chain(&self) -> Vec<Locale> {
        let mut chain = vec![self.clone()];
        while let Some(parent) = chain.last().and_then(Locale::parent) {
            chain.push(parent);
        }
        chain
    }

    /// The bare-language locale (e.g. `en` for `en-US`).
    pub fn base(&self) -> Locale {
        self.fallback_chain().pop().unwrap_or_else(|| self.clone())
    }

    /// Lowercase language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Title-case script code, if present.
    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// Uppercase region code, if present.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Variant subtags in tag order.
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// The canonical tag string.
    pub fn as_str(&self) -> &str {
        &self.canonical
    }
}

fn is_language(segment: &str) -> bool {
    (2..=3).contains(&segment.len()) && segment.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_script(segment: &str) -> bool {
    segment.len() == 4 && segment.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_region(segment: &str) -> bool {
    (segment.len() == 2 && segment.chars().all(|c| c.is_ascii_alphabetic()))
        || (segment.len() == 3 && segment.chars().all(|c| c.is_ascii_digit()))
}

fn is_variant(segment: &str) -> bool {
    (1..=8).contains(&segment.len()) && segment.chars().all(|c| c.is_ascii_alphanumeric())
}

fn title_case(segment: &str) -> String {
    let lower = segment.to_ascii_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

impl PartialEq for Locale {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for Locale {}

impl Hash for Locale {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl PartialOrd for Locale {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Locale {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical.cmp(&other.canonical)
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.canonical)
    }
}

impl FromStr for Locale {
    type Err = InvalidLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = InvalidLocale;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Locale::parse(&value)
    }
}

impl TryFrom<&str> for Locale {
    type Error = InvalidLocale;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Locale::parse(value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.canonical
    }
}
