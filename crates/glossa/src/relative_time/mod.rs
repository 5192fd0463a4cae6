//! Human-readable relative times: "yesterday", "3 days ago", "vor 3 Tagen".
//!
//! A signed delta is expressed in the largest fitting [`TimeUnit`], the unit
//! name is chosen by the plural category of the rounded magnitude, and the
//! pieces are assembled in the word order of the target language. Negative
//! deltas are in the past; zero and positive deltas are in the future.
//!
//! Languages without a vocabulary table are phrased in English.

mod data;
mod unit;

use bon::Builder;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

pub use data::{WordOrder, has_table};
pub use unit::{ParseTimeUnitError, TimeUnit, select_unit};

use crate::plural::{self, PluralCategory};
use crate::types::Locale;
use data::LocaleTable;

/// Deltas below this many seconds are "just now" in `Auto` mode.
const JUST_NOW_SECONDS: f64 = 10.0;

/// How long unit names are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelativeTimeStyle {
    /// Full, pluralized names: "3 days ago".
    #[default]
    Long,
    /// Abbreviated names: "3 hr. ago", "vor 3 Std.".
    Short,
    /// The shortest abbreviations: "3 h ago".
    Narrow,
}

/// Whether fixed phrases may replace numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelativeTimeNumeric {
    /// Always a number: "1 day ago".
    Always,
    /// Fixed phrases where one exists: "yesterday", "just now".
    #[default]
    Auto,
}

/// Settings for relative-time formatting.
///
/// ```
/// use glossa::Locale;
/// use glossa::relative_time::{RelativeTimeConfig, RelativeTimeNumeric, format};
///
/// let config = RelativeTimeConfig::builder()
///     .locale(Locale::parse("en").unwrap())
///     .numeric(RelativeTimeNumeric::Always)
///     .build();
/// assert_eq!(format(&config, -86_400.0), "1 day ago");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct RelativeTimeConfig {
    pub locale: Locale,
    #[builder(default)]
    #[serde(default)]
    pub style: RelativeTimeStyle,
    #[builder(default)]
    #[serde(default)]
    pub numeric: RelativeTimeNumeric,
}

impl RelativeTimeConfig {
    /// Long names with fixed phrases.
    pub fn new(locale: Locale) -> Self {
        RelativeTimeConfig::builder().locale(locale).build()
    }
}

/// The name of `unit` in `locale` for a quantity of `magnitude`.
///
/// Long names follow the plural category of `magnitude`; short and narrow
/// names are the same for every quantity.
///
/// ```
/// use glossa::Locale;
/// use glossa::relative_time::{RelativeTimeStyle, TimeUnit, unit_name};
///
/// let ru = Locale::parse("ru").unwrap();
/// assert_eq!(unit_name(&ru, TimeUnit::Day, 1, RelativeTimeStyle::Long), "день");
/// assert_eq!(unit_name(&ru, TimeUnit::Day, 3, RelativeTimeStyle::Long), "дня");
/// assert_eq!(unit_name(&ru, TimeUnit::Day, 5, RelativeTimeStyle::Long), "дней");
/// ```
pub fn unit_name(
    locale: &Locale,
    unit: TimeUnit,
    magnitude: u64,
    style: RelativeTimeStyle,
) -> &'static str {
    let table = table(locale);
    let names = table.unit(unit);
    match style {
        RelativeTimeStyle::Long => names.long.select(category(locale, magnitude)),
        RelativeTimeStyle::Short => names.short,
        RelativeTimeStyle::Narrow => names.narrow,
    }
}

/// Phrase `value` units relative to now.
///
/// The magnitude is `|value|` rounded to the nearest integer. Non-finite
/// values are treated as zero.
///
/// ```
/// use glossa::Locale;
/// use glossa::relative_time::{RelativeTimeConfig, TimeUnit, format_relative};
///
/// let de = RelativeTimeConfig::new(Locale::parse("de").unwrap());
/// assert_eq!(format_relative(&de, -3.0, TimeUnit::Day), "vor 3 Tagen");
/// assert_eq!(format_relative(&de, 2.0, TimeUnit::Hour), "in 2 Stunden");
/// assert_eq!(format_relative(&de, 1.0, TimeUnit::Day), "morgen");
/// ```
pub fn format_relative(config: &RelativeTimeConfig, value: f64, unit: TimeUnit) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let past = value < 0.0;
    let magnitude = rounded_magnitude(value);
    let table = table(&config.locale);

    if config.numeric == RelativeTimeNumeric::Auto {
        if let Some(phrase) = fixed_phrase(table, value, magnitude, unit, past) {
            return phrase.to_string();
        }
    }

    let name = unit_name(&config.locale, unit, magnitude, config.style);
    let marker = if past { table.past } else { table.future };
    match (table.order, past) {
        (WordOrder::Prefix, _) | (WordOrder::PastSuffix, false) => {
            format!("{marker} {magnitude} {name}")
        }
        (WordOrder::PastSuffix, true) => format!("{magnitude} {name} {marker}"),
        (WordOrder::Suffix, _) => format!("{magnitude}{name}{marker}"),
    }
}

/// Phrase a delta in seconds: [`select_unit`], then [`format_relative`].
pub fn format(config: &RelativeTimeConfig, delta_seconds: f64) -> String {
    let (unit, value) = select_unit(delta_seconds);
    format_relative(config, value, unit)
}

/// Phrase a Unix timestamp in milliseconds relative to `base`.
pub fn from_timestamp(config: &RelativeTimeConfig, millis: i64, base: DateTime<Utc>) -> String {
    let delta_millis = millis.saturating_sub(base.timestamp_millis());
    format(config, delta_millis as f64 / 1_000.0)
}

/// Phrase `date` relative to `base`.
///
/// ```
/// use chrono::{Duration, Utc};
/// use glossa::Locale;
/// use glossa::relative_time::{RelativeTimeConfig, from_dates};
///
/// let config = RelativeTimeConfig::new(Locale::parse("en").unwrap());
/// let now = Utc::now();
/// assert_eq!(from_dates(&config, now - Duration::days(3), now), "3 days ago");
/// ```
pub fn from_dates(
    config: &RelativeTimeConfig,
    date: impl Into<DateTime<Utc>>,
    base: impl Into<DateTime<Utc>>,
) -> String {
    let delta = date.into() - base.into();
    let seconds = match delta.num_microseconds() {
        Some(micros) => micros as f64 / 1_000_000.0,
        None => delta.num_seconds() as f64,
    };
    format(config, seconds)
}

/// Parse `text` as a date and phrase it relative to `base`.
///
/// Accepts RFC 3339 (`2024-03-01T12:00:00+01:00`), a date-time without an
/// offset read as UTC (`2024-03-01T12:00:00`), or a bare date read as UTC
/// midnight (`2024-03-01`). Returns `None` for anything else.
pub fn from_iso_string(
    config: &RelativeTimeConfig,
    text: &str,
    base: DateTime<Utc>,
) -> Option<String> {
    let date = parse_date(text.trim())?;
    Some(from_dates(config, date, base))
}

fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

fn table(locale: &Locale) -> &'static LocaleTable {
    data::table_for(locale.language())
}

/// Plural category of `magnitude`, using English rules for languages that
/// are phrased in English.
fn category(locale: &Locale, magnitude: u64) -> PluralCategory {
    let language = if has_table(locale.language()) {
        locale.language()
    } else {
        "en"
    };
    let operands = plural::get_operands(magnitude as f64);
    plural::select_operands(plural::accelerated(), &operands, language)
}

fn rounded_magnitude(value: f64) -> u64 {
    // Saturates for magnitudes beyond u64.
    value.abs().round() as u64
}

fn fixed_phrase(
    table: &LocaleTable,
    value: f64,
    magnitude: u64,
    unit: TimeUnit,
    past: bool,
) -> Option<&'static str> {
    let phrases = &table.phrases;
    match (unit, magnitude, past) {
        (TimeUnit::Second, _, _) if value.abs() < JUST_NOW_SECONDS => Some(phrases.just_now),
        (TimeUnit::Day, 0, _) => Some(phrases.today),
        (TimeUnit::Day, 1, true) => Some(phrases.yesterday),
        (TimeUnit::Day, 1, false) => Some(phrases.tomorrow),
        (TimeUnit::Week, 1, true) => Some(phrases.last_week),
        (TimeUnit::Week, 1, false) => Some(phrases.next_week),
        (TimeUnit::Month, 1, true) => Some(phrases.last_month),
        (TimeUnit::Month, 1, false) => Some(phrases.next_month),
        (TimeUnit::Year, 1, true) => Some(phrases.last_year),
        (TimeUnit::Year, 1, false) => Some(phrases.next_year),
        _ => None,
    }
}
