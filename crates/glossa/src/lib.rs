pub mod catalog;
pub mod engine;
pub mod plural;
pub mod relative_time;
pub mod types;

pub use catalog::{
    Catalog, CatalogMetadata, CatalogParseError, PluralForms, TranslationValue, Translations,
};
pub use engine::{
    ConfigError, EngineConfig, EngineOptions, LoadError, LoadWarning, MissingKeyHandler,
    SharedEngine, TranslationEngine, compute_suggestions,
};
pub use plural::{PluralCategory, PluralOperands};
pub use relative_time::{RelativeTimeConfig, RelativeTimeNumeric, RelativeTimeStyle, TimeUnit};
pub use types::{InvalidLocale, Locale, Value};

/// Creates a `HashMap<String, Value>` of named interpolation arguments.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, or strings directly.
///
/// # Example
///
/// ```
/// use glossa::{params, Value};
///
/// let p = params! { "count" => 3, "name" => "Alice" };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p["count"].as_number(), Some(3));
/// assert_eq!(p["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
