mod locale;
mod value;

pub use locale::{InvalidLocale, Locale};
pub use value::Value;
