//! JSON import and export for catalogs.
//!
//! A string is a simple entry, an object with a string `other` member is a
//! plural entry, and any other object is a further level of nesting.

use serde_json::{Map, Value as Json};

use crate::catalog::error::CatalogParseError;
use crate::catalog::value::{PluralForms, TranslationValue, Translations};
use crate::plural::PluralCategory;

/// How to treat leaves that are neither strings nor objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParseMode {
    /// Drop them with a warning.
    Lenient,
    /// Reject the document.
    Strict,
}

/// Parse the members of a catalog root object.
pub(crate) fn parse_root(json: &Json, mode: ParseMode) -> Result<Translations, CatalogParseError> {
    let Json::Object(members) = json else {
        return Err(CatalogParseError::NotAnObject {
            found: kind_of(json),
        });
    };
    parse_members(members, "", mode)
}

fn parse_members(
    members: &Map<String, Json>,
    prefix: &str,
    mode: ParseMode,
) -> Result<Translations, CatalogParseError> {
    let mut translations = Translations::new();
    for (key, value) in members {
        let path = join_path(prefix, key);
        if let Some(entry) = parse_value(value, &path, mode)? {
            translations.insert(key.clone(), entry);
        }
    }
    Ok(translations)
}

fn parse_value(
    value: &Json,
    path: &str,
    mode: ParseMode,
) -> Result<Option<TranslationValue>, CatalogParseError> {
    match value {
        Json::String(text) => Ok(Some(TranslationValue::Simple(text.clone()))),
        Json::Object(members) => match members.get("other") {
            Some(Json::String(other)) => parse_plural(members, other, path, mode).map(Some),
            _ => {
                let nested = parse_members(members, path, mode)?;
                Ok(Some(TranslationValue::Nested(nested)))
            }
        },
        other => unsupported(path, other, mode).map(|()| None),
    }
}

fn parse_plural(
    members: &Map<String, Json>,
    other: &str,
    path: &str,
    mode: ParseMode,
) -> Result<TranslationValue, CatalogParseError> {
    let mut forms = PluralForms::new(other);
    for (name, value) in members {
        let member_path = join_path(path, name);
        let category = name.parse::<PluralCategory>();
        match (category, value) {
            (Ok(PluralCategory::Other), _) => {}
            (Ok(category), Json::String(text)) => forms = forms.with(category, text.as_str()),
            (_, value) => unsupported(&member_path, value, mode)?,
        }
    }
    Ok(TranslationValue::Plural(forms))
}

fn unsupported(path: &str, value: &Json, mode: ParseMode) -> Result<(), CatalogParseError> {
    let kind = kind_of(value);
    match mode {
        ParseMode::Strict => Err(CatalogParseError::UnsupportedValue {
            path: path.to_string(),
            kind,
        }),
        ParseMode::Lenient => {
            tracing::warn!(path, kind, "dropping unsupported catalog value");
            Ok(())
        }
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn kind_of(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

/// Serialize a translation tree back to its JSON shape.
pub(crate) fn to_json(translations: &Translations) -> Json {
    members_to_json(translations, "")
}

fn members_to_json(translations: &Translations, prefix: &str) -> Json {
    Json::Object(
        translations
            .iter()
            .map(|(key, value)| {
                let path = join_path(prefix, key);
                (key.clone(), value_to_json(value, &path))
            })
            .collect(),
    )
}

/// Nested levels whose JSON form has a string `other` member, which reads
/// back as a plural entry.
pub(crate) fn plural_shaped_levels(translations: &Translations) -> Vec<String> {
    let mut paths = Vec::new();
    collect_plural_shaped(translations, "", &mut paths);
    paths
}

fn collect_plural_shaped(translations: &Translations, prefix: &str, paths: &mut Vec<String>) {
    for (key, value) in translations {
        let TranslationValue::Nested(children) = value else {
            continue;
        };
        let path = join_path(prefix, key);
        if is_plural_shaped(children) {
            paths.push(path.clone());
        }
        collect_plural_shaped(children, &path, paths);
    }
}

fn is_plural_shaped(children: &Translations) -> bool {
    matches!(children.get("other"), Some(TranslationValue::Simple(_)))
}

fn value_to_json(value: &TranslationValue, path: &str) -> Json {
    match value {
        TranslationValue::Simple(text) => Json::String(text.clone()),
        TranslationValue::Plural(forms) => Json::Object(
            forms
                .categories()
                .into_iter()
                .map(|category| {
                    let text = forms.select(category).to_string();
                    (category.as_str().to_string(), Json::String(text))
                })
                .collect(),
        ),
        TranslationValue::Nested(children) => {
            if is_plural_shaped(children) {
                tracing::warn!(
                    path,
                    "nested level with a text 'other' entry exports as plural forms"
                );
            }
            members_to_json(children, path)
        }
    }
}
