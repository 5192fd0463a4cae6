//! Cross-locale catalog comparison.

use std::collections::BTreeSet;

use strsim::levenshtein;

use crate::catalog::{Catalog, TranslationValue};
use crate::engine::error::LoadWarning;
use crate::plural::PluralFamily;

/// Compute typo suggestions using Levenshtein distance.
///
/// - distance <= 1 for keys <= 3 chars
/// - distance <= 2 for longer keys
/// - Limit to 3 suggestions, sorted by distance
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, &String)> = available
        .iter()
        .filter_map(|candidate| {
            let distance = levenshtein(key, candidate);
            (distance > 0 && distance <= max_distance).then_some((distance, candidate))
        })
        .collect();
    suggestions.sort_by_key(|(distance, _)| *distance);
    suggestions
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}

/// Compare `target` against `source`.
///
/// Reports keys missing from the target, keys only the target has, and
/// target plural entries lacking a category the target language uses.
pub(crate) fn compare(source: &Catalog, target: &Catalog) -> Vec<LoadWarning> {
    let locale = target.locale().to_string();
    let source_keys = source.keys();
    let target_keys = target.keys();
    let source_set: BTreeSet<&String> = source_keys.iter().collect();
    let target_set: BTreeSet<&String> = target_keys.iter().collect();

    let mut warnings = Vec::new();
    for key in &source_keys {
        if !target_set.contains(key) {
            warnings.push(LoadWarning::MissingKey {
                key: key.clone(),
                locale: locale.clone(),
            });
        }
    }

    for key in &target_keys {
        if !source_set.contains(key) {
            warnings.push(LoadWarning::UnknownKey {
                key: key.clone(),
                locale: locale.clone(),
                suggestions: compute_suggestions(key, &source_keys),
            });
        }
    }

    let required = PluralFamily::for_language(target.locale().language()).categories();
    for key in &target_keys {
        let Some(TranslationValue::Plural(forms)) = target.get(key) else {
            continue;
        };
        for category in required {
            if forms.get(*category).is_none() {
                warnings.push(LoadWarning::MissingPluralCategory {
                    key: key.clone(),
                    locale: locale.clone(),
                    category: *category,
                });
            }
        }
    }

    warnings
}
