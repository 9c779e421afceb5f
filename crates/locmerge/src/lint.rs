//! Static checks over a table before it is merged.
//!
//! The merger is deliberately forgiving: unknown languages, repeated keys and
//! overlong rows are resolved silently. These checks surface them so table
//! authors can fix their files.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use strsim::levenshtein;

use crate::error::TableWarning;
use crate::parser::{ParseError, parse_table};
use crate::types::LanguageSet;

/// Check `content` against `languages`, returning warnings in file order.
///
/// # Example
///
/// ```
/// use locmerge::{LanguageSet, TableWarning, lint_table};
///
/// let languages = LanguageSet::new(["English", "Français"]);
/// let warnings = lint_table("Key;English;Francais\nhello;Hi;Salut", &languages);
/// assert_eq!(
///     warnings,
///     vec![TableWarning::UnknownLanguage {
///         column: 2,
///         name: "Francais".to_string(),
///         suggestions: vec!["Français".to_string()],
///     }]
/// );
/// ```
pub fn lint_table(content: &str, languages: &LanguageSet) -> Vec<TableWarning> {
    let table = match parse_table(content) {
        Ok(table) => table,
        Err(ParseError::Empty | ParseError::NoRows) => return vec![TableWarning::NoRows],
    };

    let mut warnings = Vec::new();
    let mut seen_languages: HashMap<&str, usize> = HashMap::new();
    for (offset, name) in table.header.languages.iter().enumerate() {
        let column = offset + 1;
        if name.is_empty() {
            continue;
        }
        if !languages.contains(name) {
            warnings.push(TableWarning::UnknownLanguage {
                column,
                name: (*name).to_string(),
                suggestions: compute_suggestions(name, languages),
            });
        } else if seen_languages.insert(name, column).is_some() {
            warnings.push(TableWarning::DuplicateLanguage {
                column,
                name: (*name).to_string(),
            });
        }
    }

    let expected = table.header.width();
    let mut first_lines: HashMap<&str, usize> = HashMap::new();
    for row in &table.rows {
        match first_lines.entry(row.key) {
            Entry::Occupied(first) => warnings.push(TableWarning::DuplicateKey {
                line: row.line,
                key: row.key.to_string(),
                first_line: *first.get(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(row.line);
            }
        }
        if row.width() > expected {
            warnings.push(TableWarning::ExtraFields {
                line: row.line,
                key: row.key.to_string(),
                expected,
                found: row.width(),
            });
        }
    }

    warnings
}

/// Known languages within a small edit distance of `name`, closest first.
///
/// Uses at most 3 suggestions, with a distance limit of 1 for names of up to
/// three characters and 2 otherwise. A name already in the set gets none.
pub fn compute_suggestions(name: &str, languages: &LanguageSet) -> Vec<String> {
    if languages.contains(name) {
        return Vec::new();
    }
    let max_distance = if name.chars().count() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, &str)> = languages
        .iter()
        .filter_map(|candidate| {
            let distance = levenshtein(name, candidate);
            (distance > 0 && distance <= max_distance).then_some((distance, candidate))
        })
        .collect();

    suggestions.sort_by_key(|(distance, _)| *distance);
    suggestions
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
