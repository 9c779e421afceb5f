//! Tests for static table checks.

use insta::assert_snapshot;
use locmerge::{LanguageSet, TableWarning, compute_suggestions, lint_table};

fn languages() -> LanguageSet {
    LanguageSet::new(["English", "Français", "Deutsch", "日本語"])
}

fn render(warnings: &[TableWarning]) -> String {
    warnings
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn clean_table_has_no_warnings() {
    let warnings = lint_table(
        "Key;English;Français\n# comment\ngreet;Hi;Salut\n\nbye;Bye;\n",
        &languages(),
    );
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
}

#[test]
fn header_only_table() {
    assert_eq!(lint_table("Key;English\n", &languages()), vec![TableWarning::NoRows]);
    assert_eq!(lint_table("", &languages()), vec![TableWarning::NoRows]);
}

#[test]
fn unknown_language_with_suggestion() {
    let warnings = lint_table("Key;english;Deutch\ngreet;Hi;Hallo\n", &languages());
    assert_snapshot!(render(&warnings), @r"
    unknown language 'english' in column 1, did you mean 'English'?
    unknown language 'Deutch' in column 2, did you mean 'Deutsch'?
    ");
}

#[test]
fn unknown_language_without_suggestion() {
    let warnings = lint_table("Key;Klingon\ngreet;nuqneH\n", &languages());
    assert_eq!(
        warnings,
        vec![TableWarning::UnknownLanguage {
            column: 1,
            name: "Klingon".to_string(),
            suggestions: Vec::new(),
        }]
    );
}

#[test]
fn repeated_language_and_key() {
    let warnings = lint_table(
        "Key;English;Français;English\ngreet;Hi;Salut;Hey\nbye;Bye;;\ngreet;Hello;;\n",
        &languages(),
    );
    assert_snapshot!(render(&warnings), @r"
    language 'English' repeated in column 3
    line 4: key 'greet' already defined on line 2
    ");
}

#[test]
fn extra_fields_are_reported() {
    let warnings = lint_table("Key;English\ngreet;Hi;Salut\n", &languages());
    assert_eq!(
        warnings,
        vec![TableWarning::ExtraFields {
            line: 2,
            key: "greet".to_string(),
            expected: 2,
            found: 3,
        }]
    );
    assert_eq!(warnings[0].line(), 2);
}

#[test]
fn header_warnings_point_at_first_line() {
    let warnings = lint_table("Key;Elvish\ngreet;Hi\n", &languages());
    assert_eq!(warnings[0].line(), 1);
}

#[test]
fn suggestions_are_limited_and_sorted() {
    let languages = LanguageSet::new(["Dutch", "Deutsch", "Danish"]);
    assert_eq!(
        compute_suggestions("Deutsh", &languages),
        vec!["Deutsch", "Dutch"]
    );
}

#[test]
fn known_name_gets_no_suggestions() {
    let languages = LanguageSet::new(["Dutch", "Deutsch", "Danish"]);
    assert!(compute_suggestions("Deutsch", &languages).is_empty());
    assert!(compute_suggestions("Dutch", &languages).is_empty());
}

#[test]
fn short_names_allow_one_edit() {
    let languages = LanguageSet::new(["en", "fr", "de"]);
    assert_eq!(compute_suggestions("em", &languages), vec!["en"]);
    assert!(compute_suggestions("xy", &languages).is_empty());
}
