//! Integration tests for merging tables found under a plugins directory.

use std::fs::{create_dir_all, write};
use std::path::Path;

use locmerge::{
    CollectingSink, LanguageSet, Level, MergeError, MergeLedger, TableMerger, TranslationStore,
};
use tempfile::tempdir;

const RELATIVE: &str = "MCM/languages.csv";

fn plugin_table(root: &Path, plugin: &str, content: &str) {
    let dir = root.join(plugin).join("MCM");
    create_dir_all(&dir).unwrap();
    write(dir.join("languages.csv"), content).unwrap();
}

fn store() -> TranslationStore {
    TranslationStore::new(LanguageSet::new(["English", "Français"]))
}

#[test]
fn scan_merges_every_plugin_with_the_table() {
    let root = tempdir().unwrap();
    plugin_table(root.path(), "alpha", "Key;English\na_one;One\na_two;Two\n");
    plugin_table(root.path(), "beta", "Key;Français\nb_one;Un\n");
    create_dir_all(root.path().join("gamma").join("Other")).unwrap();
    write(root.path().join("stray.csv"), "Key;English\nstray;Stray\n").unwrap();

    let store = store();
    let ledger = MergeLedger::new();
    let sink = CollectingSink::new();
    let merger = TableMerger::new(&store, &ledger).with_sink(&sink);

    assert_eq!(merger.merge_tables_under(root.path(), RELATIVE), 3);
    assert_eq!(store.keys(), vec!["a_one", "a_two", "b_one"]);
    assert_eq!(
        sink.at_level(Level::Info),
        vec![
            "[locmerge] Injected/updated 2 keys from alpha.".to_string(),
            "[locmerge] Injected/updated 1 keys from beta.".to_string(),
            "[locmerge] Merged 3 keys from tables at 'MCM/languages.csv'.".to_string(),
        ]
    );
}

#[test]
fn scan_merges_in_directory_name_order() {
    let root = tempdir().unwrap();
    plugin_table(root.path(), "b_second", "Key;English\ngreet;Second\n");
    plugin_table(root.path(), "a_first", "Key;English\ngreet;First\n");

    let store = store();
    let ledger = MergeLedger::new();
    TableMerger::new(&store, &ledger).merge_tables_under(root.path(), RELATIVE);

    assert_eq!(store.get("greet", "English").as_deref(), Some("Second"));
}

#[test]
fn rescanning_touches_nothing() {
    let root = tempdir().unwrap();
    plugin_table(root.path(), "alpha", "Key;English\ngreet;Hi\n");

    let store = store();
    let ledger = MergeLedger::new();
    let sink = CollectingSink::new();
    let merger = TableMerger::new(&store, &ledger).with_sink(&sink);

    assert_eq!(merger.merge_tables_under(root.path(), RELATIVE), 1);
    sink.take();
    assert_eq!(merger.merge_tables_under(root.path(), RELATIVE), 0);
    assert!(sink.messages().is_empty());
}

#[test]
fn missing_root_reports_error() {
    let root = tempdir().unwrap();
    let missing = root.path().join("nope");

    let store = store();
    let ledger = MergeLedger::new();
    let sink = CollectingSink::new();
    let merger = TableMerger::new(&store, &ledger).with_sink(&sink);

    assert_eq!(merger.merge_tables_under(&missing, RELATIVE), 0);
    let errors = sink.at_level(Level::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("plugins root does not exist"));
    assert!(store.is_empty());
    assert!(ledger.is_empty());
}

#[test]
fn try_scan_returns_missing_root() {
    let root = tempdir().unwrap();
    let store = store();
    let ledger = MergeLedger::new();

    let result = TableMerger::new(&store, &ledger)
        .try_merge_tables_under(root.path().join("nope"), RELATIVE);
    assert!(matches!(result, Err(MergeError::MissingRoot { .. })));
}

#[test]
fn one_bad_plugin_does_not_stop_the_scan() {
    let root = tempdir().unwrap();
    plugin_table(root.path(), "alpha", "Key;English\n");
    plugin_table(root.path(), "beta", "Key;English\ngreet;Hi\n");

    let store = store();
    let ledger = MergeLedger::new();
    let sink = CollectingSink::new();
    let merger = TableMerger::new(&store, &ledger).with_sink(&sink);

    assert_eq!(merger.merge_tables_under(root.path(), RELATIVE), 1);
    assert_eq!(
        sink.at_level(Level::Warn),
        vec!["[locmerge] alpha has no rows".to_string()]
    );
}

#[test]
fn empty_root_reports_nothing() {
    let root = tempdir().unwrap();
    let store = store();
    let ledger = MergeLedger::new();
    let sink = CollectingSink::new();

    let merger = TableMerger::new(&store, &ledger).with_sink(&sink);
    assert_eq!(merger.merge_tables_under(root.path(), RELATIVE), 0);
    assert!(sink.messages().is_empty());
}
