//! Shared translation storage.
//!
//! [`TranslationStore`] plays the host's language authority: it owns the
//! ordered language set, the active-language selector and the dictionary
//! that merges write into and lookups read from. Hosts create one per
//! session and hand references (or an `Arc`) to mergers and resolvers.

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use crate::parser::Table;
use crate::types::{LanguageSet, Translations};

/// Languages plus the dictionary aligned to them. Kept under one lock so a
/// merge always sizes arrays against the language set it writes with.
#[derive(Debug, Default)]
pub(crate) struct StoreState {
    pub(crate) languages: LanguageSet,
    pub(crate) dictionary: HashMap<String, Translations>,
}

impl StoreState {
    /// Upsert every row of `table`, returning how many rows matched a key.
    pub(crate) fn apply(&mut self, table: &Table<'_>) -> usize {
        let width = self.languages.len();
        let mut touched = 0;
        for row in &table.rows {
            let translations = self
                .dictionary
                .entry(row.key.to_string())
                .or_insert_with(|| Translations::empty(width));
            if translations.len() != width {
                *translations = Translations::empty(width);
            }

            for (language, value) in row.cells(&table.header) {
                if let Some(index) = self.languages.index_of(language) {
                    translations.set(index, value);
                }
            }
            touched += 1;
        }
        touched
    }
}

/// The shared dictionary with its language set and active language.
///
/// # Example
///
/// ```
/// use locmerge::{LanguageSet, TranslationStore};
///
/// let store = TranslationStore::new(LanguageSet::new(["English", "Français"]))
///     .with_active_language("Français");
/// assert_eq!(store.active_language().as_deref(), Some("Français"));
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct TranslationStore {
    state: RwLock<StoreState>,
    active_language: RwLock<Option<String>>,
}

impl TranslationStore {
    /// Create an empty store over `languages` with no active language.
    pub fn new(languages: LanguageSet) -> Self {
        Self {
            state: RwLock::new(StoreState {
                languages,
                dictionary: HashMap::new(),
            }),
            active_language: RwLock::new(None),
        }
    }

    /// Set the initial active language.
    pub fn with_active_language(self, language: impl Into<String>) -> Self {
        self.set_active_language(language);
        self
    }

    // =========================================================================
    // Language Authority
    // =========================================================================

    pub fn languages(&self) -> LanguageSet {
        self.read_state().languages.clone()
    }

    /// Replace the language set.
    ///
    /// Existing arrays keep their old length until a merge next touches their
    /// key, at which point they are rebuilt empty at the new length.
    pub fn set_languages(&self, languages: LanguageSet) {
        self.write_state().languages = languages;
    }

    pub fn active_language(&self) -> Option<String> {
        self.active_language
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_active_language(&self, language: impl Into<String>) {
        *self
            .active_language
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(language.into());
    }

    // =========================================================================
    // Dictionary Access
    // =========================================================================

    /// Copy of the array stored for `key`.
    pub fn translations(&self, key: &str) -> Option<Translations> {
        self.read_state().dictionary.get(key).cloned()
    }

    /// Text stored for `key` in `language`, without any fallback.
    pub fn get(&self, key: &str, language: &str) -> Option<String> {
        let state = self.read_state();
        let index = state.languages.index_of(language)?;
        state
            .dictionary
            .get(key)
            .and_then(|translations| translations.get(index))
            .map(str::to_string)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.read_state().dictionary.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.read_state().dictionary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_state().dictionary.is_empty()
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.read_state().dictionary.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Sorted, serializable copy of the whole store.
    pub fn snapshot(&self) -> StoreSnapshot {
        let active_language = self.active_language();
        let state = self.read_state();
        let entries = state
            .dictionary
            .iter()
            .map(|(key, translations)| {
                let cells = state
                    .languages
                    .iter()
                    .enumerate()
                    .filter_map(|(index, language)| {
                        translations
                            .get(index)
                            .map(|text| (language.to_string(), text.to_string()))
                    })
                    .collect();
                (key.clone(), cells)
            })
            .collect();
        StoreSnapshot {
            languages: state.languages.clone(),
            active_language,
            entries,
        }
    }

    pub(crate) fn read_state(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write_state(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Point-in-time copy of a [`TranslationStore`], ordered by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreSnapshot {
    pub languages: LanguageSet,
    pub active_language: Option<String>,
    /// Key to filled language slots; empty slots are omitted.
    pub entries: BTreeMap<String, BTreeMap<String, String>>,
}
