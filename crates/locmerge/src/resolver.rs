//! Fallback-aware lookup of merged translations.

use bon::Builder;

use crate::store::TranslationStore;

/// Language consulted when the active language has no text for a key.
pub const DEFAULT_LANGUAGE: &str = "English";

/// Resolves keys against a [`TranslationStore`].
///
/// The chain is: the active language, then the default language, then the
/// caller's fallback. The active language is read on every call, so a host
/// switching languages is picked up immediately. An active language missing
/// from the language set resolves as the first language.
///
/// # Example
///
/// ```
/// use locmerge::{LanguageSet, MergeLedger, Resolver, TableMerger, TranslationStore};
///
/// let store = TranslationStore::new(LanguageSet::new(["English", "Deutsch"]))
///     .with_active_language("Deutsch");
/// let ledger = MergeLedger::new();
/// let table = "Key;English;Deutsch\nhello;Hello;\nbye;Bye;Tschüss";
/// TableMerger::new(&store, &ledger).merge_str("t", table, None);
///
/// let resolver = Resolver::new(&store);
/// assert_eq!(resolver.resolve("bye", "?"), "Tschüss");
/// assert_eq!(resolver.resolve("hello", "?"), "Hello");
/// assert_eq!(resolver.resolve("missing", "?"), "?");
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Resolver<'a> {
    store: &'a TranslationStore,
    #[builder(into, default = DEFAULT_LANGUAGE.to_string())]
    default_language: String,
}

impl<'a> Resolver<'a> {
    /// Resolver using [`DEFAULT_LANGUAGE`] as the second step.
    pub fn new(store: &'a TranslationStore) -> Self {
        Resolver::builder().store(store).build()
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Best available text for `key`, or `None` when the chain runs out
    /// before reaching a caller fallback.
    pub fn lookup(&self, key: &str) -> Option<String> {
        let active = self.store.active_language();
        let state = self.store.read_state();
        let translations = state.dictionary.get(key)?;

        let index = active
            .as_deref()
            .and_then(|language| state.languages.index_of(language))
            .unwrap_or(0);
        if let Some(text) = translations.get(index) {
            return Some(text.to_string());
        }

        let default_index = state.languages.index_of(&self.default_language)?;
        translations.get(default_index).map(str::to_string)
    }

    /// Text for `key`, or `fallback` when neither the active nor the default
    /// language has any.
    pub fn resolve(&self, key: &str, fallback: &str) -> String {
        self.lookup(key).unwrap_or_else(|| fallback.to_string())
    }

    /// Resolve the composed key `{mod_id}_{option_key}_{field}`.
    pub fn resolve_option(
        &self,
        mod_id: &str,
        option_key: &str,
        field: &str,
        fallback: &str,
    ) -> String {
        self.resolve(&option_key_for(mod_id, option_key, field), fallback)
    }

    /// Resolve the composed key `{mod_id}_description`.
    pub fn resolve_mod_description(&self, mod_id: &str, fallback: &str) -> String {
        self.resolve(&description_key_for(mod_id), fallback)
    }
}

/// Key for one field of a mod option, e.g. `mymod_speed_label`.
pub fn option_key_for(mod_id: &str, option_key: &str, field: &str) -> String {
    format!("{mod_id}_{option_key}_{field}")
}

/// Key for a mod's description, e.g. `mymod_description`.
pub fn description_key_for(mod_id: &str) -> String {
    format!("{mod_id}_description")
}
