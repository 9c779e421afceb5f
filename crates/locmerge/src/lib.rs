//! Merge semicolon-delimited translation tables from many plugins into one
//! shared dictionary, and look strings up with language fallback.
//!
//! ```
//! use locmerge::{LanguageSet, MergeLedger, Resolver, TableMerger, TranslationStore};
//!
//! let store = TranslationStore::new(LanguageSet::new(["English", "Français"]))
//!     .with_active_language("Français");
//! let ledger = MergeLedger::new();
//! let merger = TableMerger::new(&store, &ledger);
//!
//! merger.merge_str("core", "Key;English\ngreet;Hi", None);
//! merger.merge_str("french-pack", "Key;Français\ngreet;Salut", None);
//!
//! let resolver = Resolver::new(&store);
//! assert_eq!(resolver.resolve("greet", "greet"), "Salut");
//! ```

pub mod diagnostics;
pub mod error;
pub mod ledger;
pub mod lint;
pub mod merger;
pub mod parser;
pub mod resolver;
pub mod store;
pub mod types;

pub use diagnostics::{
    Callback, CallbackSink, CollectingSink, Diagnostic, DiagnosticSink, Level, NoopSink,
    TracingSink,
};
pub use error::{MergeError, MergeOutcome, TableWarning};
pub use ledger::{MergeLedger, normalize_path};
pub use lint::{compute_suggestions, lint_table};
pub use merger::TableMerger;
pub use resolver::{DEFAULT_LANGUAGE, Resolver, description_key_for, option_key_for};
pub use store::{StoreSnapshot, TranslationStore};
pub use types::{LanguageSet, Translations};
