//! Merging of plugin translation tables into a [`TranslationStore`].

use std::fs::{read, read_dir};
use std::path::{Path, PathBuf};

use bon::Builder;

use crate::diagnostics::{DiagnosticSink, NoopSink};
use crate::error::{MergeError, MergeOutcome};
use crate::ledger::{MergeLedger, normalize_path};
use crate::parser::parse_table;
use crate::store::TranslationStore;

/// Upserts table rows into a shared store, at most once per source.
///
/// Later sources win for the cells they fill; an empty cell never erases a
/// value merged earlier. Failures never escape [`merge_table`] or
/// [`merge_tables_under`]: they are reported to the sink and count as zero
/// touched keys.
///
/// [`merge_table`]: TableMerger::merge_table
/// [`merge_tables_under`]: TableMerger::merge_tables_under
///
/// # Example
///
/// ```
/// use locmerge::{LanguageSet, MergeLedger, TableMerger, TranslationStore};
///
/// let store = TranslationStore::new(LanguageSet::new(["English", "Français"]));
/// let ledger = MergeLedger::new();
/// let merger = TableMerger::builder().store(&store).ledger(&ledger).build();
///
/// let touched = merger.merge_str("inline", "Key;Français;English\ngreet;Salut;Hi", None);
/// assert_eq!(touched, 1);
/// assert_eq!(store.get("greet", "English").as_deref(), Some("Hi"));
/// assert_eq!(merger.merge_str("inline", "Key;English\ngreet;Hello", None), 0);
/// ```
#[derive(Builder)]
pub struct TableMerger<'a> {
    store: &'a TranslationStore,
    ledger: &'a MergeLedger,
    /// Where progress and failures are reported. Defaults to [`NoopSink`].
    sink: Option<&'a dyn DiagnosticSink>,
}

impl<'a> TableMerger<'a> {
    /// Create a merger that reports nothing.
    pub fn new(store: &'a TranslationStore, ledger: &'a MergeLedger) -> Self {
        Self {
            store,
            ledger,
            sink: None,
        }
    }

    /// Replace the diagnostic sink.
    pub fn with_sink(mut self, sink: &'a dyn DiagnosticSink) -> Self {
        self.sink = Some(sink);
        self
    }

    fn sink(&self) -> &dyn DiagnosticSink {
        self.sink.unwrap_or(&NoopSink)
    }

    // =========================================================================
    // Single Table
    // =========================================================================

    /// Merge the table at `path`, returning the number of touched keys.
    ///
    /// Returns 0 without reading anything when the normalized path was
    /// already claimed. `label` names the source in diagnostics; the file
    /// name is used when it is `None`.
    pub fn merge_table(&self, path: impl AsRef<Path>, label: Option<&str>) -> usize {
        match self.try_merge_table(path, label) {
            Ok(outcome) => outcome.touched(),
            Err(error) => {
                self.report(&error);
                0
            }
        }
    }

    /// Like [`merge_table`](Self::merge_table) but returns failures instead
    /// of reporting them. The info summary is still sent to the sink.
    ///
    /// The ledger claim happens before the read, so a source that fails to
    /// read stays claimed. Bytes that are not valid UTF-8 are decoded lossily
    /// rather than failing the whole table.
    pub fn try_merge_table(
        &self,
        path: impl AsRef<Path>,
        label: Option<&str>,
    ) -> Result<MergeOutcome, MergeError> {
        let path = path.as_ref();
        if !self.ledger.try_claim(normalize_path(path)) {
            return Ok(MergeOutcome::AlreadyMerged);
        }

        let bytes = read(path).map_err(|source| MergeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);

        let summary_name = label.map_or_else(|| file_name(path), str::to_string);
        let source_name = label.map_or_else(|| path.display().to_string(), str::to_string);
        self.apply(&content, &summary_name, &source_name)
            .map(MergeOutcome::Merged)
    }

    /// Merge table text that was obtained some other way.
    ///
    /// `source` is claimed in the ledger exactly as given, so repeated calls
    /// with the same name are skipped.
    pub fn merge_str(&self, source: &str, content: &str, label: Option<&str>) -> usize {
        if !self.ledger.try_claim(source) {
            return 0;
        }
        let name = label.unwrap_or(source);
        match self.apply(content, name, name) {
            Ok(touched) => touched,
            Err(error) => {
                self.report(&error);
                0
            }
        }
    }

    /// `name` labels the info summary; `source_name` labels a no-rows warning.
    fn apply(&self, content: &str, name: &str, source_name: &str) -> Result<usize, MergeError> {
        let table = parse_table(content).map_err(|_| MergeError::NoRows {
            source_name: source_name.to_string(),
        })?;

        let touched = self.store.write_state().apply(&table);
        self.sink().info(&format!(
            "[locmerge] Injected/updated {touched} keys from {name}."
        ));
        Ok(touched)
    }

    // =========================================================================
    // Directory Scan
    // =========================================================================

    /// Merge `<dir>/<relative>` for every immediate subdirectory of `root`.
    ///
    /// Subdirectories are visited in name order and each table is labeled
    /// with its subdirectory's name. Returns the summed touched-key count.
    ///
    /// ```ignore
    /// merger.merge_tables_under(plugins_dir, "MCM/languages.csv");
    /// ```
    pub fn merge_tables_under(&self, root: impl AsRef<Path>, relative: impl AsRef<Path>) -> usize {
        match self.try_merge_tables_under(root, relative) {
            Ok(total) => total,
            Err(error) => {
                self.report(&error);
                0
            }
        }
    }

    /// Like [`merge_tables_under`](Self::merge_tables_under) but returns a
    /// missing or unlistable root as an error. Failures of individual tables
    /// are still reported to the sink.
    pub fn try_merge_tables_under(
        &self,
        root: impl AsRef<Path>,
        relative: impl AsRef<Path>,
    ) -> Result<usize, MergeError> {
        let root = root.as_ref();
        let relative = relative.as_ref();
        if !root.is_dir() {
            return Err(MergeError::MissingRoot {
                path: root.to_path_buf(),
            });
        }

        let entries = read_dir(root).map_err(|source| MergeError::Io {
            path: root.to_path_buf(),
            source,
        })?;
        let mut plugin_dirs: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        plugin_dirs.sort();

        let mut total = 0;
        for dir in plugin_dirs {
            let table = dir.join(relative);
            if !table.is_file() {
                continue;
            }
            let label = file_name(&dir);
            total += self.merge_table(&table, Some(label.as_str()));
        }

        if total > 0 {
            self.sink().info(&format!(
                "[locmerge] Merged {total} keys from tables at '{}'.",
                relative.display()
            ));
        }
        Ok(total)
    }

    fn report(&self, error: &MergeError) {
        let message = format!("[locmerge] {error}");
        if error.is_warning() {
            self.sink().warn(&message);
        } else {
            self.sink().error(&message);
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
